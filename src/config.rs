use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use log::debug;
use serde::Deserialize;

use crate::errors::PassgenError;
use crate::generators::Charset;

pub const CONFIG_ENV: &str = "PASSGEN_CONFIG";
pub const DEFAULT_LENGTH: usize = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DefaultsFile {
    length: Option<usize>,
    charset: Option<String>,
}

/// Values the command line starts from before any option is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub length: usize,
    pub charset: Charset,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            charset: Charset::default(),
        }
    }
}

impl Defaults {
    /// `$PASSGEN_CONFIG`, or `passgen/config.json` under the user config dir.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|dir| dir.join("passgen").join("config.json"))
    }

    pub fn load() -> Result<Self, PassgenError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, PassgenError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(PassgenError::config(path, e)),
        };

        debug!("loading defaults from {}", path.display());
        Self::parse(&contents).map_err(|e| match e {
            PassgenError::Config { message, .. } => PassgenError::config(path, message),
            other => PassgenError::config(path, other),
        })
    }

    fn parse(contents: &str) -> Result<Self, PassgenError> {
        let file: DefaultsFile =
            serde_json::from_str(contents).map_err(|e| PassgenError::config("", e))?;

        let mut defaults = Self::default();
        if let Some(length) = file.length {
            defaults.length = length;
        }
        if let Some(charset) = file.charset {
            defaults.charset = Charset::new(&charset)?;
        }

        Ok(defaults)
    }
}
