use std::path::PathBuf;

use log::debug;

use crate::config::Defaults;
use crate::errors::UsageError;
use crate::generators::Charset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub charset: Charset,
    pub generate: bool,
    pub copy: bool,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn new(defaults: &Defaults) -> Self {
        Self {
            length: defaults.length,
            charset: defaults.charset.clone(),
            generate: false,
            copy: false,
            output: None,
        }
    }
}

#[derive(Debug)]
pub struct Interpretation {
    pub config: Config,
    pub errors: Vec<UsageError>,
    pub help_requested: bool,
}

impl Interpretation {
    pub fn should_generate(&self) -> bool {
        self.config.generate && self.errors.is_empty()
    }
}

/// Values can never start with `-`: a dash-prefixed token after a
/// value-taking option counts as a missing value.
fn option_value(args: &[String], i: usize) -> Option<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .filter(|next| !next.starts_with('-'))
}

/// Scans `args` (program name excluded) once. Missing or bad values are
/// recorded and scanning goes on; `-h` and unknown options end the scan.
pub fn process_args(args: &[String], defaults: &Defaults) -> Interpretation {
    let mut config = Config::new(defaults);
    let mut errors = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let option = args[i].as_str();
        match option {
            "--help" | "-h" => {
                debug!("help requested at position {}", i);
                return Interpretation {
                    config,
                    errors,
                    help_requested: true,
                };
            }
            "--generate" | "-g" => {
                if errors.is_empty() {
                    config.generate = true;
                }
            }
            "--copy" | "-c" => config.copy = true,
            "--length" | "-l" => match option_value(args, i) {
                Some(value) => {
                    match value.parse::<usize>() {
                        Ok(n) => config.length = n,
                        Err(_) => errors.push(UsageError::InvalidLength(option.to_string(), value.to_string())),
                    }
                    i += 1;
                }
                None => errors.push(UsageError::MissingArgument(option.to_string())),
            },
            "--output" | "-o" => match option_value(args, i) {
                Some(value) => {
                    config.output = Some(PathBuf::from(value));
                    i += 1;
                }
                None => errors.push(UsageError::MissingArgument(option.to_string())),
            },
            "--set" | "-s" => match option_value(args, i) {
                Some(value) => {
                    match Charset::new(value) {
                        Ok(charset) => config.charset = charset,
                        Err(_) => errors.push(UsageError::EmptyCharset(option.to_string())),
                    }
                    i += 1;
                }
                None => errors.push(UsageError::MissingArgument(option.to_string())),
            },
            _ => {
                errors.push(UsageError::UnknownOption(option.to_string()));
                break;
            }
        }
        i += 1;
    }

    debug!("interpreted {:?} with {} usage error(s)", config, errors.len());
    Interpretation {
        config,
        errors,
        help_requested: false,
    }
}
