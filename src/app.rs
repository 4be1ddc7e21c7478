use std::fs::File;
use std::io::{ self, Write };
use std::path::Path;

use log::{ debug, info };

use crate::args::process_args;
use crate::clipboard::ClipboardWriter;
use crate::config::Defaults;
use crate::errors::PassgenError;
use crate::generators::Generator;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub type DefaultsLoader = Box<dyn Fn() -> Result<Defaults, PassgenError>>;

pub fn help_text() -> &'static str {
    concat!(
        "Usage: passgen [options]\n",
        "Options:\n",
        "\t-h, --help\t\tDisplay this help menu\n",
        "\t-g, --generate\t\tGenerate a random password\n",
        "\t-l, --length\t\tSet the length of the generated password\n",
        "\t-c, --copy\t\tCopy the password to clipboard\n",
        "\t-o, --output\t\tOutput to file path\n",
        "\t-s, --set\t\tSet the charset of the generated password\n",
        "\tpassgen -g -c -l 15\tGenerates a password of length 15 and copies it\n",
    )
}

/// Truncates an existing file. No trailing newline is written.
pub fn write_password_file(path: &Path, password: &str) -> Result<(), PassgenError> {
    let mut file = File::create(path)?;
    file.write_all(password.as_bytes())
        .map_err(PassgenError::Write)
}

pub struct App {
    generator: Generator,
    clipboard: Box<dyn ClipboardWriter>,
    load_defaults: DefaultsLoader,
}

impl App {
    pub fn new(generator: Generator, clipboard: Box<dyn ClipboardWriter>, load_defaults: DefaultsLoader) -> Self {
        Self {
            generator,
            clipboard,
            load_defaults,
        }
    }

    /// Runs one invocation and returns the process exit code.
    pub fn run<O: Write, E: Write>(&mut self, args: &[String], out: &mut O, err: &mut E) -> io::Result<i32> {
        if args.is_empty() {
            out.write_all(help_text().as_bytes())?;
            return Ok(EXIT_FAILURE);
        }

        // Nothing decided here depends on the defaults file, so it is only
        // read once a password is actually going to be generated.
        let interpretation = process_args(args, &Defaults::default());

        let mut help_shown = false;
        for error in &interpretation.errors {
            if error.help_first() && !help_shown {
                out.write_all(help_text().as_bytes())?;
                help_shown = true;
            }
            writeln!(err, "Error: {}", error)?;
            if !error.help_first() && !help_shown {
                out.write_all(help_text().as_bytes())?;
                help_shown = true;
            }
        }

        if interpretation.help_requested {
            if !help_shown {
                out.write_all(help_text().as_bytes())?;
            }
            return Ok(EXIT_OK);
        }

        if !interpretation.errors.is_empty() {
            info!("{} usage error(s), nothing generated", interpretation.errors.len());
            return Ok(EXIT_FAILURE);
        }

        if !interpretation.should_generate() {
            debug!("--generate not given");
            return Ok(EXIT_OK);
        }

        let defaults = match (self.load_defaults)() {
            Ok(defaults) => defaults,
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                return Ok(EXIT_FAILURE);
            }
        };
        let config = process_args(args, &defaults).config;
        let password = self.generator.generate(config.length, &config.charset);
        writeln!(out, "{}", password)?;
        out.flush()?;

        if config.copy {
            if let Err(e) = self.clipboard.write_text(&password) {
                debug!("clipboard copy failed");
                writeln!(err, "Error: {}", e)?;
            }
        }

        if let Some(path) = &config.output {
            if let Err(e) = write_password_file(path, &password) {
                debug!("could not write {}", path.display());
                writeln!(err, "{}", e)?;
                return Ok(EXIT_FAILURE);
            }
            info!("password written to {}", path.display());
        }

        Ok(EXIT_OK)
    }
}
