mod app;
mod args;
mod clipboard;
mod config;
mod errors;
mod generators;

use std::env;
use std::io;

use env_logger::{ Builder, Env };

use crate::app::{ App, EXIT_FAILURE };
use crate::clipboard::SystemClipboard;
use crate::config::Defaults;
use crate::generators::Generator;

const LOG_ENV: &str = "PASSGEN_LOG";

fn main() {
    Builder::from_env(Env::default().filter_or(LOG_ENV, "warn")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut app = App::new(Generator::from_entropy(), Box::new(SystemClipboard), Box::new(Defaults::load));

    let code = match app.run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}
