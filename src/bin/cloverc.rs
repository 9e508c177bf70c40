//! Compiles a Clover source file and writes the generated JavaScript module to stdout.
//!
//! usage: cloverc [FILE]
//!
//! FILE defaults to `./utils.clv`. Warnings and errors are logged to stderr, set `RUST_LOG=debug` to log compilation stages.

use std::{env, fs, io::Write, process};
use log::{error, info};
use clover::config::DEFAULT_SOURCE;

fn run(filename: &str) -> Result<String, Box<dyn std::error::Error>> {
    info!("compiling {}", filename);
    let source = fs::read_to_string(filename)
        .map_err(|err| format!("Failed to read '{}': {}", filename, err))?;
    Ok(clover::compile(&source)?)
}

fn main() {
    if let Err(err) = simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Warn).env().init() {
        eprintln!("failed to initialize logger: {}", err);
    }

    let filename = env::args().nth(1).unwrap_or_else(|| DEFAULT_SOURCE.to_string());

    match run(&filename) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("{}", err);
                process::exit(1);
            }
        },
        Err(err) => {
            error!("failed to compile {}", filename);
            eprintln!("{}", err);
            process::exit(1);
        },
    }
}
