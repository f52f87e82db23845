use std::{env, process::exit};

use anyhow::Result;
use contracts_bin::{
    Command, logger, usage,
    utils::{EXIT_ERR, EXIT_OK, EXIT_USAGE, EXIT_VIOLATION},
};
use contracts_config::CONFIG;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: failed to run `contracts`: {e:#}");
            EXIT_ERR
        }
    };
    exit(exit_code)
}

fn run() -> Result<i32> {
    logger::install()?;
    contracts_rs::install_panic_hook();

    let command = match Command::parse(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e:#}\n");
            eprintln!("{}", usage());
            return Ok(EXIT_USAGE);
        }
    };

    match command {
        Command::Help => {
            println!("{}", usage());
            Ok(EXIT_OK)
        }
        Command::Config => {
            print!("{}", CONFIG.to_toml()?);
            Ok(EXIT_OK)
        }
        Command::Call(invocation) => {
            match invocation.eval() {
                Ok(value) => {
                    println!("{value}");
                    Ok(EXIT_OK)
                }
                Err(violation) => {
                    eprintln!("error: {violation}");
                    Ok(EXIT_VIOLATION)
                }
            }
        }
    }
}
