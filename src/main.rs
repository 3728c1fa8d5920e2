use std::ffi::OsString;

use colored::Colorize;

use bypassh::cli::{self, Invocation};
use bypassh::config::{self, Config};
use bypassh::error::Result;
use bypassh::logging;
use bypassh::proxy::FAILURE_CODE;

fn main() {
    logging::init();

    let mut argv = std::env::args_os();
    let program = argv
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bypassh".to_string());
    let args: Vec<OsString> = argv.collect();

    let code = match run(&program, Invocation::from_args(args)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            FAILURE_CODE
        }
    };

    std::process::exit(code);
}

fn run(program: &str, invocation: Invocation) -> Result<i32> {
    match invocation {
        Invocation::Version => cli::version::run().map(|()| 0),
        Invocation::Help => cli::help::run(program).map(|()| 0),
        Invocation::PrintConfig => {
            let load = config::load_config(Config::default());
            cli::print_config::run(&load).map(|()| 0)
        }
        Invocation::Forward(args) => {
            let load = config::load_config(Config::default());
            cli::forward::run(&load.config, args)
        }
    }
}
