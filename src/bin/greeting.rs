//! greeting — write a greeting message to ./out.txt, or preview it.

use std::io::Write;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use hello_users::cli::{GreetingCli, init_logging, write_error};
use hello_users::commands::greet;
use hello_users::GreetingConfig;

fn main() {
    let cli = GreetingCli::parse();
    init_logging(cli.debug);

    let config = match GreetingConfig::from_args(&cli) {
        Ok(config) => config,
        Err(err) => {
            write_error(&err);
            eprintln!("{}", GreetingCli::command().render_help());
            std::process::exit(err.exit_code());
        }
    };

    if greet::debug_requested(std::env::var_os("DEBUG").as_deref()) {
        if let Err(err) = print_debug(&config) {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
        return;
    }

    let stdin = std::io::stdin().lock();
    let source = greet::input_source(&config, stdin, std::io::stdout());
    if let Err(err) = greet::run(&config, source) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}

fn print_debug(config: &GreetingConfig) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(greet::debug_dump(config).as_bytes())
        .context("failed to print flag values")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
