use clap::Parser;
use fsplit::{cli, command};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    cli::init_logger()?;
    Ok(match command::entry(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => command::report(&e),
    })
}
