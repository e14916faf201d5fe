pub mod split;

use crate::cli::Cli;
use split::SplitError;
use std::process::ExitCode;

pub fn entry(cli: Cli) -> anyhow::Result<()> {
    cli.execute()
}

/// Reports an error returned by [`entry`] through the logger and returns the
/// status the process should exit with.
pub fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<SplitError>() {
        Some(e) => {
            log::error!("{e}");
            if e.is_fatal() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        None => {
            log::error!("An unexpected error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

impl Command for Cli {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        self.split.execute()
    }
}
