use crate::command::split::SplitCommand;
use clap::Parser;
use log::{Level, LevelFilter, SetLoggerError};
use std::io;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    name = "fsplit",
    version,
    about = "Split a large file into smaller, more manageable chunks.",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub(crate) split: SplitCommand,
}

/// Installs the process-wide logger.
///
/// Every record goes to standard output. Informational records are printed as
/// they are, anything else carries a lowercase level prefix.
pub fn init_logger() -> Result<(), SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| match record.level() {
            Level::Info => out.finish(format_args!("{message}")),
            level => out.finish(format_args!("{}: {message}", level_prefix(level))),
        })
        .level(LevelFilter::Info)
        .chain(io::stdout())
        .apply()
}

const fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}
