use crate::command::Command;
use bytesize::ByteSize;
use clap::{Args, ValueHint};
use libfsplit::{SplitSummary, part_name};
use std::{
    fs, io,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

#[derive(Args, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct SplitCommand {
    #[arg(
        value_name = "FILE_PATH",
        help = "The path to the large file you want to split",
        value_hint = ValueHint::FilePath
    )]
    file_path: PathBuf,
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value = "524288",
        help = "The maximum chunk size in bytes (units such as 512KiB are accepted)"
    )]
    size: ByteSize,
}

impl Command for SplitCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        let chunk_size = usize::try_from(self.size.as_u64())
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(SplitError::InvalidChunkSize(self.size.as_u64()))?;
        split_file(&self.file_path, chunk_size)?;
        Ok(())
    }
}

/// Failures of a split run, rendered as the message shown to the user.
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    #[error("File not found at '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("Chunk size must be between 1 and {max} bytes, got {0}", max = usize::MAX)]
    InvalidChunkSize(u64),
    #[error("An I/O error occurred: {0}")]
    Io(#[from] io::Error),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl SplitError {
    /// Whether the process should signal non-success after reporting `self`.
    ///
    /// Rejected input aborts the run before anything is written and is only
    /// reported; failures during or around the split itself are not.
    #[inline]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Unexpected(_))
    }
}

/// How a split run that did not fail ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SplitOutcome {
    /// The source was empty; nothing was written.
    Empty,
    Split(SplitSummary),
}

/// Splits the file at `path` into parts of `chunk_size` bytes next to it.
///
/// The source is validated before anything is written: a missing path, or
/// one that is not a regular file, is [`SplitError::NotFound`]; an empty file
/// is reported as a warning and yields [`SplitOutcome::Empty`]. Parts written
/// before an I/O failure are left on disk.
pub fn split_file(path: &Path, chunk_size: NonZeroUsize) -> Result<SplitOutcome, SplitError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SplitError::NotFound(path.to_path_buf()),
        _ => SplitError::Io(e),
    })?;
    if !metadata.is_file() {
        return Err(SplitError::NotFound(path.to_path_buf()));
    }
    if metadata.len() == 0 {
        log::warn!(
            "The file '{}' is empty. No chunks will be created.",
            path.display()
        );
        return Ok(SplitOutcome::Empty);
    }
    if part_name(path, 1).is_none() {
        return Err(SplitError::Unexpected(format!(
            "cannot derive chunk names from '{}'",
            path.display()
        )));
    }
    let summary = libfsplit::split_file(path, chunk_size, |part| {
        log::info!("Creating chunk: {}", part.display());
    })?;
    log::info!("\nFile splitting completed successfully!");
    Ok(SplitOutcome::Split(summary))
}
