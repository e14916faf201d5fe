use crate::part_name;
use std::{
    fs,
    io::{self, BufRead, Read, Write},
    num::NonZeroUsize,
    path::Path,
};

/// Part size used when the caller does not choose one (512 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 512 * 1024;

const IO_BUFFER_SIZE: usize = 64 * 1024;

/// What a split run produced.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SplitSummary {
    /// Number of parts written.
    pub parts: u64,
    /// Number of bytes consumed from the source.
    pub bytes: u64,
}

/// Splits `reader` into parts of `chunk_size` bytes.
///
/// `get_next_writer` is called with the 1-based part number once the part is
/// known to be non-empty, so an exhausted source never yields an empty part.
/// Every part but the last holds exactly `chunk_size` bytes. Each writer is
/// flushed and dropped before the next part is read.
///
/// The first error from either side aborts the run; parts already handed
/// to their writers are left as they are.
///
/// # Examples
/// ```
/// use std::{io, num::NonZeroUsize};
///
/// let summary = libfsplit::split_to_writers(
///     &b"abcdefg"[..],
///     NonZeroUsize::new(3).unwrap(),
///     |_| Ok(Vec::<u8>::new()),
/// )?;
/// assert_eq!(summary.parts, 3);
/// assert_eq!(summary.bytes, 7);
/// # Ok::<(), io::Error>(())
/// ```
pub fn split_to_writers<R, W, F>(
    mut reader: R,
    chunk_size: NonZeroUsize,
    mut get_next_writer: F,
) -> io::Result<SplitSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(u64) -> io::Result<W>,
{
    let limit = chunk_size.get() as u64;
    let mut summary = SplitSummary::default();
    while has_data_left(&mut reader)? {
        let mut writer = get_next_writer(summary.parts + 1)?;
        let written = io::copy(&mut reader.by_ref().take(limit), &mut writer)?;
        writer.flush()?;
        summary.parts += 1;
        summary.bytes += written;
    }
    Ok(summary)
}

/// Splits the file at `path` into parts stored next to it.
///
/// Part `n` is written to [`part_name(path, n)`](part_name), replacing any
/// file already there. `on_part` receives each part path just before the
/// part is created.
pub fn split_file<P, F>(path: P, chunk_size: NonZeroUsize, mut on_part: F) -> io::Result<SplitSummary>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let reader = io::BufReader::with_capacity(IO_BUFFER_SIZE, file);
    split_to_writers(reader, chunk_size, |n| {
        let part = part_name(path, n).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", path.display()),
            )
        })?;
        on_part(&part);
        let file = fs::File::create(&part)?;
        Ok(io::BufWriter::with_capacity(IO_BUFFER_SIZE, file))
    })
}

fn has_data_left<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => return Ok(!buf.is_empty()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
