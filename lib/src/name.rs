use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

/// Returns the path of part `n` of `p`.
///
/// The file name is split at its last `.`; the part marker `_part_{n}` goes
/// between the two halves and the result stays in the directory of `p`.
/// Leading dots never start an extension, so `..config` has none.
/// Returns `None` if `p` has no file name.
///
/// ```
/// use libfsplit::part_name;
/// use std::path::PathBuf;
///
/// assert_eq!(part_name("logs/data.log", 2), Some(PathBuf::from("logs/data_part_2.log")));
/// ```
#[inline]
pub fn part_name<P: AsRef<Path>>(p: P, n: u64) -> Option<PathBuf> {
    fn inner(p: &Path, n: u64) -> Option<PathBuf> {
        let file_name = p.file_name()?;
        let (stem, ext) = if has_extension(file_name) {
            (p.file_stem()?, p.extension())
        } else {
            (file_name, None)
        };
        let mut name = OsString::from(stem);
        name.push(format!("_part_{n}"));
        if let Some(ext) = ext {
            name.push(".");
            name.push(ext);
        }
        Some(p.with_file_name(name))
    }
    inner(p.as_ref(), n)
}

#[inline]
fn has_extension(file_name: &OsStr) -> bool {
    file_name
        .as_encoded_bytes()
        .iter()
        .skip_while(|b| **b == b'.')
        .any(|b| *b == b'.')
}
