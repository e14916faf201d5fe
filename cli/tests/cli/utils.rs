use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Deterministic test payload that does not repeat on small part boundaries.
pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 251) as u8).collect()
}

pub fn write_sample(dir: &Path, name: &str, len: usize) -> io::Result<(PathBuf, Vec<u8>)> {
    let path = dir.join(name);
    let bytes = sample_bytes(len);
    fs::write(&path, &bytes)?;
    Ok((path, bytes))
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
