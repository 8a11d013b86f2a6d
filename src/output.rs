//! Reading the song list and writing the formatted result.
//!
//! The output is written to a temporary file next to the target and then
//! renamed over it, so a failed run never leaves a partial file behind.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the whole input list. A missing file is reported as `MissingInput`.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingInput {
            path: path.to_path_buf(),
        },
        _ => Error::io(e, path),
    })
}

/// Replace `path` with `contents` in one rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(e, dir))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io(e, tmp.path()))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(e, tmp.path()))?;
    tmp.persist(path).map_err(|e| Error::io(e.error, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("paste.txt")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path()).unwrap_err();
        assert!(!err.is_missing_input());
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("formatted_songs.txt");
        std::fs::write(&path, "old contents that are longer").unwrap();

        write_atomic(&path, "Jay Chou - 晴天").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Jay Chou - 晴天");

        // No temp files left behind
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_atomic_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.txt");
        assert!(write_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }
}
