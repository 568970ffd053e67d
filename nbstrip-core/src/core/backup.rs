//! Pre-mutation backup copies.

use crate::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the sibling backup path for `path`: the full filename with `.bak`
/// appended, so `nb.ipynb` becomes `nb.ipynb.bak`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copies `path` byte-for-byte to its backup path, overwriting any previous
/// backup, and returns the backup path.
///
/// File permissions are carried over by the copy; timestamps are not.
///
/// # Errors
///
/// Returns [`crate::NbStripError::Io`] if the source cannot be read or the
/// backup cannot be written.
pub fn create_backup(path: &Path) -> Result<PathBuf> {
    let bak = backup_path(path);
    fs::copy(path, &bak)?;
    debug!("backed up {} -> {}", path.display(), bak.display());
    Ok(bak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_backup_path_appends_full_suffix() {
        assert_eq!(
            backup_path(Path::new("/tmp/analysis.ipynb")),
            PathBuf::from("/tmp/analysis.ipynb.bak")
        );
        // The original extension stays in place.
        assert_eq!(
            backup_path(Path::new("no_extension")),
            PathBuf::from("no_extension.bak")
        );
    }

    #[test]
    fn test_create_backup_copies_bytes() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("nb.ipynb");
        fs::write(&src, b"{\"cells\": []}").unwrap();

        let bak = create_backup(&src).unwrap();
        assert_eq!(bak, dir.path().join("nb.ipynb.bak"));
        assert_eq!(fs::read(&bak).unwrap(), fs::read(&src).unwrap());
    }

    #[test]
    fn test_create_backup_overwrites_stale_backup() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("nb.ipynb");
        fs::write(&src, b"current").unwrap();
        fs::write(dir.path().join("nb.ipynb.bak"), b"stale").unwrap();

        let bak = create_backup(&src).unwrap();
        assert_eq!(fs::read(&bak).unwrap(), b"current");
    }

    #[test]
    fn test_create_backup_missing_source_is_io_error() {
        let dir = tempdir().unwrap();
        let result = create_backup(&dir.path().join("absent.ipynb"));
        assert!(matches!(result, Err(crate::NbStripError::Io(_))));
    }
}
