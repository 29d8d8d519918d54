//! Best-effort mirroring of the score to an external text file, for
//! consumption by broadcast overlays and similar tail readers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DfResult;

/// Overwrites `path` with the decimal representation of `score`.
///
/// Writes a sibling temp file and renames it into place, so a concurrent
/// reader observes either the old value or the new one, never a partial
/// write. Errors are for the caller to log; mirroring is never load-bearing.
pub fn write_score(path: &Path, score: i64) -> DfResult<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, score.to_string())?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_decimal_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.txt");

        write_score(&path, 42).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "42");

        write_score(&path, -7).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "-7");
    }

    #[test]
    fn test_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("score.txt");

        write_score(&path, 1).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("score.txt");
        assert!(write_score(&path, 1).is_err());
    }
}
