//! Directory helpers

use std::path::Path;

use crate::error::BuildError;

/// Ensure a directory and all its parents exist
pub fn ensure_dir(path: &Path) -> Result<(), BuildError> {
    std::fs::create_dir_all(path).map_err(|e| BuildError::filesystem("create", path, e))
}

/// Recursively remove a directory and everything under it
pub fn remove_dir(path: &Path) -> Result<(), BuildError> {
    std::fs::remove_dir_all(path).map_err(|e| BuildError::filesystem("remove", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_remove_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("build");
        std::fs::create_dir_all(dir.join("debug")).unwrap();
        std::fs::write(dir.join("debug/CMakeCache.txt"), "cache").unwrap();

        remove_dir(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_remove_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let err = remove_dir(&temp.path().join("build")).unwrap_err();
        assert!(matches!(err, BuildError::Filesystem { action: "remove", .. }));
    }
}
