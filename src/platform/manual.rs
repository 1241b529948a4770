//! Manual path platform (no store)

use super::Platform;
use crate::error::{GamePathError, Result};
use log::warn;
use std::path::PathBuf;

pub struct ManualPlatform {
    pub path: PathBuf,
}

impl ManualPlatform {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Platform for ManualPlatform {
    fn name(&self) -> &str {
        "manual"
    }

    fn game_root_path(&self) -> Result<Option<PathBuf>> {
        if self.path.as_os_str().is_empty() {
            warn!("manual: no game directory configured");
            return Ok(None);
        }

        std::fs::metadata(&self.path).map_err(|source| GamePathError::PathValidation {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_dir_is_returned() {
        let dir = tempfile::TempDir::new().unwrap();
        let platform = ManualPlatform::new(dir.path().to_path_buf());
        assert_eq!(
            platform.game_root_path().unwrap(),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_dir_fails_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let err = ManualPlatform::new(missing.clone())
            .game_root_path()
            .unwrap_err();
        assert!(matches!(err, GamePathError::PathValidation { path, .. } if path == missing));
    }

    #[test]
    fn test_empty_path_is_not_found() {
        let platform = ManualPlatform::new(PathBuf::new());
        assert_eq!(platform.game_root_path().unwrap(), None);
    }
}
