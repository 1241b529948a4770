use crate::config::types::GamePathConfig;
use crate::error::{GamePathError, Result};

use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load settings; a missing file means defaults
pub fn load_cfg(path: &Path) -> Result<GamePathConfig> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("config: {} not found, using defaults", path.display());
            return Ok(GamePathConfig::default());
        }
        Err(source) => {
            return Err(GamePathError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| GamePathError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub fn save_cfg(path: &Path, config: &GamePathConfig) -> Result<()> {
    let io_err = |source: std::io::Error| GamePathError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    serde_json::to_writer_pretty(file, config).map_err(|e| GamePathError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
