//! Steam install location
//!
//! Steam does not record its install path the same way on every OS, so each
//! target gets its own lookup behind `SteamLocator`:
//! - Windows: `InstallPath` under `HKLM\SOFTWARE\[WOW6432Node\]Valve\Steam`
//! - Linux: the native, legacy symlink and Flatpak data directories
//! - macOS: `~/Library/Application Support/Steam`

use crate::error::{GamePathError, Result};
use log::debug;
use std::path::{Path, PathBuf};

#[cfg(not(windows))]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
use unix as os;
#[cfg(windows)]
use windows as os;

/// Finds the root directory of the Steam client
pub trait SteamLocator {
    fn locate_steam_root(&self) -> Result<PathBuf>;
}

/// Asks the operating system where Steam is installed
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLocator;

impl SteamLocator for SystemLocator {
    fn locate_steam_root(&self) -> Result<PathBuf> {
        let root = os::locate_steam_root()?;
        debug!("steam: install found at {}", root.display());
        Ok(root)
    }
}

/// A Steam root given by the user (settings file, `--steam-root`)
#[derive(Clone, Debug)]
pub struct FixedLocator {
    root: PathBuf,
}

impl FixedLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SteamLocator for FixedLocator {
    fn locate_steam_root(&self) -> Result<PathBuf> {
        if self.root.is_dir() {
            Ok(self.root.clone())
        } else {
            Err(GamePathError::PlatformNotFound {
                detail: format!(
                    "configured Steam directory {} does not exist",
                    self.root.display()
                ),
            })
        }
    }
}

/// Configured root if there is one, otherwise the OS lookup
pub fn locator_for(steam_root: Option<&Path>) -> Box<dyn SteamLocator> {
    match steam_root {
        Some(root) => Box::new(FixedLocator::new(root)),
        None => Box::new(SystemLocator),
    }
}
