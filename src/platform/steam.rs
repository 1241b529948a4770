//! Steam platform implementation
//!
//! Resolves a game's install directory from Steam's own state files:
//!
//! 1. locate the Steam install (registry on Windows, well-known dirs elsewhere)
//! 2. read `steamapps/libraryfolders.vdf` for every library folder
//! 3. find the one library that lists the app id
//! 4. read `steamapps/appmanifest_<id>.acf` there and validate
//!    `steamapps/common/<installdir>`
//!
//! Everything is re-read on every call and nothing is written back.

use super::Platform;
use crate::error::Result;
use std::path::PathBuf;

mod io;
mod libraries;
mod locate;
mod resolve;
mod types;

pub use libraries::{decode_library_folders, library_folders_path, list_libraries};
pub use locate::{FixedLocator, SteamLocator, SystemLocator, locator_for};
pub use resolve::{find_app_libraries, read_app_manifest, resolve_app_path, resolve_app_path_with};
pub use types::{AppManifest, LibraryFolder};

/// Steam platform implementation
pub struct SteamPlatform {
    pub app_id: u32,
    /// Steam install directory to use instead of detecting it
    pub steam_root: Option<PathBuf>,
}

impl SteamPlatform {
    pub fn new(app_id: u32) -> Self {
        Self {
            app_id,
            steam_root: None,
        }
    }
}

impl Platform for SteamPlatform {
    fn name(&self) -> &str {
        "steam"
    }

    fn game_root_path(&self) -> Result<Option<PathBuf>> {
        let locator = locator_for(self.steam_root.as_deref());
        resolve_app_path_with(locator.as_ref(), self.app_id)
    }

    fn app_identifier(&self) -> Option<String> {
        Some(self.app_id.to_string())
    }
}
