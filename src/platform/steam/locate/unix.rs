use crate::error::{GamePathError, Result};
use std::path::{Path, PathBuf};

pub(super) fn locate_steam_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| GamePathError::PlatformNotFound {
        detail: "home directory is unknown".to_string(),
    })?;
    find_steam_root(&home)
}

/// First candidate directory under `home` that exists
pub(super) fn find_steam_root(home: &Path) -> Result<PathBuf> {
    let candidates = candidates(home);
    if let Some(found) = candidates.iter().find(|dir| dir.is_dir()) {
        return Ok(found.clone());
    }

    let searched: Vec<String> = candidates.iter().map(|c| c.display().to_string()).collect();
    Err(GamePathError::PlatformNotFound {
        detail: format!("no Steam directory in {}", searched.join(", ")),
    })
}

#[cfg(target_os = "macos")]
fn candidates(home: &Path) -> Vec<PathBuf> {
    vec![home.join("Library/Application Support/Steam")]
}

#[cfg(not(target_os = "macos"))]
fn candidates(home: &Path) -> Vec<PathBuf> {
    vec![
        // Native install
        home.join(".local/share/Steam"),
        // Symlinks maintained by the Steam runtime
        home.join(".steam/steam"),
        home.join(".steam/root"),
        // Flatpak
        home.join(".var/app/com.valvesoftware.Steam/.local/share/Steam"),
    ]
}
