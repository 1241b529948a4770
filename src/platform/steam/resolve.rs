//! App id -> install directory resolution

use super::io::{parse_text, read_text};
use super::libraries::list_libraries;
use super::locate::{SteamLocator, SystemLocator};
use super::types::{AppManifest, LibraryFolder};
use crate::error::{GamePathError, Result};
use crate::keyvalues::{self, DecodeError};
use log::{debug, info, warn};
use std::path::PathBuf;

const APP_STATE_KEY: &str = "AppState";

/// Find the install directory of a Steam app, locating Steam through the OS
pub fn resolve_app_path(app_id: u32) -> Result<Option<PathBuf>> {
    resolve_app_path_with(&SystemLocator, app_id)
}

/// Find the install directory of a Steam app
///
/// Returns `Ok(None)` when no library lists the app. An app listed by more
/// than one library is an `AmbiguousInstallation` error; no copy is preferred
/// over another. The returned directory has been checked to exist.
pub fn resolve_app_path_with(
    locator: &dyn SteamLocator,
    app_id: u32,
) -> Result<Option<PathBuf>> {
    let steam_root = locator.locate_steam_root()?;
    let libraries = list_libraries(&steam_root)?;

    let matches = find_app_libraries(&libraries, app_id);
    let library = match matches.as_slice() {
        [] => {
            warn!(
                "steam: app {app_id} is not installed in any of {} Steam library folder(s)",
                libraries.len()
            );
            return Ok(None);
        }
        [library] => *library,
        _ => {
            return Err(GamePathError::AmbiguousInstallation {
                app_id,
                candidates: matches.iter().map(|library| library.path.clone()).collect(),
            });
        }
    };
    debug!("steam: app {app_id} listed in {}", library.path.display());

    let manifest = read_app_manifest(library, app_id)?;
    let game_path = library.app_install_path(&manifest.install_dir);

    let metadata = std::fs::metadata(&game_path).map_err(|source| GamePathError::PathValidation {
        path: game_path.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(GamePathError::PathValidation {
            path: game_path,
            source: std::io::Error::other("not a directory"),
        });
    }

    info!("steam: app {app_id} resolved to {}", game_path.display());
    Ok(Some(game_path))
}

/// Libraries whose app listing contains `app_id`, in discovery order
pub fn find_app_libraries(libraries: &[LibraryFolder], app_id: u32) -> Vec<&LibraryFolder> {
    libraries
        .iter()
        .filter(|library| library.contains_app(app_id))
        .collect()
}

/// Read `steamapps/appmanifest_<id>.acf` from a library
///
/// The manifest must name an install directory; other fields are optional.
pub fn read_app_manifest(library: &LibraryFolder, app_id: u32) -> Result<AppManifest> {
    let path = library.app_manifest_path(app_id);
    let text = read_text(&path)?;
    let decode_error = |source| GamePathError::Decode {
        path: path.clone(),
        source,
    };

    let Some(vdf) = parse_text(&path, &text)? else {
        return Err(decode_error(DecodeError::new(APP_STATE_KEY, "empty app manifest")));
    };
    if !vdf.key.eq_ignore_ascii_case(APP_STATE_KEY) {
        return Err(decode_error(DecodeError::new(
            vdf.key.to_string(),
            "expected an AppState block",
        )));
    }
    let manifest: AppManifest = keyvalues::from_vdf(vdf).map_err(decode_error)?;

    if manifest.install_dir.is_empty() {
        return Err(decode_error(DecodeError::new(
            format!("{APP_STATE_KEY}.installdir"),
            "no install directory given",
        )));
    }

    if !manifest.appid.is_empty() && manifest.appid != app_id.to_string() {
        warn!(
            "steam: {} describes app {}, expected {app_id}",
            path.display(),
            manifest.appid
        );
    }
    if manifest.state_flags != 0 && !manifest.is_fully_installed() {
        warn!(
            "steam: app {app_id} ({}) is not fully installed, StateFlags={}",
            manifest.name, manifest.state_flags
        );
    }

    Ok(manifest)
}
