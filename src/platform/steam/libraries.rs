//! Steam library folder enumeration
//!
//! `libraryfolders.vdf` lists every library under numeric indices:
//!
//! ```text
//! "libraryfolders"
//! {
//!     "0" { "path" "C:\\Program Files (x86)\\Steam" "apps" { "480" "1000" } }
//!     "1" { "path" "D:\\SteamLibrary" "apps" { ... } }
//! }
//! ```

use super::io::{parse_text, read_text};
use super::types::LibraryFolder;
use crate::error::{GamePathError, Result};
use crate::keyvalues::{self, DecodeError, Value, Vdf};
use log::debug;
use std::path::{Path, PathBuf};

const LIBRARY_FOLDERS_KEY: &str = "libraryfolders";

pub fn library_folders_path(steam_root: &Path) -> PathBuf {
    steam_root.join("steamapps").join("libraryfolders.vdf")
}

/// Read every library folder Steam knows about, in file order
///
/// An empty manifest is not an error; it yields no libraries.
pub fn list_libraries(steam_root: &Path) -> Result<Vec<LibraryFolder>> {
    let path = library_folders_path(steam_root);
    let text = read_text(&path)?;
    let Some(vdf) = parse_text(&path, &text)? else {
        debug!("steam: {} is empty", path.display());
        return Ok(Vec::new());
    };
    let libraries = decode_library_folders(&vdf).map_err(|source| GamePathError::Decode {
        path: path.clone(),
        source,
    })?;

    debug!(
        "steam: {} library folder(s) listed in {}",
        libraries.len(),
        path.display()
    );
    Ok(libraries)
}

/// Decode a parsed `libraryfolders.vdf`
///
/// Only numeric keys are libraries; bookkeeping keys such as `contentstatsid`
/// are skipped. Libraries come back ordered by index, which is the order
/// Steam writes them in. The index itself is dropped.
pub fn decode_library_folders(
    vdf: &Vdf<'_>,
) -> std::result::Result<Vec<LibraryFolder>, DecodeError> {
    if !vdf.key.eq_ignore_ascii_case(LIBRARY_FOLDERS_KEY) {
        debug!("steam: no {LIBRARY_FOLDERS_KEY} block, found {:?}", vdf.key);
        return Ok(Vec::new());
    }
    let Value::Obj(block) = &vdf.value else {
        return Err(DecodeError::new(
            LIBRARY_FOLDERS_KEY,
            "expected a block of library folders, found a value",
        ));
    };

    let mut indexed = Vec::new();
    for (key, values) in block.iter() {
        let Ok(index) = key.parse::<u32>() else {
            continue;
        };
        // Repeated indices: the last entry wins
        let Some(value) = values.last() else {
            continue;
        };
        let library: LibraryFolder = keyvalues::from_entry(LIBRARY_FOLDERS_KEY, key, value)?;
        indexed.push((index, library));
    }
    indexed.sort_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, library)| library).collect())
}
