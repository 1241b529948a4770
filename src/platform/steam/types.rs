//! Steam manifest records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// `StateFlags` bit set once every depot of the app is on disk
const STATE_FULLY_INSTALLED: u32 = 4;

/// One storage root Steam installs apps into (an entry of `libraryfolders.vdf`)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryFolder {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// App id -> size on disk in bytes, both as Steam writes them
    pub apps: BTreeMap<String, String>,
}

impl LibraryFolder {
    pub fn contains_app(&self, app_id: u32) -> bool {
        self.apps.contains_key(&app_id.to_string())
    }

    pub fn steamapps_dir(&self) -> PathBuf {
        self.path.join("steamapps")
    }

    pub fn app_manifest_path(&self, app_id: u32) -> PathBuf {
        self.steamapps_dir()
            .join(format!("appmanifest_{app_id}.acf"))
    }

    pub fn app_install_path(&self, install_dir: &str) -> PathBuf {
        self.steamapps_dir().join("common").join(install_dir)
    }
}

/// The `AppState` block of an `appmanifest_<id>.acf`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppManifest {
    pub appid: String,
    pub name: String,
    /// Directory name under `steamapps/common`, not a full path
    #[serde(rename = "installdir")]
    pub install_dir: String,
    /// Zero when the manifest has no `StateFlags`
    #[serde(rename = "StateFlags")]
    pub state_flags: u32,
}

impl AppManifest {
    pub fn is_fully_installed(&self) -> bool {
        self.state_flags & STATE_FULLY_INSTALLED != 0
    }
}
