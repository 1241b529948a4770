//! Platform abstraction - WHERE games come from
//!
//! Platforms represent the ways a game directory can be found:
//! - Steam: resolved from Steam's own library manifests
//! - Manual: direct path specification

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Platform trait - represents where a game comes from
pub trait Platform {
    /// Platform name for identification
    fn name(&self) -> &str;

    /// Get the game's root directory path
    ///
    /// `Ok(None)` means the platform does not know about the game; callers
    /// decide whether that is fatal.
    fn game_root_path(&self) -> Result<Option<PathBuf>>;

    /// Platform-specific identifier (appid, product id, etc.)
    fn app_identifier(&self) -> Option<String> {
        None
    }
}

/// Enum for serde deserialization of platform configs
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "platform")]
pub enum PlatformConfig {
    #[serde(rename = "steam")]
    Steam { steam_appid: u32 },

    #[serde(rename = "manual")]
    Manual {
        #[serde(default)]
        path_gameroot: PathBuf,
    },
}

impl PlatformConfig {
    /// Convert platform config enum to a trait object
    ///
    /// `steam_root` skips Steam's install detection when set.
    pub fn as_platform(&self, steam_root: Option<&Path>) -> Box<dyn Platform> {
        match self {
            PlatformConfig::Steam { steam_appid } => Box::new(SteamPlatform {
                app_id: *steam_appid,
                steam_root: steam_root.map(Path::to_path_buf),
            }),
            PlatformConfig::Manual { path_gameroot } => {
                Box::new(ManualPlatform::new(path_gameroot.clone()))
            }
        }
    }
}

mod manual;
pub mod steam;

pub use manual::ManualPlatform;
pub use steam::SteamPlatform;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_config_json() {
        let steam: PlatformConfig =
            serde_json::from_str(r#"{"platform": "steam", "steam_appid": 480}"#).unwrap();
        assert_eq!(steam, PlatformConfig::Steam { steam_appid: 480 });

        let manual: PlatformConfig = serde_json::from_str(r#"{"platform": "manual"}"#).unwrap();
        assert_eq!(
            manual,
            PlatformConfig::Manual {
                path_gameroot: PathBuf::new()
            }
        );
    }

    #[test]
    fn test_as_platform() {
        let steam = PlatformConfig::Steam { steam_appid: 480 }.as_platform(None);
        assert_eq!(steam.name(), "steam");
        assert_eq!(steam.app_identifier().as_deref(), Some("480"));

        let manual = PlatformConfig::Manual {
            path_gameroot: PathBuf::from("/games/spacewar"),
        }
        .as_platform(None);
        assert_eq!(manual.name(), "manual");
        assert_eq!(manual.app_identifier(), None);
    }
}
