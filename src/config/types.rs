use crate::platform::PlatformConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `settings.json`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GamePathConfig {
    /// Game to locate when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<PlatformConfig>,
    /// Steam install directory, skipping OS detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_root: Option<PathBuf>,
}
