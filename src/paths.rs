use std::path::PathBuf;
use std::sync::LazyLock;

const APP_DIR_NAME: &str = "steam-gamepath";

pub static PATH_CONFIG: LazyLock<PathBuf> = LazyLock::new(|| {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
});

pub static PATH_SETTINGS: LazyLock<PathBuf> = LazyLock::new(|| PATH_CONFIG.join("settings.json"));
