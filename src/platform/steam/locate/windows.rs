use crate::error::{GamePathError, Result};
use std::path::PathBuf;
use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE};

/// 64-bit Windows keeps Steam's key under WOW6432Node; 32-bit systems do not
const STEAM_KEYS: [&str; 2] = [r"SOFTWARE\WOW6432Node\Valve\Steam", r"SOFTWARE\Valve\Steam"];

pub(super) fn locate_steam_root() -> Result<PathBuf> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let mut failures = Vec::new();

    for subkey in STEAM_KEYS {
        match read_install_path(&hklm, subkey) {
            Ok(path) => return Ok(path),
            Err(e) => failures.push(format!(r"HKEY_LOCAL_MACHINE\{subkey}: {e}")),
        }
    }

    Err(GamePathError::PlatformNotFound {
        detail: failures.join("; "),
    })
}

fn read_install_path(hklm: &RegKey, subkey: &str) -> std::io::Result<PathBuf> {
    let key = hklm.open_subkey_with_flags(subkey, KEY_QUERY_VALUE)?;
    let install_path: String = key.get_value("InstallPath")?;
    Ok(PathBuf::from(install_path))
}
