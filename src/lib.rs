//! Locate an installed Steam game's directory from Steam's own state files.
//!
//! ```no_run
//! match steam_gamepath::resolve_app_path(480) {
//!     Ok(Some(path)) => println!("Spacewar is in {}", path.display()),
//!     Ok(None) => println!("Spacewar is not installed"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod keyvalues;
pub mod paths;
pub mod platform;

pub use error::{GamePathError, Result};
pub use platform::steam::{list_libraries, resolve_app_path, resolve_app_path_with};
pub use platform::{Platform, PlatformConfig};
