pub mod io;
pub mod types;

// Re-export types
pub use types::GamePathConfig;

// Re-export I/O functions
pub use io::{load_cfg, save_cfg};
