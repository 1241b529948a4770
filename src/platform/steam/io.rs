//! Reading Steam's KeyValues files from disk

use crate::error::{GamePathError, Result};
use crate::keyvalues::{self, Vdf};
use std::path::Path;

/// Read a `.vdf`/`.acf` file. The file is closed before returning.
pub(super) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GamePathError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse text read from `path`; `None` for a blank file
pub(super) fn parse_text<'a>(path: &Path, text: &'a str) -> Result<Option<Vdf<'a>>> {
    keyvalues::parse(text).map_err(|source| GamePathError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
