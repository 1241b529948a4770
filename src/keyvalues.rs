//! Valve KeyValues text format
//!
//! Steam keeps its install state in small nested text files (`.vdf`, `.acf`):
//!
//! ```text
//! "AppState"
//! {
//!     "appid"      "480"
//!     "installdir" "Spacewar"
//! }
//! ```
//!
//! Text is parsed into a tree by `keyvalues-parser`, knowing nothing about
//! Steam's schemas. Records are then decoded from that tree with
//! `keyvalues-serde`; `serde_path_to_error` keeps the dotted key path of the
//! node that failed (for example `libraryfolders.1.apps`).
//!
//! Decoding conventions:
//! - unknown keys are ignored
//! - records mark themselves `#[serde(default)]` so missing keys become zero values
//! - a block's entries come back in key order, not file order

use serde::de::DeserializeOwned;
use std::borrow::Cow;
use thiserror::Error;

pub use keyvalues_parser::error::Error as ParseError;
pub use keyvalues_parser::{Obj, Value, Vdf};

/// Text parsed fine but does not have the shape of the expected record
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("at `{path}`: {message}")]
pub struct DecodeError {
    /// Dotted key path of the offending node
    pub path: String,
    pub message: String,
}

impl DecodeError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Parse a KeyValues document
///
/// A document holding nothing but whitespace, comments or a BOM has no
/// top-level pair and gives `None`. Anything else must be one well-formed
/// `key value` pair; a truncated document is an error, never a smaller tree.
pub fn parse(text: &str) -> Result<Option<Vdf<'_>>, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if is_blank(text) {
        return Ok(None);
    }
    Vdf::parse(text).map(Some)
}

fn is_blank(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with("//"))
}

/// Decode the value of a top-level pair. Key paths start with the pair's key.
pub fn from_vdf<T: DeserializeOwned>(vdf: Vdf<'_>) -> Result<T, DecodeError> {
    let root = vdf.key.to_string();
    decode(vdf, &root)
}

/// Decode one `key value` entry of the block at `parent`
pub fn from_entry<T: DeserializeOwned>(
    parent: &str,
    key: &str,
    value: &Value<'_>,
) -> Result<T, DecodeError> {
    let path = join(parent, key);
    let vdf = Vdf {
        key: Cow::Owned(key.to_string()),
        value: value.clone(),
    };
    decode(vdf, &path)
}

fn decode<T: DeserializeOwned>(vdf: Vdf<'_>, path: &str) -> Result<T, DecodeError> {
    let (mut deserializer, _key) = keyvalues_serde::Deserializer::new_with_key(vdf)
        .map_err(|e| DecodeError::new(path, e.to_string()))?;

    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let at = if e.path().iter().next().is_none() {
            path.to_string()
        } else {
            join(path, &e.path().to_string())
        };
        DecodeError::new(at, e.inner().to_string())
    })
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Depot {
        manifest: String,
        size: u64,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct AppState {
        appid: u32,
        installdir: String,
        #[serde(rename = "StateFlags")]
        state_flags: u32,
        #[serde(rename = "InstalledDepots")]
        depots: BTreeMap<String, Depot>,
    }

    const MANIFEST: &str = r#"
// written by Steam
"AppState"
{
    "appid"         "480"
    "installdir"    "Spacewar"
    "StateFlags"    "4"
    "LastOwner"     "76561197960287930"
    "UserConfig"
    {
        "language"  "english"
    }
    "InstalledDepots"
    {
        "481"
        {
            "manifest"  "3183503801510301321"
            "size"      "1024"
        }
    }
}
"#;

    fn parse_doc(text: &str) -> Vdf<'_> {
        parse(text).unwrap().unwrap()
    }

    fn scalar<'a>(block: &'a Value<'_>, key: &str) -> Option<&'a str> {
        let Value::Obj(obj) = block else {
            return None;
        };
        match obj.get(key)?.last()? {
            Value::Str(s) => Some(&**s),
            Value::Obj(_) => None,
        }
    }

    #[test]
    fn test_parse_nested_blocks() {
        let vdf = parse_doc(MANIFEST);
        assert_eq!(vdf.key, "AppState");
        assert_eq!(scalar(&vdf.value, "installdir"), Some("Spacewar"));
        assert_eq!(scalar(&vdf.value, "StateFlags"), Some("4"));
        assert_eq!(scalar(&vdf.value, "UserConfig"), None);
    }

    #[test]
    fn test_unquoted_bracketed_token_is_a_value() {
        let vdf = parse_doc(r#""root" { "a" [b] "c" "d" }"#);
        assert_eq!(scalar(&vdf.value, "a"), Some("[b]"));
        assert_eq!(scalar(&vdf.value, "c"), Some("d"));
    }

    #[test]
    fn test_escaped_backslashes() {
        let vdf = parse_doc(r#""root" { "path" "C:\\Program Files (x86)\\Steam" }"#);
        assert_eq!(
            scalar(&vdf.value, "path"),
            Some(r"C:\Program Files (x86)\Steam")
        );
    }

    #[test]
    fn test_blank_documents_have_no_pair() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("  \n// nothing here\n").unwrap().is_none());
        assert!(parse("\u{feff}").unwrap().is_none());
        assert!(parse("\u{feff}\"a\" { }").unwrap().is_some());
    }

    #[test]
    fn test_unbalanced_text_is_parse_error() {
        assert!(parse("\"root\"\n{\n  \"a\" \"1\"\n").is_err());
        assert!(parse(r#""root" { "inner" { "a" "1" }"#).is_err());
        assert!(parse(r#""root" { "a" "1" } }"#).is_err());
        assert!(parse("\"root\" {\n  \"a\" \"unterminated\n}").is_err());
        assert!(parse(r#""root" { "a" }"#).is_err());
    }

    #[test]
    fn test_decode_declared_fields() {
        let state: AppState = from_vdf(parse_doc(MANIFEST)).unwrap();
        assert_eq!(state.appid, 480);
        assert_eq!(state.installdir, "Spacewar");
        assert_eq!(state.state_flags, 4);
        assert_eq!(state.depots["481"].size, 1024);
        assert_eq!(state.depots["481"].manifest, "3183503801510301321");
    }

    #[test]
    fn test_missing_keys_default() {
        let state: AppState = from_vdf(parse_doc(r#""AppState" { "appid" "10" }"#)).unwrap();
        assert_eq!(state.appid, 10);
        assert!(state.installdir.is_empty());
        assert_eq!(state.state_flags, 0);
        assert!(state.depots.is_empty());
    }

    #[test]
    fn test_mismatch_reports_key_path() {
        let err = from_vdf::<AppState>(parse_doc(r#""AppState" { "InstalledDepots" "none" }"#))
            .unwrap_err();
        assert_eq!(err.path, "AppState.InstalledDepots");

        let text = r#""AppState" { "InstalledDepots" { "481" { "size" "big" } } }"#;
        let err = from_vdf::<AppState>(parse_doc(text)).unwrap_err();
        assert_eq!(err.path, "AppState.InstalledDepots.481.size");
    }

    #[test]
    fn test_from_entry_prefixes_parent() {
        let vdf = parse_doc(r#""libraryfolders" { "0" { "manifest" "m" "size" "x" } }"#);
        let Value::Obj(block) = &vdf.value else {
            panic!("libraryfolders is not a block");
        };
        let (key, values) = block.iter().next().unwrap();
        let err = from_entry::<Depot>("libraryfolders", key, &values[0]).unwrap_err();
        assert_eq!(err.path, "libraryfolders.0.size");
    }
}
