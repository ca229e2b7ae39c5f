//! Decoding of the manifest `bin` field
//!
//! Scoop allows three shapes for `bin`:
//! - absent or `null`
//! - a single path: `"bin": "tool.exe"`
//! - a list mixing paths and shims: `"bin": ["a.exe", ["b.exe", "b-alias", "--flag"]]`
//!
//! A shim entry is `[path, alias, args...]`. Only the path and alias name executables,
//! the remaining elements are command-line arguments.

use serde_json::Value;
use thiserror::Error;

/// The `bin` field is not one of the shapes Scoop defines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{found}")]
pub struct BinShapeError {
    pub found: String,
}

impl BinShapeError {
    fn new(found: impl Into<String>) -> Self {
        Self {
            found: found.into(),
        }
    }
}

/// One element of a `bin` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinEntry {
    Path(String),
    Shim { path: String, alias: Option<String> },
}

/// Decoded `bin` field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BinField {
    #[default]
    Absent,
    Single(String),
    Many(Vec<BinEntry>),
}

impl BinField {
    /// Decode the raw `bin` value of a manifest.
    pub fn decode(value: &Value) -> Result<Self, BinShapeError> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::String(path) => Ok(Self::Single(path.clone())),
            Value::Array(items) => items
                .iter()
                .map(BinEntry::decode)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Many),
            other => Err(BinShapeError::new(describe(other))),
        }
    }

    /// Executable paths in declaration order, aliases directly after their shim path.
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(path) => vec![path.as_str()],
            Self::Many(entries) => entries
                .iter()
                .flat_map(|entry| match entry {
                    BinEntry::Path(path) => vec![path.as_str()],
                    BinEntry::Shim { path, alias } => std::iter::once(path.as_str())
                        .chain(alias.as_deref())
                        .collect(),
                })
                .collect(),
        }
    }
}

impl BinEntry {
    fn decode(value: &Value) -> Result<Self, BinShapeError> {
        match value {
            Value::String(path) => Ok(Self::Path(path.clone())),
            Value::Array(parts) => {
                let path = match parts.first() {
                    Some(Value::String(path)) => path.clone(),
                    Some(other) => {
                        return Err(BinShapeError::new(format!(
                            "{} as shim path",
                            describe(other)
                        )));
                    }
                    None => return Err(BinShapeError::new("empty shim list")),
                };
                // A non-string alias names no executable.
                let alias = parts.get(1).and_then(Value::as_str).map(str::to_owned);
                Ok(Self::Shim { path, alias })
            }
            other => Err(BinShapeError::new(format!("{} in bin list", describe(other)))),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
