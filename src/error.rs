use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Message key emitted by the selection consistency check.
pub const INVALID_VALUE: &str = "invalid value";

/// An untranslated error entry produced by a field validator: a message
/// template plus the options a translator may interpolate into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawError {
    pub template: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Value>,
}

impl RawError {
    pub fn new(template: impl Into<String>) -> Self {
        RawError {
            template: template.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options(template: impl Into<String>, options: Vec<Value>) -> Self {
        RawError {
            template: template.into(),
            options,
        }
    }
}

impl fmt::Display for RawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

/// Field name → ordered raw error entries, as produced by validators.
/// Insertion-ordered so messages stay in the order they were reported.
pub type RawErrorMap = IndexMap<String, Vec<RawError>>;

/// Field name → ordered translated messages, as carried by a validated node.
pub type DisplayErrorMap = IndexMap<String, Vec<String>>;

/// Merge `extra` into `into`: per field name, new entries are concatenated
/// after any existing entries; fields with no prior entry get a fresh list.
pub fn merge_errors(into: &mut RawErrorMap, extra: RawErrorMap) {
    for (name, entries) in extra {
        into.entry(name).or_default().extend(entries);
    }
}

/// Error kind for parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnknownVariant,
}

/// Produced by `parse` when YAML deserialization of a form tree fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{}:{}: {}", line, col, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Serialization error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeError {
    pub message: String,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SerializeError {}
