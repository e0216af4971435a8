use crate::error::{ParseError, ParseErrorKind};
use crate::types::FormNode;

/// Parse a YAML string into an unvalidated form tree.
///
/// Performs YAML deserialization and type mapping only: the returned tree's
/// `errors` and `valid` fields are not meaningful until
/// [`crate::validate::validate`] has run on it.
pub fn parse(input: &str) -> Result<FormNode, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
            line: None,
            column: None,
        });
    }

    // Deserialize via serde_json::Value as intermediate so both the YAML
    // layer and the type mapping report through the same error shape
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_saphyr_error(&msg),
            message: msg,
            line: None,
            column: None,
        }
    })?;

    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "form root must be a YAML mapping".to_string(),
            line: None,
            column: None,
        });
    }

    let node: FormNode = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError {
            kind: classify_json_error(&msg),
            message: msg,
            line: None,
            column: None,
        }
    })?;

    Ok(node)
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
