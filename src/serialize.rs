//! [`FormNode`] → YAML serialization.

use crate::error::SerializeError;
use crate::types::FormNode;

/// Serialize a form tree to a YAML string.
///
/// Validator and translator overrides are runtime-only and are not emitted;
/// everything else round-trips through [`crate::parse::parse`].
pub fn serialize(node: &FormNode) -> Result<String, SerializeError> {
    // Convert to serde_json::Value first for consistent field ordering
    let value = serde_json::to_value(node).map_err(|e| SerializeError {
        message: format!("failed to convert form tree to JSON value: {}", e),
    })?;

    let yaml = serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize to YAML: {}", e),
    })?;

    Ok(yaml)
}
