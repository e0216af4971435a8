//! Selection consistency check.
//!
//! Selection widgets can receive a submitted value that matches no currently
//! valid option (stale client state, tampering). The allowed-option set is
//! rendering-layer state, so this cannot be expressed as an ordinary
//! validation rule; it runs unconditionally on every pass, regardless of
//! which pluggable validator is active.

use crate::error::{INVALID_VALUE, RawError, RawErrorMap};
use crate::types::FormNode;

/// Flag single/multiple-selection fields whose stored value does not belong
/// to the allowed option set. Checks the node's own fields only, emitting
/// exactly one `"invalid value"` entry per flagged field.
pub fn check(node: &FormNode) -> RawErrorMap {
    let mut errors = RawErrorMap::new();
    for field in node.fields() {
        if field.kind.is_select() && field.data.invalid_select {
            errors
                .entry(field.name.clone())
                .or_default()
                .push(RawError::new(INVALID_VALUE));
        }
    }
    errors
}
