//! Raw-error → display-string translation.
//!
//! Each node resolves its own translator: node-level override, else the
//! configured default, else the identity fallback. Translation changes
//! message strings only — it never adds or removes fields or entries.

use crate::config::ValidationConfig;
use crate::error::{DisplayErrorMap, RawError, RawErrorMap};
use crate::types::FormNode;

/// Extension point for turning raw error entries into user-facing strings.
///
/// Implementations typically interpolate `options` into a localized message
/// looked up by `template`. Must be pure with respect to the error list's
/// cardinality: one raw entry in, one string out.
pub trait ErrorTranslator: Send + Sync {
    fn translate(&self, error: &RawError) -> String;
}

/// Fallback translator: returns the message template unchanged, discarding
/// options.
pub struct IdentityTranslator;

impl ErrorTranslator for IdentityTranslator {
    fn translate(&self, error: &RawError) -> String {
        error.template.clone()
    }
}

const IDENTITY: IdentityTranslator = IdentityTranslator;

/// Translate every raw entry of every field on `node` through the translator
/// resolved for that node. Not recursive — children resolve their own
/// translator, which may legitimately differ node-to-node.
pub fn translate_node(
    node: &FormNode,
    raw: RawErrorMap,
    config: &ValidationConfig,
) -> DisplayErrorMap {
    let translator = resolve(node, config);
    raw.into_iter()
        .map(|(name, entries)| {
            let messages = entries.iter().map(|e| translator.translate(e)).collect();
            (name, messages)
        })
        .collect()
}

fn resolve<'a>(node: &'a FormNode, config: &'a ValidationConfig) -> &'a dyn ErrorTranslator {
    node.translate_override
        .as_deref()
        .or(config.translator.as_deref())
        .unwrap_or(&IDENTITY)
}
