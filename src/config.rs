//! Process-wide validation configuration.
//!
//! Configuration is an explicit parameter threaded through the traversal,
//! not ambient global state: build one [`ValidationConfig`], share it, and
//! pass it to [`crate::validate::validate`]. Node-level overrides on
//! [`crate::FormNode`] win over these defaults.

use std::fmt;
use std::sync::Arc;

use crate::translate::ErrorTranslator;
use crate::validate::FieldValidator;

/// Default validator and translator for a validation pass.
///
/// Cheap to clone (two `Arc`s). Read-only during a pass; a config shared
/// across threads may validate independent trees concurrently with no
/// coordination.
#[derive(Clone, Default)]
pub struct ValidationConfig {
    /// Used for nodes without a `validator_override`. When absent, such
    /// nodes produce no field-level errors (the selection check still runs).
    pub validator: Option<Arc<dyn FieldValidator>>,
    /// Used for nodes without a `translate_override`. When absent, raw
    /// templates pass through untranslated.
    pub translator: Option<Arc<dyn ErrorTranslator>>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        ValidationConfig::default()
    }

    pub fn with_validator(mut self, validator: Arc<dyn FieldValidator>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn ErrorTranslator>) -> Self {
        self.translator = Some(translator);
        self
    }
}

impl fmt::Debug for ValidationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("validator", &self.validator.as_ref().map(|_| ".."))
            .field("translator", &self.translator.as_ref().map(|_| ".."))
            .finish()
    }
}
