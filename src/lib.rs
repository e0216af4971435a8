//! Recursive validation engine for tree-shaped form definitions.
//!
//! A form is a tree of simple fields, nested sub-forms, and repeatable
//! collections of sub-forms ("one address" vs "zero-or-more addresses").
//! Given a tree and a pluggable field-level validator, the engine produces a
//! fully validated tree where every node carries its own error set and a
//! derived boolean validity, propagated bottom-up so a parent is valid only
//! if every descendant is valid:
//!
//! ```text
//! parse(yaml) → FormNode → validate(node, &config) → FormNode
//!                        → serialize(node) → yaml
//! ```
//!
//! Field-level rules and message translation are injected capabilities: see
//! [`FieldValidator`] and [`ErrorTranslator`]. Collection entries marked for
//! removal by the binding layer are kept in the tree but excluded from
//! validation, with their validity forced to true.
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! items:
//!   - field:
//!       name: email
//!       kind: text
//!   - nested:
//!       name: address
//!       form:
//!         items:
//!           - field:
//!               name: city
//!               kind: text
//! "#;
//!
//! let node = formtree::parse(yaml).expect("well-formed tree");
//! let config = formtree::ValidationConfig::new();
//! let validated = formtree::validate(node, &config);
//! assert!(validated.valid);
//! assert!(validated.nested("address").expect("address form").valid);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod parse;
pub mod selection;
pub mod serialize;
pub mod translate;
pub mod types;
pub mod validate;

pub use config::ValidationConfig;
pub use error::*;
pub use translate::{ErrorTranslator, IdentityTranslator};
pub use types::*;
pub use validate::{FieldValidator, NoopValidator};

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse;
pub use serialize::serialize;
pub use validate::validate;

/// Convenience entry point composing parse → validate.
///
/// Returns the fully validated tree; whether it is structurally valid is
/// reported by the root's `valid` flag, not by the `Result`.
///
/// # Errors
///
/// Returns `Err(ParseError)` only when the input is not a well-formed tree.
///
/// # Example
///
/// ```rust
/// let yaml = r#"
/// items:
///   - field:
///       name: quantity
///       kind: text
/// "#;
///
/// let config = formtree::ValidationConfig::new();
/// let validated = formtree::load(yaml, &config).expect("well-formed tree");
/// assert!(validated.valid);
/// ```
pub fn load(input: &str, config: &ValidationConfig) -> Result<FormNode, ParseError> {
    let node = parse::parse(input)?;
    Ok(validate::validate(node, config))
}
