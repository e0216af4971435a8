//! Recursive tree validation.
//!
//! Walks a form tree once, applying the pluggable field validator, the
//! selection consistency check, and error translation to each node, then
//! recursing into nested forms and collection items and rebuilding the tree
//! bottom-up with validity aggregated per node. Total: any failure inside a
//! pluggable validator is that validator's own concern.

use std::mem;

use crate::aggregate;
use crate::config::ValidationConfig;
use crate::error::{RawErrorMap, merge_errors};
use crate::selection;
use crate::translate::translate_node;
use crate::types::{FormNode, Item};

/// Extension point for field-level validation rules.
///
/// Implementations inspect the node's own fields and values and report raw
/// errors keyed by field name. Returning a map (rather than a rebuilt node)
/// makes it impossible for a validator to alter the item shape. This is the
/// single seam through which different rule systems plug in.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, node: &FormNode) -> RawErrorMap;
}

/// Validator producing no errors; the fallback when no default is configured.
pub struct NoopValidator;

impl FieldValidator for NoopValidator {
    fn validate(&self, _node: &FormNode) -> RawErrorMap {
        RawErrorMap::new()
    }
}

const NOOP: NoopValidator = NoopValidator;

/// Validate a form tree, producing a rebuilt tree where every node carries
/// its final translated `errors` and derived `valid` flag.
///
/// Per node, in this exact order (later passes augment earlier output):
/// 1. the resolved field validator produces the raw error map,
/// 2. the selection consistency check merges its errors in,
/// 3. the merged map is translated into display strings,
/// 4. children are validated recursively — except collection entries marked
///    for removal, which are forced valid without recursing (their errors
///    are left untouched and stale),
/// 5. validity is aggregated from the finalized errors and children.
///
/// The invariant on return: a node is valid iff it has no field errors and
/// every non-removed descendant is valid, transitively for the whole tree.
pub fn validate(mut node: FormNode, config: &ValidationConfig) -> FormNode {
    let mut raw = resolve_validator(&node, config).validate(&node);
    merge_errors(&mut raw, selection::check(&node));
    node.errors = translate_node(&node, raw, config);

    let items = mem::take(&mut node.items);
    node.items = items
        .into_iter()
        .map(|item| match item {
            Item::Field(field) => Item::Field(field),
            Item::Nested(mut nested) => {
                nested.form = validate(nested.form, config);
                Item::Nested(nested)
            }
            Item::Collection(mut collection) => {
                for entry in &mut collection.entries {
                    if entry.marked_for_removal {
                        // Excluded from validation but kept for rendering.
                        entry.form.valid = true;
                    } else {
                        let form = mem::take(&mut entry.form);
                        entry.form = validate(form, config);
                    }
                }
                Item::Collection(collection)
            }
        })
        .collect();

    node.valid = aggregate::is_valid(&node);
    node
}

fn resolve_validator<'a>(node: &'a FormNode, config: &'a ValidationConfig) -> &'a dyn FieldValidator {
    node.validator_override
        .as_deref()
        .or(config.validator.as_deref())
        .unwrap_or(&NOOP)
}
