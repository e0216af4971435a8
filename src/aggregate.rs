//! Per-node validity aggregation.

use crate::error::DisplayErrorMap;
use crate::types::{FormNode, Item};

/// Compute the validity of a single node from its own finalized error map
/// plus the validity of its already-validated descendants. Only meaningful
/// once `validate` has finalized errors and children for the node.
///
/// A node with an empty error map and no children is always valid; there are
/// no other sources of invalidity.
pub fn is_valid(node: &FormNode) -> bool {
    no_field_has_errors(&node.errors)
        && all_nested_children_valid(node)
        && all_collection_entries_valid(node)
}

/// A field may appear in the map with zero errors and still count as clean.
fn no_field_has_errors(errors: &DisplayErrorMap) -> bool {
    errors.values().all(|messages| messages.is_empty())
}

fn all_nested_children_valid(node: &FormNode) -> bool {
    node.items.iter().all(|item| match item {
        Item::Nested(nested) => nested.form.valid,
        _ => true,
    })
}

/// Entries marked for removal were already forced valid by the traversal,
/// so they never fail this check.
fn all_collection_entries_valid(node: &FormNode) -> bool {
    node.items.iter().all(|item| match item {
        Item::Collection(collection) => collection.entries.iter().all(|e| e.form.valid),
        _ => true,
    })
}
