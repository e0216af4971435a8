use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::DisplayErrorMap;
use crate::translate::ErrorTranslator;
use crate::validate::FieldValidator;

// ─── FormNode ───────────────────────────────────────────────────────────────

/// One form or sub-form in the tree.
///
/// `errors` and `valid` are written by [`crate::validate::validate`] and are
/// meaningful only after a validation pass; the item shape is never mutated.
/// The two override hooks are runtime-only configuration: they are skipped by
/// serde and ignored by equality.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct FormNode {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "DisplayErrorMap::is_empty")]
    pub errors: DisplayErrorMap,
    #[serde(default)]
    pub valid: bool,
    /// Selects the field validator for this node instead of the configured default.
    #[serde(skip)]
    pub validator_override: Option<Arc<dyn FieldValidator>>,
    /// Selects the error translator for this node instead of the configured default.
    #[serde(skip)]
    pub translate_override: Option<Arc<dyn ErrorTranslator>>,
}

impl FormNode {
    pub fn new(items: Vec<Item>) -> Self {
        FormNode {
            items,
            ..FormNode::default()
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn FieldValidator>) -> Self {
        self.validator_override = Some(validator);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn ErrorTranslator>) -> Self {
        self.translate_override = Some(translator);
        self
    }

    /// Iterate this node's own leaf fields (not descendants').
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.items.iter().filter_map(|item| match item {
            Item::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Look up an own field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|f| f.name == name)
    }

    /// Look up a nested sub-form by item name.
    pub fn nested(&self, name: &str) -> Option<&FormNode> {
        self.items.iter().find_map(|item| match item {
            Item::Nested(nested) if nested.name == name => Some(&nested.form),
            _ => None,
        })
    }

    /// Look up a collection's entries by item name.
    pub fn collection(&self, name: &str) -> Option<&[CollectionEntry]> {
        self.items.iter().find_map(|item| match item {
            Item::Collection(collection) if collection.name == name => {
                Some(collection.entries.as_slice())
            }
            _ => None,
        })
    }

    /// Translated messages for a field, empty if the field has none.
    pub fn field_errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Debug for FormNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormNode")
            .field("items", &self.items)
            .field("errors", &self.errors)
            .field("valid", &self.valid)
            .field(
                "validator_override",
                &self.validator_override.as_ref().map(|_| ".."),
            )
            .field(
                "translate_override",
                &self.translate_override.as_ref().map(|_| ".."),
            )
            .finish()
    }
}

/// Structural equality: override hooks are deliberately not compared.
impl PartialEq for FormNode {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.errors == other.errors && self.valid == other.valid
    }
}

// ─── Item ───────────────────────────────────────────────────────────────────

/// A typed child of a node. Closed union: the traversal matches exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Field(Field),
    Nested(Nested),
    Collection(Collection),
}

// ─── Field ──────────────────────────────────────────────────────────────────

/// Kind tag for leaf fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Checkbox,
    Hidden,
    SingleSelect,
    MultiSelect,
}

impl FieldKind {
    /// True for the selection widgets subject to the consistency check.
    pub fn is_select(self) -> bool {
        matches!(self, FieldKind::SingleSelect | FieldKind::MultiSelect)
    }
}

/// A leaf field: a name, a kind tag, and the data bag filled in by the
/// binding layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub data: FieldData,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Field {
            name: name.into(),
            kind,
            data: FieldData::default(),
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.data.value = Some(value);
        self
    }

    /// Mark the submitted value as unmatched against the allowed option set.
    /// Set by the binding layer; consumed by the selection consistency check.
    pub fn with_invalid_select(mut self) -> Self {
        self.data.invalid_select = true;
        self
    }
}

/// Per-field data populated upstream of validation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(rename = "invalidSelect", default, skip_serializing_if = "is_false")]
    pub invalid_select: bool,
    /// Binding-layer extras carried through untouched.
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

// ─── Nested / Collection ────────────────────────────────────────────────────

/// Exactly one embedded sub-form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Nested {
    pub name: String,
    pub form: FormNode,
}

/// Zero-or-more repeated sub-forms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<CollectionEntry>,
}

/// One repeated sub-form instance plus its removal flag.
///
/// The flag is computed by the surrounding binding layer (e.g. a "delete this
/// row" checkbox). Removed entries stay in the tree so they still render, but
/// validation skips them and forces their `valid` to true.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub form: FormNode,
    #[serde(
        rename = "markedForRemoval",
        default,
        skip_serializing_if = "is_false"
    )]
    pub marked_for_removal: bool,
}

impl CollectionEntry {
    pub fn new(form: FormNode) -> Self {
        CollectionEntry {
            form,
            marked_for_removal: false,
        }
    }

    pub fn marked_for_removal(form: FormNode) -> Self {
        CollectionEntry {
            form,
            marked_for_removal: true,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
