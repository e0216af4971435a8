use formtree::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Validator reporting one fixed raw error for every own field whose name is
/// in the configured list. Pure function of node content, so it keeps
/// `validate` idempotent.
pub struct ErrorOnNames {
    pub names: Vec<String>,
    pub error: RawError,
}

impl ErrorOnNames {
    pub fn new(names: &[&str], template: &str) -> Self {
        ErrorOnNames {
            names: names.iter().map(|s| s.to_string()).collect(),
            error: RawError::new(template),
        }
    }
}

impl FieldValidator for ErrorOnNames {
    fn validate(&self, node: &FormNode) -> RawErrorMap {
        let mut map = RawErrorMap::new();
        for field in node.fields() {
            if self.names.iter().any(|n| n == &field.name) {
                map.entry(field.name.clone())
                    .or_default()
                    .push(self.error.clone());
            }
        }
        map
    }
}

/// Counts how many nodes the traversal hands to the validator.
pub struct CountingValidator {
    pub calls: AtomicUsize,
}

impl CountingValidator {
    pub fn new() -> Self {
        CountingValidator {
            calls: AtomicUsize::new(0),
        }
    }
}

impl FieldValidator for CountingValidator {
    fn validate(&self, _node: &FormNode) -> RawErrorMap {
        self.calls.fetch_add(1, Ordering::Relaxed);
        RawErrorMap::new()
    }
}

/// Translator prefixing every template, to make resolution visible in output.
pub struct PrefixTranslator(pub &'static str);

impl ErrorTranslator for PrefixTranslator {
    fn translate(&self, error: &RawError) -> String {
        format!("{}{}", self.0, error.template)
    }
}

/// Translator that appends the options, to assert they reach the translator.
pub struct OptionsTranslator;

impl ErrorTranslator for OptionsTranslator {
    fn translate(&self, error: &RawError) -> String {
        let opts: Vec<String> = error.options.iter().map(|v| v.to_string()).collect();
        format!("{} [{}]", error.template, opts.join(", "))
    }
}

pub fn text_field(name: &str) -> Item {
    Item::Field(Field::new(name, FieldKind::Text))
}

pub fn select_field(name: &str, kind: FieldKind, invalid: bool) -> Item {
    let mut field = Field::new(name, kind);
    if invalid {
        field = field.with_invalid_select();
    }
    Item::Field(field)
}

pub fn nested(name: &str, form: FormNode) -> Item {
    Item::Nested(Nested {
        name: name.to_string(),
        form,
    })
}

pub fn collection(name: &str, entries: Vec<CollectionEntry>) -> Item {
    Item::Collection(Collection {
        name: name.to_string(),
        entries,
    })
}

pub fn config_with(validator: impl FieldValidator + 'static) -> ValidationConfig {
    ValidationConfig::new().with_validator(Arc::new(validator))
}
