use super::common::*;
use formtree::*;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Trees with no field errors and no invalid selects validate to true
    // everywhere, whatever their shape.
    #[test]
    fn clean_trees_are_valid_everywhere(node in arb_node(false)) {
        let validated = validate(node, &ValidationConfig::new());
        assert_all_valid(&validated);
    }

    // The §3 invariant holds transitively for arbitrary trees under a
    // validator that errors on some fields and arbitrary removal flags.
    #[test]
    fn validity_invariant_holds_for_arbitrary_trees(node in arb_node(true)) {
        let config = ValidationConfig::new().with_validator(Arc::new(ErrorOnEPrefix));
        let validated = validate(node, &config);
        assert_invariant(&validated);
    }

    // An erroneous node invalidates every strict ancestor: force an error at
    // a known leaf under an arbitrary prefix of nested forms.
    #[test]
    fn leaf_error_reaches_the_root(depth in 0usize..5, node in arb_node(false)) {
        let mut tree = FormNode::new(vec![Item::Field(Field::new("evil", FieldKind::Text))]);
        for _ in 0..depth {
            tree = FormNode::new(vec![Item::Nested(Nested {
                name: "wrap".to_string(),
                form: tree,
            })]);
        }
        // Graft arbitrary clean structure next to the erroneous chain.
        let mut items = node.items;
        items.push(Item::Nested(Nested { name: "chain".to_string(), form: tree }));
        let root = FormNode::new(items);

        let config = ValidationConfig::new().with_validator(Arc::new(ErrorOnEPrefix));
        let validated = validate(root, &config);

        prop_assert!(!validated.valid);
        let mut cursor = validated.nested("chain").expect("chain kept");
        prop_assert!(!cursor.valid);
        for _ in 0..depth {
            cursor = cursor.nested("wrap").expect("wrap kept");
            prop_assert!(!cursor.valid);
        }
        prop_assert_eq!(cursor.field_errors("evil"), &["required".to_string()]);
    }
}
