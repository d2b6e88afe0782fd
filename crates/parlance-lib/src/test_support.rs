use parlance_core::dsl::IS_RELATED_TO;
use parlance_core::{Expression, TaggedWord};
use proptest::prelude::*;

use crate::tagger::{PretaggedTagger, Tagger};

pub fn words(text: &str) -> Vec<TaggedWord> {
    PretaggedTagger.tag(text).unwrap()
}

/// Random expressions grown only through the public operations.
pub fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = ("[a-z]{1,6}", "[A-Za-z ]{1,8}").prop_map(|(relation, value)| {
        let mut expression = Expression::new();
        expression.add_data(relation.as_str(), value);
        expression
    });
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), "[a-z]{1,6}", any::<bool>()).prop_map(|(mut e, relation, reverse)| {
                e.decapitate(relation.as_str(), reverse);
                e
            }),
            inner.clone().prop_map(|e| IS_RELATED_TO.apply(&e)),
            (inner.clone(), inner).prop_map(|(a, b)| a + b),
        ]
    })
}
