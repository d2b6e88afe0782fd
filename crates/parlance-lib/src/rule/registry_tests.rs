use parlance_compiler::{CompileError, any, lemma, pos};
use parlance_core::dsl::HasKeyword;
use parlance_core::Expression;
use parlance_vm::FuelLimits;

use super::{Rule, RuleError, RuleRegistry};
use crate::Error;
use crate::semantics::HandlerSet;
use crate::test_support::words;

fn anything(name: &str) -> Rule {
    Rule::new(name, any().plus(), |_| Ok(Expression::new()))
}

#[test]
fn rules_sorted_by_weight_then_registration() {
    let rules = RuleRegistry::new()
        .with(anything("low").weight(-1))
        .with(anything("first-zero"))
        .with(anything("high").weight(5))
        .with(anything("second-zero"))
        .build()
        .unwrap();

    let names: Vec<_> = rules.iter().map(|rule| rule.name()).collect();
    assert_eq!(names, ["high", "first-zero", "second-zero", "low"]);
}

#[test]
fn register_in_place() {
    let mut registry = RuleRegistry::new();
    registry.register(anything("a")).register(anything("b"));
    assert_eq!(registry.len(), 2);

    let rules = registry.build().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.get(1).map(|rule| rule.name()), Some("b"));
}

#[test]
fn invalid_pattern_names_the_rule() {
    let broken = Rule::new("broken", pos("DT").opt().star(), |_| Ok(Expression::new()));
    let err = RuleRegistry::new().with(broken).build().unwrap_err();

    match err {
        Error::Compile { rule, source } => {
            assert_eq!(rule, "broken");
            assert!(matches!(source, CompileError::NullableRepetition { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn apply_interprets_a_match() {
    let rules = RuleRegistry::new()
        .with(Rule::new(
            "what-is",
            lemma("what") + lemma("be") + pos("NN").capture("thing"),
            |m| {
                let thing = m.group("thing")?;
                Ok((
                    HasKeyword::DEFAULT.apply(&thing.lemmas()),
                    serde_json::json!({ "kind": "definition" }),
                ))
            },
        ))
        .build()
        .unwrap();
    let rule = rules.get(0).unwrap();

    let interpretation = rule
        .apply(
            &words("what|what|WP is|be|VBZ dog|dog|NN"),
            &HandlerSet::new(),
            FuelLimits::default(),
        )
        .unwrap()
        .unwrap();

    assert_eq!(interpretation.expression.edge_count(), 1);
    assert_eq!(
        interpretation.metadata,
        Some(serde_json::json!({ "kind": "definition" }))
    );
}

#[test]
fn non_match_and_rejection_are_both_none() {
    let rules = RuleRegistry::new()
        .with(Rule::new("picky", pos("NN"), |_| {
            Err::<Expression, _>(RuleError::rejected("not today"))
        }))
        .build()
        .unwrap();
    let rule = rules.get(0).unwrap();
    let handlers = HandlerSet::new();

    let rejected = rule.apply(&words("dog|dog|NN"), &handlers, FuelLimits::default());
    assert!(matches!(rejected, Ok(None)));

    let unmatched = rule.apply(&words("run|run|VB"), &handlers, FuelLimits::default());
    assert!(matches!(unmatched, Ok(None)));
}

#[test]
fn lookup_error_propagates() {
    let rules = RuleRegistry::new()
        .with(Rule::new("typo", pos("NN").capture("thing"), |m| {
            Ok(HasKeyword::DEFAULT.apply(&m.group("thnig")?.lemmas()))
        }))
        .build()
        .unwrap();
    let rule = rules.get(0).unwrap();

    let err = rule
        .apply(&words("dog|dog|NN"), &HandlerSet::new(), FuelLimits::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "rule `typo`: `thnig` is not declared in the rule pattern"
    );
}

#[test]
fn exhausted_fuel_is_an_error() {
    let rules = RuleRegistry::new()
        .with(anything("greedy"))
        .build()
        .unwrap();
    let rule = rules.get(0).unwrap();

    let result = rule.apply(
        &words("a|a|DT b|b|NN c|c|NN d|d|NN"),
        &HandlerSet::new(),
        FuelLimits::new().exec_fuel(2),
    );
    assert!(matches!(result, Err(Error::Runtime(_))));
}
