use parlance_bytecode::{Instruction, Program, StepAddr};
use parlance_compiler::compile_str;
use parlance_core::{Span, TaggedWord};

use super::{Captures, RuntimeError, SlotValue, VM};

fn words(text: &str) -> Vec<TaggedWord> {
    text.split_whitespace()
        .map(|w| {
            let mut parts = w.split('/');
            let token = parts.next().unwrap();
            let lemma = parts.next().unwrap();
            let pos = parts.next().unwrap();
            TaggedWord::new(token, lemma, pos)
        })
        .collect()
}

fn program(source: &str) -> Program {
    compile_str::<()>(source).unwrap().into_parts().0
}

fn run(source: &str, input: &str) -> Option<(Program, Captures)> {
    let program = program(source);
    let words = words(input);
    let captures = VM::builder(&words).build().find_match(&program).unwrap()?;
    Some((program, captures))
}

fn slot(program: &Program, captures: &Captures, path: &[&str]) -> SlotValue {
    let mut scope = None;
    for name in path {
        scope = Some(program.find_slot(scope, name).unwrap());
    }
    captures.get(scope.unwrap())
}

#[test]
fn who_is_captures_last_word() {
    let (program, captures) = run(
        "lemma:who lemma:be pos:NNP+ @person",
        "who/who/WP is/be/VBZ TomCruise/TomCruise/NNP",
    )
    .unwrap();

    assert_eq!(captures.span(), Span::new(0, 3));
    assert_eq!(
        slot(&program, &captures, &["person"]),
        SlotValue::Span(Span::new(2, 3))
    );
}

#[test]
fn match_must_reach_end_of_input() {
    assert!(run("lemma:who lemma:be", "who/who/WP is/be/VBZ Tom/Tom/NNP").is_none());
    assert!(run("lemma:who lemma:be _*", "who/who/WP is/be/VBZ Tom/Tom/NNP").is_some());
}

#[test]
fn greedy_repetition_gives_back_for_the_rest() {
    let (program, captures) = run(
        "pos:NNP+ @first pos:NNP+ @last",
        "Juan/Juan/NNP Martin/Martin/NNP Del/Del/NNP Potro/Potro/NNP",
    )
    .unwrap();

    assert_eq!(slot(&program, &captures, &["first"]).span(), Some(Span::new(0, 3)));
    assert_eq!(slot(&program, &captures, &["last"]).span(), Some(Span::new(3, 4)));
}

#[test]
fn untaken_alternative_is_unset() {
    let (program, captures) = run("[pos:NN @noun pos:VB @verb]", "run/run/VB").unwrap();

    assert_eq!(slot(&program, &captures, &["noun"]), SlotValue::Unset);
    assert_eq!(
        slot(&program, &captures, &["verb"]),
        SlotValue::Span(Span::new(0, 1))
    );
}

#[test]
fn capture_inside_repetition_is_repeated() {
    let (program, captures) = run("{ pos:NN @n }+", "a/a/NN b/b/NN").unwrap();
    assert_eq!(slot(&program, &captures, &["n"]), SlotValue::Repeated);

    let (program, captures) = run("{ pos:NN @n }+", "a/a/NN").unwrap();
    assert_eq!(slot(&program, &captures, &["n"]).span(), Some(Span::new(0, 1)));
}

#[test]
fn backtracking_discards_captures_of_failed_branch() {
    let (program, captures) = run(
        "[{ pos:NN @x pos:VB } { pos:NN pos:NN @y }]",
        "a/a/NN b/b/NN",
    )
    .unwrap();

    assert_eq!(slot(&program, &captures, &["x"]), SlotValue::Unset);
    assert_eq!(slot(&program, &captures, &["y"]).span(), Some(Span::new(1, 2)));
}

#[test]
fn nested_captures_resolve_within_parent() {
    let (program, captures) = run(
        "lemma:who lemma:be { pos:NNP @first pos:NNP @last } @person",
        "who/who/WP is/be/VBZ Tom/Tom/NNP Cruise/Cruise/NNP",
    )
    .unwrap();

    assert_eq!(
        slot(&program, &captures, &["person"]).span(),
        Some(Span::new(2, 4))
    );
    assert_eq!(
        slot(&program, &captures, &["person", "last"]).span(),
        Some(Span::new(3, 4))
    );
    assert_eq!(program.find_slot(None, "last"), None);
}

#[test]
fn optional_and_empty_input() {
    assert!(run("pos:DT? pos:NN", "dog/dog/NN").is_some());
    assert!(run("pos:DT? pos:NN", "").is_none());

    let (_, captures) = run("_* @rest", "").unwrap();
    assert_eq!(captures.span(), Span::new(0, 0));
    assert_eq!(captures.values(), &[SlotValue::Span(Span::new(0, 0))]);
}

#[test]
fn fuel_runs_out_on_runaway_program() {
    let program = Program::new(vec![Instruction::Jump(StepAddr(0))], vec![]).unwrap();
    let err = VM::builder(&[]).exec_fuel(100).build().execute(&program).unwrap_err();

    assert_eq!(err, RuntimeError::ExecFuelExhausted(100));
    assert_eq!(err.to_string(), "runtime execution limit exceeded (100 steps)");
}

#[test]
fn effect_log_contains_only_the_accepted_path() {
    let program = program("[pos:A @a pos:B @b]");
    let words = words("x/x/B");
    let effects = VM::builder(&words).build().execute(&program).unwrap().unwrap();
    assert_eq!(effects.len(), 2);
}

#[test]
fn slot_values_serialize_with_state_tag() {
    assert_eq!(
        serde_json::to_string(&SlotValue::Span(Span::new(2, 3))).unwrap(),
        r#"{"state":"span","span":{"start":2,"end":3}}"#
    );
    assert_eq!(
        serde_json::to_string(&SlotValue::Repeated).unwrap(),
        r#"{"state":"repeated"}"#
    );
}
