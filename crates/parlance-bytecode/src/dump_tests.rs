use parlance_core::Colors;

use crate::{Instruction, Predicate, Program, SlotId, SlotInfo, StepAddr, dump, width_for_count};

fn who_is_program() -> Program {
    let slots = vec![
        SlotInfo {
            name: "person".into(),
            parent: None,
        },
        SlotInfo {
            name: "name".into(),
            parent: Some(SlotId(0)),
        },
    ];
    let instructions = vec![
        Instruction::Match(Predicate::lemma("who")),
        Instruction::Match(Predicate::lemma("be")),
        Instruction::Open(SlotId(0)),
        Instruction::Open(SlotId(1)),
        Instruction::Match(Predicate::pos("NNP")),
        Instruction::Split {
            primary: StepAddr(4),
            secondary: StepAddr(6),
        },
        Instruction::Close(SlotId(1)),
        Instruction::Close(SlotId(0)),
        Instruction::Match(Predicate::token("?")),
        Instruction::Match(Predicate::End),
        Instruction::Accept,
    ];
    Program::new(instructions, slots).unwrap()
}

#[test]
fn dump_lists_slots_and_code() {
    insta::assert_snapshot!(dump(&who_is_program(), Colors::OFF), @r#"
    [slots]
    S0 person
    S1 name  in S0

    [code]
    00 match  lemma:who
    01 match  lemma:be
    02 open   S0 person
    03 open   S1 person.name
    04 match  pos:NNP
    05 split  04, 06
    06 close  S1 person.name
    07 close  S0 person
    08 match  token:"?"
    09 match  $end
    10 accept
    "#);
}

#[test]
fn dump_with_colors_wraps_names() {
    let out = dump(&who_is_program(), Colors::ON);
    assert!(out.starts_with("\x1b[34m[slots]\x1b[0m\n"));
    assert!(out.contains("\x1b[32mpos:NNP\x1b[0m"));
}

#[test]
fn widths() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(1), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}
