use crate::{Instruction, Predicate, Program, ProgramError, SlotId, SlotInfo, StepAddr};

fn slot(name: &str, parent: Option<u16>) -> SlotInfo {
    SlotInfo {
        name: name.into(),
        parent: parent.map(SlotId),
    }
}

#[test]
fn rejects_empty_program() {
    assert_eq!(Program::new(vec![], vec![]), Err(ProgramError::Empty));
}

#[test]
fn rejects_jump_past_end() {
    let err = Program::new(vec![Instruction::Jump(StepAddr(3))], vec![]).unwrap_err();
    assert_eq!(
        err,
        ProgramError::JumpOutOfRange {
            step: StepAddr(0),
            target: StepAddr(3),
            len: 1
        }
    );
    assert_eq!(err.to_string(), "step 0 jumps to 3, past the end (1 steps)");
}

#[test]
fn rejects_unknown_slot() {
    let err = Program::new(vec![Instruction::Open(SlotId(0)), Instruction::Accept], vec![])
        .unwrap_err();
    assert_eq!(
        err,
        ProgramError::UnknownSlot {
            step: StepAddr(0),
            slot: SlotId(0)
        }
    );
}

#[test]
fn rejects_duplicate_names_in_one_scope() {
    let err = Program::new(
        vec![Instruction::Accept],
        vec![slot("a", None), slot("a", None)],
    )
    .unwrap_err();
    assert_eq!(err, ProgramError::DuplicateSlot { name: "a".into() });
}

#[test]
fn rejects_forward_parent() {
    let err = Program::new(
        vec![Instruction::Accept],
        vec![slot("a", Some(1)), slot("b", None)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        ProgramError::ParentAfterChild {
            slot: SlotId(0),
            parent: SlotId(1)
        }
    );
}

#[test]
fn slot_lookup_respects_scope() {
    let program = Program::new(
        vec![Instruction::Match(Predicate::Any), Instruction::Accept],
        vec![
            slot("person", None),
            slot("name", Some(0)),
            slot("name", None),
            slot("person", Some(0)),
        ],
    )
    .unwrap();

    assert_eq!(program.find_slot(None, "person"), Some(SlotId(0)));
    assert_eq!(program.find_slot(None, "name"), Some(SlotId(2)));
    assert_eq!(program.find_slot(Some(SlotId(0)), "name"), Some(SlotId(1)));
    assert_eq!(program.find_slot(Some(SlotId(0)), "person"), Some(SlotId(3)));
    assert_eq!(program.find_slot(Some(SlotId(1)), "name"), None);

    let top: Vec<_> = program.children(None).collect();
    assert_eq!(top, vec![SlotId(0), SlotId(2)]);
    assert_eq!(program.slot_path(SlotId(3)), "person.person");
}
