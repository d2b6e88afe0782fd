use thiserror::Error;

use crate::{Instruction, SlotId, StepAddr};

/// Capture slot declared by the pattern.
///
/// Slots form a tree: `parent` is the capture that lexically encloses this
/// one, or `None` at the top level. A name is only meaningful within its
/// parent's scope.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SlotInfo {
    pub name: String,
    pub parent: Option<SlotId>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProgramError {
    #[error("program is empty")]
    Empty,
    #[error("step {step} jumps to {target}, past the end ({len} steps)")]
    JumpOutOfRange {
        step: StepAddr,
        target: StepAddr,
        len: usize,
    },
    #[error("step {step} refers to undeclared slot {slot}")]
    UnknownSlot { step: StepAddr, slot: SlotId },
    #[error("slot {slot} has parent {parent} declared after it")]
    ParentAfterChild { slot: SlotId, parent: SlotId },
    #[error("slot name `{name}` declared twice in the same scope")]
    DuplicateSlot { name: String },
}

/// A compiled pattern: instructions plus capture-slot table.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
    slots: Vec<SlotInfo>,
}

impl Program {
    /// Validate and wrap a compiled instruction stream.
    pub fn new(instructions: Vec<Instruction>, slots: Vec<SlotInfo>) -> Result<Self, ProgramError> {
        if instructions.is_empty() {
            return Err(ProgramError::Empty);
        }

        for (i, slot) in slots.iter().enumerate() {
            if let Some(parent) = slot.parent
                && parent.get() >= i
            {
                return Err(ProgramError::ParentAfterChild {
                    slot: SlotId(i as u16),
                    parent,
                });
            }
            if slots[..i]
                .iter()
                .any(|other| other.parent == slot.parent && other.name == slot.name)
            {
                return Err(ProgramError::DuplicateSlot {
                    name: slot.name.clone(),
                });
            }
        }

        let len = instructions.len();
        for (i, instruction) in instructions.iter().enumerate() {
            let step = StepAddr(i as u32);
            for target in instruction.targets() {
                if target.get() >= len {
                    return Err(ProgramError::JumpOutOfRange { step, target, len });
                }
            }
            if let Instruction::Open(slot) | Instruction::Close(slot) = instruction
                && slot.get() >= slots.len()
            {
                return Err(ProgramError::UnknownSlot { step, slot: *slot });
            }
        }

        Ok(Self {
            instructions,
            slots,
        })
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instruction(&self, addr: StepAddr) -> &Instruction {
        &self.instructions[addr.get()]
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn slots(&self) -> &[SlotInfo] {
        &self.slots
    }

    pub fn slot(&self, slot: SlotId) -> &SlotInfo {
        &self.slots[slot.get()]
    }

    /// Slot named `name` declared directly inside `scope` (`None` = top level).
    pub fn find_slot(&self, scope: Option<SlotId>, name: &str) -> Option<SlotId> {
        self.slots
            .iter()
            .position(|slot| slot.parent == scope && slot.name == name)
            .map(|i| SlotId(i as u16))
    }

    /// Slots declared directly inside `scope`, in declaration order.
    pub fn children(&self, scope: Option<SlotId>) -> impl Iterator<Item = SlotId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, slot)| slot.parent == scope)
            .map(|(i, _)| SlotId(i as u16))
    }

    /// Dotted path of a slot, e.g. `person.name`.
    pub fn slot_path(&self, slot: SlotId) -> String {
        let info = self.slot(slot);
        match info.parent {
            Some(parent) => format!("{}.{}", self.slot_path(parent), info.name),
            None => info.name.clone(),
        }
    }
}
