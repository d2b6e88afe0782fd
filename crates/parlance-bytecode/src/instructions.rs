//! Instructions of the pattern-matching machine.

use std::fmt;

use crate::Predicate;

/// Index of an instruction inside a program.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StepAddr(pub u32);

impl StepAddr {
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StepAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index into the program's capture-slot table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SlotId(pub u16);

impl SlotId {
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// One step of a compiled pattern.
///
/// Execution is a backtracking walk: `Split` tries `primary` first and
/// resumes at `secondary` when everything after `primary` fails.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    /// Consume one word if it satisfies the predicate.
    Match(Predicate),
    /// Fork execution, preferring `primary`.
    Split {
        primary: StepAddr,
        secondary: StepAddr,
    },
    Jump(StepAddr),
    /// Record the current position as the start of a capture.
    Open(SlotId),
    /// Record the current position as the end of a capture.
    Close(SlotId),
    /// Whole pattern matched.
    Accept,
}

impl Instruction {
    /// Addresses this instruction can transfer control to, besides falling through.
    pub fn targets(&self) -> Vec<StepAddr> {
        match self {
            Self::Split { primary, secondary } => vec![*primary, *secondary],
            Self::Jump(target) => vec![*target],
            _ => Vec::new(),
        }
    }
}
