//! Compiled pattern format for Parlance.
//!
//! This crate contains:
//! - Word predicates (`Predicate`) evaluated against a single tagged word
//! - Instructions of the matching machine (`Instruction`, `StepAddr`, `SlotId`)
//! - The compiled `Program` with its capture-slot table
//! - A human-readable `dump` for debugging

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod dump;
mod instructions;
mod predicate;
mod program;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod program_tests;

pub use dump::{dump, format_instruction, width_for_count};
pub use instructions::{Instruction, SlotId, StepAddr};
pub use predicate::Predicate;
pub use program::{Program, ProgramError, SlotInfo};
