//! Instruction emission.

use indexmap::IndexMap;
use indexmap::map::Entry;
use parlance_bytecode::{Instruction, Predicate, Program, SlotId, SlotInfo, StepAddr};

use super::{CompileError, CompiledPattern};
use crate::{Pattern, Quantifier};

/// Compiler state for Thompson construction.
pub(super) struct Compiler<P> {
    instructions: Vec<Instruction>,
    /// Slots keyed by (enclosing slot, name), in declaration order.
    slots: IndexMap<(Option<SlotId>, String), Option<P>>,
    /// Innermost capture being compiled.
    scope: Option<SlotId>,
}

impl<P> Compiler<P> {
    pub(super) fn new() -> Self {
        Self {
            instructions: Vec::new(),
            slots: IndexMap::new(),
            scope: None,
        }
    }

    pub(super) fn finish(mut self, pattern: Pattern<P>) -> Result<CompiledPattern<P>, CompileError> {
        self.compile(pattern)?;
        self.emit(Instruction::Match(Predicate::End));
        self.emit(Instruction::Accept);

        let mut slots = Vec::with_capacity(self.slots.len());
        let mut payloads = Vec::with_capacity(self.slots.len());
        for ((parent, name), payload) in self.slots {
            slots.push(SlotInfo { name, parent });
            payloads.push(payload);
        }

        let program = Program::new(self.instructions, slots)?;
        Ok(CompiledPattern { program, payloads })
    }

    fn here(&self) -> StepAddr {
        StepAddr(self.instructions.len() as u32)
    }

    fn emit(&mut self, instruction: Instruction) -> StepAddr {
        let addr = self.here();
        self.instructions.push(instruction);
        addr
    }

    /// Emit a split whose targets are filled in later.
    fn emit_split(&mut self) -> StepAddr {
        self.emit(Instruction::Split {
            primary: StepAddr(0),
            secondary: StepAddr(0),
        })
    }

    fn patch_split(&mut self, at: StepAddr, primary: StepAddr, secondary: StepAddr) {
        self.instructions[at.get()] = Instruction::Split { primary, secondary };
    }

    fn patch_jump(&mut self, at: StepAddr, target: StepAddr) {
        self.instructions[at.get()] = Instruction::Jump(target);
    }

    fn compile(&mut self, pattern: Pattern<P>) -> Result<(), CompileError> {
        match pattern {
            Pattern::Word(predicate) => {
                self.emit(Instruction::Match(predicate));
            }
            Pattern::Seq(items) => {
                for item in items {
                    self.compile(item)?;
                }
            }
            Pattern::Alt(alternatives) => self.compile_alt(alternatives)?,
            Pattern::Repeat { body, quantifier } => self.compile_repeat(*body, quantifier)?,
            Pattern::Capture {
                name,
                body,
                payload,
            } => {
                let slot = self.declare(name, payload)?;
                let outer = self.scope.replace(slot);
                self.emit(Instruction::Open(slot));
                self.compile(*body)?;
                self.emit(Instruction::Close(slot));
                self.scope = outer;
            }
        }
        Ok(())
    }

    // split L1, next
    // L1: <alt 0>; jump end
    // next: split L2, next' ...
    // <last alt>
    // end:
    fn compile_alt(&mut self, alternatives: Vec<Pattern<P>>) -> Result<(), CompileError> {
        let count = alternatives.len();
        let mut exits = Vec::with_capacity(count.saturating_sub(1));
        for (i, alternative) in alternatives.into_iter().enumerate() {
            if i + 1 == count {
                self.compile(alternative)?;
                break;
            }
            let split = self.emit_split();
            self.compile(alternative)?;
            exits.push(self.emit(Instruction::Jump(StepAddr(0))));
            let next = self.here();
            self.patch_split(split, split.next(), next);
        }
        let end = self.here();
        for exit in exits {
            self.patch_jump(exit, end);
        }
        Ok(())
    }

    fn compile_repeat(&mut self, body: Pattern<P>, quantifier: Quantifier) -> Result<(), CompileError> {
        match quantifier {
            // split body, end; body; end:
            Quantifier::Optional => {
                let split = self.emit_split();
                self.compile(body)?;
                let end = self.here();
                self.patch_split(split, split.next(), end);
            }
            // loop: split body, end; body; jump loop; end:
            Quantifier::Star => {
                let split = self.emit_split();
                self.compile(body)?;
                self.emit(Instruction::Jump(split));
                let end = self.here();
                self.patch_split(split, split.next(), end);
            }
            // loop: body; split loop, end; end:
            Quantifier::Plus => {
                let start = self.here();
                self.compile(body)?;
                let split = self.emit_split();
                self.patch_split(split, start, split.next());
            }
        }
        Ok(())
    }

    fn declare(&mut self, name: String, payload: Option<P>) -> Result<SlotId, CompileError> {
        let index = match self.slots.entry((self.scope, name)) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().is_none() {
                    *occupied.get_mut() = payload;
                }
                occupied.index()
            }
            Entry::Vacant(vacant) => {
                let index = vacant.index();
                if index > u16::MAX as usize {
                    return Err(CompileError::TooManySlots {
                        limit: u16::MAX as usize + 1,
                    });
                }
                vacant.insert(payload);
                index
            }
        };
        Ok(SlotId(index as u16))
    }
}
