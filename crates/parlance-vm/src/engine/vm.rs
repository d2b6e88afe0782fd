//! Virtual machine for executing compiled patterns.

use parlance_bytecode::{Instruction, Program, StepAddr};
use parlance_core::{Span, TaggedWord};

use super::checkpoint::{Checkpoint, CheckpointStack};
use super::effect::{Effect, EffectLog};
use super::error::RuntimeError;
use super::materializer::{Captures, Materializer};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for pattern execution.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum total steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
}

/// Virtual machine state for one run over one word sequence.
pub struct VM<'t> {
    pub(crate) words: &'t [TaggedWord],
    pub(crate) ip: StepAddr,
    /// Index of the next word to consume.
    pub(crate) position: usize,
    pub(crate) checkpoints: CheckpointStack,
    pub(crate) effects: EffectLog,
    pub(crate) exec_fuel: u32,
    pub(crate) limits: FuelLimits,
}

pub struct VMBuilder<'t> {
    words: &'t [TaggedWord],
    limits: FuelLimits,
}

impl<'t> VMBuilder<'t> {
    pub fn new(words: &'t [TaggedWord]) -> Self {
        Self {
            words,
            limits: FuelLimits::default(),
        }
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn build(self) -> VM<'t> {
        VM {
            words: self.words,
            ip: StepAddr(0),
            position: 0,
            checkpoints: CheckpointStack::new(),
            effects: EffectLog::new(),
            exec_fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        }
    }
}

impl<'t> VM<'t> {
    pub fn builder(words: &'t [TaggedWord]) -> VMBuilder<'t> {
        VMBuilder::new(words)
    }

    /// Run the program, returning the effect log of the first accepting path.
    ///
    /// `Ok(None)` means the words do not match.
    pub fn execute(self, program: &Program) -> Result<Option<EffectLog>, RuntimeError> {
        self.execute_with(program, &mut NoopTracer)
    }

    /// Run the program with a tracer.
    ///
    /// The tracer is generic, so `NoopTracer` calls are optimized away.
    pub fn execute_with<T: Tracer>(
        mut self,
        program: &Program,
        tracer: &mut T,
    ) -> Result<Option<EffectLog>, RuntimeError> {
        loop {
            if self.exec_fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            self.exec_fuel -= 1;

            let ip = self.ip;
            let instruction = program.instruction(ip);
            tracer.trace_instruction(ip, instruction, self.position);

            match instruction {
                Instruction::Match(predicate) => {
                    if predicate.matches(self.words, self.position) {
                        tracer.trace_match_success(self.position);
                        self.position += predicate.width();
                        self.ip = ip.next();
                    } else {
                        tracer.trace_match_failure(self.position);
                        if !self.backtrack(tracer) {
                            return Ok(None);
                        }
                    }
                }
                Instruction::Split { primary, secondary } => {
                    self.checkpoints.push(Checkpoint {
                        ip: *secondary,
                        position: self.position,
                        effect_watermark: self.effects.len(),
                    });
                    tracer.trace_checkpoint_created(ip);
                    self.ip = *primary;
                }
                Instruction::Jump(target) => self.ip = *target,
                Instruction::Open(slot) => {
                    self.emit(Effect::Open(*slot, self.position), tracer);
                    self.ip = ip.next();
                }
                Instruction::Close(slot) => {
                    self.emit(Effect::Close(*slot, self.position), tracer);
                    self.ip = ip.next();
                }
                Instruction::Accept => return Ok(Some(self.effects)),
            }
        }
    }

    /// Run the program and materialize captures of the accepted path.
    pub fn find_match(self, program: &Program) -> Result<Option<Captures>, RuntimeError> {
        self.find_match_with(program, &mut NoopTracer)
    }

    pub fn find_match_with<T: Tracer>(
        self,
        program: &Program,
        tracer: &mut T,
    ) -> Result<Option<Captures>, RuntimeError> {
        let span = Span::new(0, self.words.len());
        let effects = self.execute_with(program, tracer)?;
        Ok(effects.map(|effects| Materializer::new(program).materialize(&effects, span)))
    }

    fn emit<T: Tracer>(&mut self, effect: Effect, tracer: &mut T) {
        tracer.trace_effect(&effect);
        self.effects.push(effect);
    }

    /// Restore the most recent checkpoint. Returns false when none is left.
    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> bool {
        let Some(checkpoint) = self.checkpoints.pop() else {
            return false;
        };
        tracer.trace_backtrack();
        self.ip = checkpoint.ip;
        self.position = checkpoint.position;
        self.effects.truncate(checkpoint.effect_watermark);
        true
    }
}
