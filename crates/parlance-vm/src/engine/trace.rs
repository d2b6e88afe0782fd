//! Tracing infrastructure for debugging VM execution.
//!
//! `NoopTracer` methods are `#[inline(always)]` empty functions, so the
//! compiler removes every tracer call from an untraced run.
//!
//! Tracing-only state (like the address each checkpoint was created at, for
//! backtrack display) lives in the tracer, not in `Checkpoint`.

use parlance_bytecode::{Instruction, Program, StepAddr, format_instruction, width_for_count};
use parlance_core::{Colors, TaggedWord};

use super::effect::Effect;

/// Instrumentation hooks, called at fixed points of execution:
/// - `trace_instruction` - before executing an instruction
/// - `trace_match_success/failure` - after a word predicate is evaluated
/// - `trace_effect` - after recording a capture boundary
/// - `trace_checkpoint_created` - when a `Split` saves a checkpoint
/// - `trace_backtrack` - when restoring a checkpoint
pub trait Tracer {
    fn trace_instruction(&mut self, ip: StepAddr, instruction: &Instruction, position: usize);

    fn trace_match_success(&mut self, position: usize);

    fn trace_match_failure(&mut self, position: usize);

    fn trace_effect(&mut self, effect: &Effect);

    fn trace_checkpoint_created(&mut self, ip: StepAddr);

    fn trace_backtrack(&mut self);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _ip: StepAddr, _instruction: &Instruction, _position: usize) {}

    #[inline(always)]
    fn trace_match_success(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_match_failure(&mut self, _position: usize) {}

    #[inline(always)]
    fn trace_effect(&mut self, _effect: &Effect) {}

    #[inline(always)]
    fn trace_checkpoint_created(&mut self, _ip: StepAddr) {}

    #[inline(always)]
    fn trace_backtrack(&mut self) {}
}

/// Tracer that collects a readable execution trace.
pub struct PrintTracer<'a> {
    program: &'a Program,
    words: &'a [TaggedWord],
    lines: Vec<String>,
    /// Parallel stack of checkpoint creation addresses.
    checkpoint_ips: Vec<StepAddr>,
    step_width: usize,
    colors: Colors,
}

impl<'a> PrintTracer<'a> {
    pub fn new(program: &'a Program, words: &'a [TaggedWord], colors: Colors) -> Self {
        Self {
            program,
            words,
            lines: Vec::new(),
            checkpoint_ips: Vec::new(),
            step_width: width_for_count(program.len()),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_output(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    fn word_at(&self, position: usize) -> String {
        match self.words.get(position) {
            Some(word) => word.to_string(),
            None => "<end>".to_owned(),
        }
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_instruction(&mut self, ip: StepAddr, instruction: &Instruction, position: usize) {
        let c = self.colors;
        let w = self.step_width;
        self.lines.push(format!(
            "{}{:0w$}{} {}  {}@{position}{}",
            c.dim,
            ip.0,
            c.reset,
            format_instruction(self.program, instruction, c),
            c.dim,
            c.reset
        ));
    }

    fn trace_match_success(&mut self, position: usize) {
        let c = self.colors;
        let word = self.word_at(position);
        self.lines.push(format!("   {}●{} {word}", c.green, c.reset));
    }

    fn trace_match_failure(&mut self, position: usize) {
        let c = self.colors;
        let word = self.word_at(position);
        self.lines.push(format!("   {}○ {word}{}", c.dim, c.reset));
    }

    fn trace_effect(&mut self, effect: &Effect) {
        let c = self.colors;
        let line = match *effect {
            Effect::Open(slot, position) => {
                format!("   {}⬥ {} starts at {position}{}", c.dim, self.program.slot_path(slot), c.reset)
            }
            Effect::Close(slot, position) => {
                format!("   {}⬥ {} ends at {position}{}", c.dim, self.program.slot_path(slot), c.reset)
            }
        };
        self.lines.push(line);
    }

    fn trace_checkpoint_created(&mut self, ip: StepAddr) {
        self.checkpoint_ips.push(ip);
    }

    fn trace_backtrack(&mut self) {
        let c = self.colors;
        let w = self.step_width;
        let line = match self.checkpoint_ips.pop() {
            Some(ip) => format!("   {}❮❮❮ back to split at {:0w$}{}", c.blue, ip.0, c.reset),
            None => format!("   {}❮❮❮{}", c.blue, c.reset),
        };
        self.lines.push(line);
    }
}
