//! Checkpoints for backtracking.
//!
//! A `Split` saves a checkpoint for its secondary branch. On failure the VM
//! restores the most recent checkpoint and continues there.

use parlance_bytecode::StepAddr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Resume point.
    pub ip: StepAddr,
    /// Word position at checkpoint.
    pub position: usize,
    /// Effect log length at checkpoint.
    pub effect_watermark: usize,
}

#[derive(Debug, Default)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.stack.push(checkpoint);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }
}
