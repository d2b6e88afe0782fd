//! Capture effects recorded during execution.

use parlance_bytecode::SlotId;

/// Capture boundary at a word position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Open(SlotId, usize),
    Close(SlotId, usize),
}

/// Effect log with truncation support for backtracking.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EffectLog(Vec<Effect>);

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, effect: Effect) {
        self.0.push(effect);
    }

    /// Current length, used as watermark for backtracking.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop effects recorded after `watermark`.
    #[inline]
    pub fn truncate(&mut self, watermark: usize) {
        self.0.truncate(watermark);
    }

    pub fn as_slice(&self) -> &[Effect] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Effect> {
        self.0
    }
}
