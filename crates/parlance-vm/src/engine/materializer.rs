//! Turns the effect log of an accepted run into capture values.

use parlance_bytecode::{Program, SlotId};
use parlance_core::Span;
use serde::Serialize;

use super::effect::{Effect, EffectLog};

/// Outcome of one capture slot.
///
/// `Unset` and `Repeated` are both unresolved: a slot that never matched (an
/// untaken alternative, a skipped optional) and a slot matched more than once
/// (inside a repetition) have no single span to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "span", rename_all = "lowercase")]
pub enum SlotValue {
    Unset,
    Span(Span),
    Repeated,
}

impl SlotValue {
    pub fn span(self) -> Option<Span> {
        match self {
            Self::Span(span) => Some(span),
            Self::Unset | Self::Repeated => None,
        }
    }
}

/// Capture values of one accepted match, indexed by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures {
    span: Span,
    slots: Vec<SlotValue>,
}

impl Captures {
    /// Span of the whole match.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn get(&self, slot: SlotId) -> SlotValue {
        self.slots.get(slot.get()).copied().unwrap_or(SlotValue::Unset)
    }

    pub fn values(&self) -> &[SlotValue] {
        &self.slots
    }
}

pub struct Materializer<'p> {
    program: &'p Program,
}

impl<'p> Materializer<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self { program }
    }

    pub fn materialize(&self, effects: &EffectLog, span: Span) -> Captures {
        let count = self.program.slots().len();
        let mut slots = vec![SlotValue::Unset; count];
        let mut open = vec![None; count];

        for effect in effects.as_slice() {
            match *effect {
                Effect::Open(slot, position) => open[slot.get()] = Some(position),
                Effect::Close(slot, end) => {
                    let value = &mut slots[slot.get()];
                    *value = match (*value, open[slot.get()].take()) {
                        (SlotValue::Unset, Some(start)) => SlotValue::Span(Span::new(start, end)),
                        _ => SlotValue::Repeated,
                    };
                }
            }
        }

        Captures { span, slots }
    }
}
