//! Pattern execution engine.

mod checkpoint;
mod effect;
mod error;
mod materializer;
mod trace;
mod vm;

#[cfg(test)]
mod engine_tests;

pub use checkpoint::{Checkpoint, CheckpointStack};
pub use effect::{Effect, EffectLog};
pub use error::RuntimeError;
pub use materializer::{Captures, Materializer, SlotValue};
pub use trace::{NoopTracer, PrintTracer, Tracer};
pub use vm::{FuelLimits, VM, VMBuilder};
