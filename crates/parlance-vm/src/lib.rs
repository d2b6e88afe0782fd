//! Runtime VM for executing compiled Parlance patterns.
//!
//! The VM walks a [`Program`] over a word sequence, backtracking through
//! `Split` checkpoints, and records capture boundaries in an effect log. On
//! acceptance the log is materialized into per-slot [`SlotValue`]s.
//!
//! [`Program`]: parlance_bytecode::Program

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

pub use engine::{
    Captures, Effect, EffectLog, FuelLimits, Materializer, NoopTracer, PrintTracer, RuntimeError,
    SlotValue, Tracer, VM, VMBuilder,
};
