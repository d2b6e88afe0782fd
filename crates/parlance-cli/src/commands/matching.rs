//! Match a textual pattern against pre-tagged words.

use std::collections::BTreeMap;

use parlance_bytecode::{Program, SlotId};
use parlance_compiler::compile_str;
use parlance_core::{Colors, Span};
use parlance_vm::{Captures, FuelLimits, PrintTracer, SlotValue, VM};
use serde::Serialize;

use super::input::read_words;

pub struct MatchArgs {
    pub pattern: String,
    pub words: Option<String>,
    pub trace: bool,
    pub fuel: Option<u32>,
    pub color: bool,
}

/// Capture values keyed by dotted slot path.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub span: Span,
    pub captures: BTreeMap<String, SlotValue>,
}

impl MatchReport {
    pub fn new(program: &Program, captures: &Captures) -> Self {
        Self {
            span: captures.span(),
            captures: (0..program.slots().len())
                .map(|i| SlotId(i as u16))
                .map(|slot| (program.slot_path(slot), captures.get(slot)))
                .collect(),
        }
    }
}

pub fn run(args: MatchArgs) {
    let compiled = match compile_str::<()>(&args.pattern) {
        Ok(compiled) => compiled,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let program = compiled.program();

    let words = match read_words(args.words.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let limits = match args.fuel {
        Some(fuel) => FuelLimits::new().exec_fuel(fuel),
        None => FuelLimits::default(),
    };
    let vm = VM::builder(&words).limits(limits).build();

    let result = if args.trace {
        let mut tracer = PrintTracer::new(program, &words, Colors::new(args.color));
        let result = vm.find_match_with(program, &mut tracer);
        eprint!("{}", tracer.into_output());
        result
    } else {
        vm.find_match(program)
    };

    match result {
        Ok(Some(captures)) => {
            let report = MatchReport::new(program, &captures);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Ok(None) => {
            eprintln!("no match");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
