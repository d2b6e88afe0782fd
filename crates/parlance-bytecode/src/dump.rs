//! Human-readable program dump for debugging and the `dump` command.

use std::fmt::Write as _;

use parlance_core::Colors;

use crate::{Instruction, Program};

/// Digits needed to print indices `0..count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).to_string().len()
    }
}

/// Generate a human-readable dump of a compiled program.
pub fn dump(program: &Program, colors: Colors) -> String {
    let mut out = String::new();
    dump_slots(&mut out, program, colors);
    dump_code(&mut out, program, colors);
    out
}

fn dump_slots(out: &mut String, program: &Program, colors: Colors) {
    let c = colors;
    let w = width_for_count(program.slots().len());

    writeln!(out, "{}[slots]{}", c.blue, c.reset).unwrap();
    for (i, slot) in program.slots().iter().enumerate() {
        write!(out, "S{i:0w$} {}{}{}", c.blue, slot.name, c.reset).unwrap();
        if let Some(parent) = slot.parent {
            write!(out, "  {}in S{:0w$}{}", c.dim, parent.0, c.reset).unwrap();
        }
        out.push('\n');
    }
    out.push('\n');
}

fn dump_code(out: &mut String, program: &Program, colors: Colors) {
    let c = colors;
    let w = width_for_count(program.len());

    writeln!(out, "{}[code]{}", c.blue, c.reset).unwrap();
    for (i, instruction) in program.instructions().iter().enumerate() {
        writeln!(
            out,
            "{}{i:0w$}{} {}",
            c.dim,
            c.reset,
            format_instruction(program, instruction, colors)
        )
        .unwrap();
    }
}

/// One instruction without its address, e.g. `split  04, 06`.
///
/// Addresses are padded to the program's step width, slot ids to the slot
/// table's width.
pub fn format_instruction(program: &Program, instruction: &Instruction, colors: Colors) -> String {
    let c = colors;
    let w = width_for_count(program.len());
    let sw = width_for_count(program.slots().len());

    match instruction {
        Instruction::Match(predicate) => format!("match  {}{predicate}{}", c.green, c.reset),
        Instruction::Split { primary, secondary } => {
            format!("split  {:0w$}, {:0w$}", primary.0, secondary.0)
        }
        Instruction::Jump(target) => format!("jump   {:0w$}", target.0),
        Instruction::Open(slot) => format!(
            "open   S{:0sw$} {}{}{}",
            slot.0,
            c.blue,
            program.slot_path(*slot),
            c.reset
        ),
        Instruction::Close(slot) => format!(
            "close  S{:0sw$} {}{}{}",
            slot.0,
            c.blue,
            program.slot_path(*slot),
            c.reset
        ),
        Instruction::Accept => "accept".to_owned(),
    }
}
