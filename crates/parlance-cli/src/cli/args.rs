//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pre-tagged words (positional), read from stdin when absent.
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORDS")
        .help("Pre-tagged words, `token|lemma|POS` separated by spaces (stdin if omitted)")
}

/// Textual word pattern (positional, required).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Word pattern, e.g. `lemma:who lemma:be { pos:NNP+ @person }`")
}

/// Backend override (-b/--backend).
pub fn backend_arg() -> Arg {
    Arg::new("backend")
        .short('b')
        .long("backend")
        .value_name("BACKEND")
        .value_parser(["flat", "nested", "dot", "sparql", "mql"])
        .help("Query backend (overrides the config file)")
}

/// Settings file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("TOML settings file")
}

/// Print every answer instead of the best one (--all).
pub fn all_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .help("Print every answer, best first")
}

/// Machine-readable answers (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print answers as JSON")
}

/// Logging verbosity (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log rule attempts (-vv for everything); RUST_LOG overrides")
}

/// Print the VM trace (--trace).
pub fn trace_arg() -> Arg {
    Arg::new("trace")
        .long("trace")
        .action(ArgAction::SetTrue)
        .help("Print the execution trace to stderr")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("VM steps allowed per pattern attempt")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
