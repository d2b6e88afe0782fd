//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("parlance")
        .about("Turn natural-language questions into database queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg().global(true))
        .subcommand(ask_command())
        .subcommand(match_command())
        .subcommand(dump_command())
}

/// Evaluate a question against the demo rules.
pub fn ask_command() -> Command {
    Command::new("ask")
        .about("Answer a pre-tagged question with the built-in demo rules")
        .override_usage(
            "\
  parlance ask <WORDS>
  parlance ask -b nested <WORDS>
  echo <WORDS> | parlance ask",
        )
        .after_help(
            r#"EXAMPLES:
  parlance ask 'who|who|WP is|be|VBZ Tom|Tom|NNP Cruise|Cruise|NNP'
  parlance ask -b nested 'what|what|WP is|be|VBZ a|a|DT dog|dog|NN'
  parlance ask --all --json -c parlance.toml < question.txt"#,
        )
        .arg(words_arg())
        .arg(backend_arg())
        .arg(config_arg())
        .arg(all_arg())
        .arg(json_arg())
        .arg(fuel_arg())
}

/// Match a textual pattern against words.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Match a pattern against pre-tagged words and print capture spans")
        .override_usage(
            "\
  parlance match <PATTERN> <WORDS>
  parlance match <PATTERN> --trace < words.txt",
        )
        .after_help(
            r#"EXAMPLES:
  parlance match 'lemma:who lemma:be { pos:NNP+ @person }' 'who|who|WP is|be|VBZ Tom|Tom|NNP'
  parlance match 'pos:DT? pos:NN+' 'the|the|DT dog|dog|NN' --trace"#,
        )
        .arg(pattern_arg())
        .arg(words_arg())
        .arg(trace_arg())
        .arg(fuel_arg())
        .arg(color_arg())
}

/// Show compiled bytecode.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Compile a pattern and show its bytecode")
        .override_usage("  parlance dump <PATTERN>")
        .after_help(
            r#"EXAMPLES:
  parlance dump 'lemma:what lemma:be pos:DT? { pos:NN+ @thing }'
  parlance dump '[lemma:city lemma:town] pos:IN _*' --color never"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}
