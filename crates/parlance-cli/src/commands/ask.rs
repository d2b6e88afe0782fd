//! Answer a pre-tagged question with the demo rules.

use std::fmt::Write;
use std::path::PathBuf;

use parlance_lib::{Answer, ConfigError, Settings};
use tracing::info;

use super::demo;
use super::input::read_text;

pub struct AskArgs {
    pub words: Option<String>,
    pub backend: Option<String>,
    pub config: Option<PathBuf>,
    pub all: bool,
    pub json: bool,
    pub fuel: Option<u32>,
}

pub fn run(args: AskArgs) {
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let question = match read_text(args.words.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let dispatcher = match demo::dispatcher(&settings) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        backend = %settings.backend,
        rules = dispatcher.rules().len(),
        "evaluating question"
    );

    let answers = if args.all {
        dispatcher.evaluate(&question).collect::<Result<Vec<_>, _>>()
    } else {
        dispatcher.first(&question).map(|answer| answer.into_iter().collect())
    };
    let answers = match answers {
        Ok(answers) => answers,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if answers.is_empty() {
        eprintln!("no rule understood the question");
        std::process::exit(1);
    }

    match format_answers(&answers, args.all, args.json) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Settings file (or defaults) with command-line overrides applied.
pub fn load_settings(args: &AskArgs) -> Result<Settings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(backend) = &args.backend {
        settings.backend = backend.parse()?;
    }
    if let Some(fuel) = args.fuel {
        settings.fuel = fuel;
    }
    Ok(settings)
}

/// Only the query for a single answer; a header per answer with `all`.
pub fn format_answers(answers: &[Answer], all: bool, json: bool) -> serde_json::Result<String> {
    if json {
        let mut out = if all {
            serde_json::to_string_pretty(answers)?
        } else {
            serde_json::to_string_pretty(&answers.first())?
        };
        out.push('\n');
        return Ok(out);
    }

    if !all {
        return Ok(answers.first().map(|a| a.query.clone()).unwrap_or_default());
    }

    let mut out = String::new();
    for (i, answer) in answers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "-- {} (target {})", answer.rule, answer.target).unwrap();
        out.push_str(&answer.query);
    }
    Ok(out)
}
