//! Extract `*Params` from `ArgMatches` and convert them into command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ask::AskArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::matching::MatchArgs;

pub struct AskParams {
    pub words: Option<String>,
    pub backend: Option<String>,
    pub config: Option<PathBuf>,
    pub all: bool,
    pub json: bool,
    pub fuel: Option<u32>,
}

impl AskParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            words: m.get_one::<String>("words").cloned(),
            backend: m.get_one::<String>("backend").cloned(),
            config: m.get_one::<PathBuf>("config").cloned(),
            all: m.get_flag("all"),
            json: m.get_flag("json"),
            fuel: m.get_one::<u32>("fuel").copied(),
        }
    }
}

impl From<AskParams> for AskArgs {
    fn from(p: AskParams) -> Self {
        Self {
            words: p.words,
            backend: p.backend,
            config: p.config,
            all: p.all,
            json: p.json,
            fuel: p.fuel,
        }
    }
}

pub struct MatchParams {
    pub pattern: String,
    pub words: Option<String>,
    pub trace: bool,
    pub fuel: Option<u32>,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            words: m.get_one::<String>("words").cloned(),
            trace: m.get_flag("trace"),
            fuel: m.get_one::<u32>("fuel").copied(),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            words: p.words,
            trace: p.trace,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned().unwrap_or_default(),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
