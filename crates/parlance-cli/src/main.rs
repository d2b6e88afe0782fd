mod cli;
mod commands;

use cli::{AskParams, DumpParams, MatchParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("ask", m)) => {
            init_logging(m.get_count("verbose"));
            let params = AskParams::from_matches(m);
            commands::ask::run(params.into());
        }
        Some(("match", m)) => {
            init_logging(m.get_count("verbose"));
            let params = MatchParams::from_matches(m);
            commands::matching::run(params.into());
        }
        Some(("dump", m)) => {
            init_logging(m.get_count("verbose"));
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "parlance=debug,parlance_lib=debug,warn",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
