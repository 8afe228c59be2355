//! regmin CLI entry point.

use std::fmt::Display;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use regmin::{Compiled, Error};

mod cli;

use cli::Cli;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ExitCode {
    Success = 0,
    /// The pattern could not be parsed
    PatternError = 2,
    /// I/O failure or a bug
    InternalError = 3,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("REGMIN_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("regmin: {e:#}");
            match e.downcast_ref::<Error>() {
                Some(err) if err.is_syntax() => ExitCode::PatternError,
                _ => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("regexp: {}", cli.pattern);
    let pattern: String = cli.pattern.chars().filter(|&c| c != ' ').collect();
    tracing::info!("stripped: {}", pattern);

    let compiled = Compiled::new(&pattern)?;

    if !cli.no_dot {
        std::fs::create_dir_all(&cli.out_dir).map_err(|source| Error::Io {
            path: cli.out_dir.clone(),
            source,
        })?;
        write_dot(&cli.out_dir, "nfa.dot", compiled.nfa.dot())?;
        write_dot(&cli.out_dir, "dfa.dot", compiled.dfa.dot())?;
        write_dot(&cli.out_dir, "dfa_opt.dot", compiled.minimized.dot())?;
    }

    if cli.stats {
        println!("nfa: {} states", compiled.nfa.num_states());
        println!("dfa: {} states", compiled.dfa.num_states());
        println!("minimized dfa: {} states", compiled.minimized.num_states());
    }

    for input in &cli.inputs {
        let verdict = if compiled.minimized.is_match(input) {
            "match"
        } else {
            "no match"
        };
        println!("{input} -> {verdict}");
    }

    Ok(())
}

fn write_dot(dir: &Path, name: &str, dot: impl Display) -> regmin::Result<()> {
    let path = dir.join(name);
    tracing::debug!("writing {}", path.display());
    std::fs::write(&path, dot.to_string()).map_err(|source| Error::Io { path, source })
}
