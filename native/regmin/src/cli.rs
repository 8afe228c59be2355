//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Compile a regular expression into NFA, DFA and minimized DFA
#[derive(Parser, Debug)]
#[command(name = "regmin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pattern to compile; spaces are ignored
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Directory receiving nfa.dot, dfa.dot and dfa_opt.dot
    #[arg(
        short,
        long,
        env = "REGMIN_OUT_DIR",
        default_value = ".",
        value_name = "DIR"
    )]
    pub out_dir: PathBuf,

    /// Do not write DOT files
    #[arg(long)]
    pub no_dot: bool,

    /// Run an input through the minimized DFA (repeatable)
    #[arg(short, long = "test", value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Print the state count of each automaton
    #[arg(long)]
    pub stats: bool,
}
