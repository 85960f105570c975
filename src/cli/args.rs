//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::DuplicatePolicy;

/// Render parent-child pairs as a tree diagram
///
/// Reads one `parent child` record per line (space separated, quotes allowed).
/// The parent of the first record is the root.
#[derive(Parser, Debug)]
#[command(name = "deptree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Treatment of dependency groups dropped while building: ignore, warn, error
    #[arg(long, value_name = "POLICY", global = true)]
    pub on_duplicate: Option<DuplicatePolicy>,

    /// Accept records with varying field counts
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree (default)
    Render {
        /// Input file, `-` or omitted for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Report dependency groups that would be dropped
    Check {
        /// Input file, `-` or omitted for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show config file locations
    Path,
}
