//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic; with no
//! subcommand, pilot starts the interactive REPL.

use clap::{Parser, Subcommand};

/// Pilot - browser & app launcher
#[derive(Parser)]
#[command(name = "pilot")]
#[command(about = "Browser & app launcher - one line in, one action out", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Subcommand (if not provided, starts the interactive REPL)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Interpret and dispatch a single command line, then exit
    Exec {
        /// The command line, e.g. `pilot exec cats on reddit`
        input: Vec<String>,
    },

    /// List configured search engines
    Engines,

    /// List site groups
    Groups,
}
