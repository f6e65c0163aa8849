//! Eridu CLI - Command-line interface for creating and inspecting games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Eridu - a deterministic rules engine for a tile-laying kingdom game
#[derive(Parser, Debug)]
#[command(name = "eridu")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new game and save it
    New {
        /// Number of players (3 or 4)
        #[arg(short, long, default_value = "3")]
        players: usize,

        /// Shuffle seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Save file to write
        #[arg(required = true)]
        output: std::path::PathBuf,
    },

    /// Render a saved game as ASCII
    Show {
        /// Save file (.json)
        #[arg(required = true)]
        save: std::path::PathBuf,
    },

    /// Run structural invariant checks on a saved game
    Check {
        /// Save file (.json)
        #[arg(required = true)]
        save: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::New {
            players,
            seed,
            output,
        } => cli::new::execute(players, seed, output),

        Commands::Show { save } => cli::show::execute(save),

        Commands::Check { save } => cli::check::execute(save),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
