use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ask questions about the Ivorian legislative election results
#[derive(Parser, Debug)]
#[command(name = "scrutin")]
#[command(version)]
#[command(about = "Answer French questions about the legislative results", long_about = None)]
pub struct Cli {
    /// Directory holding scrutin.toml
    #[arg(short = 'c', long = "config", global = true, default_value = ".")]
    pub config_root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer one question, print the output as JSON
    Ask {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// (Re)build the database from extracted records
    Load { records: PathBuf },
    /// Answer every non-empty line, then print a summary
    Batch { questions: PathBuf },
}

impl Command {
    /// The question of an `ask`, words joined by single spaces.
    pub fn question(words: &[String]) -> String {
        words.join(" ")
    }
}
