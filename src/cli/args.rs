//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Find movie genres by answering a binary questionnaire
#[derive(Parser, Debug)]
#[command(name = "cinepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file applied on top of the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "CINEPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer the questionnaire interactively (y/n, u to undo, q to quit)
    Ask {
        /// Do not record the result in the history
        #[arg(long)]
        no_record: bool,
    },

    /// Walk the tree with a fixed answer string, e.g. "nyyynn"
    Walk {
        /// Answers: y/1/t for yes, n/0/f for no; spaces and commas are ignored
        answers: String,

        /// Do not record the result in the history
        #[arg(long)]
        no_record: bool,
    },

    /// Show tree metrics
    Stats,

    /// List all questions in breadth-first order
    Questions,

    /// Print the question tree
    Tree {
        /// Stop expanding below this depth
        #[arg(short, long)]
        max_depth: Option<usize>,
    },

    /// Inspect past sessions
    History {
        #[command(subcommand)]
        command: HistoryCommands,
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
pub enum HistoryCommands {
    /// List stored sessions, newest last
    List {
        /// Only sessions whose result contains this genre id
        #[arg(short, long)]
        genre: Option<u32>,
    },

    /// Show aggregate statistics
    Stats,

    /// Remove one session by id
    Remove {
        /// Session id as printed by `history list`
        id: String,
    },

    /// Delete all sessions
    Clear,

    /// Print the whole history with statistics as TOML
    Export,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a commented config template
    Template,

    /// Show config paths
    Path,
}
