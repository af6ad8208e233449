//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Self-balancing AVL tree: insert, delete, probe and walk
#[derive(Parser, Debug)]
#[command(name = "avltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scenario from settings (defaults, config files, AVLTREE_*)
    Demo {
        /// Extra config file layered over the global one
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },

    /// Run the scenario with values from the command line
    Run {
        /// Values to insert, in order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Value to delete afterwards (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        delete: Vec<i64>,
        /// Value to look up at the end (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        probe: Vec<i64>,
        /// Skip the tree diagram
        #[arg(long)]
        no_render: bool,
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
    /// Print effective settings as TOML
    Show {
        /// Extra config file layered over the global one
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
    /// Print the global config file path
    Path,
}
