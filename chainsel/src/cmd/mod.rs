//! CLI definitions and command implementations for chainsel.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod contracts;
pub mod init;
pub mod list;
pub mod show;

/// chainsel — chain selection and configuration registry.
#[derive(Debug, Parser)]
#[command(name = "chainsel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List all configured chains.
    List {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG", default_value = "config.toml")]
        config: PathBuf,
    },

    /// Print a single chain configuration as JSON.
    Show {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG", default_value = "config.toml")]
        config: PathBuf,

        /// Chain to print; defaults to the active chain.
        #[arg(long)]
        chain_id: Option<u64>,
    },

    /// Print the active chain's contract addresses.
    Contracts {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG", default_value = "config.toml")]
        config: PathBuf,
    },
}
