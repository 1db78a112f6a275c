//! chainsel — chain selection and configuration registry.
//!
//! A CLI for inspecting blockchain network configurations: which chains
//! are known, which one is active, and which contract addresses apply.
//!
//! ```sh
//! chainsel init            # Generate default config.toml
//! chainsel list            # List configured chains
//! chainsel show            # Print the active chain as JSON
//! ```

use chainsel::cmd::{self, Cli, Commands};
use chainsel::telemetry;
use clap::Parser;
use dotenvy::dotenv;

#[allow(clippy::print_stderr)]
fn main() {
    dotenv().ok();
    telemetry::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::List { config } => cmd::list::run(&config),
        Commands::Show { config, chain_id } => cmd::show::run(&config, chain_id),
        Commands::Contracts { config } => cmd::contracts::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
