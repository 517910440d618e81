//! # livepoll CLI
//!
//! Entry point for the `livepoll` binary.
//!
//! Subcommands:
//! - `livepoll connect` — Connect a wallet and print its account id
//! - `livepoll vote`    — Cast a vote and print the result
//! - `livepoll tally`   — Print vote totals and per-option counts
//! - `livepoll events`  — Print poll feedback events

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use livepoll_wallet::WalletKind;

mod commands;

/// livepoll — cast and read wallet-signed poll votes on Stellar.
#[derive(Parser)]
#[command(name = "livepoll", version, about)]
struct Cli {
    /// Path to a network config YAML (default: Stellar testnet).
    #[arg(long, short, global = true, env = "LIVEPOLL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect a wallet and print the account id.
    Connect {
        /// Wallet extension to use (freighter, albedo, xbull, lobstr, rabet, hana).
        #[arg(long, default_value = "freighter")]
        wallet: WalletKind,
    },

    /// Cast a vote for a poll option.
    Vote {
        /// Poll option index.
        #[arg(allow_negative_numbers = true)]
        option: i64,

        /// Hex ed25519 secret to sign with (or set LIVEPOLL_SECRET_KEY).
        /// Without one, a mock wallet is used.
        #[arg(long, env = "LIVEPOLL_SECRET_KEY", hide_env_values = true)]
        secret_key: Option<String>,
    },

    /// Print vote totals and per-option counts.
    Tally,

    /// Print feedback events emitted by the poll contract.
    Events,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Connect { wallet } => commands::connect::run(wallet).await,
        Commands::Vote { option, secret_key } => {
            commands::vote::run(cli.config, option, secret_key).await
        }
        Commands::Tally => commands::tally::run(cli.config).await,
        Commands::Events => commands::events::run(cli.config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
