//! `livepoll vote` — cast a vote and print the `VoteResult` as JSON.
//!
//! Signs with a local ed25519 key when one is given, otherwise with the
//! mock wallet (whose signatures Horizon will reject).

use std::path::PathBuf;
use std::sync::Arc;

use livepoll_client::VoteSubmitter;
use livepoll_core::config::NetworkConfig;
use livepoll_core::types::VoteResult;
use livepoll_horizon::HorizonAdapter;
use livepoll_wallet::{LocalWallet, MockWallet, Wallet};

pub async fn run(
    config: Option<PathBuf>,
    option: i64,
    secret_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config)?;
    let network = Arc::new(HorizonAdapter::new(&config)?);

    let result = match secret_key {
        Some(key) => {
            let wallet = LocalWallet::from_hex(&key, config.network_passphrase.clone())?;
            cast(wallet, network, &config, option).await
        }
        None => cast(MockWallet::new(), network, &config, option).await,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn cast<W: Wallet>(
    wallet: W,
    network: Arc<HorizonAdapter>,
    config: &NetworkConfig,
    option: i64,
) -> VoteResult {
    VoteSubmitter::new(Arc::new(wallet), network, config)
        .cast_vote(option)
        .await
}
