pub mod connect;
pub mod events;
pub mod tally;
pub mod vote;

use std::path::PathBuf;

use livepoll_core::config::NetworkConfig;

/// Loads the network config from `path`, or testnet defaults.
pub fn load_config(path: Option<PathBuf>) -> Result<NetworkConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            Ok(NetworkConfig::from_file(&path)?)
        }
        None => Ok(NetworkConfig::default()),
    }
}
