//! `livepoll events` — print contract feedback events as JSON.

use std::path::PathBuf;

use livepoll_client::fetch_feedback_events;
use livepoll_horizon::HorizonAdapter;

pub async fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config)?;
    let network = HorizonAdapter::new(&config)?;
    let events = fetch_feedback_events(&network, &config.contract_id).await;
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}
