//! `livepoll tally` — print vote totals as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use livepoll_client::{MockTally, TallyReader};
use livepoll_horizon::HorizonAdapter;

pub async fn run(config: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config)?;
    let tally = MockTally::new(Arc::new(HorizonAdapter::new(&config)?));
    println!("{}", serde_json::to_string_pretty(&tally.tally().await)?);
    Ok(())
}
