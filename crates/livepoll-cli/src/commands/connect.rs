//! `livepoll connect` — select a wallet and print the connected account.

use livepoll_wallet::{connect_wallet, MockWallet, WalletKind};

pub async fn run(kind: WalletKind) -> Result<(), Box<dyn std::error::Error>> {
    let wallet = MockWallet::disconnected();
    let identity = connect_wallet(&wallet, kind).await?;
    println!("{identity}");
    Ok(())
}
