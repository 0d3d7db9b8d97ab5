use std::time::Duration;

use crate::{account::Account, autoplay::Takeover, config, error, spotify::SpotifyClient};

pub async fn autoplay(alias: &str, device: String, interval: u64, timeout: u64, volume: u8) {
    let account_config = match config::load_account_by_alias(alias).await {
        Ok(account) => account,
        Err(e) => error!("Cannot load account {}: {}", alias, e),
    };

    let client = match SpotifyClient::connect(&account_config).await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    };

    let account = Account::new(account_config, client);
    Takeover::new(device)
        .interval(Duration::from_secs(interval))
        .timeout(Duration::from_secs(timeout))
        .volume(volume)
        .run(account)
        .await;
}
