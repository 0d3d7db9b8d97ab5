use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    account::Account,
    config, error,
    scheduler::{PollOptions, Scheduler},
    spotify::SpotifyClient,
    success, warning,
};

pub async fn run(options: PollOptions) {
    let configs = match config::load_accounts().await {
        Ok(configs) => configs,
        Err(e) => error!("{}", e),
    };

    let mut accounts = Vec::new();
    for account_config in configs {
        let client = match SpotifyClient::connect(&account_config).await {
            Ok(client) => client,
            Err(e) => {
                warning!("Skipping {}: {}", account_config.alias, e);
                continue;
            }
        };

        let mut account = Account::new(account_config, client);

        let pb = spinner(format!("Loading playlists for {}...", account.alias()));
        let total = account.prime().await;
        pb.finish_and_clear();

        success!(
            "Initialized True Shuffle with {} playlists for {}, totalling {} tracks.",
            account.config().managed_playlist_ids.len(),
            account.alias(),
            total
        );
        accounts.push(account);
    }

    if accounts.is_empty() {
        error!("No account could be connected. Please run trueshuffle auth <alias>");
    }

    Scheduler::new(accounts, options).run().await;
}

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
