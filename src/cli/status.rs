use tabled::{Table, settings::Style};

use crate::{
    account::Account,
    cli::run::spinner,
    config, error,
    spotify::{self, SpotifyClient},
    types::AccountTableRow,
    warning,
};

/// Prints one row per configured account.
pub async fn status() {
    let configs = match config::load_accounts().await {
        Ok(configs) => configs,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Fetching account status...".to_string());
    let mut rows = Vec::with_capacity(configs.len());

    for account_config in configs {
        let playlists = account_config.managed_playlist_ids.len();
        let alias = account_config.alias.clone();

        let client = match SpotifyClient::connect(&account_config).await {
            Ok(client) => client,
            Err(e) => {
                warning!("{}: {}", alias, e);
                rows.push(AccountTableRow {
                    alias,
                    playlists,
                    tracks: "-".to_string(),
                    playback: "not authorized".to_string(),
                });
                continue;
            }
        };

        let mut account = Account::new(account_config, client);
        let playback = match account.refresh_playback().await {
            Ok(()) => account.monitor().describe(),
            Err(e) => format!("unavailable ({})", e),
        };

        let playlist_ids = account.config().managed_playlist_ids.clone();
        let tracks = match spotify::count_tracks(account.service_mut(), &playlist_ids).await {
            Ok(count) => count.to_string(),
            Err(e) => format!("unavailable ({})", e),
        };

        rows.push(AccountTableRow {
            alias,
            playlists,
            tracks,
            playback,
        });
    }

    pb.finish_and_clear();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
