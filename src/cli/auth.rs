use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{config, error, spotify, types::PkceToken};

pub async fn auth(alias: &str) {
    let account = match config::load_account_by_alias(alias).await {
        Ok(account) => account,
        Err(e) => error!("Cannot load account {}: {}", alias, e),
    };

    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    if let Err(e) = spotify::auth::auth(&account, shared_state).await {
        error!("{}", e);
    }
}
