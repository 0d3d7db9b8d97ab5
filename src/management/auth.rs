use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    types::{AccountConfig, Token},
};

/// Seconds before expiry at which a token is already considered stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Owns one account's token and keeps it fresh.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
    client_id: String,
    client_secret: String,
}

impl TokenManager {
    pub fn new(token: Token, account: &AccountConfig) -> Self {
        TokenManager {
            token,
            path: account.token_path.clone(),
            client_id: account.client_id.clone(),
            client_secret: account.client_secret.clone(),
        }
    }

    pub async fn load(account: &AccountConfig) -> Result<Self, String> {
        let content = async_fs::read_to_string(&account.token_path)
            .await
            .map_err(|e| format!("{}: {}", account.token_path.display(), e))?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(token, account))
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        if self.is_expired() {
            let new_token = self.refresh_token().await?;
            self.token = new_token;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    async fn refresh_token(&self) -> Result<Token, String> {
        let mut form = vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", self.token.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
        ];
        if !self.client_secret.is_empty() {
            form.push(("client_secret", self.client_secret.as_str()));
        }

        let client = Client::new();
        let res = client
            .post(config::spotify_apitoken_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

        let access_token = json["access_token"]
            .as_str()
            .ok_or("token response without access_token")?
            .to_string();

        // Spotify may omit the refresh token when it does not rotate it.
        let refresh_token = json["refresh_token"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| self.token.refresh_token.clone());

        Ok(Token {
            access_token,
            refresh_token,
            scope: json["scope"].as_str().unwrap_or_default().to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
