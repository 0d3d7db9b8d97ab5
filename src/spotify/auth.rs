use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AccountConfig, PkceToken, Token},
    utils, warning,
};

/// Runs the authorization-code flow with PKCE for one account.
///
/// 1. Generates the PKCE verifier and challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the browser (or prints it)
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token to the account's token cache
///
/// The account's client secret is sent along with the verifier during the
/// code exchange when one is configured.
pub async fn auth(
    account: &AccountConfig,
    shared_state: Arc<Mutex<Option<PkceToken>>>,
) -> Result<(), String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &account.client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope().replace(' ', "%20")
    );

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            client_id: account.client_id.clone(),
            client_secret: account.client_secret.clone(),
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let Some(token) = wait_for_token(shared_state).await else {
        return Err(format!(
            "Authentication for {} failed or timed out.",
            account.alias
        ));
    };

    let token_manager = TokenManager::new(token, account);
    token_manager
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    success!("Authentication for {} successful!", account.alias);
    Ok(())
}

/// Polls the shared state once a second for up to 60 seconds.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code and the PKCE verifier for a token.
pub async fn exchange_code_pkce(code: &str, session: &PkceToken) -> Result<Token, String> {
    let redirect_uri = config::spotify_redirect_uri();

    let mut form = vec![
        ("grant_type", "authorization_code"),
        ("client_id", session.client_id.as_str()),
        ("code", code),
        ("code_verifier", session.code_verifier.as_str()),
        ("redirect_uri", redirect_uri.as_str()),
    ];
    if !session.client_secret.is_empty() {
        form.push(("client_secret", session.client_secret.as_str()));
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

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let field = |name: &str| -> Result<String, String> {
        json[name]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| format!("token response without {}", name))
    };

    Ok(Token {
        access_token: field("access_token")?,
        refresh_token: field("refresh_token")?,
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
