use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::{
    config,
    management::TokenManager,
    spotify::{PlaybackService, ServiceError},
    types::{AccountConfig, Device, PlaybackState, TrackId},
};

/// Spotify Web API client bound to one account.
pub struct SpotifyClient {
    http: Client,
    tokens: TokenManager,
    api_url: String,
}

impl SpotifyClient {
    /// Builds a client from the account's cached token.
    ///
    /// Fails when the account has not been authorized yet; run
    /// `trueshuffle auth <alias>` first.
    pub async fn connect(account: &AccountConfig) -> Result<Self, ServiceError> {
        let tokens = TokenManager::load(account).await.map_err(|e| {
            ServiceError::Auth(format!(
                "{}. Please run trueshuffle auth {}",
                e, account.alias
            ))
        })?;

        Ok(Self {
            http: Client::new(),
            tokens,
            api_url: config::spotify_apiurl(),
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    pub(crate) async fn request(
        &mut self,
        method: Method,
        url: &str,
    ) -> Result<RequestBuilder, ServiceError> {
        let token = self
            .tokens
            .get_valid_token()
            .await
            .map_err(ServiceError::Auth)?;

        Ok(self.http.request(method, url).bearer_auth(token))
    }

    /// Sends a request, mapping `204 No Content` to `None` and error statuses
    /// to `ServiceError::Http`.
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<Response>, ServiceError> {
        let response = builder.send().await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?))
    }
}

impl PlaybackService for SpotifyClient {
    async fn current_playback(&mut self) -> Result<Option<PlaybackState>, ServiceError> {
        self.get_playback().await
    }

    async fn playlist_tracks(&mut self, playlist_id: &str) -> Result<Vec<TrackId>, ServiceError> {
        self.get_playlist_tracks(playlist_id).await
    }

    async fn queue(&mut self) -> Result<Option<Vec<TrackId>>, ServiceError> {
        self.get_queue().await
    }

    async fn add_to_queue(&mut self, track_id: &str) -> Result<(), ServiceError> {
        self.post_queue(track_id).await
    }

    async fn devices(&mut self) -> Result<Vec<Device>, ServiceError> {
        self.get_devices().await
    }

    async fn transfer_playback(
        &mut self,
        device_id: &str,
        play: bool,
    ) -> Result<(), ServiceError> {
        self.put_transfer(device_id, play).await
    }

    async fn set_volume(&mut self, volume_percent: u8, device_id: &str) -> Result<(), ServiceError> {
        self.put_volume(volume_percent, device_id).await
    }
}
