use reqwest::{Method, header::CONTENT_LENGTH};

use crate::{
    spotify::{ServiceError, SpotifyClient},
    types::{Device, DevicesResponse, PlaybackState, QueueResponse, TrackId, TransferPlaybackRequest},
};

impl SpotifyClient {
    /// `GET /me/player`. Spotify answers 204 when no device is active.
    pub(crate) async fn get_playback(&mut self) -> Result<Option<PlaybackState>, ServiceError> {
        let url = self.endpoint("/me/player");
        let request = self.request(Method::GET, &url).await?;
        match self.send(request).await? {
            Some(response) => Ok(Some(response.json::<PlaybackState>().await?)),
            None => Ok(None),
        }
    }

    /// `GET /me/player/queue`, reduced to the URIs of the upcoming items.
    pub(crate) async fn get_queue(&mut self) -> Result<Option<Vec<TrackId>>, ServiceError> {
        let url = self.endpoint("/me/player/queue");
        let request = self.request(Method::GET, &url).await?;
        let Some(response) = self.send(request).await? else {
            return Ok(None);
        };

        let queue = response.json::<QueueResponse>().await?;
        Ok(Some(
            queue.queue.into_iter().filter_map(|item| item.uri).collect(),
        ))
    }

    /// `POST /me/player/queue?uri=...`
    pub(crate) async fn post_queue(&mut self, track_id: &str) -> Result<(), ServiceError> {
        let url = self.endpoint("/me/player/queue");
        let request = self
            .request(Method::POST, &url)
            .await?
            .query(&[("uri", track_id)])
            .header(CONTENT_LENGTH, 0);
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn get_devices(&mut self) -> Result<Vec<Device>, ServiceError> {
        let url = self.endpoint("/me/player/devices");
        let request = self.request(Method::GET, &url).await?;
        match self.send(request).await? {
            Some(response) => Ok(response.json::<DevicesResponse>().await?.devices),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) async fn put_transfer(&mut self, device_id: &str, play: bool) -> Result<(), ServiceError> {
        let url = self.endpoint("/me/player");
        let body = TransferPlaybackRequest {
            device_ids: vec![device_id.to_string()],
            play,
        };
        let request = self.request(Method::PUT, &url).await?.json(&body);
        self.send(request).await?;
        Ok(())
    }

    pub(crate) async fn put_volume(&mut self, volume_percent: u8, device_id: &str) -> Result<(), ServiceError> {
        let url = self.endpoint("/me/player/volume");
        let volume = volume_percent.min(100).to_string();
        let request = self
            .request(Method::PUT, &url)
            .await?
            .query(&[("volume_percent", volume.as_str()), ("device_id", device_id)])
            .header(CONTENT_LENGTH, 0);
        self.send(request).await?;
        Ok(())
    }
}
