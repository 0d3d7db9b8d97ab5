use reqwest::Method;

use crate::{
    spotify::{ServiceError, SpotifyClient},
    types::{PlaylistTracksResponse, TrackId},
};

const PAGE_LIMIT: u32 = 100;

impl SpotifyClient {
    /// Retrieves every queueable item of a playlist.
    ///
    /// Follows the `next` link until the last page. Removed tracks (null) and
    /// local files are skipped since neither can be added to the queue.
    pub(crate) async fn get_playlist_tracks(
        &mut self,
        playlist_id: &str,
    ) -> Result<Vec<TrackId>, ServiceError> {
        let mut next = Some(format!(
            "{}?limit={}&fields=items(is_local,track(uri)),next",
            self.endpoint(&format!("/playlists/{}/tracks", playlist_id)),
            PAGE_LIMIT
        ));
        let mut ids = Vec::new();

        while let Some(url) = next {
            let request = self.request(Method::GET, &url).await?;
            let Some(response) = self.send(request).await? else {
                return Err(ServiceError::Unexpected(format!(
                    "playlist {} returned no content",
                    playlist_id
                )));
            };

            let page = response.json::<PlaylistTracksResponse>().await?;
            ids.extend(
                page.items
                    .into_iter()
                    .filter(|item| !item.is_local)
                    .filter_map(|item| item.track.and_then(|track| track.uri)),
            );
            next = page.next;
        }

        Ok(ids)
    }
}
