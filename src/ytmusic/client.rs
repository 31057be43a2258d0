use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{LibraryPlaylistsResponse, PlaylistRef, PlaylistTracksResponse, TrackRef},
    warning,
    ytmusic::auth::{self, AuthError},
};

/// Typed client for the YouTube Music catalog.
///
/// Constructed once per run and handed to the sync loop; holds the HTTP
/// client with the authentication headers installed as defaults.
pub struct YtMusic {
    client: Client,
    api_url: String,
}

impl YtMusic {
    /// Builds a client from the configured auth headers file.
    ///
    /// Fails when the headers file is missing or malformed; callers treat
    /// this as fatal to the run.
    pub async fn connect() -> Result<Self, AuthError> {
        let headers = auth::load_auth_headers(&config::ytmusic_auth_file()).await?;
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(AuthError::ClientError)?;

        Ok(Self {
            client,
            api_url: config::ytmusic_apiurl(),
        })
    }

    /// Retrieves all playlists in the user's library, in catalog order.
    ///
    /// Follows continuation tokens until the listing is exhausted. Retries
    /// 502 Bad Gateway responses after a 10 second delay; other errors are
    /// propagated.
    pub async fn library_playlists(&self) -> Result<Vec<PlaylistRef>, reqwest::Error> {
        let mut playlists: Vec<PlaylistRef> = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut api_url = format!("{uri}/library/playlists", uri = &self.api_url);
            if let Some(token) = &continuation {
                api_url.push_str(&format!("?continuation={}", token));
            }

            let response = self.get_with_retry(&api_url).await?;
            let res = response.json::<LibraryPlaylistsResponse>().await?;

            playlists.extend(res.playlists);
            continuation = res.continuation;
            if continuation.is_none() {
                return Ok(playlists);
            }
        }
    }

    /// Retrieves all tracks of a playlist, in catalog order.
    ///
    /// Paginated like `library_playlists`. Tracks without a video id are
    /// returned as-is; filtering them is the sync loop's decision.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<TrackRef>, reqwest::Error> {
        let mut tracks: Vec<TrackRef> = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut api_url = format!(
                "{uri}/playlists/{id}/tracks",
                uri = &self.api_url,
                id = playlist_id
            );
            if let Some(token) = &continuation {
                api_url.push_str(&format!("?continuation={}", token));
            }

            let response = self.get_with_retry(&api_url).await?;
            let res = response.json::<PlaylistTracksResponse>().await?;

            tracks.extend(res.tracks);
            continuation = res.continuation;
            if continuation.is_none() {
                return Ok(tracks);
            }
        }
    }

    async fn get_with_retry(&self, api_url: &str) -> Result<reqwest::Response, reqwest::Error> {
        loop {
            let response = self.client.get(api_url).send().await?;

            // check for retry-after header
            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                if let Some(retry_after) = response.headers().get("retry-after") {
                    let retry_after = retry_after
                        .to_str()
                        .unwrap_or("0")
                        .parse::<u64>()
                        .unwrap_or(0);
                    if retry_after <= 120 {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue;
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds. Try again later.",
                        retry_after
                    );
                }
            }

            match response.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            }
        }
    }
}
