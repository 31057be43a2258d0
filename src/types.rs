use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub id: String,
    pub title: String,
    pub track_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub video_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryPlaylistsResponse {
    pub playlists: Vec<PlaylistRef>,
    pub continuation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub tracks: Vec<TrackRef>,
    pub continuation: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub title: String,
    pub tracks: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct StatusTableRow {
    pub playlist: String,
    pub completed: usize,
    pub failed: usize,
    pub remaining: String,
}
