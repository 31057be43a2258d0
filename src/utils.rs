use std::collections::HashSet;

use crate::types::TrackRef;

/// Builds the public watch URL for a catalog video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Formats a track as "artist - title" for console output.
///
/// Tracks without artist information fall back to the bare title.
pub fn track_label(track: &TrackRef) -> String {
    let artists = track
        .artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<String>>()
        .join(", ");

    if artists.is_empty() {
        track.title.clone()
    } else {
        format!("{} - {}", artists, track.title)
    }
}

/// Removes duplicate tracks, keeping the first occurrence of each video id.
///
/// Tracks without a video id are kept as-is; they carry no identity to
/// deduplicate on and are skipped later anyway.
pub fn remove_duplicate_tracks(tracks: &mut Vec<TrackRef>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| match &track.video_id {
        Some(id) if !id.is_empty() => seen_ids.insert(id.clone()),
        _ => true,
    });
}
