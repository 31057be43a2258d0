use tunesyncli::types::{TrackArtist, TrackRef};
use tunesyncli::utils::*;

// Helper function to create a test track
fn create_test_track(video_id: Option<&str>, title: &str, artists: &[&str]) -> TrackRef {
    TrackRef {
        video_id: video_id.map(|id| id.to_string()),
        title: title.to_string(),
        artists: artists
            .iter()
            .map(|name| TrackArtist {
                id: Some(format!("{}_artist_id", name)),
                name: name.to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_watch_url() {
    assert_eq!(
        watch_url("dQw4w9WgXcQ"),
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    );

    // The id is used verbatim
    assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
}

#[test]
fn test_track_label_with_artists() {
    let track = create_test_track(Some("id1"), "Song Title", &["Artist A"]);
    assert_eq!(track_label(&track), "Artist A - Song Title");

    // Multiple artists are joined with commas
    let track = create_test_track(Some("id2"), "Collab", &["Artist A", "Artist B"]);
    assert_eq!(track_label(&track), "Artist A, Artist B - Collab");
}

#[test]
fn test_track_label_without_artists() {
    let track = create_test_track(Some("id1"), "Instrumental", &[]);
    assert_eq!(track_label(&track), "Instrumental");
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track(Some("id1"), "Track 1", &["Artist A"]),
        create_test_track(Some("id2"), "Track 2", &["Artist B"]),
        create_test_track(Some("id1"), "Track 1 Duplicate", &["Artist A"]),
        create_test_track(Some("id3"), "Track 3", &["Artist C"]),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should keep the first occurrence of each unique id
    assert_eq!(tracks.len(), 3);
    let ids: Vec<&str> = tracks
        .iter()
        .filter_map(|t| t.video_id.as_deref())
        .collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_remove_duplicate_tracks_keeps_idless_tracks() {
    let mut tracks = vec![
        create_test_track(Some("id1"), "Track 1", &["Artist A"]),
        create_test_track(None, "No Id 1", &[]),
        create_test_track(Some(""), "Empty Id", &[]),
        create_test_track(None, "No Id 2", &[]),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Tracks without a usable id carry no identity to deduplicate on
    assert_eq!(tracks.len(), 4);
}
