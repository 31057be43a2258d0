use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    fetch::{FetchError, TrackFetcher},
    info,
    itunes::{AdapterError, MusicApp, PlaylistHandle},
    ledger::{LedgerError, PlaylistLedger},
    success,
    types::{PlaylistRef, TrackRef},
    utils, warning,
    ytmusic::YtMusic,
};

#[derive(Debug)]
enum PlaylistError {
    Destination(AdapterError),
    TrackListing(reqwest::Error),
    Ledger(LedgerError),
}

impl std::fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaylistError::Destination(e) => {
                write!(f, "cannot resolve destination playlist: {}", e)
            }
            PlaylistError::TrackListing(e) => write!(f, "cannot list playlist tracks: {}", e),
            PlaylistError::Ledger(e) => write!(f, "cannot update sync ledger: {:?}", e),
        }
    }
}

#[derive(Debug)]
enum TrackError {
    Fetch(FetchError),
    Import(AdapterError),
}

impl std::fmt::Display for TrackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackError::Fetch(e) => write!(f, "{}", e),
            TrackError::Import(e) => write!(f, "import failed: {}", e),
        }
    }
}

#[derive(Default)]
struct PlaylistSummary {
    completed: usize,
    failed: usize,
    planned: usize,
    skipped_invalid: usize,
    already_resolved: usize,
}

impl PlaylistSummary {
    fn absorb(&mut self, other: &PlaylistSummary) {
        self.completed += other.completed;
        self.failed += other.failed;
        self.planned += other.planned;
        self.skipped_invalid += other.skipped_invalid;
        self.already_resolved += other.already_resolved;
    }
}

pub async fn sync(playlist_filter: Option<String>, retry_failed: bool, dry_run: bool) {
    let client = match YtMusic::connect().await {
        Ok(client) => client,
        Err(e) => error!("Cannot access the catalog: {}", e),
    };

    let mut playlists = match client.library_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => error!("Cannot list library playlists: {}", e),
    };

    if let Some(filter) = &playlist_filter {
        playlists.retain(|p| p.id == *filter || p.title == *filter);
        if playlists.is_empty() {
            error!("No library playlist matches \"{}\"", filter);
        }
    }

    let fetcher = if dry_run {
        None
    } else {
        match TrackFetcher::new() {
            Ok(fetcher) => Some(fetcher),
            Err(e) => error!("{}", e),
        }
    };
    let music = MusicApp::new();

    info!("Syncing {} playlist(s)", playlists.len());

    let mut total = PlaylistSummary::default();
    let mut skipped_playlists = 0;

    for playlist in &playlists {
        info!("Playlist: {}", playlist.title);

        match sync_playlist(
            &client,
            fetcher.as_ref(),
            &music,
            playlist,
            retry_failed,
            dry_run,
        )
        .await
        {
            Ok(summary) => {
                if dry_run {
                    info!(
                        "{}: {} to fetch, {} already done, {} without id",
                        playlist.title,
                        summary.planned,
                        summary.already_resolved,
                        summary.skipped_invalid
                    );
                } else {
                    success!(
                        "{}: {} imported, {} failed, {} already done, {} without id",
                        playlist.title,
                        summary.completed,
                        summary.failed,
                        summary.already_resolved,
                        summary.skipped_invalid
                    );
                }
                total.absorb(&summary);
            }
            Err(e) => {
                // one playlist failing must not take the run down with it
                warning!("Skipping playlist {}: {}", playlist.title, e);
                skipped_playlists += 1;
            }
        }
    }

    if skipped_playlists > 0 {
        warning!("{} playlist(s) skipped.", skipped_playlists);
    }
    if dry_run {
        info!(
            "Dry run finished: {} track(s) would be fetched, {} already done.",
            total.planned, total.already_resolved
        );
    } else {
        success!(
            "Sync finished at {}: {} imported, {} failed, {} already done.",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            total.completed,
            total.failed,
            total.already_resolved
        );
    }
}

async fn sync_playlist(
    client: &YtMusic,
    fetcher: Option<&TrackFetcher>,
    music: &MusicApp,
    playlist: &PlaylistRef,
    retry_failed: bool,
    dry_run: bool,
) -> Result<PlaylistSummary, PlaylistError> {
    // destination resolution failure aborts this playlist only
    let handle = if dry_run {
        None
    } else {
        Some(
            music
                .ensure_playlist(&playlist.title)
                .await
                .map_err(PlaylistError::Destination)?,
        )
    };

    let mut ledger = PlaylistLedger::load(config::ledger_dir(), &playlist.id, retry_failed)
        .await
        .map_err(PlaylistError::Ledger)?;

    let mut tracks = client
        .playlist_tracks(&playlist.id)
        .await
        .map_err(PlaylistError::TrackListing)?;
    utils::remove_duplicate_tracks(&mut tracks);

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut summary = PlaylistSummary::default();
    let tracks_total = tracks.len();

    for (position, track) in tracks.iter().enumerate() {
        // a track without an id has no stable identity to record or retry;
        // skipped unrecorded
        let video_id = match track.video_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                summary.skipped_invalid += 1;
                continue;
            }
        };

        if ledger.is_resolved(video_id) {
            summary.already_resolved += 1;
            continue;
        }

        let label = utils::track_label(track);

        let (Some(fetcher), Some(handle)) = (fetcher, handle.as_ref()) else {
            // dry run: report the pending work without touching anything
            pb.suspend(|| info!("Would fetch and import: {}", label));
            summary.planned += 1;
            continue;
        };

        pb.set_message(format!(
            "Fetching {label} ({position}/{total})",
            label = label,
            position = position + 1,
            total = tracks_total
        ));

        match fetch_and_import(fetcher, music, handle, &playlist.id, track, video_id).await {
            Ok(()) => {
                ledger
                    .record_completed(video_id)
                    .await
                    .map_err(PlaylistError::Ledger)?;
                summary.completed += 1;
            }
            Err(e) => {
                // the failure is recorded and the loop moves on
                pb.suspend(|| warning!("{}: {}", label, e));
                ledger
                    .record_failed(video_id)
                    .await
                    .map_err(PlaylistError::Ledger)?;
                summary.failed += 1;
            }
        }
    }

    pb.finish_and_clear();
    Ok(summary)
}

async fn fetch_and_import(
    fetcher: &TrackFetcher,
    music: &MusicApp,
    handle: &PlaylistHandle,
    playlist_id: &str,
    track: &TrackRef,
    video_id: &str,
) -> Result<(), TrackError> {
    let file_path = fetcher
        .download(playlist_id, track, video_id)
        .await
        .map_err(TrackError::Fetch)?;

    music
        .import_file(handle, &file_path)
        .await
        .map_err(TrackError::Import)?;

    Ok(())
}
