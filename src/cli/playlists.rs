use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, types::PlaylistTableRow, ytmusic::YtMusic};

pub async fn playlists() {
    let client = match YtMusic::connect().await {
        Ok(client) => client,
        Err(e) => error!("Cannot access the catalog: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching library playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match client.library_playlists().await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list library playlists: {}", e);
        }
    };

    let rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            title: p.title,
            tracks: p
                .track_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string()),
            id: p.id,
        })
        .collect();

    let table = Table::new(rows);
    println!("{table}");
}
