use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, config, error, info,
    ledger::PlaylistLedger,
    types::{PlaylistRef, StatusTableRow},
    ytmusic::YtMusic,
};

pub async fn status() {
    let client = match YtMusic::connect().await {
        Ok(client) => client,
        Err(e) => error!("Cannot access the catalog: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Comparing catalog against local ledgers...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = match client.library_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list library playlists: {}", e);
        }
    };

    let rows = match build_rows(&playlists).await {
        Ok(rows) => {
            pb.finish_and_clear();
            rows
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot read sync ledgers: {}", e);
        }
    };

    if rows.is_empty() {
        info!("No library playlists found.");
        return;
    }

    let table = Table::new(rows);
    println!("{table}");
}

async fn build_rows(playlists: &[PlaylistRef]) -> Res<Vec<StatusTableRow>> {
    let ledger_dir = config::ledger_dir();
    let mut rows = Vec::new();

    for playlist in playlists {
        let ledger = PlaylistLedger::load(&ledger_dir, &playlist.id, false)
            .await
            .map_err(|e| format!("{:?}", e))?;
        let state = ledger.state();

        let resolved = state.completed_count() + state.failed_count();
        let remaining = match playlist.track_count {
            Some(count) => (count as usize).saturating_sub(resolved).to_string(),
            None => "?".to_string(),
        };

        rows.push(StatusTableRow {
            playlist: playlist.title.clone(),
            completed: state.completed_count(),
            failed: state.failed_count(),
            remaining,
        });
    }

    Ok(rows)
}
