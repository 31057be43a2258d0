//! Configuration management for the playlist synchronizer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including the catalog API endpoint, the
//! out-of-band authentication file, download options, and the timeouts put
//! on external collaborators.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf, time::Duration};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `tunesyncli/.env`. A missing `.env` file is not
/// an error; configuration may come entirely from the process environment.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/tunesyncli/.env`
/// - macOS: `~/Library/Application Support/tunesyncli/.env`
/// - Windows: `%LOCALAPPDATA%/tunesyncli/.env`
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunesyncli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the YouTube Music catalog API.
///
/// Retrieves the `YTMUSIC_API_URL` environment variable which contains the
/// base URL used for all catalog operations (library playlists, playlist
/// tracks).
///
/// # Panics
///
/// Panics if the `YTMUSIC_API_URL` environment variable is not set.
pub fn ytmusic_apiurl() -> String {
    env::var("YTMUSIC_API_URL").expect("YTMUSIC_API_URL must be set")
}

/// Returns the path of the browser-headers file used for catalog auth.
///
/// The file is a JSON object of header name/value pairs captured from an
/// authenticated browser session. Authentication itself happens out-of-band;
/// this application only replays the headers. Defaults to
/// `auth-headers.json` in the application data directory when
/// `YTMUSIC_AUTH_FILE` is not set.
pub fn ytmusic_auth_file() -> PathBuf {
    match env::var("YTMUSIC_AUTH_FILE") {
        Ok(path) => PathBuf::from(path),
        Err(_) => data_dir().join("auth-headers.json"),
    }
}

/// Returns the directory downloaded audio files are stored under.
///
/// One subdirectory per playlist id is created below it. Defaults to
/// `downloads` in the application data directory when
/// `TUNESYNC_DOWNLOAD_DIR` is not set.
pub fn download_dir() -> PathBuf {
    match env::var("TUNESYNC_DOWNLOAD_DIR") {
        Ok(path) => PathBuf::from(path),
        Err(_) => data_dir().join("downloads"),
    }
}

/// Returns the directory the per-playlist sync ledgers are stored under.
///
/// Defaults to `ledger` in the application data directory when
/// `TUNESYNC_LEDGER_DIR` is not set.
pub fn ledger_dir() -> PathBuf {
    match env::var("TUNESYNC_LEDGER_DIR") {
        Ok(path) => PathBuf::from(path),
        Err(_) => data_dir().join("ledger"),
    }
}

/// Returns the target audio container/codec passed to yt-dlp.
///
/// Defaults to `m4a`.
pub fn audio_format() -> String {
    env::var("TUNESYNC_AUDIO_FORMAT").unwrap_or_else(|_| "m4a".to_string())
}

/// Returns the yt-dlp audio quality hint (0 best .. 10 worst).
///
/// Defaults to `5`.
pub fn audio_quality() -> String {
    env::var("TUNESYNC_AUDIO_QUALITY").unwrap_or_else(|_| "5".to_string())
}

/// Returns the retry count for transient download failures.
///
/// Applied to both whole-file and fragment retries. Defaults to `10`.
pub fn download_retries() -> u32 {
    env::var("TUNESYNC_DOWNLOAD_RETRIES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10)
}

/// Returns the timeout applied to a single track download.
///
/// Expiry is treated as a fetch failure for that track. Defaults to 900
/// seconds.
pub fn fetch_timeout() -> Duration {
    let secs = env::var("TUNESYNC_FETCH_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(900);
    Duration::from_secs(secs)
}

/// Returns the timeout applied to a single Music.app automation call.
///
/// Expiry is treated as an adapter failure. Defaults to 60 seconds.
pub fn automation_timeout() -> Duration {
    let secs = env::var("TUNESYNC_AUTOMATION_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);
    Duration::from_secs(secs)
}

fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunesyncli");
    path
}
