//! Track download and transcoding via yt-dlp.
//!
//! The fetcher resolves a track reference to a local audio file in the
//! target format with metadata and chapters embedded. It shells out to
//! `yt-dlp`, which owns the network retries and the ffmpeg post-processing;
//! this module only assembles the invocation, bounds it with a timeout, and
//! recovers the final file path from its output.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::{process::Command, time::timeout};

use crate::{config, types::TrackRef, utils};

#[derive(Debug)]
pub enum FetchError {
    MissingTool(String),
    Launch(std::io::Error),
    Timeout(u64),
    Download(String),
    MissingOutput(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::MissingTool(tool) => write!(f, "{} not found in PATH", tool),
            FetchError::Launch(e) => write!(f, "cannot start download: {}", e),
            FetchError::Timeout(secs) => write!(f, "download timed out after {}s", secs),
            FetchError::Download(stderr) => write!(f, "download failed: {}", stderr),
            FetchError::MissingOutput(path) => {
                write!(f, "downloader reported no usable output file: {}", path)
            }
        }
    }
}

/// Downloader for single tracks, configured once per run.
pub struct TrackFetcher {
    bin: PathBuf,
    download_dir: PathBuf,
    format: String,
    quality: String,
    retries: u32,
    timeout: Duration,
}

impl TrackFetcher {
    /// Builds a fetcher from the configured download options.
    ///
    /// Fails when `yt-dlp` is not installed.
    pub fn new() -> Result<Self, FetchError> {
        let bin =
            which::which("yt-dlp").map_err(|_| FetchError::MissingTool("yt-dlp".to_string()))?;

        Ok(Self {
            bin,
            download_dir: config::download_dir(),
            format: config::audio_format(),
            quality: config::audio_quality(),
            retries: config::download_retries(),
            timeout: config::fetch_timeout(),
        })
    }

    /// Downloads one track into the playlist's directory and returns the
    /// absolute path of the finished audio file.
    ///
    /// On failure nothing is recorded anywhere; partial data exists only in
    /// yt-dlp's own working files, which it resumes or replaces on the next
    /// attempt.
    pub async fn download(
        &self,
        playlist_id: &str,
        track: &TrackRef,
        video_id: &str,
    ) -> Result<PathBuf, FetchError> {
        let out_dir = self.download_dir.join(playlist_id);
        async_fs::create_dir_all(&out_dir)
            .await
            .map_err(FetchError::Launch)?;

        let output = timeout(
            self.timeout,
            Command::new(&self.bin)
                .arg("--format")
                .arg("bestaudio/best")
                .arg("--extract-audio")
                .arg("--audio-format")
                .arg(&self.format)
                .arg("--audio-quality")
                .arg(&self.quality)
                .arg("--retries")
                .arg(self.retries.to_string())
                .arg("--fragment-retries")
                .arg(self.retries.to_string())
                .arg("--embed-metadata")
                .arg("--embed-chapters")
                .arg("--no-playlist")
                .arg("--paths")
                .arg(&out_dir)
                .arg("--output")
                .arg("%(title)s.%(ext)s")
                .arg("--no-simulate")
                .arg("--print")
                .arg("after_move:filepath")
                .arg(utils::watch_url(video_id))
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| FetchError::Timeout(self.timeout.as_secs()))?
        .map_err(FetchError::Launch)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("unknown error")
                .trim()
                .to_string();
            return Err(FetchError::Download(reason));
        }

        // yt-dlp prints the post-processed file path as the last line
        let stdout = String::from_utf8_lossy(&output.stdout);
        let file_path = stdout
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .map(|line| PathBuf::from(line.trim()))
            .ok_or_else(|| FetchError::MissingOutput(utils::track_label(track)))?;

        if async_fs::metadata(&file_path).await.is_err() {
            return Err(FetchError::MissingOutput(
                file_path.to_string_lossy().to_string(),
            ));
        }

        Ok(file_path)
    }
}
