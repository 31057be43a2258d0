use std::{path::Path, time::Duration};

use tokio::{process::Command, sync::Mutex, time::timeout};

use crate::{config, itunes::script};

// AppleScript's "Can't get object" error, raised by the id lookup when no
// playlist has the requested name.
const ERR_OBJECT_NOT_FOUND: &str = "(-1728)";

#[derive(Debug)]
pub enum AdapterError {
    Launch(std::io::Error),
    Timeout(u64),
    Script(String),
    PlaylistMissing(String),
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::Launch(e) => write!(f, "cannot run osascript: {}", e),
            AdapterError::Timeout(secs) => {
                write!(f, "automation call timed out after {}s", secs)
            }
            AdapterError::Script(stderr) => write!(f, "automation call failed: {}", stderr),
            AdapterError::PlaylistMissing(name) => {
                write!(f, "no playlist named \"{}\"", name)
            }
        }
    }
}

/// Resolved destination playlist: the persistent id reported by Music.app
/// plus the display name all further automation addresses it by.
#[derive(Debug, Clone)]
pub struct PlaylistHandle {
    pub id: String,
    pub name: String,
}

/// Automation handle for the local Music.app library.
///
/// All calls serialize through one mutex; the application does not tolerate
/// concurrent external control.
pub struct MusicApp {
    gate: Mutex<()>,
    timeout: Duration,
}

impl MusicApp {
    pub fn new() -> Self {
        Self {
            gate: Mutex::new(()),
            timeout: config::automation_timeout(),
        }
    }

    /// Resolves a playlist by name, creating it when absent.
    ///
    /// A pre-existing playlist is left untouched. Lookup failures other
    /// than "no such playlist" are propagated unchanged.
    pub async fn ensure_playlist(&self, name: &str) -> Result<PlaylistHandle, AdapterError> {
        match self.playlist_id(name).await {
            Ok(id) => Ok(PlaylistHandle {
                id,
                name: name.to_string(),
            }),
            Err(AdapterError::PlaylistMissing(_)) => {
                self.create_playlist(name).await?;
                let id = self.playlist_id(name).await?;
                Ok(PlaylistHandle {
                    id,
                    name: name.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Looks up a playlist's persistent id by display name.
    pub async fn playlist_id(&self, name: &str) -> Result<String, AdapterError> {
        match self.run_script(&script::get_playlist_id(name)).await {
            Ok(output) => Ok(output),
            Err(AdapterError::Script(stderr)) if stderr.contains(ERR_OBJECT_NOT_FOUND) => {
                Err(AdapterError::PlaylistMissing(name.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Creates a new user playlist with the given name.
    pub async fn create_playlist(&self, name: &str) -> Result<(), AdapterError> {
        self.run_script(&script::create_playlist(name)).await?;
        Ok(())
    }

    /// Appends a local audio file to the playlist as a new item.
    ///
    /// No deduplication happens here; importing the same file twice yields
    /// two items. The ledger upstream is what prevents that.
    pub async fn import_file(
        &self,
        playlist: &PlaylistHandle,
        file_path: &Path,
    ) -> Result<(), AdapterError> {
        self.run_script(&script::add_file_to_playlist(
            &file_path.to_string_lossy(),
            &playlist.name,
        ))
        .await?;
        Ok(())
    }

    async fn run_script(&self, source: &str) -> Result<String, AdapterError> {
        let _guard = self.gate.lock().await;

        let output = timeout(
            self.timeout,
            Command::new("osascript")
                .arg("-e")
                .arg(source)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| AdapterError::Timeout(self.timeout.as_secs()))?
        .map_err(AdapterError::Launch)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AdapterError::Script(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for MusicApp {
    fn default() -> Self {
        Self::new()
    }
}
