//! # Music.app Automation Module
//!
//! This module provides the destination side of the synchronizer: idempotent
//! playlist operations against the local Apple Music library, driven through
//! `osascript`. The sync loop upstream owns all decisions about *what* to
//! import; this module only knows *how*.
//!
//! ## Operations
//!
//! - **Resolve or create a playlist**: [`player::MusicApp::ensure_playlist`]
//!   looks a playlist up by display name and creates it when the lookup
//!   reports it absent. A pre-existing playlist is left untouched.
//! - **Import a file**: [`player::MusicApp::import_file`] appends a local
//!   audio file to a playlist as a new item. Duplicate imports are not
//!   deduplicated here; that is entirely the ledger's responsibility.
//!
//! ## Addressing and Name Collisions
//!
//! Music.app playlists are addressed by display name. Two library playlists
//! sharing a display name make the addressing ambiguous; behavior in that
//! case is undefined and the application does not attempt to detect or merge
//! such collisions.
//!
//! ## Serialization
//!
//! The backing application does not guarantee safe concurrent external
//! control, so every automation call goes through a single async mutex:
//! at most one `osascript` invocation is in flight at any time.
//!
//! ## Error Handling
//!
//! All failures surface as [`player::AdapterError`], with a distinct
//! variant for "playlist does not exist" so that resolution can fall back
//! to creation while genuine automation errors (application not running,
//! malformed script) stay visible.

pub mod player;
pub mod script;

pub use player::AdapterError;
pub use player::MusicApp;
pub use player::PlaylistHandle;
