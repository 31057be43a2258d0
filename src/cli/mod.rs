//! # CLI Module
//!
//! This module provides the command-line interface layer for Tunesyncli, a
//! tool that mirrors YouTube Music playlists into the local Apple Music
//! library. It implements all user-facing CLI commands and coordinates
//! between the catalog client, the download and automation collaborators,
//! and the durable sync ledger.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! synchronizer's functionality. It provides commands for:
//!
//! - **Synchronization**: the incremental per-playlist, per-track sync loop
//! - **Catalog Queries**: listing the remote library's playlists
//! - **Ledger Queries**: showing per-playlist sync progress
//!
//! ## Commands
//!
//! - [`sync`] - Mirrors remote playlists into the local library, skipping
//!   work the ledger already records as done
//! - [`playlists`] - Displays the remote library playlists as a table
//! - [`status`] - Compares the remote catalog against the local ledgers
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Sync Loop + Ledger (Decision and Bookkeeping)
//!     ↓
//! Collaborator Layer (Catalog API, yt-dlp, Music.app)
//!     ↓
//! Network / Subprocess Layer
//! ```
//!
//! Each CLI command delegates to the collaborator modules while handling
//! user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! The CLI implements user-friendly, failure-isolating error handling:
//!
//! - **Per-track failures** are recorded in the ledger and surfaced as a
//!   warning line; the loop continues with the next track.
//! - **Per-playlist failures** (destination resolution, track enumeration)
//!   skip that playlist and continue with the next one.
//! - **Fatal failures** (no configuration, no catalog access, no library
//!   playlist listing) terminate the run with an error message.
//!
//! ## Progress and User Experience
//!
//! Long-running operations provide feedback through spinners with live
//! per-track messages, and each playlist ends with a summary line of what
//! was imported, what failed, and what was skipped.

mod playlists;
mod status;
mod sync;

pub use playlists::playlists;
pub use status::status;
pub use sync::sync;
