//! # YouTube Music Catalog Module
//!
//! This module provides the catalog side of the synchronizer: a typed client
//! for the YouTube Music API endpoints the application needs. It handles all
//! HTTP communication, out-of-band authentication, pagination, and the retry
//! behavior required to survive the API's transient failure modes.
//!
//! ## Overview
//!
//! The synchronizer only needs two questions answered by the catalog: which
//! playlists are in the user's library, and which tracks are in a given
//! playlist. Both are exposed as methods on [`client::YtMusic`], which is
//! constructed once per run and passed to the sync loop; there is no
//! module-level client state.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Sync Loop)
//!          ↓
//! Catalog Integration Layer
//!     ├── Authentication (browser headers, out-of-band)
//!     └── Catalog Operations (library playlists, playlist tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! YouTube Music API
//! ```
//!
//! ## Authentication Strategy
//!
//! Authentication is explicitly out of scope for this application: no OAuth
//! flow is implemented. Instead, [`auth`] loads a JSON file of header
//! name/value pairs captured from an authenticated browser session and
//! installs them as default headers on the HTTP client. If that file is
//! missing or malformed the whole run is aborted; nothing can be done
//! without the catalog.
//!
//! ## Error Handling
//!
//! - **Rate limiting**: 429 responses are retried after the delay announced
//!   in the `retry-after` header; abnormally long delays are surfaced as a
//!   warning instead of silently sleeping.
//! - **Transient gateway errors**: 502 responses are retried after a fixed
//!   10 second delay.
//! - **Everything else**: propagated to the caller as `reqwest::Error`. The
//!   caller decides whether that is fatal (library enumeration) or a
//!   playlist-level failure (track enumeration).
//!
//! ## Pagination
//!
//! Both catalog listings are paginated with continuation tokens. The client
//! follows continuations until exhaustion and returns the concatenated
//! result, so callers always see complete listings in catalog order.
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON serialization and deserialization
//! - **tokio** - Async runtime and utilities

pub mod auth;
pub mod client;

pub use auth::AuthError;
pub use client::YtMusic;
