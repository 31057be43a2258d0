mod playlist;

pub use playlist::LedgerError;
pub use playlist::PlaylistLedger;
pub use playlist::SyncState;
