use tunesyncli::ledger::PlaylistLedger;

#[tokio::test]
async fn test_load_without_storage_returns_empty_state() {
    let base = tempfile::tempdir().unwrap();

    // Nothing has been recorded yet, and no files or directories exist
    let ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();

    assert_eq!(ledger.state().completed_count(), 0);
    assert_eq!(ledger.state().failed_count(), 0);
    assert!(!ledger.is_resolved("a"));

    // Loading must not have created storage eagerly
    assert!(!base.path().join("p1").exists());
}

#[tokio::test]
async fn test_record_completed_survives_reload() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_completed("a").await.unwrap();

    // A fresh load (as after a crash or a later run) sees the entry
    let reloaded = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    assert!(reloaded.is_resolved("a"));
    assert!(reloaded.state().is_completed("a"));
    assert_eq!(reloaded.state().completed_count(), 1);
}

#[tokio::test]
async fn test_record_failed_is_deduplicated() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_failed("b").await.unwrap();
    ledger.record_failed("b").await.unwrap();

    let content = std::fs::read_to_string(base.path().join("p1/failed.log")).unwrap();
    assert_eq!(content, "b\n");

    // Dedup also holds against entries loaded from a prior run
    let mut reloaded = PlaylistLedger::load(base.path(), "p1", true).await.unwrap();
    reloaded.record_failed("b").await.unwrap();
    let content = std::fs::read_to_string(base.path().join("p1/failed.log")).unwrap();
    assert_eq!(content, "b\n");
}

#[tokio::test]
async fn test_failed_tracks_resolved_by_default() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_failed("b").await.unwrap();
    assert!(ledger.is_resolved("b"));

    let reloaded = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    assert!(reloaded.is_resolved("b"));
}

#[tokio::test]
async fn test_retry_failed_policy_reconsiders_failed_tracks() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_failed("b").await.unwrap();
    ledger.record_completed("a").await.unwrap();

    let reloaded = PlaylistLedger::load(base.path(), "p1", true).await.unwrap();

    // Failed entries become eligible again, completed ones never do
    assert!(!reloaded.is_resolved("b"));
    assert!(reloaded.is_resolved("a"));
}

#[tokio::test]
async fn test_completed_track_is_never_demoted() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_completed("a").await.unwrap();
    ledger.record_failed("a").await.unwrap();

    assert!(ledger.state().is_completed("a"));
    assert!(!ledger.state().is_failed("a"));
    assert!(!base.path().join("p1/failed.log").exists());
}

#[tokio::test]
async fn test_retried_failure_that_succeeds_moves_to_completed() {
    let base = tempfile::tempdir().unwrap();

    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_failed("b").await.unwrap();

    // A retry run attempts the track again and succeeds
    let mut retry = PlaylistLedger::load(base.path(), "p1", true).await.unwrap();
    retry.record_completed("b").await.unwrap();
    assert!(retry.state().is_completed("b"));
    assert!(!retry.state().is_failed("b"));

    // The stale failed.log line loses against the completed record
    let reloaded = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    assert!(reloaded.state().is_completed("b"));
    assert!(!reloaded.state().is_failed("b"));
    assert_eq!(reloaded.state().failed_count(), 0);
}

#[tokio::test]
async fn test_second_run_has_nothing_left_to_attempt() {
    let base = tempfile::tempdir().unwrap();

    // First run over tracks [a, "", b]: "a" succeeds, "" is never recorded
    // (no identity), "b" fails
    let mut ledger = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    ledger.record_completed("a").await.unwrap();
    ledger.record_failed("b").await.unwrap();

    let completed = std::fs::read_to_string(base.path().join("p1/completed.log")).unwrap();
    let failed = std::fs::read_to_string(base.path().join("p1/failed.log")).unwrap();
    assert_eq!(completed, "a\n");
    assert_eq!(failed, "b\n");

    // Second run with the same catalog: both identified tracks resolved
    let second = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    assert!(second.is_resolved("a"));
    assert!(second.is_resolved("b"));
}

#[tokio::test]
async fn test_playlists_have_independent_ledgers() {
    let base = tempfile::tempdir().unwrap();

    let mut first = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    first.record_completed("a").await.unwrap();

    let other = PlaylistLedger::load(base.path(), "p2", false).await.unwrap();
    assert!(!other.is_resolved("a"));
}

#[tokio::test]
async fn test_concurrent_records_for_sibling_tracks_lose_nothing() {
    let base = tempfile::tempdir().unwrap();

    // Two recorders over the same playlist, each appending distinct ids
    let mut first = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    let mut second = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();

    let (a, b) = tokio::join!(first.record_completed("a"), second.record_completed("b"));
    a.unwrap();
    b.unwrap();

    let (c, d) = tokio::join!(first.record_failed("x"), second.record_failed("y"));
    c.unwrap();
    d.unwrap();

    let reloaded = PlaylistLedger::load(base.path(), "p1", false).await.unwrap();
    assert!(reloaded.state().is_completed("a"));
    assert!(reloaded.state().is_completed("b"));
    assert!(reloaded.state().is_failed("x"));
    assert!(reloaded.state().is_failed("y"));
    assert_eq!(reloaded.state().completed_count(), 2);
    assert_eq!(reloaded.state().failed_count(), 2);
}
