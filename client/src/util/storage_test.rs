use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get("missing"), Ok(None));
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("v".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_last_write_wins() {
    let storage = MemoryStorage::new();
    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("second".to_owned())));
}

#[test]
fn memory_storage_remove_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k"), Ok(None));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(other.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn read_only_storage_rejects_writes() {
    let storage = MemoryStorage::read_only();
    assert!(matches!(storage.set("k", "v"), Err(StorageError::Write(_))));
    assert!(matches!(storage.remove("k"), Err(StorageError::Write(_))));
    assert_eq!(storage.get("k"), Ok(None));
}

#[test]
fn read_only_view_still_reads_existing_entries() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    let frozen = storage.to_read_only();
    assert_eq!(frozen.get("k"), Ok(Some("v".to_owned())));
    assert!(frozen.set("k", "w").is_err());
    assert_eq!(storage.get("k"), Ok(Some("v".to_owned())));
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_without_hydrate() {
    let storage = BrowserStorage;
    assert_eq!(storage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(storage.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove("k"), Err(StorageError::Unavailable));
}
