use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get("k"), None);

    store.set("k", "v1");
    assert_eq!(store.get("k"), Some("v1".to_owned()));

    store.set("k", "v2");
    assert_eq!(store.get("k"), Some("v2".to_owned()));

    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::default();
    store.remove("absent");
    assert_eq!(store.get("absent"), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::default();
    let handle = store.clone();

    store.set(TOKEN_KEY, "abc");
    assert_eq!(handle.get(TOKEN_KEY), Some("abc".to_owned()));

    handle.remove(TOKEN_KEY);
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}
