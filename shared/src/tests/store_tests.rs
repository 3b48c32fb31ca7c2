use super::*;

const KEY: &str = "drawings";

fn store_with(titles: &[&str]) -> SnapshotStore<MemoryStore> {
    let mut store = SnapshotStore::new(MemoryStore::new(), KEY);
    let snapshots = titles
        .iter()
        .map(|title| Snapshot {
            title: title.to_string(),
            data_url: format!("data:image/png;base64,{title}"),
        })
        .collect::<Vec<_>>();
    store.write(&snapshots).expect("write");
    store
}

#[test]
fn missing_key_reads_as_empty() {
    let store = SnapshotStore::new(MemoryStore::new(), KEY);
    assert!(store.read().is_empty());
    assert!(store.list_titles().is_empty());
}

#[test]
fn corrupt_or_null_contents_read_as_empty() {
    let mut backend = MemoryStore::new();
    backend.set_item(KEY, "{not json").expect("set");
    let store = SnapshotStore::new(backend, KEY);
    assert!(store.read().is_empty());

    let mut backend = MemoryStore::new();
    backend.set_item(KEY, "null").expect("set");
    let store = SnapshotStore::new(backend, KEY);
    assert!(store.read().is_empty());
}

#[test]
fn generated_titles_count_existing_prefix_matches() {
    let mut store = SnapshotStore::new(MemoryStore::new(), KEY);
    assert_eq!(store.next_title("사과"), "사과_1");
    let first = store.append("사과", "data:a".to_string()).expect("append");
    let second = store.append("사과", "data:b".to_string()).expect("append");
    store.append("포도", "data:c".to_string()).expect("append");
    let third = store.append("사과", "data:d".to_string()).expect("append");
    assert_eq!(first, "사과_1");
    assert_eq!(second, "사과_2");
    assert_eq!(third, "사과_3");
    assert_eq!(
        store.list_titles(),
        vec!["사과_1", "사과_2", "포도_1", "사과_3"]
    );
}

#[test]
fn prefix_match_is_case_sensitive_and_not_exact() {
    let store = store_with(&["Apple_1", "apple_1", "applesauce_1"]);
    assert_eq!(store.next_title("apple"), "apple_3");
    assert_eq!(store.next_title("Apple"), "Apple_2");
}

#[test]
fn stored_json_uses_data_url_field() {
    let mut store = SnapshotStore::new(MemoryStore::new(), KEY);
    store.append("수박", "data:x".to_string()).expect("append");
    let raw = store.backend().get_item(KEY).expect("stored");
    assert_eq!(raw, r#"[{"title":"수박_1","dataURL":"data:x"}]"#);
}

#[test]
fn delete_removes_exact_match() {
    let mut store = store_with(&["A_1", "B_1"]);
    assert!(store.delete("A_1").expect("delete"));
    assert_eq!(store.list_titles(), vec!["B_1"]);
}

#[test]
fn delete_without_match_leaves_store_untouched() {
    let mut store = store_with(&["A_1", "B_1"]);
    let before = store.backend().get_item(KEY);
    assert!(!store.delete("C_1").expect("delete"));
    assert!(!store.delete("A").expect("delete"));
    assert_eq!(store.backend().get_item(KEY), before);
}

#[test]
fn delete_only_removes_first_duplicate() {
    let mut store = store_with(&["A_1", "B_1", "A_1"]);
    assert!(store.delete("A_1").expect("delete"));
    assert_eq!(store.list_titles(), vec!["B_1", "A_1"]);
}

#[test]
fn find_returns_snapshot_by_exact_title() {
    let store = store_with(&["사과_1", "사과_10"]);
    let found = store.find("사과_1").expect("found");
    assert_eq!(found.data_url, "data:image/png;base64,사과_1");
    assert!(store.find("사과").is_none());
}
