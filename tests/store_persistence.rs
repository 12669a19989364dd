use snipcard::{
    FileStorage, MemoryStorage, PersistenceAdapter, STORAGE_KEY, Snippet, SnippetFields,
    SnippetStore, StoreError,
};
use std::fs;
use tempfile::TempDir;

fn sample() -> Vec<Snippet> {
    vec![
        Snippet::new("Hello", "java", "System.out.println(\"hi\");", "prints hi"),
        Snippet::new("", "", "", ""),
        Snippet::new("Üñíçødé \"quoted\"", "Rust", "let x = '\\n';\n\ttab", "multi\nline"),
    ]
}

#[test]
fn saved_collection_loads_back_field_by_field() {
    let mut storage = MemoryStorage::new();
    let bytes = snipcard::models::encode_collection(&sample()).unwrap();
    storage.set(STORAGE_KEY, &bytes).unwrap();

    let store = SnippetStore::load(storage);
    assert_eq!(store.snippets(), sample().as_slice());
    assert!(store.load_warning().is_none());
}

#[test]
fn file_backed_store_survives_a_new_session() {
    let dir = TempDir::new().unwrap();

    {
        let mut store = SnippetStore::load(FileStorage::at(dir.path()).unwrap());
        store
            .create(SnippetFields::new("first", "int a;").with_language("java"))
            .unwrap();
        store.create(SnippetFields::new("second", "")).unwrap();
        store.create(SnippetFields::new("third", "x")).unwrap();
        store.update_code(1, "int b;").unwrap();
        store.delete(0).unwrap();
    }

    let store = SnippetStore::load(FileStorage::at(dir.path()).unwrap());
    let titles: Vec<_> = store.list().iter().map(|e| e.snippet.title.clone()).collect();
    assert_eq!(titles, vec!["second", "third"]);
    assert_eq!(store.get(0).unwrap().code, "int b;");
}

#[test]
fn stored_format_is_a_plain_array_of_objects() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::at(dir.path()).unwrap();
    let path = storage.path_for(STORAGE_KEY);

    let mut store = SnippetStore::load(storage);
    store
        .create(SnippetFields::new("t", "c").with_language("l").with_description("d"))
        .unwrap();

    let raw: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!([{"title": "t", "language": "l", "code": "c", "description": "d"}])
    );
}

#[test]
fn legacy_objects_with_missing_fields_are_accepted() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::at(dir.path()).unwrap();
    fs::write(
        storage.path_for(STORAGE_KEY),
        r#"[{"title":"only title"},{"code":"x=1","language":null}]"#,
    )
    .unwrap();

    let store = SnippetStore::load(storage);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(0).unwrap().code, "");
    assert_eq!(store.get(1).unwrap().display_title(), "Untitled");
    assert_eq!(store.get(1).unwrap().language, "");
}

#[test]
fn corrupt_file_starts_empty_and_next_save_repairs_it() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::at(dir.path()).unwrap();
    let path = storage.path_for(STORAGE_KEY);
    fs::write(&path, "[{\"title\": ").unwrap();

    let mut store = SnippetStore::load(storage);
    assert!(store.is_empty());
    assert!(store.load_warning().is_some());

    store.create(SnippetFields::new("fresh", "")).unwrap();
    let reloaded = SnippetStore::load(FileStorage::at(dir.path()).unwrap());
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.load_warning().is_none());
}

#[test]
fn quota_failure_reports_but_keeps_session_state() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::at(dir.path()).unwrap().with_quota(Some(64));
    let mut store = SnippetStore::load(storage);

    store.create(SnippetFields::new("small", "")).unwrap();
    let err = store
        .create(SnippetFields::new("large", "x".repeat(128)))
        .unwrap_err();

    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.len(), 2);

    let reloaded = SnippetStore::load(FileStorage::at(dir.path()).unwrap());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn validation_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::at(dir.path()).unwrap();
    let path = storage.path_for(STORAGE_KEY);
    let mut store = SnippetStore::load(storage);

    let err = store.create(SnippetFields::new("", "")).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.len(), 0);
    assert!(!path.exists());
}

#[test]
fn stale_index_after_delete_targets_shifted_snippet() {
    let mut store = SnippetStore::load(MemoryStorage::new());
    for title in ["a", "b", "c"] {
        store.create(SnippetFields::new(title, "")).unwrap();
    }

    let captured = store.list()[1].index;
    store.delete(0).unwrap();
    store.update_code(captured, "edited").unwrap();

    let entries = store.list();
    assert_eq!(entries[1].snippet.title, "c");
    assert_eq!(entries[1].snippet.code, "edited");
    assert_eq!(entries[0].snippet.title, "b");
    assert_eq!(entries[0].snippet.code, "");
}
