use tempfile::tempdir;

use keymaster_core::{derive_password, CharsetBase, RecordStore, SiteRecord, SqliteStore};

fn sample_record() -> SiteRecord {
    SiteRecord::new("bank", "moy", "bigmoneybank.com")
        .with_charset_base(CharsetBase::Base64)
        .with_special_chars(true)
        .with_hint("the usual one")
}

#[test]
fn test_create_open_round_trip() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("nested").join("records.db");

    {
        let mut store = SqliteStore::create(&db_path).expect("create should succeed");
        store.insert(&sample_record()).expect("insert should succeed");
    }
    assert!(db_path.exists());

    let store = SqliteStore::open(&db_path).expect("open should succeed");
    let loaded = store
        .get("bank")
        .expect("get should succeed")
        .expect("record should exist");
    assert_eq!(loaded, sample_record());
}

#[test]
fn test_create_refuses_existing_file() {
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("records.db");

    SqliteStore::create(&db_path).expect("create should succeed");
    assert!(SqliteStore::create(&db_path).is_err());
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempdir().expect("tempdir should be available");
    let result = SqliteStore::open(&dir.path().join("absent.db"));
    assert!(result.is_err());
}

#[test]
fn test_open_rejects_foreign_file() {
    let dir = tempdir().expect("tempdir should be available");
    let path = dir.path().join("not-a-db.txt");
    std::fs::write(&path, "hello").expect("write should succeed");

    assert!(SqliteStore::open(&path).is_err());
}

#[test]
fn test_stored_record_derives_same_password_as_fresh_one() {
    // Persistence must not perturb derivation inputs.
    let dir = tempdir().expect("tempdir should be available");
    let db_path = dir.path().join("records.db");

    let mut store = SqliteStore::create(&db_path).expect("create should succeed");
    store.insert(&sample_record()).expect("insert should succeed");

    let loaded = SqliteStore::open(&db_path)
        .expect("open should succeed")
        .get("bank")
        .expect("get should succeed")
        .expect("record should exist");

    let from_loaded = derive_password("moy1234", &loaded).expect("derive should succeed");
    let from_fresh = derive_password("moy1234", &sample_record()).expect("derive should succeed");
    assert_eq!(from_loaded, from_fresh);
}
