use rusqlite::Connection;
use studyplan_core::db::migrations::latest_version;
use studyplan_core::db::{open_db, open_db_in_memory};
use studyplan_core::{SqliteKvStorage, StorageAdapter, StorageError};

#[test]
fn get_returns_none_for_unknown_key() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKvStorage::try_new(&conn).unwrap();
    assert_eq!(storage.get("missing").unwrap(), None);
}

#[test]
fn set_then_get_roundtrips_and_overwrites() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKvStorage::try_new(&conn).unwrap();

    storage.set("studySchedule_subjects", "[]").unwrap();
    assert_eq!(
        storage.get("studySchedule_subjects").unwrap().as_deref(),
        Some("[]")
    );

    storage
        .set("studySchedule_subjects", r#"[{"id":"s1"}]"#)
        .unwrap();
    assert_eq!(
        storage.get("studySchedule_subjects").unwrap().as_deref(),
        Some(r#"[{"id":"s1"}]"#)
    );
}

#[test]
fn keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteKvStorage::try_new(&conn).unwrap();

    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn adapter_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKvStorage::try_new(&conn) {
        Err(StorageError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn values_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("studyplan.db");

    {
        let conn = open_db(&db_path).unwrap();
        let storage = SqliteKvStorage::try_new(&conn).unwrap();
        storage.set("studySchedule_events", "[]").unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let storage = SqliteKvStorage::try_new(&conn).unwrap();
    assert_eq!(
        storage.get("studySchedule_events").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn reopening_an_up_to_date_database_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("studyplan.db");

    drop(open_db(&db_path).unwrap());
    let conn = open_db(&db_path).unwrap();

    let version = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .unwrap();
    assert_eq!(version, latest_version());
}
