use rusqlite::Connection;
use uuid::Uuid;
use wordbook_core::db::open_db_in_memory;
use wordbook_core::{
    Dictionary, DictionaryRepository, Entry, EntryRepository, Page, RepoError,
    SqliteDictionaryRepository, SqliteEntryRepository,
};

fn seed_dictionary(conn: &Connection, name: &str) -> Dictionary {
    let repo = SqliteDictionaryRepository::try_new(conn).unwrap();
    repo.create(&Dictionary::new(name, "en", "es", None).unwrap())
        .unwrap()
}

fn entry(dictionary: &Dictionary, original: &str) -> Entry {
    Entry::new(dictionary.id(), original, "traducción", None, None).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let owner = seed_dictionary(&conn, "Spanish");
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let draft = Entry::new(
        owner.id(),
        "break the ice",
        "romper el hielo",
        Some("He told a joke to break the ice.".to_string()),
        Some("business small talk".to_string()),
    )
    .unwrap();
    let created = repo.create(&draft).unwrap();

    assert_eq!(created.id(), draft.id());
    assert_eq!(created.dictionary_id(), owner.id());
    assert_eq!(created.original_text(), "break the ice");
    assert_eq!(created.translated_text(), "romper el hielo");
    assert_eq!(
        created.usage_example(),
        Some("He told a joke to break the ice.")
    );
    assert_eq!(created.notes(), Some("business small talk"));
    assert_eq!(
        created.created_at().timestamp_millis(),
        draft.created_at().timestamp_millis()
    );

    let loaded = repo.get_by_id(draft.id()).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn get_by_id_for_unknown_id_is_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    assert!(repo.get_by_id(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn get_by_dictionary_filters_and_pages_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let spanish = seed_dictionary(&conn, "Spanish");
    let german = seed_dictionary(&conn, "German");
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    repo.create(&entry(&spanish, "zebra")).unwrap();
    repo.create(&entry(&german, "apple")).unwrap();
    repo.create(&entry(&spanish, "mango")).unwrap();
    repo.create(&entry(&spanish, "banana")).unwrap();

    let all = repo.get_by_dictionary(spanish.id(), Page::new(0, 100)).unwrap();
    let originals: Vec<_> = all.iter().map(Entry::original_text).collect();
    assert_eq!(originals, ["zebra", "mango", "banana"]);

    let tail = repo.get_by_dictionary(spanish.id(), Page::new(1, 10)).unwrap();
    let originals: Vec<_> = tail.iter().map(Entry::original_text).collect();
    assert_eq!(originals, ["mango", "banana"]);

    let german_entries = repo.get_by_dictionary(german.id(), Page::new(0, 100)).unwrap();
    assert_eq!(german_entries.len(), 1);
    assert!(repo
        .get_by_dictionary(Uuid::new_v4(), Page::new(0, 100))
        .unwrap()
        .is_empty());
}

#[test]
fn create_for_unknown_dictionary_returns_dictionary_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let orphan_owner = Uuid::new_v4();
    let orphan = Entry::new(orphan_owner, "word", "palabra", None, None).unwrap();
    let err = repo.create(&orphan).unwrap_err();

    assert!(matches!(err, RepoError::DictionaryNotFound(id) if id == orphan_owner));
    assert!(repo.get_by_id(orphan.id()).unwrap().is_none());
}

#[test]
fn create_rejects_duplicate_id() {
    let conn = open_db_in_memory().unwrap();
    let owner = seed_dictionary(&conn, "Spanish");
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let first = repo.create(&entry(&owner, "one")).unwrap();
    let clash = Entry::with_id(first.id(), owner.id(), "uno", "one", None, None).unwrap();

    let err = repo.create(&clash).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyExists(id) if id == first.id()));
}

#[test]
fn deleting_dictionary_cascades_to_entries() {
    let conn = open_db_in_memory().unwrap();
    let owner = seed_dictionary(&conn, "Spanish");
    let survivor_owner = seed_dictionary(&conn, "German");
    let dictionaries = SqliteDictionaryRepository::try_new(&conn).unwrap();
    let entries = SqliteEntryRepository::try_new(&conn).unwrap();

    let doomed = entries.create(&entry(&owner, "gone")).unwrap();
    entries.create(&entry(&owner, "also gone")).unwrap();
    let survivor = entries.create(&entry(&survivor_owner, "kept")).unwrap();

    assert!(dictionaries.delete(owner.id()).unwrap());

    assert!(entries
        .get_by_dictionary(owner.id(), Page::new(0, 100))
        .unwrap()
        .is_empty());
    assert!(entries.get_by_id(doomed.id()).unwrap().is_none());
    assert_eq!(entries.get_by_id(survivor.id()).unwrap(), Some(survivor));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteEntryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        })
    ));
}
