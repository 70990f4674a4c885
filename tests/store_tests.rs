//! Journal store behaviour against real journal files

use chrono::NaiveDate;
use logbook::domain::{codec, Credential, Entry, Journal, JournalName};
use logbook::infrastructure::{FileSystemRepository, JournalStore};
use logbook::LogbookError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open_store(root: &Path) -> JournalStore {
    JournalStore::new(FileSystemRepository::new(root.to_path_buf()))
}

fn write_journal_file(root: &Path, name: &str, contents: &str) {
    fs::create_dir_all(root.join("journals")).unwrap();
    fs::write(root.join("journals").join(format!("{}.txt", name)), contents).unwrap();
}

#[test]
fn test_round_trip_through_disk() {
    let temp = TempDir::new().unwrap();
    let store = open_store(temp.path());

    let at = |d, h, m| {
        NaiveDate::from_ymd_opt(2024, 12, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    };
    let journal = Journal::new(
        JournalName::parse("dreams").unwrap(),
        Credential::from_stored("pw"),
    )
    .with_username("sam")
    .with_entry(Entry::new(at(1, 6, 0), "Flying again.", "Over the sea,\nthen the city.").unwrap())
    .with_entry(Entry::new(at(2, 6, 30), "Lost teeth?", "Again.").unwrap());

    store.put(journal.clone()).unwrap();

    let reloaded = open_store(temp.path()).get("dreams").unwrap();
    assert_eq!(reloaded, journal);
    assert_eq!(reloaded.entries()[0].body(), "Over the sea, then the city.");
}

#[test]
fn test_sentence_split_on_add() {
    let temp = TempDir::new().unwrap();
    write_journal_file(temp.path(), "j", "password: pw\n");
    let store = open_store(temp.path());

    store.add("j", "This is a sentence. And more.").unwrap();

    let journal = store.get("j").unwrap();
    let entry = &journal.entries()[0];
    assert_eq!(entry.title(), "This is a sentence.");
    assert_eq!(entry.body(), "And more.");

    match store.add("j", "no terminator here") {
        Err(LogbookError::Validation(_)) => {}
        other => panic!("Expected Validation error, got {:?}", other),
    }
    assert_eq!(store.get("j").unwrap().entries().len(), 1);
    assert_eq!(open_store(temp.path()).get("j").unwrap().entries().len(), 1);
}

#[test]
fn test_malformed_file_leaves_cache_empty() {
    let temp = TempDir::new().unwrap();
    write_journal_file(temp.path(), "j", "2025-01-02 09:30 Title.\nBody.\n");
    let store = open_store(temp.path());

    assert!(matches!(store.get("j"), Err(LogbookError::Format { .. })));
    assert!(!store.is_cached("j"));

    // Fixing the file out of band makes the next get succeed
    write_journal_file(temp.path(), "j", "password: pw\n2025-01-02 09:30 Title.\nBody.\n");
    assert_eq!(store.get("j").unwrap().entries().len(), 1);
    assert!(store.is_cached("j"));
}

#[test]
fn test_cache_serves_repeated_gets() {
    let temp = TempDir::new().unwrap();
    write_journal_file(temp.path(), "j", "password: pw\n");
    let store = open_store(temp.path());

    let first = store.get("j").unwrap();

    // Out-of-band edits are not observed once cached
    write_journal_file(temp.path(), "j", "password: changed\n");
    let second = store.get("j").unwrap();

    assert_eq!(first, second);
    assert_eq!(second.credential().as_str(), "pw");
}

#[test]
fn test_change_password_is_durable() {
    let temp = TempDir::new().unwrap();
    write_journal_file(
        temp.path(),
        "j",
        "password: old\n2025-01-02 09:30 One.\nFirst.\n\n2025-01-03 10:00 Two.\nSecond.\n\n",
    );
    let store = open_store(temp.path());
    let before = store.get("j").unwrap();

    store
        .change_password("j", Credential::from_stored("newcred"))
        .unwrap();

    let reloaded = open_store(temp.path()).get("j").unwrap();
    assert_eq!(reloaded.credential().as_str(), "newcred");
    assert_eq!(reloaded.entries(), before.entries());
}

#[test]
fn test_concurrent_writers_on_disk() {
    const THREADS: usize = 6;
    const PER_THREAD: usize = 5;

    let temp = TempDir::new().unwrap();
    write_journal_file(temp.path(), "j", "password: pw\n");
    let store = open_store(temp.path());

    std::thread::scope(|scope| {
        for t in 0..THREADS {
            let store = &store;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    store.add("j", &format!("Note {}-{}. From writer {}.", t, i, t)).unwrap();
                }
            });
        }
    });

    let cached = store.get("j").unwrap();
    assert_eq!(cached.entries().len(), THREADS * PER_THREAD);

    let contents = fs::read_to_string(temp.path().join("journals/j.txt")).unwrap();
    let on_disk = codec::parse(JournalName::parse("j").unwrap(), &contents).unwrap();
    assert_eq!(on_disk, cached);
}

#[test]
fn test_operations_on_missing_journal() {
    let temp = TempDir::new().unwrap();
    let store = open_store(temp.path());

    assert!(matches!(store.get("ghost"), Err(LogbookError::NotFound(_))));
    assert!(matches!(
        store.add("ghost", "Hello. There."),
        Err(LogbookError::NotFound(_))
    ));
    assert!(matches!(
        store.change_password("ghost", Credential::from_stored("x")),
        Err(LogbookError::NotFound(_))
    ));
    assert!(!temp.path().join("journals/ghost.txt").exists());
}
