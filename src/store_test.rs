use super::*;

#[test]
fn memory_store_reads_back_written_value() {
    let store = MemoryStore::new();
    assert_eq!(store.get_preference("theme"), None);
    store.set_preference("theme", "light");
    assert_eq!(store.get_preference("theme").as_deref(), Some("light"));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn seeded_entry_is_not_counted_as_write() {
    let store = MemoryStore::new().with_entry("theme", "dark");
    assert_eq!(store.get_preference("theme").as_deref(), Some("dark"));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn unavailable_store_hides_reads_and_drops_writes() {
    let store = MemoryStore::unavailable().with_entry("theme", "light");
    assert!(!store.is_available());
    assert_eq!(store.get_preference("theme"), None);

    store.set_preference("theme", "dark");
    assert_eq!(store.write_count(), 0);
    assert_eq!(store.peek("theme").as_deref(), Some("light"));
}

#[test]
fn availability_is_checked_on_every_access() {
    let store = MemoryStore::new();
    store.set_available(false);
    store.set_preference("theme", "light");
    assert_eq!(store.peek("theme"), None);

    store.set_available(true);
    store.set_preference("theme", "light");
    assert_eq!(store.get_preference("theme").as_deref(), Some("light"));
}
