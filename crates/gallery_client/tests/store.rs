use std::fs;

use gallery_client::{FileOrderStore, OrderStore, StoreError};
use tempfile::TempDir;

fn order(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://img.example.com/{i}.jpg"))
        .collect()
}

#[test]
fn missing_file_is_absent_state() {
    let temp = TempDir::new().unwrap();
    let store = FileOrderStore::new(temp.path().join("order.json"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn save_then_load_round_trips_as_a_json_array() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("order.json");
    let mut store = FileOrderStore::new(path.clone());

    let saved = order(3);
    store.save(&saved).unwrap();
    assert_eq!(store.load().unwrap(), Some(saved.clone()));

    // On disk it is a plain JSON string array.
    let raw = fs::read_to_string(&path).unwrap();
    assert_eq!(serde_json::from_str::<Vec<String>>(&raw).unwrap(), saved);
}

#[test]
fn save_fully_overwrites_the_previous_order() {
    let temp = TempDir::new().unwrap();
    let mut store = FileOrderStore::new(temp.path().join("order.json"));

    store.save(&order(5)).unwrap();
    store.save(&order(2)).unwrap();
    assert_eq!(store.load().unwrap(), Some(order(2)));
}

#[test]
fn corrupt_file_surfaces_as_a_corrupt_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("order.json");
    fs::write(&path, "][ broken").unwrap();

    let store = FileOrderStore::new(path);
    assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
}
