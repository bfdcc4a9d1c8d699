use opal_runtime::collections::Table;

#[test]
fn insert_remove_contains_round_trip() {
    let mut table: Table<String, i64> = Table::new();
    assert!(table.is_empty());

    table.insert("alpha".to_owned(), 1);
    table.insert("beta".to_owned(), 2);
    assert_eq!(table.len(), 2);
    assert!(table.contains_key(&"alpha".to_owned()));

    assert_eq!(table.remove(&"alpha".to_owned()), Some(1));
    assert!(!table.contains_key(&"alpha".to_owned()));
    assert_eq!(table.remove(&"alpha".to_owned()), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn insert_replaces_value_and_keeps_position() {
    let mut table: Table<&str, i64> = Table::new();
    table.insert("first", 1);
    table.insert("second", 2);

    assert_eq!(table.insert("first", 10), Some(1));
    let keys: Vec<&str> = table.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["first", "second"]);
    assert_eq!(table.get(&"first"), Some(&10));
}

#[test]
fn iteration_follows_insertion_order_after_removal() {
    let mut table: Table<&str, i64> = Table::new();
    table.insert("a", 1);
    table.insert("b", 2);
    table.insert("c", 3);
    table.remove(&"b");

    let entries: Vec<(&str, i64)> = table.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(entries, [("a", 1), ("c", 3)]);
}

#[test]
fn collects_from_pairs() {
    let table: Table<&str, i64> = vec![("x", 7), ("y", 8)].into_iter().collect();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&"y"), Some(&8));
}
