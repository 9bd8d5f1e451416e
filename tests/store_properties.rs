//! Store-level persistence properties
//!
//! Drives `DropStore` against temporary database files and verifies the
//! persistence contract, including raw-table checks through a direct
//! connection to prove soft delete never removes rows.

use jsonbox::config::{Config, DeploymentMode};
use jsonbox::store::DropStore;
use rusqlite::Connection;
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn temp_store() -> (TempDir, DropStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::resolve(DeploymentMode::Development, Some(dir.path().join("box.db")));
    let store = DropStore::new(&config);
    store.ensure_schema().unwrap();
    (dir, store)
}

fn raw_row(dir: &TempDir, id: i64) -> (String, i64) {
    let conn = Connection::open(dir.path().join("box.db")).unwrap();
    conn.query_row(
        "SELECT json, deleted FROM drops WHERE id = ?",
        [id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .unwrap()
}

// =============================================================================
// Create / Get round trips
// =============================================================================

#[test]
fn test_round_trip_preserves_value_for_all_json_kinds() {
    let (_dir, store) = temp_store();

    let payloads = [
        json!({"x": 1}),
        json!([1, 2, {"three": 3}]),
        json!("just a string"),
        json!(12.5),
        json!(true),
        json!(null),
        json!({"nested": {"deep": [{"deeper": "still"}]}, "unicode": "héllo ✓"}),
    ];

    for payload in payloads {
        let id = store.create(&payload).unwrap();
        assert_eq!(store.get(id).unwrap(), payload, "payload {payload} mangled");
    }
}

#[test]
fn test_date_like_values_round_trip_as_equivalent_strings() {
    let (_dir, store) = temp_store();
    let payload = json!({"when": "2024-01-01T00:00:00+00:00", "note": "launch"});

    let id = store.create(&payload).unwrap();
    let fetched = store.get(id).unwrap();
    assert_eq!(fetched["when"], Value::from("2024-01-01T00:00:00+00:00"));
}

#[test]
fn test_get_of_never_created_id_is_not_found() {
    let (_dir, store) = temp_store();
    assert!(store.get(1).unwrap_err().is_not_found());
    assert!(store.get(9999).unwrap_err().is_not_found());
}

// =============================================================================
// Soft delete semantics
// =============================================================================

#[test]
fn test_soft_delete_hides_drop_but_keeps_the_row() {
    let (dir, store) = temp_store();
    let id = store.create(&json!({"keep": "me"})).unwrap();

    store.soft_delete(id).unwrap();

    assert!(store.get(id).unwrap_err().is_not_found());
    assert!(store.list_active().unwrap().iter().all(|d| d.id != id));

    // The row itself must survive with its payload intact
    let (stored_json, deleted) = raw_row(&dir, id);
    assert_eq!(deleted, 1);
    assert_eq!(
        serde_json::from_str::<Value>(&stored_json).unwrap(),
        json!({"keep": "me"})
    );
}

#[test]
fn test_soft_delete_of_unknown_id_succeeds_twice_identically() {
    let (_dir, store) = temp_store();
    let first = store.soft_delete(77).unwrap();
    let second = store.soft_delete(77).unwrap();
    assert_eq!(first, 77);
    assert_eq!(second, 77);
}

#[test]
fn test_redeleting_an_already_deleted_drop_is_a_no_op() {
    let (dir, store) = temp_store();
    let id = store.create(&json!({"x": 1})).unwrap();

    store.soft_delete(id).unwrap();
    store.soft_delete(id).unwrap();

    let (_, deleted) = raw_row(&dir, id);
    assert_eq!(deleted, 1);
}

// =============================================================================
// Listing and id assignment
// =============================================================================

#[test]
fn test_ids_strictly_increase_across_sequential_creates() {
    let (_dir, store) = temp_store();
    let mut previous = store.create(&json!(0)).unwrap();
    for n in 1..10 {
        let id = store.create(&json!(n)).unwrap();
        assert!(id > previous, "id {id} not greater than {previous}");
        previous = id;
    }
}

#[test]
fn test_list_never_includes_deleted_drops_under_interleaving() {
    let (_dir, store) = temp_store();
    let mut live = Vec::new();

    for n in 0..20 {
        let id = store.create(&json!({"n": n})).unwrap();
        if n % 3 == 0 {
            store.soft_delete(id).unwrap();
        } else {
            live.push(id);
        }
    }

    let mut listed: Vec<_> = store.list_active().unwrap().iter().map(|d| d.id).collect();
    listed.sort_unstable();
    assert_eq!(listed, live);
}

// =============================================================================
// Full lifecycle scenario
// =============================================================================

#[test]
fn test_create_get_delete_lifecycle() {
    let (_dir, store) = temp_store();

    let id = store.create(&json!({"x": 1})).unwrap();
    assert_eq!(id, 1);
    assert_eq!(store.get(1).unwrap(), json!({"x": 1}));

    assert_eq!(store.soft_delete(1).unwrap(), 1);
    assert!(store.get(1).unwrap_err().is_not_found());
    assert!(store.list_active().unwrap().is_empty());
}
