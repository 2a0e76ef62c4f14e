use std::collections::{BTreeMap, HashMap};

use reclink_model::{Comparable, MapRecord};

fn lookup(record: &dyn Comparable, name: &str) -> Option<String> {
    record.get_field(name).map(str::to_string)
}

#[test]
fn maps_are_comparable() {
    let mut hash = HashMap::new();
    hash.insert("ssn".to_string(), "710359155".to_string());
    let mut tree = BTreeMap::new();
    tree.insert("ssn".to_string(), "710359155".to_string());

    assert_eq!(lookup(&hash, "ssn"), Some("710359155".to_string()));
    assert_eq!(lookup(&tree, "ssn"), Some("710359155".to_string()));
    assert_eq!(lookup(&hash, "dob"), None);
    assert_eq!(lookup(&&tree, "dob"), None);
}

#[test]
fn record_deserializes_from_flat_json() {
    let json = r#"{"dob": "1980-10-04", "fname": "Katie", "heartRate": "116 bpm"}"#;
    let record: MapRecord = serde_json::from_str(json).expect("deserialize record");

    assert_eq!(record.len(), 3);
    assert_eq!(record.get_field("fname"), Some("Katie"));
    assert_eq!(record.get_field("lname"), None);
    let names: Vec<&str> = record.field_names().collect();
    assert_eq!(names, vec!["dob", "fname", "heartRate"]);
}

#[test]
fn record_rejects_non_string_values() {
    let json = r#"{"visitNumber": 442878}"#;
    assert!(serde_json::from_str::<MapRecord>(json).is_err());
}

#[test]
fn record_serializes_as_object() {
    let record: MapRecord = [("lname", "Lang"), ("fname", "Brian")].into_iter().collect();
    let json = serde_json::to_string(&record).expect("serialize record");
    assert_eq!(json, r#"{"fname":"Brian","lname":"Lang"}"#);
}
