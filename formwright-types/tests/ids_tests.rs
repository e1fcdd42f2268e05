use formwright_types::{FieldId, GroupId};
use std::collections::HashSet;
use std::str::FromStr;

// ── FieldId ───────────────────────────────────────────────────────

#[test]
fn field_id_generate_is_unique() {
    let a = FieldId::generate();
    let b = FieldId::generate();
    assert_ne!(a, b);
}

#[test]
fn field_id_generated_ids_are_uuids() {
    let id = FieldId::generate();
    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn field_id_parse_accepts_opaque_strings() {
    let id = FieldId::parse("f123").unwrap();
    assert_eq!(id.as_str(), "f123");
    assert_eq!(id.to_string(), "f123");
}

#[test]
fn field_id_parse_trims_whitespace() {
    let id = FieldId::parse("  email ").unwrap();
    assert_eq!(id.as_str(), "email");
}

#[test]
fn field_id_parse_rejects_blank() {
    assert!(FieldId::parse("").is_err());
    assert!(FieldId::parse("   ").is_err());
    assert!(FieldId::from_str("").is_err());
}

#[test]
fn field_id_default_is_blank() {
    assert!(FieldId::default().is_blank());
    assert!(!FieldId::from("a").is_blank());
}

#[test]
fn field_id_serializes_as_plain_string() {
    let id = FieldId::from("f123");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"f123\"");
    let parsed: FieldId = serde_json::from_str("\"f123\"").unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn field_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(FieldId::from("a"));
    set.insert(FieldId::from("a"));
    set.insert(FieldId::from("b"));
    assert_eq!(set.len(), 2);
}

// ── GroupId ───────────────────────────────────────────────────────

#[test]
fn group_id_generate_is_unique() {
    assert_ne!(GroupId::generate(), GroupId::generate());
}

#[test]
fn group_id_parse_and_display() {
    let id: GroupId = "contact".parse().unwrap();
    assert_eq!(id.to_string(), "contact");
    assert!(GroupId::parse(" ").is_err());
}
