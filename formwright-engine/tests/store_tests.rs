use formwright_engine::SchemaStore;
use formwright_model::{FieldDefinition, FormSchema, Group};
use formwright_types::FieldId;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn store_of(ids: &[&str]) -> SchemaStore {
    SchemaStore::from_schema(FormSchema::new(
        ids.iter().map(|id| FieldDefinition::text(*id).with_id(*id)).collect(),
        Vec::new(),
    ))
}

fn order(store: &SchemaStore) -> Vec<&str> {
    store.fields().iter().map(|f| f.id.as_str()).collect()
}

// ── Duplicate / remove ───────────────────────────────────────────

#[test]
fn duplicate_inserts_copy_after_original() {
    let mut store = store_of(&["a", "f123", "c"]);
    let copy = store.duplicate(1).unwrap().clone();
    assert_ne!(copy.id.as_str(), "f123");
    assert_eq!(copy.label, "f123 (copy)");
    assert_eq!(store.fields()[2].id, copy.id);
    assert_eq!(store.len(), 4);
}

#[test]
fn duplicate_out_of_range_is_noop() {
    let mut store = store_of(&["a"]);
    assert!(store.duplicate(5).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_clears_selection_of_removed_field() {
    let mut store = store_of(&["a", "b", "c"]);
    store.select(1);
    store.remove(1);
    assert_eq!(store.selected(), None);
}

#[test]
fn remove_before_selection_shifts_it() {
    let mut store = store_of(&["a", "b", "c"]);
    store.select(2);
    store.remove(0);
    assert_eq!(store.selected(), Some(1));
    assert_eq!(store.selected_field().unwrap().id.as_str(), "c");
}

#[test]
fn duplicate_before_selection_shifts_it() {
    let mut store = store_of(&["a", "b", "c"]);
    store.select(2);
    store.duplicate(0);
    assert_eq!(store.selected_field().unwrap().id.as_str(), "c");
}

// ── Moves ────────────────────────────────────────────────────────

#[test]
fn move_up_at_zero_and_move_down_at_end_are_noops() {
    let mut store = store_of(&["a", "b", "c"]);
    assert!(!store.move_up(0));
    assert!(!store.move_down(2));
    assert!(!store.move_down(9));
    assert_eq!(order(&store), vec!["a", "b", "c"]);
}

#[test]
fn move_up_and_down_swap_neighbours() {
    let mut store = store_of(&["a", "b", "c"]);
    assert!(store.move_up(2));
    assert_eq!(order(&store), vec!["a", "c", "b"]);
    assert!(store.move_down(0));
    assert_eq!(order(&store), vec!["c", "a", "b"]);
}

#[test]
fn reorder_shifts_fields_between() {
    let mut store = store_of(&["a", "b", "c", "d"]);
    assert!(store.reorder(0, 2));
    assert_eq!(order(&store), vec!["b", "c", "a", "d"]);
    assert!(store.reorder(3, 0));
    assert_eq!(order(&store), vec!["d", "b", "c", "a"]);
}

#[test]
fn reorder_clamps_to_last_slot() {
    let mut store = store_of(&["a", "b", "c"]);
    assert!(store.reorder(0, 99));
    assert_eq!(order(&store), vec!["b", "c", "a"]);
}

#[test]
fn reorder_on_empty_store_is_noop() {
    let mut store = SchemaStore::new();
    assert!(!store.reorder(0, 1));
}

#[test]
fn selection_follows_moved_field() {
    let mut store = store_of(&["a", "b", "c", "d"]);
    store.select(1);
    store.reorder(1, 3);
    assert_eq!(store.selected_field().unwrap().id.as_str(), "b");
    store.reorder(0, 3);
    assert_eq!(store.selected_field().unwrap().id.as_str(), "b");
    store.move_up(0);
    store.move_down(0);
    assert_eq!(store.selected_field().unwrap().id.as_str(), "b");
}

// ── Groups ───────────────────────────────────────────────────────

#[test]
fn removing_group_leaves_field_reference_dangling() {
    let mut field = FieldDefinition::text("Name").with_id("name");
    field.group = Some("Contact".into());
    let mut store = SchemaStore::from_schema(FormSchema::new(vec![field], Vec::new()));
    store.push_group(Group::new("Contact"));
    assert!(store.remove_group(0).is_some());
    assert!(store.groups().is_empty());
    assert_eq!(
        store.field(&FieldId::from("name")).unwrap().group.as_deref(),
        Some("Contact")
    );
    assert!(store.remove_group(0).is_none());
}

#[test]
fn rename_group() {
    let mut store = SchemaStore::new();
    store.push_group(Group::new("Old"));
    assert!(store.rename_group(0, "New"));
    assert_eq!(store.groups()[0].title, "New");
    assert!(!store.rename_group(3, "x"));
}

// ── Properties ───────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Move {
    Up(usize),
    Down(usize),
    Drag(usize, usize),
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        (0usize..8).prop_map(Move::Up),
        (0usize..8).prop_map(Move::Down),
        (0usize..10, 0usize..10).prop_map(|(a, b)| Move::Drag(a, b)),
    ]
}

proptest! {
    #[test]
    fn moves_only_permute_fields(n in 1usize..8, moves in prop::collection::vec(move_strategy(), 0..20)) {
        let ids: Vec<String> = (0..n).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut store = store_of(&refs);
        let before = store.to_schema();

        for m in moves {
            match m {
                Move::Up(i) => { store.move_up(i); }
                Move::Down(i) => { store.move_down(i); }
                Move::Drag(a, b) => { store.reorder(a, b); }
            }
        }

        let mut after = store.to_schema().fields;
        let mut expected = before.fields;
        after.sort_by(|a, b| a.id.cmp(&b.id));
        expected.sort_by(|a, b| a.id.cmp(&b.id));
        prop_assert_eq!(after, expected);
    }
}
