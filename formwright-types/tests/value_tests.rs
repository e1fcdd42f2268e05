use formwright_types::{FieldValue, parse_number};
use proptest::prelude::*;

// ── Emptiness ─────────────────────────────────────────────────────

#[test]
fn absent_and_blank_values_are_empty() {
    assert!(FieldValue::Absent.is_empty());
    assert!(FieldValue::text("").is_empty());
    assert!(FieldValue::List(vec![]).is_empty());
}

#[test]
fn false_and_zero_are_not_empty() {
    assert!(!FieldValue::Bool(false).is_empty());
    assert!(!FieldValue::Number(0.0).is_empty());
    assert!(!FieldValue::text(" ").is_empty());
}

// ── String coercion ───────────────────────────────────────────────

#[test]
fn numbers_render_in_shortest_form() {
    assert_eq!(FieldValue::Number(3.0).to_text().unwrap(), "3");
    assert_eq!(FieldValue::Number(2.5).to_text().unwrap(), "2.5");
    assert_eq!(FieldValue::Number(-0.0).to_text().unwrap(), "0");
    assert_eq!(FieldValue::Number(f64::NAN).to_text().unwrap(), "NaN");
}

#[test]
fn booleans_and_lists_render_as_text() {
    assert_eq!(FieldValue::Bool(true).to_text().unwrap(), "true");
    assert_eq!(
        FieldValue::List(vec!["a".into(), "b".into()]).to_text().unwrap(),
        "a,b"
    );
}

#[test]
fn absent_has_no_text_form() {
    assert_eq!(FieldValue::Absent.to_text(), None);
    assert_eq!(FieldValue::Absent.to_text_lossy(), "");
}

// ── Numeric coercion ──────────────────────────────────────────────

#[test]
fn blank_text_coerces_to_zero() {
    assert_eq!(FieldValue::text("").to_number(), 0.0);
    assert_eq!(FieldValue::text("   ").to_number(), 0.0);
}

#[test]
fn numeric_text_coerces() {
    assert_eq!(FieldValue::text(" 12 ").to_number(), 12.0);
    assert_eq!(FieldValue::text("1e3").to_number(), 1000.0);
    assert_eq!(FieldValue::text("-Infinity").to_number(), f64::NEG_INFINITY);
}

#[test]
fn non_numeric_text_is_nan() {
    assert!(FieldValue::text("abc").to_number().is_nan());
    assert!(FieldValue::text("inf").to_number().is_nan());
    assert!(FieldValue::text("NaN").to_number().is_nan());
}

#[test]
fn absent_is_nan_and_booleans_are_bits() {
    assert!(FieldValue::Absent.to_number().is_nan());
    assert_eq!(FieldValue::Bool(true).to_number(), 1.0);
    assert_eq!(FieldValue::Bool(false).to_number(), 0.0);
}

#[test]
fn lists_coerce_like_their_single_element() {
    assert_eq!(FieldValue::List(vec![]).to_number(), 0.0);
    assert_eq!(FieldValue::List(vec!["7".into()]).to_number(), 7.0);
    assert!(FieldValue::List(vec!["1".into(), "2".into()]).to_number().is_nan());
}

#[test]
fn parse_number_matches_value_coercion() {
    assert_eq!(parse_number("5"), 5.0);
    assert!(parse_number("five").is_nan());
}

// ── JSON form ─────────────────────────────────────────────────────

#[test]
fn json_form_is_untagged() {
    assert_eq!(serde_json::to_string(&FieldValue::text("x")).unwrap(), "\"x\"");
    assert_eq!(serde_json::to_string(&FieldValue::Bool(false)).unwrap(), "false");
    assert_eq!(serde_json::to_string(&FieldValue::Absent).unwrap(), "null");
}

#[test]
fn json_values_parse_into_matching_variants() {
    let parsed: Vec<FieldValue> =
        serde_json::from_str(r#"["a", 3, true, null, ["x","y"]]"#).unwrap();
    assert_eq!(
        parsed,
        vec![
            FieldValue::text("a"),
            FieldValue::Number(3.0),
            FieldValue::Bool(true),
            FieldValue::Absent,
            FieldValue::List(vec!["x".into(), "y".into()]),
        ]
    );
}

proptest! {
    #[test]
    fn text_survives_json(s in "[a-zA-Z0-9 @._-]{0,40}") {
        let value = FieldValue::text(s);
        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    #[test]
    fn quarter_step_numbers_survive_json(n in -1_000_000i32..1_000_000) {
        let value = FieldValue::Number(f64::from(n) / 4.0);
        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }
}
