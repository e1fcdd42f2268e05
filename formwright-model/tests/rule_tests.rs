use formwright_model::{ConditionalRule, RuleAction, RuleOperator};
use pretty_assertions::assert_eq;

#[test]
fn rule_json_uses_camel_case_source_key() {
    let rule = ConditionalRule::new("a", RuleOperator::NotEquals, "yes", RuleAction::Hide);
    let json = serde_json::to_value(&rule).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fieldId": "a",
            "operator": "not_equals",
            "value": "yes",
            "action": "hide"
        })
    );
}

#[test]
fn rule_json_roundtrip() {
    let rule = ConditionalRule::new("qty", RuleOperator::Gt, "10", RuleAction::Show);
    let json = serde_json::to_string(&rule).unwrap();
    let back: ConditionalRule = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rule);
}

#[test]
fn shorthand_constructors() {
    let show = ConditionalRule::show_when_equals("a", "yes");
    assert_eq!(show.operator, RuleOperator::Equals);
    assert_eq!(show.action, RuleAction::Show);
    let hide = ConditionalRule::hide_when_equals("a", "yes");
    assert_eq!(hide.action, RuleAction::Hide);
}

#[test]
fn operators_parse_from_their_names() {
    for op in [
        RuleOperator::Equals,
        RuleOperator::NotEquals,
        RuleOperator::Contains,
        RuleOperator::Gt,
        RuleOperator::Lt,
    ] {
        assert_eq!(op.as_str().parse::<RuleOperator>().unwrap(), op);
    }
    assert!("matches".parse::<RuleOperator>().is_err());
}

#[test]
fn actions_parse_from_their_names() {
    assert_eq!("show".parse::<RuleAction>().unwrap(), RuleAction::Show);
    assert_eq!("hide".parse::<RuleAction>().unwrap(), RuleAction::Hide);
    assert!("toggle".parse::<RuleAction>().is_err());
}
