//! Conditional enable/disable evaluation.
//!
//! Pure functions over the field list and the current-values map. Applying
//! the decisions is the engine's job.

use formwright_model::{ConditionalRule, FieldDefinition, RuleAction, RuleOperator};
use formwright_types::{FieldId, FieldValue, parse_number};
use std::collections::BTreeMap;

/// Enabled state computed for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub field_id: FieldId,
    pub enabled: bool,
}

/// Computes the enabled state of every field.
///
/// Fields without a rule are always enabled, which re-enables a field whose
/// rule was just removed.
pub fn evaluate(
    fields: &[FieldDefinition],
    values: &BTreeMap<FieldId, FieldValue>,
) -> Vec<Decision> {
    fields
        .iter()
        .map(|field| Decision {
            field_id: field.id.clone(),
            enabled: decide(field, values),
        })
        .collect()
}

/// Enabled state of a single field.
pub fn decide(field: &FieldDefinition, values: &BTreeMap<FieldId, FieldValue>) -> bool {
    let Some(rule) = &field.conditional else {
        return true;
    };
    let matched = rule_matches(rule, values.get(&rule.field_id));
    match rule.action {
        RuleAction::Show => matched,
        RuleAction::Hide => !matched,
    }
}

/// Tests a rule against its source value. `None` means the source field
/// does not exist.
///
/// - `equals`/`not_equals` compare string forms; an absent value equals nothing.
/// - `contains` tests the string form, empty when absent.
/// - `gt`/`lt` compare numerically; a `NaN` on either side never matches.
pub fn rule_matches(rule: &ConditionalRule, source: Option<&FieldValue>) -> bool {
    let absent = FieldValue::Absent;
    let source = source.unwrap_or(&absent);
    match rule.operator {
        RuleOperator::Equals => source.to_text().as_deref() == Some(rule.value.as_str()),
        RuleOperator::NotEquals => source.to_text().as_deref() != Some(rule.value.as_str()),
        RuleOperator::Contains => source.to_text_lossy().contains(rule.value.as_str()),
        RuleOperator::Gt => source.to_number() > parse_number(&rule.value),
        RuleOperator::Lt => source.to_number() < parse_number(&rule.value),
    }
}
