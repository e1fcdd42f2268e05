use formwright_types::FieldId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gates a field's enabled state on the value of one other field.
///
/// Rules never chain: a rule reads exactly one source field and decides
/// exactly one target (the field that carries it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    /// The source field whose value is tested.
    pub field_id: FieldId,
    pub operator: RuleOperator,
    /// Literal compared against the source value.
    pub value: String,
    pub action: RuleAction,
}

impl ConditionalRule {
    pub fn new(
        field_id: impl Into<FieldId>,
        operator: RuleOperator,
        value: impl Into<String>,
        action: RuleAction,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: value.into(),
            action,
        }
    }

    /// Shorthand for `show when <source> equals <value>`.
    pub fn show_when_equals(field_id: impl Into<FieldId>, value: impl Into<String>) -> Self {
        Self::new(field_id, RuleOperator::Equals, value, RuleAction::Show)
    }

    /// Shorthand for `hide when <source> equals <value>`.
    pub fn hide_when_equals(field_id: impl Into<FieldId>, value: impl Into<String>) -> Self {
        Self::new(field_id, RuleOperator::Equals, value, RuleAction::Hide)
    }
}

/// Comparison applied between the source value and the rule literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOperator {
    Equals,
    NotEquals,
    Contains,
    /// Numeric greater-than.
    Gt,
    /// Numeric less-than.
    Lt,
}

impl RuleOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::Contains => "contains",
            Self::Gt => "gt",
            Self::Lt => "lt",
        }
    }
}

impl fmt::Display for RuleOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Self::Equals),
            "not_equals" => Ok(Self::NotEquals),
            "contains" => Ok(Self::Contains),
            "gt" => Ok(Self::Gt),
            "lt" => Ok(Self::Lt),
            other => Err(format!("unknown operator: {other}")),
        }
    }
}

/// What a matching rule does to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Enabled only while the rule matches.
    Show,
    /// Disabled while the rule matches.
    Hide,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Show => "show",
            Self::Hide => "hide",
        })
    }
}

impl FromStr for RuleAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            other => Err(format!("unknown action: {other}")),
        }
    }
}
