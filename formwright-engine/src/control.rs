use crate::validators::{ValidationError, Validator};
use formwright_types::FieldValue;

/// The live, stateful counterpart of a field.
#[derive(Debug, Clone)]
pub struct Control {
    value: FieldValue,
    validators: Vec<Validator>,
    disabled: bool,
    touched: bool,
}

impl Control {
    pub(crate) fn new(value: FieldValue, validators: Vec<Validator>) -> Self {
        Self {
            value,
            validators,
            disabled: false,
            touched: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Failed constraints. Always empty while disabled.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        if self.disabled {
            return Vec::new();
        }
        self.validators
            .iter()
            .filter_map(|v| v.check(&self.value).err())
            .collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.disabled || self.validators.iter().all(|v| v.check(&self.value).is_ok())
    }

    pub(crate) fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    pub(crate) fn set_validators(&mut self, validators: Vec<Validator>) {
        self.validators = validators;
    }

    /// Returns true if the state changed.
    pub(crate) fn set_disabled(&mut self, disabled: bool) -> bool {
        let changed = self.disabled != disabled;
        self.disabled = disabled;
        changed
    }

    pub(crate) fn mark_touched(&mut self) {
        self.touched = true;
    }
}
