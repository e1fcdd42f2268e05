//! Control registry: one live control per non-section field.
//!
//! The registry owns the current-values map the condition evaluator reads.
//! Values only change through [`ControlRegistry::set_value`], which also runs
//! the field's value listeners. Enabling and disabling go through
//! [`ControlRegistry::set_disabled_silently`], which never notifies, so the
//! evaluator can apply its decisions without triggering itself again.

use crate::control::Control;
use crate::validators::derive_validators;
use formwright_model::FieldDefinition;
use formwright_types::{FieldId, FieldValue};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Callback run after a control's value changes through the notifying path.
pub type ValueListener = Box<dyn FnMut(&FieldId, &FieldValue) + Send>;

/// Live controls keyed by field id.
#[derive(Default)]
pub struct ControlRegistry {
    controls: HashMap<FieldId, Control>,
    values: BTreeMap<FieldId, FieldValue>,
    listeners: HashMap<FieldId, Vec<ValueListener>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the control for `field`, seeded from its stored value or the
    /// type default.
    ///
    /// Returns false for sections and for fields that already have a control.
    pub fn attach(&mut self, field: &FieldDefinition) -> bool {
        if !field.has_control() || self.controls.contains_key(&field.id) {
            return false;
        }
        let value = field.initial_value();
        let control = Control::new(value.clone(), derive_validators(field));
        self.values.insert(field.id.clone(), value);
        self.controls.insert(field.id.clone(), control);
        debug!("Attached control for field {} ({})", field.id, field.field_type);
        true
    }

    /// Removes a control together with its value and listeners.
    pub fn detach(&mut self, id: &FieldId) -> Option<Control> {
        let control = self.controls.remove(id)?;
        self.values.remove(id);
        self.listeners.remove(id);
        debug!("Detached control for field {}", id);
        Some(control)
    }

    /// Detaches every control.
    pub fn clear(&mut self) {
        self.controls.clear();
        self.values.clear();
        self.listeners.clear();
    }

    /// Recomputes a control's constraints in place. The value, touched and
    /// disabled state, and listeners are kept.
    pub fn reapply_validators(&mut self, field: &FieldDefinition) -> bool {
        match self.controls.get_mut(&field.id) {
            Some(control) => {
                control.set_validators(derive_validators(field));
                true
            }
            None => false,
        }
    }

    /// Writes a value through the notifying path: the current-values map is
    /// updated and the field's listeners run.
    ///
    /// Returns false if the field has no control.
    pub fn set_value(&mut self, id: &FieldId, value: FieldValue) -> bool {
        let Some(control) = self.controls.get_mut(id) else {
            return false;
        };
        control.set_value(value.clone());
        self.values.insert(id.clone(), value);
        if let Some(listeners) = self.listeners.get_mut(id) {
            let value = &self.values[id];
            for listener in listeners.iter_mut() {
                listener(id, value);
            }
        }
        true
    }

    /// Replaces a control's value without running its listeners.
    ///
    /// Returns false if the field has no control.
    pub fn reseed_silently(&mut self, id: &FieldId, value: FieldValue) -> bool {
        let Some(control) = self.controls.get_mut(id) else {
            return false;
        };
        control.set_value(value.clone());
        self.values.insert(id.clone(), value);
        true
    }

    /// Enables or disables a control without notifying anyone. The value is
    /// left untouched so re-enabling restores it.
    ///
    /// Returns true if the state changed.
    pub fn set_disabled_silently(&mut self, id: &FieldId, disabled: bool) -> bool {
        self.controls
            .get_mut(id)
            .is_some_and(|control| control.set_disabled(disabled))
    }

    /// Registers a value listener for an attached control.
    pub fn subscribe(&mut self, id: &FieldId, listener: ValueListener) -> bool {
        if !self.controls.contains_key(id) {
            return false;
        }
        self.listeners.entry(id.clone()).or_default().push(listener);
        true
    }

    /// Number of listeners registered on a control.
    pub fn listener_count(&self, id: &FieldId) -> usize {
        self.listeners.get(id).map_or(0, Vec::len)
    }

    pub fn touch(&mut self, id: &FieldId) -> bool {
        match self.controls.get_mut(id) {
            Some(control) => {
                control.mark_touched();
                true
            }
            None => false,
        }
    }

    pub fn mark_all_touched(&mut self) {
        for control in self.controls.values_mut() {
            control.mark_touched();
        }
    }

    pub fn get(&self, id: &FieldId) -> Option<&Control> {
        self.controls.get(id)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.controls.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Ids of every attached control, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.controls.keys()
    }

    /// The current-values map, disabled controls included.
    pub fn values(&self) -> &BTreeMap<FieldId, FieldValue> {
        &self.values
    }

    /// True when every enabled control passes its constraints.
    pub fn is_valid(&self) -> bool {
        self.controls.values().all(Control::is_valid)
    }
}
