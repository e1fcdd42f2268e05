//! Schema store: the ordered fields and groups, plus the field selected for
//! editing.
//!
//! The store only manages structure. Keeping controls in step is the
//! engine's job.

use formwright_model::{FieldDefinition, FormSchema, Group};
use formwright_types::{FieldId, FieldValue};

const COPY_SUFFIX: &str = " (copy)";

#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    fields: Vec<FieldDefinition>,
    groups: Vec<Group>,
    selected: Option<usize>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schema(schema: FormSchema) -> Self {
        Self {
            fields: schema.fields,
            groups: schema.groups,
            selected: None,
        }
    }

    /// Snapshot of the current schema.
    pub fn to_schema(&self) -> FormSchema {
        FormSchema::new(self.fields.clone(), self.groups.clone())
    }

    /// Replaces everything and clears the selection.
    pub fn replace(&mut self, schema: FormSchema) {
        *self = Self::from_schema(schema);
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn field_at(&self, index: usize) -> Option<&FieldDefinition> {
        self.fields.get(index)
    }

    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FieldId) -> bool {
        self.position(id).is_some()
    }

    // ── Fields ───────────────────────────────────────────────────

    /// Appends a field and returns its index.
    pub fn push_field(&mut self, field: FieldDefinition) -> usize {
        self.fields.push(field);
        self.fields.len() - 1
    }

    /// Copies the field at `index` under a fresh id, suffixes its label and
    /// inserts the copy right after the original.
    pub fn duplicate(&mut self, index: usize) -> Option<&FieldDefinition> {
        let mut copy = self.fields.get(index)?.clone();
        copy.id = FieldId::generate();
        copy.label.push_str(COPY_SUFFIX);
        self.fields.insert(index + 1, copy);
        if let Some(sel) = self.selected.filter(|&sel| sel > index) {
            self.selected = Some(sel + 1);
        }
        self.fields.get(index + 1)
    }

    /// Removes the field at `index`. A selection pointing at it is cleared.
    pub fn remove(&mut self, index: usize) -> Option<FieldDefinition> {
        if index >= self.fields.len() {
            return None;
        }
        let removed = self.fields.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        Some(removed)
    }

    /// Stores the latest value of a field so it is saved with the schema.
    pub fn set_value(&mut self, id: &FieldId, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|f| &f.id == id) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    // ── Ordering ─────────────────────────────────────────────────

    /// Swaps a field with its predecessor. No-op at index 0.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.fields.len() {
            return false;
        }
        self.reorder(index, index - 1)
    }

    /// Swaps a field with its successor. No-op at the last index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.fields.len() {
            return false;
        }
        self.reorder(index, index + 1)
    }

    /// Moves the field at `from` so it ends up at `to`, shifting the fields
    /// in between. Both indices are clamped to the list, as a drop past the
    /// end lands on the last slot.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let Some(last) = self.fields.len().checked_sub(1) else {
            return false;
        };
        let (from, to) = (from.min(last), to.min(last));
        if from == to {
            return false;
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        self.selected = self.selected.map(|sel| {
            if sel == from {
                to
            } else if from < sel && sel <= to {
                sel - 1
            } else if to <= sel && sel < from {
                sel + 1
            } else {
                sel
            }
        });
        true
    }

    // ── Selection ────────────────────────────────────────────────

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_field(&self) -> Option<&FieldDefinition> {
        self.selected.and_then(|i| self.fields.get(i))
    }

    pub(crate) fn selected_field_mut(&mut self) -> Option<&mut FieldDefinition> {
        self.selected.and_then(|i| self.fields.get_mut(i))
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.fields.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Groups ───────────────────────────────────────────────────

    pub fn push_group(&mut self, group: Group) -> &Group {
        self.groups.push(group);
        &self.groups[self.groups.len() - 1]
    }

    /// Removes a group. Fields that reference it keep the reference.
    pub fn remove_group(&mut self, index: usize) -> Option<Group> {
        (index < self.groups.len()).then(|| self.groups.remove(index))
    }

    pub fn rename_group(&mut self, index: usize, title: impl Into<String>) -> bool {
        match self.groups.get_mut(index) {
            Some(group) => {
                group.title = title.into();
                true
            }
            None => false,
        }
    }
}
