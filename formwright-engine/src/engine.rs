//! The form engine: keeps the schema store and the control registry in step.
//!
//! Every mutation runs the same tail:
//! 1. the control registry is attached/reapplied/detached for the touched fields
//! 2. the condition evaluator runs over the current values and its decisions
//!    are applied silently
//! 3. the schema is autosaved
//!
//! There are no callbacks between the pieces, so evaluation can never
//! re-enter itself.

use crate::config::EngineConfig;
use crate::control::Control;
use crate::draft::{FieldDraft, FieldSpec};
use crate::error::{EngineError, EngineResult};
use crate::evaluator;
use crate::io::read_schema_file;
use crate::registry::{ControlRegistry, ValueListener};
use crate::store::SchemaStore;
use crate::submission::SubmissionPayload;
use crate::validators::ValidationError;
use formwright_model::{FieldDefinition, FieldType, FormSchema, Group, ImportResult};
use formwright_storage::SchemaStorage;
use formwright_types::{FieldId, FieldValue, GroupId};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Schema store, control registry and persistence wired together.
pub struct FormEngine<S: SchemaStorage> {
    config: EngineConfig,
    storage: S,
    store: SchemaStore,
    registry: ControlRegistry,
    draft: FieldDraft,
}

impl<S: SchemaStorage> FormEngine<S> {
    /// Opens an engine, restoring the saved schema if there is one.
    ///
    /// A missing, unreadable or malformed saved schema is logged and replaced
    /// by a single default email field. Opening never fails.
    pub fn open(config: EngineConfig, storage: S) -> Self {
        let draft = FieldDraft::new(config.default_field_type, config.default_label.clone());
        let mut engine = Self {
            config,
            storage,
            store: SchemaStore::new(),
            registry: ControlRegistry::new(),
            draft,
        };

        match engine.load_saved() {
            Some(schema) => {
                info!(
                    "Restored schema with {} field(s) and {} group(s)",
                    schema.fields.len(),
                    schema.groups.len()
                );
                engine.install(schema);
                engine.reconcile();
            }
            None => {
                info!("No saved schema, seeding default field");
                engine.install(default_schema());
                engine.commit();
            }
        }
        engine
    }

    fn load_saved(&self) -> Option<FormSchema> {
        let blob = match self.storage.load(&self.config.storage_key) {
            Ok(blob) => blob?,
            Err(e) => {
                warn!("Failed to load saved schema: {}", e);
                return None;
            }
        };
        match FormSchema::from_json_text(&blob) {
            Ok(schema) => Some(schema),
            Err(e) => {
                warn!("Ignoring malformed saved schema: {}", e);
                None
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        self.store.fields()
    }

    pub fn groups(&self) -> &[Group] {
        self.store.groups()
    }

    pub fn field(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.store.field(id)
    }

    /// Snapshot of the current schema.
    pub fn schema(&self) -> FormSchema {
        self.store.to_schema()
    }

    pub fn control(&self, id: &FieldId) -> Option<&Control> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    /// The shared current-values map.
    pub fn values(&self) -> &BTreeMap<FieldId, FieldValue> {
        self.registry.values()
    }

    pub fn selected(&self) -> Option<usize> {
        self.store.selected()
    }

    pub fn draft(&self) -> &FieldDraft {
        &self.draft
    }

    /// Mutable builder inputs. Edits take effect on `add_field` or
    /// `update_field`.
    pub fn draft_mut(&mut self) -> &mut FieldDraft {
        &mut self.draft
    }

    /// True when every non-section field has exactly one control and every
    /// control belongs to a non-section field.
    pub fn is_reconciled(&self) -> bool {
        let with_control = self.store.fields().iter().filter(|f| f.has_control());
        let mut expected = 0;
        for field in with_control {
            if !self.registry.contains(&field.id) {
                return false;
            }
            expected += 1;
        }
        expected == self.registry.len() && self.registry.values().len() == expected
    }

    // ── Fields ───────────────────────────────────────────────────

    /// Adds a field built from `spec` over the builder draft. A missing or
    /// already-used id is replaced with a fresh one.
    pub fn add_field(&mut self, spec: FieldSpec) -> FieldId {
        let mut field = spec.merge_over(&self.draft);
        if field.id.is_blank() || self.store.contains(&field.id) {
            field.id = FieldId::generate();
        }
        let id = field.id.clone();
        debug!("Adding {} field {} ({:?})", field.field_type, id, field.label);
        self.registry.attach(&field);
        self.store.push_field(field);
        self.commit();
        id
    }

    /// Copies the field at `index` right after itself with a fresh id and a
    /// control of its own.
    pub fn duplicate_field(&mut self, index: usize) -> Option<FieldId> {
        let copy = self.store.duplicate(index)?.clone();
        debug!("Duplicated field at {} as {}", index, copy.id);
        self.registry.attach(&copy);
        self.commit();
        Some(copy.id)
    }

    /// Removes the field at `index` and its control.
    pub fn remove_field(&mut self, index: usize) -> Option<FieldDefinition> {
        let removed = self.store.remove(index)?;
        self.registry.detach(&removed.id);
        debug!("Removed field {}", removed.id);
        self.commit();
        Some(removed)
    }

    /// Selects a field for editing and loads it into the draft.
    pub fn select_field(&mut self, index: usize) -> bool {
        if !self.store.select(index) {
            return false;
        }
        if let Some(field) = self.store.selected_field() {
            self.draft = FieldDraft::from_field(field);
        }
        true
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    /// Applies the draft to the selected field. No-op without a selection.
    ///
    /// Constraints are recomputed on the existing control so its value and
    /// listeners survive. A type change replaces a blank or untouched default
    /// value with the new type's default, silently. A switch to or from
    /// `section` detaches or attaches the control.
    pub fn update_field(&mut self) -> bool {
        let Some(field) = self.store.selected_field_mut() else {
            return false;
        };
        let previous_type = field.field_type;
        self.draft.apply_to(field);
        let field = field.clone();

        match (self.registry.contains(&field.id), field.has_control()) {
            (true, true) => {
                self.registry.reapply_validators(&field);
                if previous_type != field.field_type {
                    self.reseed_default(&field, previous_type);
                }
            }
            (true, false) => {
                self.registry.detach(&field.id);
            }
            (false, true) => {
                self.registry.attach(&field);
            }
            (false, false) => {}
        }
        debug!("Updated field {}", field.id);
        self.commit();
        true
    }

    /// Gives a retyped control the new type's default when it still holds
    /// nothing of its own.
    fn reseed_default(&mut self, field: &FieldDefinition, previous_type: FieldType) {
        let Some(control) = self.registry.get(&field.id) else {
            return;
        };
        let current = control.value();
        if !current.is_empty() && *current != previous_type.default_value() {
            return;
        }
        let value = field.field_type.default_value();
        debug!("Reseeding {} with the {} default", field.id, field.field_type);
        self.registry.reseed_silently(&field.id, value.clone());
        self.store.set_value(&field.id, value);
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        self.store.move_up(index) && self.committed()
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        self.store.move_down(index) && self.committed()
    }

    /// Drag-and-drop move. Indices are clamped.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        self.store.reorder(from, to) && self.committed()
    }

    /// Appends a section header. Sections never get a control.
    pub fn add_section(&mut self, title: Option<&str>) -> FieldId {
        let section = FieldDefinition::section(title.unwrap_or("Section"));
        let id = section.id.clone();
        self.store.push_field(section);
        self.commit();
        id
    }

    // ── Groups ───────────────────────────────────────────────────

    pub fn add_group(&mut self, title: Option<&str>) -> GroupId {
        let title = match title {
            Some(title) => title.to_string(),
            None => format!("Group {}", self.store.groups().len() + 1),
        };
        let id = self.store.push_group(Group::new(title)).id.clone();
        self.commit();
        id
    }

    /// Removes a group. Field references to it are left dangling.
    pub fn remove_group(&mut self, index: usize) -> Option<Group> {
        let removed = self.store.remove_group(index)?;
        self.commit();
        Some(removed)
    }

    pub fn rename_group(&mut self, index: usize, title: &str) -> bool {
        self.store.rename_group(index, title) && self.committed()
    }

    // ── Values ───────────────────────────────────────────────────

    /// Writes a control's value: listeners run, the stored field value is
    /// updated, rules are re-evaluated and the schema is saved.
    pub fn set_value(&mut self, id: &FieldId, value: impl Into<FieldValue>) -> EngineResult<()> {
        if !self.store.contains(id) {
            return Err(EngineError::FieldNotFound(id.clone()));
        }
        let value = value.into();
        if !self.registry.set_value(id, value.clone()) {
            return Err(EngineError::NoControl(id.clone()));
        }
        self.store.set_value(id, value);
        self.commit();
        Ok(())
    }

    /// Registers a listener on a field's value changes. Listeners survive
    /// `update_field` and are dropped when the field is removed.
    pub fn subscribe(&mut self, id: &FieldId, listener: ValueListener) -> bool {
        self.registry.subscribe(id, listener)
    }

    pub fn touch(&mut self, id: &FieldId) -> bool {
        self.registry.touch(id)
    }

    /// Enabled state of a field. Sections report their rule's decision;
    /// `None` for unknown ids.
    pub fn is_enabled(&self, id: &FieldId) -> Option<bool> {
        match self.registry.get(id) {
            Some(control) => Some(!control.is_disabled()),
            None => self
                .store
                .field(id)
                .map(|field| evaluator::decide(field, self.registry.values())),
        }
    }

    /// Failed constraints of a field's control.
    pub fn errors(&self, id: &FieldId) -> Vec<ValidationError> {
        self.registry.get(id).map(Control::errors).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.registry.is_valid()
    }

    /// Enabled controls failing validation, in field order.
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.store
            .fields()
            .iter()
            .filter(|f| self.registry.get(&f.id).is_some_and(|c| !c.is_valid()))
            .map(|f| f.id.clone())
            .collect()
    }

    /// Every control's value, disabled ones included.
    pub fn raw_values(&self) -> BTreeMap<FieldId, FieldValue> {
        self.registry.values().clone()
    }

    // ── Submission ───────────────────────────────────────────────

    /// Marks every control touched and gathers the raw values, or reports
    /// the enabled controls that fail validation.
    pub fn prepare_submission(&mut self) -> EngineResult<SubmissionPayload> {
        self.registry.mark_all_touched();
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            info!("Submission blocked by {} invalid field(s)", invalid.len());
            return Err(EngineError::InvalidForm { invalid });
        }
        Ok(SubmissionPayload::new(self.raw_values()))
    }

    // ── Import / export ──────────────────────────────────────────

    /// Pretty JSON (2-space indent) for a downloadable export.
    pub fn export_json(&self) -> EngineResult<Vec<u8>> {
        Ok(self.store.to_schema().to_pretty_json()?)
    }

    /// Writes the export file into `dir` and returns its path.
    pub fn export_to_dir(&self, dir: &Path) -> EngineResult<PathBuf> {
        let path = dir.join(&self.config.export_file_name);
        std::fs::write(&path, self.export_json()?)?;
        info!("Exported schema to {}", path.display());
        Ok(path)
    }

    /// Replaces the whole schema with a pasted or uploaded payload.
    ///
    /// On error nothing changes. On success every control is detached, the
    /// new fields are attached and the selection is cleared.
    pub fn import_schema_from_text(&mut self, text: &str) -> ImportResult<()> {
        let schema = FormSchema::from_json_text(text)?;
        info!("Importing schema with {} field(s)", schema.fields.len());
        self.install(schema);
        self.commit();
        Ok(())
    }

    /// Reads an import file, then imports its text.
    pub async fn import_schema_from_file(&mut self, path: &Path) -> ImportResult<()> {
        let text = read_schema_file(path).await?;
        self.import_schema_from_text(&text)
    }

    /// Drops the current schema and starts over from the default field.
    pub fn reset(&mut self) {
        self.install(default_schema());
        self.commit();
    }

    // ── Reconciliation ───────────────────────────────────────────

    fn install(&mut self, schema: FormSchema) {
        self.registry.clear();
        self.store.replace(schema);
        for field in self.store.fields() {
            self.registry.attach(field);
        }
    }

    /// Runs the condition evaluator and applies its decisions silently.
    fn reconcile(&mut self) {
        let decisions = evaluator::evaluate(self.store.fields(), self.registry.values());
        for decision in decisions {
            if self
                .registry
                .set_disabled_silently(&decision.field_id, !decision.enabled)
            {
                debug!(
                    "Field {} {}",
                    decision.field_id,
                    if decision.enabled { "enabled" } else { "disabled" }
                );
            }
        }
    }

    fn commit(&mut self) {
        self.reconcile();
        self.persist();
    }

    fn committed(&mut self) -> bool {
        self.commit();
        true
    }

    /// Autosave. Failures are logged and otherwise ignored.
    fn persist(&self) {
        let blob = match self.store.to_schema().to_compact_json() {
            Ok(blob) => blob,
            Err(e) => {
                warn!("Failed to encode schema for autosave: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.config.storage_key, &blob) {
            warn!("Failed to save schema: {}", e);
        }
    }
}

/// The schema a fresh engine starts with: one email field.
pub fn default_schema() -> FormSchema {
    let mut email = FieldDefinition::email("Email").required();
    email.placeholder = "you@example.com".to_string();
    FormSchema::new(vec![email], Vec::new())
}
