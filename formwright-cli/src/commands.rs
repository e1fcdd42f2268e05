//! Applies one CLI command to the engine.

use crate::args::Command;
use crate::render::render_form;
use anyhow::{Context, Result, anyhow, bail};
use formwright_engine::{EngineError, FieldSpec, FormEngine};
use formwright_model::{ConditionalRule, FieldDefinition, FieldMeta, FieldType};
use formwright_storage::SchemaStorage;
use formwright_submit::{SubmissionOutcome, Submitter, SubmitterConfig};
use formwright_types::{FieldId, FieldValue, parse_number};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::debug;

/// Runs `command` and returns what should be printed.
pub async fn run<S: SchemaStorage>(
    engine: &mut FormEngine<S>,
    submit: &SubmitterConfig,
    command: Command,
) -> Result<String> {
    debug!("Running {:?}", command);
    match command {
        Command::Show => Ok(render_form(engine)),

        Command::Add {
            field_type,
            label,
            required,
            options,
            placeholder,
            group,
            min,
            max,
            pattern,
            multiple,
        } => {
            let mut spec = FieldSpec::of(field_type, label);
            spec.required = Some(required);
            spec.placeholder = placeholder;
            spec.group = group;
            if !options.is_empty() {
                spec.options = Some(options);
            }
            if min.is_some() || max.is_some() || pattern.is_some() || multiple {
                spec.meta = Some(FieldMeta {
                    min: min.map(|m| parse_bound(field_type, "--min", &m)).transpose()?,
                    max: max.map(|m| parse_bound(field_type, "--max", &m)).transpose()?,
                    pattern,
                    multiple,
                });
            }
            let id = engine.add_field(spec);
            Ok(format!("Added {field_type} field {id}"))
        }

        Command::Section { title } => {
            let id = engine.add_section(title.as_deref());
            Ok(format!("Added section {id}"))
        }

        Command::Group { title } => {
            let id = engine.add_group(title.as_deref());
            Ok(format!("Added group {id}"))
        }

        Command::Remove { index } => {
            let removed = engine
                .remove_field(index)
                .ok_or_else(|| anyhow!("No field at index {index}"))?;
            Ok(format!("Removed field {} ({})", removed.id, removed.label))
        }

        Command::Duplicate { index } => {
            let id = engine
                .duplicate_field(index)
                .ok_or_else(|| anyhow!("No field at index {index}"))?;
            Ok(format!("Duplicated field {index} as {id}"))
        }

        Command::Move { from, to } => {
            if from >= engine.fields().len() {
                bail!("No field at index {from}");
            }
            if engine.reorder(from, to) {
                Ok(format!("Moved field {from} to {}", to.min(engine.fields().len() - 1)))
            } else {
                Ok("Nothing to move".to_string())
            }
        }

        Command::Set { field_id, value } => {
            let id = FieldId::parse(&field_id)?;
            let field = engine
                .field(&id)
                .ok_or_else(|| EngineError::FieldNotFound(id.clone()))?;
            let value = parse_input(field, &value);
            engine.set_value(&id, value)?;

            let mut out = format!("Set {id}");
            for error in engine.errors(&id) {
                let _ = write!(out, "\n  ! {error}");
            }
            Ok(out)
        }

        Command::When {
            target,
            source,
            operator,
            value,
            action,
        } => {
            let source = FieldId::parse(&source)?;
            if engine.field(&source).is_none() {
                bail!("No field with id {source}");
            }
            let rule = ConditionalRule::new(source.clone(), operator, value.clone(), action);
            let target = set_rule(engine, &target, Some(rule))?;
            Ok(format!(
                "{target}: {action} when {source} {operator} \"{value}\""
            ))
        }

        Command::Always { target } => {
            let target = set_rule(engine, &target, None)?;
            Ok(format!("{target}: rule removed"))
        }

        Command::Export { dir } => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let path = engine
                .export_to_dir(&dir)
                .with_context(|| format!("Failed to export into {}", dir.display()))?;
            Ok(format!("Exported to {}", path.display()))
        }

        Command::Import { file } => {
            engine.import_schema_from_file(&file).await?;
            Ok(format!("Imported {} field(s)", engine.fields().len()))
        }

        Command::Submit { endpoint } => submit_form(engine, submit, endpoint).await,

        Command::Reset => {
            engine.reset();
            Ok("Form reset".to_string())
        }
    }
}

/// Converts typed-in text into the value a field of this type holds.
///
/// Numbers that don't parse stay text so validation sees them as entered.
pub fn parse_input(field: &FieldDefinition, raw: &str) -> FieldValue {
    match field.field_type {
        FieldType::Checkbox => FieldValue::Bool(matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "1"
        )),
        FieldType::Number if !raw.trim().is_empty() => {
            let n = parse_number(raw);
            if n.is_finite() {
                FieldValue::Number(n)
            } else {
                FieldValue::text(raw)
            }
        }
        FieldType::Select if field.meta.multiple => FieldValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => FieldValue::text(raw),
    }
}

/// Number bounds must be finite so they survive the JSON round trip.
fn parse_bound(field_type: FieldType, flag: &str, raw: &str) -> Result<FieldValue> {
    match field_type {
        FieldType::Number => {
            let n = parse_number(raw);
            if raw.trim().is_empty() || !n.is_finite() {
                bail!("{flag} for a number field must be a finite number, got {raw:?}");
            }
            Ok(FieldValue::Number(n))
        }
        _ => Ok(FieldValue::text(raw)),
    }
}

fn set_rule<S: SchemaStorage>(
    engine: &mut FormEngine<S>,
    target: &str,
    rule: Option<ConditionalRule>,
) -> Result<FieldId> {
    let target = FieldId::parse(target)?;
    let index = engine
        .fields()
        .iter()
        .position(|f| f.id == target)
        .ok_or_else(|| EngineError::FieldNotFound(target.clone()))?;
    engine.select_field(index);
    engine.draft_mut().conditional = rule;
    engine.update_field();
    engine.clear_selection();
    Ok(target)
}

async fn submit_form<S: SchemaStorage>(
    engine: &mut FormEngine<S>,
    config: &SubmitterConfig,
    endpoint: Option<String>,
) -> Result<String> {
    let payload = match engine.prepare_submission() {
        Ok(payload) => payload,
        Err(EngineError::InvalidForm { invalid }) => {
            let mut message = format!("Form is invalid: {} field(s) need attention", invalid.len());
            for id in &invalid {
                let label = engine.field(id).map(|f| f.label.as_str()).unwrap_or("");
                for error in engine.errors(id) {
                    let _ = write!(message, "\n  {id} ({label}): {error}");
                }
            }
            bail!(message);
        }
        Err(e) => return Err(e.into()),
    };

    let mut config = config.clone();
    if endpoint.is_some() {
        config.endpoint = endpoint;
    }
    let submitter = Submitter::from_config(&config)?;
    match submitter.submit(&payload).await {
        SubmissionOutcome::Posted { status } => Ok(format!("Submitted (HTTP {status})")),
        SubmissionOutcome::Preview(json) => {
            Ok(format!("No endpoint configured. Would submit:\n{json}"))
        }
        SubmissionOutcome::Failed(message) => bail!(message),
    }
}
