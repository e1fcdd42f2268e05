use formwright_engine::FormEngine;
use formwright_model::FieldType;
use formwright_storage::SchemaStorage;
use std::fmt::Write as _;

/// Plain-text view of the form: one line per field plus indented details.
pub fn render_form<S: SchemaStorage>(engine: &FormEngine<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Form: {} field(s), {} group(s)",
        engine.fields().len(),
        engine.groups().len()
    );

    for (index, group) in engine.groups().iter().enumerate() {
        let _ = writeln!(out, "  group {index}: {} ({})", group.title, group.id);
    }

    for (index, field) in engine.fields().iter().enumerate() {
        let enabled = engine.is_enabled(&field.id).unwrap_or(true);
        let hidden = if enabled { "" } else { " [disabled]" };

        if field.field_type == FieldType::Section {
            let _ = writeln!(out, "{index:>3}. == {} =={hidden} ({})", field.label, field.id);
            continue;
        }

        let required = if field.required { "*" } else { "" };
        let _ = writeln!(
            out,
            "{index:>3}. {}{required} <{}>{hidden} ({})",
            field.label, field.field_type, field.id
        );

        if let Some(control) = engine.control(&field.id) {
            let value = control.value();
            if !value.is_empty() {
                let _ = writeln!(out, "       = {value}");
            }
            if control.is_touched() {
                for error in control.errors() {
                    let _ = writeln!(out, "       ! {error}");
                }
            }
        }
        if !field.options.is_empty() {
            let _ = writeln!(out, "       options: {}", field.options.join(", "));
        }
        if let Some(group) = &field.group {
            let title = engine
                .groups()
                .iter()
                .find(|g| g.id.as_str() == group || g.title == *group)
                .map(|g| g.title.as_str())
                .unwrap_or("missing group");
            let _ = writeln!(out, "       group: {title}");
        }
        if let Some(rule) = &field.conditional {
            let _ = writeln!(
                out,
                "       {} when {} {} \"{}\"",
                rule.action, rule.field_id, rule.operator, rule.value
            );
        }
    }
    out
}
