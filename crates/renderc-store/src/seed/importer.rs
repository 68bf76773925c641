//! Snapshot importer orchestration
//!
//! Builds an immutable `Schema` from a validated snapshot through
//! `SchemaBuilder`. Proxy links are resolved in a second pass so a proxy may
//! name a span declared later in the document.

use crate::errors::Result;
use crate::seed::format_v0::{resolve_field_type, SnapshotMessage, SnapshotV0};
use crate::seed::{parse_snapshot_file, parse_snapshot_str};
use renderc_core::errors::{ExError, RenderError};
use renderc_core::{log_op_end, log_op_error, log_op_start};
use renderc_core::{FieldSpec, MessageId, MetricField, Schema, SchemaBuilder, SpanId, SpanOptions};
use std::path::Path;
use std::time::Instant;

const OP: &str = "import_snapshot";

/// Import a snapshot file
///
/// This is the main entry point for loading a schema. It:
/// 1. Parses and validates the snapshot YAML
/// 2. Adds apps, spans, messages and fields in document order
/// 3. Links proxy spans to their remote spans
/// 4. Adds metrics and freezes the schema
///
/// # Errors
///
/// Returns the parse errors of [`parse_snapshot_file`] and every fatal
/// configuration error of the schema graph, converted to `ExError`.
pub fn import_snapshot_file(path: &Path) -> Result<Schema> {
    let snapshot = parse_snapshot_file(path)?;
    import_snapshot(&snapshot)
}

/// Import a snapshot from a YAML string
///
/// # Errors
///
/// As [`import_snapshot_file`], minus file access.
pub fn import_snapshot_str(content: &str) -> Result<Schema> {
    let snapshot = parse_snapshot_str(content)?;
    import_snapshot(&snapshot)
}

/// Import an already parsed snapshot
///
/// # Errors
///
/// Returns the fatal configuration errors of the schema graph.
pub fn import_snapshot(snapshot: &SnapshotV0) -> Result<Schema> {
    log_op_start!(OP, package = %snapshot.package);
    let start = Instant::now();

    let schema = build_schema(snapshot).map_err(|e| {
        log_op_error!(OP, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(
        OP,
        duration_ms = start.elapsed().as_millis() as u64,
        app_count = schema.apps().count(),
        span_count = schema.span_count(),
        message_count = schema.message_count(),
        metric_count = schema.metrics().count()
    );

    Ok(schema)
}

fn build_schema(snapshot: &SnapshotV0) -> Result<Schema> {
    let mut builder = SchemaBuilder::new(snapshot.package.clone());
    let mut proxies: Vec<(SpanId, &str, &str)> = Vec::new();

    for app in &snapshot.apps {
        let app_id = builder.add_app(&app.name).map_err(|e| in_app(e, &app.name))?;

        for span in &app.spans {
            let options = SpanOptions {
                is_singleton: span.singleton,
                conn_hash: span.conn_hash,
                pool_size: span.pool_size,
            };
            let span_id = builder
                .add_span(app_id, &span.name, options)
                .map_err(|e| in_app(e, &app.name).with_span(span.name.clone()))?;

            if let Some(remote) = &span.proxy {
                proxies.push((span_id, remote.app.as_str(), remote.span.as_str()));
            }

            for message in &span.messages {
                add_message(&mut builder, span_id, message).map_err(|e| {
                    in_app(e, &app.name)
                        .with_span(span.name.clone())
                        .with_message_name(message.name.clone())
                })?;
            }
        }
    }

    for (span_id, remote_app, remote_span) in proxies {
        let remote = builder
            .find_span(remote_app, remote_span)
            .map_err(|e| ExError::from(e).with_op(OP))?;
        builder
            .link_proxy(span_id, remote)
            .map_err(|e| ExError::from(e).with_op(OP))?;
    }

    for metric in &snapshot.metrics {
        let fields = metric
            .fields
            .iter()
            .map(|f| {
                let qualified = format!("{}.{}", metric.name, f.name);
                resolve_field_type(&qualified, f.kind.as_deref(), f.short_string).map(
                    |field_type| MetricField {
                        name: f.name.clone(),
                        field_type,
                    },
                )
            })
            .collect::<std::result::Result<Vec<_>, RenderError>>()
            .map_err(|e| ExError::from(e).with_op(OP))?;
        builder
            .add_metric(&metric.name, fields)
            .map_err(|e| ExError::from(e).with_op(OP))?;
    }

    let schema = builder.build().map_err(|e| ExError::from(e).with_op(OP))?;
    Ok(schema)
}

fn add_message(
    builder: &mut SchemaBuilder,
    span: SpanId,
    message: &SnapshotMessage,
) -> std::result::Result<MessageId, RenderError> {
    let id = builder.add_message(span, &message.name, message.kind, message.rpc_id)?;

    let mut reference = None;
    for field in &message.fields {
        let qualified = format!("{}.{}", message.name, field.name);
        let field_type = resolve_field_type(&qualified, field.kind.as_deref(), field.short_string)?;
        let mut spec = FieldSpec::new(field.id, field.name.clone(), field_type);
        spec.array_size = field.array;
        let field_id = builder.add_field(id, spec)?;
        if message.reference.as_deref() == Some(field.name.as_str()) {
            reference = Some(field_id);
        }
    }

    match (&message.reference, reference) {
        (Some(_), Some(field_id)) => {
            builder.set_reference(id, field_id, message.reference_embedded)?
        }
        (Some(name), None) => {
            return Err(RenderError::ReferenceFieldNotMember {
                message: message.name.clone(),
                field: name.clone(),
            })
        }
        (None, _) => builder.set_reference_embedded(id, message.reference_embedded)?,
    }

    Ok(id)
}

fn in_app(err: RenderError, app: &str) -> ExError {
    ExError::from(err).with_op(OP).with_app(app.to_string())
}
