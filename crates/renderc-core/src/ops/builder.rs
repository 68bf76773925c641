use std::collections::HashSet;

use super::store::Schema;
use crate::errors::{RenderError, Result};
use crate::model::{
    App, AppId, Field, FieldId, FieldType, Message, MessageId, MessageKind, Metric,
    MetricField, MetricId, Span, SpanId,
};

/// Span flags supplied by the loader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanOptions {
    pub is_singleton: bool,
    pub conn_hash: bool,
    pub pool_size: Option<i64>,
}

/// Field declaration supplied by the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: u32,
    pub name: String,
    pub field_type: FieldType,
    pub array_size: Option<u32>,
}

impl FieldSpec {
    pub fn new(id: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id,
            name: name.into(),
            field_type,
            array_size: None,
        }
    }

    pub fn array(mut self, len: u32) -> Self {
        self.array_size = Some(len);
        self
    }
}

/// Incremental constructor for a [`Schema`]
///
/// Local invariants (unique names and field ids, positive array lengths,
/// reference membership) are checked as entities are added; cross-entity
/// invariants (proxy linkage, embedded references) are checked by
/// [`build`](SchemaBuilder::build).
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            schema: Schema {
                package: package.into(),
                ..Schema::default()
            },
        }
    }

    /// Add an app
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if an app with that name exists.
    pub fn add_app(&mut self, name: &str) -> Result<AppId> {
        if self.schema.apps.iter().any(|app| app.name == name) {
            return Err(RenderError::DuplicateName {
                entity: "app",
                name: name.to_string(),
            });
        }
        self.schema.apps.push(App::new(name));
        Ok(AppId(self.schema.apps.len() - 1))
    }

    /// Add a span to an app
    ///
    /// # Errors
    ///
    /// Returns `AppNotFound` for a foreign app id and `DuplicateName` if the
    /// app already has a span with that name.
    pub fn add_span(&mut self, app: AppId, name: &str, options: SpanOptions) -> Result<SpanId> {
        let owner = self.schema.app(app)?;
        if owner
            .spans
            .iter()
            .any(|id| self.schema.spans[id.0].name == name)
        {
            return Err(RenderError::DuplicateName {
                entity: "span",
                name: format!("{}.{}", owner.name, name),
            });
        }

        let mut span = Span::new(app, name);
        span.is_singleton = options.is_singleton;
        span.conn_hash = options.conn_hash;
        span.pool_size = options.pool_size;

        let id = SpanId(self.schema.spans.len());
        self.schema.spans.push(span);
        self.schema.apps[app.0].spans.push(id);
        Ok(id)
    }

    /// Look up a span already added to the schema under construction
    ///
    /// # Errors
    ///
    /// Returns `AppNotFound` or `SpanNotFound` when either name is unknown.
    pub fn find_span(&self, app: &str, span: &str) -> Result<SpanId> {
        self.schema.find_span(app, span)
    }

    /// Mark a span as a proxy whose lifecycle is satisfied by `remote`
    ///
    /// # Errors
    ///
    /// Returns `SelfReferentialProxy` when `remote == span`, or a lookup
    /// error for foreign ids.
    pub fn link_proxy(&mut self, span: SpanId, remote: SpanId) -> Result<()> {
        self.schema.span(remote)?;
        let name = self.schema.span(span)?.name.clone();
        if span == remote {
            return Err(RenderError::SelfReferentialProxy { span: name });
        }
        let proxy = &mut self.schema.spans[span.0];
        proxy.is_proxy = true;
        proxy.remote_span = Some(remote);
        Ok(())
    }

    /// Add a message to a span
    ///
    /// # Errors
    ///
    /// Returns `SpanNotFound` for a foreign span id and `DuplicateName` if the
    /// span already has a message with that name.
    pub fn add_message(
        &mut self,
        span: SpanId,
        name: &str,
        kind: MessageKind,
        rpc_id: u32,
    ) -> Result<MessageId> {
        let owner = self.schema.span(span)?;
        if owner
            .messages
            .iter()
            .any(|id| self.schema.messages[id.0].name == name)
        {
            return Err(RenderError::DuplicateName {
                entity: "message",
                name: format!("{}.{}", owner.name, name),
            });
        }

        let id = MessageId(self.schema.messages.len());
        self.schema
            .messages
            .push(Message::new(span, name, kind, rpc_id));
        self.schema.spans[span.0].messages.push(id);
        Ok(id)
    }

    /// Add a field to a message
    ///
    /// # Errors
    ///
    /// - `DuplicateFieldId` / `DuplicateName` on collisions within the message
    /// - `InvalidArraySize` for a zero-length array
    /// - `UnresolvedFieldType` for a zero-length short string
    pub fn add_field(&mut self, message: MessageId, spec: FieldSpec) -> Result<FieldId> {
        let owner = self.schema.message(message)?;
        let qualified = format!("{}.{}", owner.name, spec.name);

        for existing in owner.fields.iter().map(|id| &self.schema.fields[id.0]) {
            if existing.id == spec.id {
                return Err(RenderError::DuplicateFieldId {
                    message: owner.name.clone(),
                    id: spec.id,
                });
            }
            if existing.name == spec.name {
                return Err(RenderError::DuplicateName {
                    entity: "field",
                    name: qualified,
                });
            }
        }
        if spec.array_size == Some(0) {
            return Err(RenderError::InvalidArraySize { field: qualified });
        }
        if matches!(spec.field_type, FieldType::ShortString { len: 0 }) {
            return Err(RenderError::UnresolvedFieldType {
                field: qualified,
                reason: "short string length must be positive".to_string(),
            });
        }

        let mut field = Field::new(message, spec.id, spec.name, spec.field_type);
        field.array_size = spec.array_size;

        let id = FieldId(self.schema.fields.len());
        self.schema.fields.push(field);
        self.schema.messages[message.0].fields.push(id);
        Ok(id)
    }

    /// Designate the correlation key of a message
    ///
    /// # Errors
    ///
    /// Returns `ReferenceFieldNotMember` if `field` belongs to another message.
    pub fn set_reference(
        &mut self,
        message: MessageId,
        field: FieldId,
        embedded: bool,
    ) -> Result<()> {
        let owner = self.schema.message(message)?;
        let target = self.schema.field(field)?;
        if target.message != message {
            return Err(RenderError::ReferenceFieldNotMember {
                message: owner.name.clone(),
                field: target.name.clone(),
            });
        }
        let msg = &mut self.schema.messages[message.0];
        msg.reference_field = Some(field);
        msg.reference_embedded = embedded;
        Ok(())
    }

    /// Mark a message as carrying its reference inline without naming the
    /// field; `build` rejects this unless a reference field is set later.
    pub fn set_reference_embedded(&mut self, message: MessageId, embedded: bool) -> Result<()> {
        self.schema.message(message)?;
        self.schema.messages[message.0].reference_embedded = embedded;
        Ok(())
    }

    /// Add a document-level metric
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if a metric with that name exists.
    pub fn add_metric(&mut self, name: &str, fields: Vec<MetricField>) -> Result<MetricId> {
        if self.schema.metrics.iter().any(|metric| metric.name == name) {
            return Err(RenderError::DuplicateName {
                entity: "metric",
                name: name.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(RenderError::DuplicateName {
                    entity: "metric field",
                    name: format!("{}.{}", name, field.name),
                });
            }
        }
        let mut metric = Metric::new(name);
        metric.fields = fields;
        self.schema.metrics.push(metric);
        Ok(MetricId(self.schema.metrics.len() - 1))
    }

    /// Validate cross-entity invariants and freeze the schema
    ///
    /// # Errors
    ///
    /// - `NotAProxy` for a proxy span without a remote span
    /// - `EmbeddedReferenceWithoutField` for a message that embeds a
    ///   reference but names no reference field
    pub fn build(self) -> Result<Schema> {
        for span in &self.schema.spans {
            if span.is_proxy && span.remote_span.is_none() {
                return Err(RenderError::NotAProxy {
                    span: span.name.clone(),
                });
            }
        }
        for message in &self.schema.messages {
            if message.reference_embedded && message.reference_field.is_none() {
                return Err(RenderError::EmbeddedReferenceWithoutField {
                    message: message.name.clone(),
                });
            }
        }
        tracing::debug!(
            package = %self.schema.package,
            apps = self.schema.apps.len(),
            spans = self.schema.spans.len(),
            messages = self.schema.messages.len(),
            "schema built"
        );
        Ok(self.schema)
    }
}
