use crate::errors::{RenderError, Result};
use crate::model::{
    App, AppId, Field, FieldId, Message, MessageId, Metric, MetricId, Span, SpanId,
};

/// Arena holding one loaded schema document
///
/// Built once by [`SchemaBuilder`](super::SchemaBuilder) and immutable
/// afterwards; every query takes `&Schema`, so a fully built schema can be
/// shared across threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) package: String,
    pub(crate) apps: Vec<App>,
    pub(crate) spans: Vec<Span>,
    pub(crate) messages: Vec<Message>,
    pub(crate) fields: Vec<Field>,
    pub(crate) metrics: Vec<Metric>,
}

impl Schema {
    /// Package the document was declared in
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Get an App by id
    ///
    /// # Errors
    ///
    /// Returns `AppNotFound` if the id does not belong to this schema.
    pub fn app(&self, id: AppId) -> Result<&App> {
        self.apps.get(id.0).ok_or_else(|| RenderError::AppNotFound {
            app: id.to_string(),
        })
    }

    /// Get a Span by id
    ///
    /// # Errors
    ///
    /// Returns `SpanNotFound` if the id does not belong to this schema.
    pub fn span(&self, id: SpanId) -> Result<&Span> {
        self.spans.get(id.0).ok_or_else(|| RenderError::SpanNotFound {
            span: id.to_string(),
        })
    }

    /// Get a Message by id
    ///
    /// # Errors
    ///
    /// Returns `MessageNotFound` if the id does not belong to this schema.
    pub fn message(&self, id: MessageId) -> Result<&Message> {
        self.messages
            .get(id.0)
            .ok_or_else(|| RenderError::MessageNotFound {
                message: id.to_string(),
            })
    }

    /// Get a Field by id
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the id does not belong to this schema.
    pub fn field(&self, id: FieldId) -> Result<&Field> {
        self.fields.get(id.0).ok_or_else(|| RenderError::FieldNotFound {
            field: id.to_string(),
        })
    }

    /// Get a Metric by id
    ///
    /// # Errors
    ///
    /// Returns `MetricNotFound` if the id does not belong to this schema.
    pub fn metric(&self, id: MetricId) -> Result<&Metric> {
        self.metrics
            .get(id.0)
            .ok_or_else(|| RenderError::MetricNotFound {
                metric: id.to_string(),
            })
    }

    /// All apps with their ids, in declaration order
    pub fn apps(&self) -> impl Iterator<Item = (AppId, &App)> {
        self.apps.iter().enumerate().map(|(i, app)| (AppId(i), app))
    }

    /// All metrics with their ids, in declaration order
    pub fn metrics(&self) -> impl Iterator<Item = (MetricId, &Metric)> {
        self.metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| (MetricId(i), metric))
    }

    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Find an app by name
    ///
    /// # Errors
    ///
    /// Returns `AppNotFound` if no app carries the name.
    pub fn find_app(&self, name: &str) -> Result<AppId> {
        self.apps
            .iter()
            .position(|app| app.name == name)
            .map(AppId)
            .ok_or_else(|| RenderError::AppNotFound {
                app: name.to_string(),
            })
    }

    /// Find a span of an app by name
    ///
    /// # Errors
    ///
    /// Returns `AppNotFound` / `SpanNotFound` when either lookup fails.
    pub fn find_span(&self, app: &str, span: &str) -> Result<SpanId> {
        let app_id = self.find_app(app)?;
        self.app(app_id)?
            .spans
            .iter()
            .copied()
            .find(|id| self.spans[id.0].name == span)
            .ok_or_else(|| RenderError::SpanNotFound {
                span: format!("{}.{}", app, span),
            })
    }

    /// Find a message of a span by name
    ///
    /// # Errors
    ///
    /// Returns `MessageNotFound` if the span has no message with that name.
    pub fn find_message(&self, span: SpanId, name: &str) -> Result<MessageId> {
        let owner = self.span(span)?;
        owner
            .messages
            .iter()
            .copied()
            .find(|id| self.messages[id.0].name == name)
            .ok_or_else(|| RenderError::MessageNotFound {
                message: format!("{}.{}", owner.name, name),
            })
    }

    /// Find a field of a message by name
    ///
    /// # Errors
    ///
    /// Returns `FieldNotFound` if the message has no field with that name.
    pub fn find_field(&self, message: MessageId, name: &str) -> Result<FieldId> {
        let owner = self.message(message)?;
        owner
            .fields
            .iter()
            .copied()
            .find(|id| self.fields[id.0].name == name)
            .ok_or_else(|| RenderError::FieldNotFound {
                field: format!("{}.{}", owner.name, name),
            })
    }

    /// Messages of a span in declaration order
    ///
    /// # Errors
    ///
    /// Returns `SpanNotFound` for a foreign id.
    pub fn span_messages(
        &self,
        span: SpanId,
    ) -> Result<impl Iterator<Item = (MessageId, &Message)>> {
        let owner = self.span(span)?;
        Ok(owner.messages.iter().map(move |id| (*id, &self.messages[id.0])))
    }

    /// Fields of a message in declaration order
    ///
    /// # Errors
    ///
    /// Returns `MessageNotFound` for a foreign id.
    pub fn message_fields(
        &self,
        message: MessageId,
    ) -> Result<impl Iterator<Item = (FieldId, &Field)>> {
        let owner = self.message(message)?;
        Ok(owner.fields.iter().map(move |id| (*id, &self.fields[id.0])))
    }
}
