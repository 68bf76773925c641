use thiserror::Error;

/// Result type alias using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every fatal condition the compiler core can
/// raise. Each kind maps to a stable error code usable by callers, tests and
/// diagnostics output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Schema configuration
    InvalidFieldType,
    InvalidArraySize,
    LayoutOverflow,
    DuplicateId,
    DuplicateName,
    ReferenceNotMember,
    MissingReference,

    // Proxy resolution
    NotAProxy,
    SelfReferentialProxy,
    NoViableStartMessage,
    NoViableEndMessage,

    // Import
    InvalidInput,
    UnsupportedVersion,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidFieldType => "ERR_INVALID_FIELD_TYPE",
            ExErrorKind::InvalidArraySize => "ERR_INVALID_ARRAY_SIZE",
            ExErrorKind::LayoutOverflow => "ERR_LAYOUT_OVERFLOW",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::ReferenceNotMember => "ERR_REFERENCE_NOT_MEMBER",
            ExErrorKind::MissingReference => "ERR_MISSING_REFERENCE",
            ExErrorKind::NotAProxy => "ERR_NOT_A_PROXY",
            ExErrorKind::SelfReferentialProxy => "ERR_SELF_REFERENTIAL_PROXY",
            ExErrorKind::NoViableStartMessage => "ERR_NO_VIABLE_START_MESSAGE",
            ExErrorKind::NoViableEndMessage => "ERR_NO_VIABLE_END_MESSAGE",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnsupportedVersion => "ERR_UNSUPPORTED_VERSION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus the context needed to point at the
/// offending schema entity.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    app: Option<String>,
    span: Option<String>,
    message_name: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            app: None,
            span: None,
            message_name: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add app context
    pub fn with_app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    /// Add span context
    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Add schema message context
    pub fn with_message_name(mut self, name: impl Into<String>) -> Self {
        self.message_name = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the app context, if any
    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    /// Get the span context, if any
    pub fn span(&self) -> Option<&str> {
        self.span.as_deref()
    }

    /// Get the schema message context, if any
    pub fn message_name(&self) -> Option<&str> {
        self.message_name.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(app) = &self.app {
            write!(f, " (app: {})", app)?;
        }
        if let Some(span) = &self.span {
            write!(f, " (span: {})", span)?;
        }
        if let Some(name) = &self.message_name {
            write!(f, " (message: {})", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Fatal configuration errors raised while building or querying a schema
///
/// None of these are recoverable inside the compiler; callers are expected
/// to abort the compilation run and surface the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    // ===== Lookup Errors =====
    #[error("App not found: {app}")]
    AppNotFound { app: String },

    #[error("Span not found: {span}")]
    SpanNotFound { span: String },

    #[error("Message not found: {message}")]
    MessageNotFound { message: String },

    #[error("Field not found: {field}")]
    FieldNotFound { field: String },

    #[error("Metric not found: {metric}")]
    MetricNotFound { metric: String },

    // ===== Schema Configuration Errors =====
    /// Field type declares neither a short string length nor a primitive
    /// kind, or declares both
    #[error("Field {field} has an unresolved type: {reason}")]
    UnresolvedFieldType { field: String, reason: String },

    #[error("Field {field} declares a zero-length array")]
    InvalidArraySize { field: String },

    /// Struct offsets or total size exceed the 64-bit byte range
    #[error("Layout of {name} overflows the addressable size")]
    LayoutOverflow { name: String },

    #[error("Duplicate field id {id} in message {message}")]
    DuplicateFieldId { message: String, id: u32 },

    #[error("Duplicate {entity} name: {name}")]
    DuplicateName { entity: &'static str, name: String },

    #[error("Reference field {field} is not a member of message {message}")]
    ReferenceFieldNotMember { message: String, field: String },

    #[error("Message {message} embeds a reference but has no reference field")]
    EmbeddedReferenceWithoutField { message: String },

    // ===== Proxy Resolution Errors =====
    #[error("Span {span} is not a proxy span")]
    NotAProxy { span: String },

    #[error("Proxy span {span} names itself as its remote span")]
    SelfReferentialProxy { span: String },

    #[error("proxy: no viable start message: {remote_span}")]
    NoViableStartMessage { span: String, remote_span: String },

    #[error("proxy: no viable end message: {remote_span}")]
    NoViableEndMessage { span: String, remote_span: String },

    #[error("referenceType({span}): span does not have any messages with reference_field")]
    NoReferenceMessage { span: String },
}

impl From<RenderError> for ExError {
    fn from(err: RenderError) -> Self {
        let message = err.to_string();
        match err {
            RenderError::AppNotFound { app } => ExError::new(ExErrorKind::NotFound)
                .with_app(app)
                .with_message(message),

            RenderError::SpanNotFound { span } => ExError::new(ExErrorKind::NotFound)
                .with_span(span)
                .with_message(message),

            RenderError::MessageNotFound { message: name } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_message_name(name)
                    .with_message(message)
            }

            RenderError::FieldNotFound { .. } | RenderError::MetricNotFound { .. } => {
                ExError::new(ExErrorKind::NotFound).with_message(message)
            }

            RenderError::UnresolvedFieldType { .. } => {
                ExError::new(ExErrorKind::InvalidFieldType).with_message(message)
            }

            RenderError::InvalidArraySize { .. } => {
                ExError::new(ExErrorKind::InvalidArraySize).with_message(message)
            }

            RenderError::LayoutOverflow { .. } => {
                ExError::new(ExErrorKind::LayoutOverflow).with_message(message)
            }

            RenderError::DuplicateFieldId { message: name, .. } => {
                ExError::new(ExErrorKind::DuplicateId)
                    .with_message_name(name)
                    .with_message(message)
            }

            RenderError::DuplicateName { .. } => {
                ExError::new(ExErrorKind::DuplicateName).with_message(message)
            }

            RenderError::ReferenceFieldNotMember { message: name, .. } => {
                ExError::new(ExErrorKind::ReferenceNotMember)
                    .with_message_name(name)
                    .with_message(message)
            }

            RenderError::EmbeddedReferenceWithoutField { message: name } => {
                ExError::new(ExErrorKind::MissingReference)
                    .with_message_name(name)
                    .with_message(message)
            }

            RenderError::NotAProxy { span } => ExError::new(ExErrorKind::NotAProxy)
                .with_span(span)
                .with_message(message),

            RenderError::SelfReferentialProxy { span } => {
                ExError::new(ExErrorKind::SelfReferentialProxy)
                    .with_span(span)
                    .with_message(message)
            }

            RenderError::NoViableStartMessage { span, .. } => {
                ExError::new(ExErrorKind::NoViableStartMessage)
                    .with_op("proxy_start_message")
                    .with_span(span)
                    .with_message(message)
            }

            RenderError::NoViableEndMessage { span, .. } => {
                ExError::new(ExErrorKind::NoViableEndMessage)
                    .with_op("proxy_end_message")
                    .with_span(span)
                    .with_message(message)
            }

            RenderError::NoReferenceMessage { span } => {
                ExError::new(ExErrorKind::MissingReference)
                    .with_op("reference_type")
                    .with_span(span)
                    .with_message(message)
            }
        }
    }
}
