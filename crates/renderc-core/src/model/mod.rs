pub mod app;
pub mod field;
pub mod field_type;
pub mod ids;
pub mod message;
pub mod metric;
pub mod span;

pub use app::App;
pub use field::Field;
pub use field_type::{FieldType, PrimitiveKind};
pub use ids::{AppId, FieldId, MessageId, MetricId, SpanId};
pub use message::{Message, MessageKind};
pub use metric::{Metric, MetricField};
pub use span::Span;
