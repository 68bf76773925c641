pub mod builder;
pub mod store;

pub use builder::{FieldSpec, SchemaBuilder, SpanOptions};
pub use store::Schema;
