//! Byte layout and C type synthesis
//!
//! Every size, alignment and type name the emission layer writes into the
//! generated wire (packed) and parsed structs comes from this module.

pub mod field;
pub mod field_type;
pub mod struct_layout;

pub use field_type::{PARSED_BLOB_ALIGN, PARSED_BLOB_SIZE, WIRE_STRING_SIZE};
pub use struct_layout::{metric_layout, xpacked_layout, FieldLayout, StructLayout};
