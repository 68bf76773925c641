//! String fragments consumed by the code templates
//!
//! - `prototype`: parameter lists for message handlers and call sites
//! - `naming`: identifiers derived from span and app names

pub mod naming;
pub mod prototype;

pub use prototype::{
    call_prototype, comma_call_prototype, comma_prototype, noref_comma_call_prototype,
    noref_comma_prototype, noref_prototype, prototype,
};
