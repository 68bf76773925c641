//! Core types shared across renderc facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error facility and the logging facility:
//!
//! - **Field keys**: canonical structured-logging field names
//! - **Event names**: start / end / end_error boundaries

pub mod schema;
