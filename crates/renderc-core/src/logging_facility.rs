//! Structured logging facility for renderc
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use renderc_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::from_env());
//! ```
//!
//! # Logging Ownership
//!
//! Lifecycle events (`start` / `end` / `end_error`) are owned by the outer
//! boundary (the snapshot importer, the emission layer). The query functions
//! in this crate only emit `tracing::debug!` details.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
