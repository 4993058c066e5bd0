//! Severity-tagged diagnostics layered on the error core
//!
//! A [`Diagnostic`] is a message classified by [`Severity`]; a
//! [`Diagnostics`] collection accumulates them through a pipeline and is
//! consumed once at a reporting boundary, where anything at or above a
//! threshold severity is promoted to a real [`Error`](crate::Error) via
//! the composition core.

pub mod collection;
pub mod diagnostic;
pub mod severity;

pub use collection::Diagnostics;
pub use diagnostic::{Diagnostic, DiagnosticBuilder, ERROR_CODE_KEY};
pub use severity::Severity;
