//! # Meridian Error Handling
//!
//! Structured errors and diagnostics for the Meridian toolkit.
//!
//! Errors carry a stable classification code, a chain of causes and
//! arbitrary keyed metadata, so callers route on [`Error::code`] instead
//! of string-matching messages. Diagnostics add severity-tagged messages
//! on top, promotable to hard failures at a reporting boundary.
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_error::prelude::*;
//!
//! const CODE_CONFIG: ErrorCode = ErrorCode::new("config");
//!
//! fn load_port(raw: &str) -> Result<u16> {
//!     let port = raw
//!         .parse::<u16>()
//!         .coded(CODE_CONFIG, "port is not a number")?;
//!     ensure!(port >= 1024, CODE_CONFIG, "port {port} is reserved");
//!     Ok(port)
//! }
//!
//! let err = load_port("80").unwrap_err();
//! assert!(err.is(&CODE_CONFIG));
//! ```
//!
//! ## Features
//!
//! - **Codes**: route on an error class, never on rendered text
//! - **Chains**: every wrap keeps its cause reachable via [`Error::cause`]
//! - **Metadata**: attach typed context with [`Error::embed`], read it
//!   back anywhere up the chain with [`Error::get`]
//! - **Aggregation**: fold many failures into one value with
//!   [`Error::append`]
//! - **Diagnostics**: collect severity-tagged messages, then promote
//!   everything at or above a threshold with
//!   [`Diagnostics::to_error`]

pub mod core;
pub mod diagnostics;

// === Ergonomic Macros ===
pub mod macros;

// === Public API Exports ===

/// The error type: code, message, cause chain, metadata, aggregation
pub use crate::core::Error;

/// Stable classification tag for programmatic handling
pub use crate::core::ErrorCode;

/// Result type alias for `Result<T, Error>`
pub use crate::core::Result;

/// Extension trait for composing errors through `?`
pub use crate::core::ResultExt;

/// Keyed metadata attached to errors and diagnostics
pub use crate::core::{Metadata, MetadataValue};

/// Cause-chain iterator and code resolution over optional errors
pub use crate::core::{Chain, resolve_code};

/// Severity-tagged messages and their collection
pub use crate::diagnostics::{Diagnostic, DiagnosticBuilder, Diagnostics, ERROR_CODE_KEY, Severity};

/// Convenient prelude with everything you need
pub mod prelude {
    pub use crate::{
        Diagnostic, Diagnostics, Error, ErrorCode, Metadata, Result, ResultExt, Severity,
        resolve_code,
    };
    pub use crate::{bail, ensure, err, wrap_err};
}
