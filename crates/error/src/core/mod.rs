//! Core error-composition types
//!
//! This module contains the error model itself:
//! - [`code`](crate::core::code) - [`ErrorCode`] classification tags and resolution
//! - [`error`](crate::core::error) - the [`Error`] type, cause chains and rendering
//! - [`metadata`](crate::core::metadata) - keyed metadata embedded onto errors
//! - [`result`](crate::core::result) - Result type and extension traits
//!
//! Aggregation ([`Error::append`](crate::Error::append) /
//! [`Error::expand`](crate::Error::expand)) and foreign-error adoption
//! ([`Error::external`](crate::Error::external), the `From` impls) are
//! implemented in private submodules; their surface lives on [`Error`].

pub mod code;
pub mod error;
pub mod metadata;
pub mod result;

mod conversion;
mod multi;

// Re-export core types
pub use code::ErrorCode;
pub use error::{Chain, Error, resolve_code};
pub use metadata::{Metadata, MetadataValue};
pub use result::{Result, ResultExt};
