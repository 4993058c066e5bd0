//! Stable classification codes for programmatic error handling

use std::borrow::Cow;
use std::fmt;

/// An opaque classification tag attached to an error value.
///
/// Codes let callers route on an error *class* without string-matching
/// rendered messages. Applications declare their own codes as constants:
///
/// ```rust
/// use meridian_error::ErrorCode;
///
/// const CODE_NOT_FOUND: ErrorCode = ErrorCode::new("not_found");
/// ```
///
/// Four codes are reserved by the model itself: [`ErrorCode::OK`],
/// [`ErrorCode::UNKNOWN`], [`ErrorCode::WRAPPED`] and [`ErrorCode::MULTI`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorCode(Cow<'static, str>);

impl ErrorCode {
    /// The code of an absent error. Never carried by a live error value.
    pub const OK: Self = Self::new("ok");

    /// Default code for anything that has not been classified.
    pub const UNKNOWN: Self = Self::new("unknown");

    /// A generic wrap with no classification of its own; resolution
    /// defers to the wrapped cause.
    pub const WRAPPED: Self = Self::new("wrapped");

    /// An aggregate of several errors.
    pub const MULTI: Self = Self::new("multi");

    /// Declare a code. `const`, so codes can live in `const` items.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The code's tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Codes recovered from diagnostic metadata arrive as owned strings.
impl From<String> for ErrorCode {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
