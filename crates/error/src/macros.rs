//! Ergonomic constructor macros
//!
//! These cover the formatted-construction patterns so call sites don't
//! spell out `format!` themselves.

/// Create a coded error with a formatted message.
///
/// # Examples
///
/// ```rust
/// use meridian_error::{err, ErrorCode};
///
/// const CODE_NOT_FOUND: ErrorCode = ErrorCode::new("not_found");
///
/// let user = "u-123";
/// let error = err!(CODE_NOT_FOUND, "user {user} does not exist");
/// assert_eq!(error.code(), CODE_NOT_FOUND);
/// ```
#[macro_export]
macro_rules! err {
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new($code, ::std::format!($($arg)+))
    };
}

/// Wrap a cause with a formatted message, deferring classification.
///
/// # Examples
///
/// ```rust
/// use meridian_error::{err, wrap_err, ErrorCode};
///
/// const CODE_STORAGE: ErrorCode = ErrorCode::new("storage");
///
/// let segment = 17;
/// let error = wrap_err!(err!(CODE_STORAGE, "checksum mismatch"), "reading segment {segment}");
/// assert_eq!(error.code(), CODE_STORAGE);
/// assert_eq!(error.to_string(), "reading segment 17 (checksum mismatch)");
/// ```
#[macro_export]
macro_rules! wrap_err {
    ($cause:expr, $($arg:tt)+) => {
        $crate::Error::wrap($cause, ::std::format!($($arg)+))
    };
}

/// Return early with a coded, formatted error.
///
/// # Examples
///
/// ```rust
/// use meridian_error::{bail, ErrorCode, Result};
///
/// const CODE_LIMIT: ErrorCode = ErrorCode::new("limit");
///
/// fn reserve(n: usize) -> Result<()> {
///     if n > 64 {
///         bail!(CODE_LIMIT, "cannot reserve {n} slots");
///     }
///     Ok(())
/// }
///
/// assert!(reserve(100).unwrap_err().is(&CODE_LIMIT));
/// ```
#[macro_export]
macro_rules! bail {
    ($code:expr, $($arg:tt)+) => {
        return ::std::result::Result::Err($crate::err!($code, $($arg)+))
    };
}

/// Return early with a coded error unless a condition holds.
///
/// # Examples
///
/// ```rust
/// use meridian_error::{ensure, ErrorCode, Result};
///
/// const CODE_VALIDATION: ErrorCode = ErrorCode::new("validation");
///
/// fn validate_age(age: u32) -> Result<()> {
///     ensure!(age >= 18, CODE_VALIDATION, "must be 18+, got {age}");
///     Ok(())
/// }
///
/// assert!(validate_age(30).is_ok());
/// assert!(validate_age(12).unwrap_err().is(&CODE_VALIDATION));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($code, $($arg)+);
        }
    };
}
