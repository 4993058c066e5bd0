//! Result type and extension traits

use std::any::Any;

use crate::core::code::ErrorCode;
use crate::core::error::Error;

/// Result type for operations that fail with a model [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Extension trait for composing errors on the failure side of a
/// `Result` without leaving the `?` flow.
pub trait ResultExt<T> {
    /// Wrap the error with more message context, deferring its
    /// classification to the wrapped cause.
    fn wrap_err(self, message: impl Into<String>) -> Result<T>;

    /// As [`ResultExt::wrap_err`], with the message built lazily.
    fn wrap_err_with<F, M>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    /// Wrap the error with an authoritative classification code.
    fn coded(self, code: ErrorCode, message: impl Into<String>) -> Result<T>;

    /// Attach a keyed metadatum to the error.
    fn embed<V: Any + Send + Sync>(self, key: impl Into<String>, value: V) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|error| Error::wrap(error, message))
    }

    fn wrap_err_with<F, M>(self, message: F) -> Result<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        self.map_err(|error| Error::wrap(error, message()))
    }

    fn coded(self, code: ErrorCode, message: impl Into<String>) -> Result<T> {
        self.map_err(|error| Error::caused(error, code, message))
    }

    fn embed<V: Any + Send + Sync>(self, key: impl Into<String>, value: V) -> Result<T> {
        self.map_err(|error| error.into().embed(key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE_CONFIG: ErrorCode = ErrorCode::new("config");

    fn read_port(raw: &str) -> Result<u16> {
        let port = raw
            .parse::<u16>()
            .coded(CODE_CONFIG, "port is not a number")?;
        Ok(port)
    }

    #[test]
    fn test_coded_overrides_classification() {
        let err = read_port("eighty").unwrap_err();
        assert_eq!(err.code(), CODE_CONFIG);
        assert!(err.to_string().starts_with("port is not a number ("));
    }

    #[test]
    fn test_wrap_err_defers_classification() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "locked",
        ));
        let err = result.wrap_err("loading state").unwrap_err();
        assert_eq!(err.code(), ErrorCode::UNKNOWN);
        assert_eq!(err.to_string(), "loading state (locked)");
    }

    #[test]
    fn test_wrap_err_with_is_lazy() {
        let ok: std::result::Result<u8, std::io::Error> = Ok(1);
        let value = ok
            .wrap_err_with(|| -> String { unreachable!("not evaluated on success") })
            .unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_embed_through_the_result() {
        let result: std::result::Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result
            .wrap_err("rendering report")
            .embed("report", "monthly")
            .unwrap_err();
        assert_eq!(err.get::<&str>("report"), Some(&"monthly"));
    }
}
