//! Adoption of foreign errors at crate boundaries
//!
//! Errors from outside the model enter as opaque leaves: they keep their
//! rendered message and resolve to
//! [`ErrorCode::UNKNOWN`](crate::ErrorCode::UNKNOWN) until some
//! caller wraps them with a real classification. The `From` impls below
//! make `?` work directly in functions returning
//! [`Result`](crate::Result).

use std::error::Error as StdError;

use crate::core::error::{BoxedError, Error, Repr};

impl Error {
    /// Adopt any foreign error value into the model.
    pub fn external(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::from_repr(Repr::Plain(Box::new(error)))
    }
}

impl From<BoxedError> for Error {
    fn from(error: BoxedError) -> Self {
        Self::from_repr(Repr::Plain(error))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::external(error)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(error: std::fmt::Error) -> Self {
        Self::external(error)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::external(error)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::external(error)
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(error: std::str::Utf8Error) -> Self {
        Self::external(error)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::external(error)
    }
}
