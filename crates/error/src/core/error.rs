//! The [`Error`] type: code, message, cause chain

use std::error::Error as StdError;
use std::fmt;

use crate::core::code::ErrorCode;
use crate::core::metadata::Metadata;

pub(crate) type BoxedError = Box<dyn StdError + Send + Sync>;

/// The error type of the model.
///
/// One public type covers every shape an error can take: an adopted
/// foreign error, a coded message optionally wrapping a cause, the same
/// with keyed metadata attached, or an ordered aggregate of several
/// errors. The shape is internal; callers observe it only through the
/// total operations below ([`Error::code`], [`Error::cause`],
/// [`Error::get`], [`Error::expand`], ...).
///
/// `Error` is a single pointer wide, so `Result<T, Error>` stays cheap
/// on the happy path.
///
/// ```rust
/// use meridian_error::{Error, ErrorCode};
///
/// const CODE_PARSE: ErrorCode = ErrorCode::new("parse");
///
/// let root = Error::new(CODE_PARSE, "unexpected token");
/// let err = Error::wrap(root, "loading manifest");
///
/// assert_eq!(err.to_string(), "loading manifest (unexpected token)");
/// assert_eq!(err.code(), CODE_PARSE);
/// ```
pub struct Error {
    repr: Box<Repr>,
}

/// The closed set of error shapes.
#[derive(Debug)]
pub(crate) enum Repr {
    /// An error adopted from outside the model. Leaf of any chain.
    Plain(BoxedError),
    /// A message-bearing error with a code and an optional cause.
    Wrap(Wrap),
    /// A wrap plus keyed metadata at the same chain position.
    Data(Wrap, Metadata),
    /// An ordered aggregate of several errors. Never empty.
    Multi(Vec<Error>),
}

#[derive(Debug)]
pub(crate) struct Wrap {
    pub(crate) message: Message,
    pub(crate) code: ErrorCode,
    pub(crate) cause: Option<Error>,
}

/// The message slot of a wrap: either fresh text, or a foreign error
/// kept as the message bearer (the result of embedding metadata onto a
/// value that has no wrapping position of its own).
#[derive(Debug)]
pub(crate) enum Message {
    Text(String),
    Adopted(BoxedError),
}

impl Error {
    /// A fresh error with an explicit classification code.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::from_repr(Repr::Wrap(Wrap {
            message: Message::Text(message.into()),
            code,
            cause: None,
        }))
    }

    /// A fresh coded error wrapping `cause`.
    ///
    /// The new code is authoritative: resolution stops here regardless of
    /// what the cause carries. Use [`Error::wrap`] to defer instead.
    pub fn caused(cause: impl Into<Error>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::from_repr(Repr::Wrap(Wrap {
            message: Message::Text(message.into()),
            code,
            cause: Some(cause.into()),
        }))
    }

    /// Wrap `cause` with more message context, deferring classification:
    /// the result resolves to whatever code the cause resolves to.
    pub fn wrap(cause: impl Into<Error>, message: impl Into<String>) -> Self {
        Self::caused(cause, ErrorCode::WRAPPED, message)
    }

    /// The resolved classification code.
    ///
    /// [`ErrorCode::WRAPPED`] positions defer to their cause, recursively;
    /// any other code is authoritative. A deferring position without a
    /// cause resolves to [`ErrorCode::OK`], an adopted foreign error to
    /// [`ErrorCode::UNKNOWN`], an aggregate to [`ErrorCode::MULTI`].
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        let mut current = self;
        loop {
            match current.repr.as_ref() {
                Repr::Plain(_) => return ErrorCode::UNKNOWN,
                Repr::Multi(_) => return ErrorCode::MULTI,
                Repr::Wrap(wrap) | Repr::Data(wrap, _) => {
                    if wrap.code != ErrorCode::WRAPPED {
                        return wrap.code.clone();
                    }
                    match &wrap.cause {
                        Some(cause) => current = cause,
                        None => return ErrorCode::OK,
                    }
                }
            }
        }
    }

    /// Whether this error resolves to `code`.
    #[must_use]
    pub fn is(&self, code: &ErrorCode) -> bool {
        self.code() == *code
    }

    /// The single causal predecessor, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&Error> {
        match self.repr.as_ref() {
            Repr::Wrap(wrap) | Repr::Data(wrap, _) => wrap.cause.as_ref(),
            Repr::Plain(_) | Repr::Multi(_) => None,
        }
    }

    /// Iterate the causal chain, from this error down to the root cause.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    pub(crate) fn local_metadata(&self) -> Option<&Metadata> {
        match self.repr.as_ref() {
            Repr::Data(_, metadata) => Some(metadata),
            Repr::Plain(_) | Repr::Wrap(_) | Repr::Multi(_) => None,
        }
    }

    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self {
            repr: Box::new(repr),
        }
    }

    pub(crate) fn into_repr(self) -> Repr {
        *self.repr
    }
}

/// Resolve the classification code of an optional error.
///
/// Absence resolves to [`ErrorCode::OK`]; everything else is
/// [`Error::code`]. Total over its whole domain.
#[must_use]
pub fn resolve_code(error: Option<&Error>) -> ErrorCode {
    error.map_or(ErrorCode::OK, Error::code)
}

/// Iterator over a causal chain, outermost first. See [`Error::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr.as_ref() {
            Repr::Plain(external) => fmt::Display::fmt(external, f),
            Repr::Wrap(wrap) | Repr::Data(wrap, _) => fmt::Display::fmt(wrap, f),
            Repr::Multi(errors) => {
                f.write_str("multierror: [")?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(error, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl fmt::Display for Wrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} ({})", self.message, cause),
            None => fmt::Display::fmt(&self.message, f),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Adopted(external) => fmt::Display::fmt(external, f),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.repr.as_ref(), f)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.repr.as_ref() {
            Repr::Wrap(wrap) | Repr::Data(wrap, _) => match (&wrap.cause, &wrap.message) {
                (Some(cause), _) => Some(cause),
                (None, Message::Adopted(external)) => external.source(),
                (None, Message::Text(_)) => None,
            },
            Repr::Plain(external) => external.source(),
            Repr::Multi(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CODE_PARSE: ErrorCode = ErrorCode::new("parse");
    const CODE_CONFIG: ErrorCode = ErrorCode::new("config");

    #[test]
    fn test_wrap_defers_to_the_cause_code() {
        let root = Error::new(CODE_PARSE, "unexpected token");
        let err = Error::wrap(Error::wrap(root, "reading section"), "loading manifest");
        assert_eq!(err.code(), CODE_PARSE);
        assert!(err.is(&CODE_PARSE));
    }

    #[test]
    fn test_explicit_code_is_authoritative() {
        let root = Error::new(CODE_PARSE, "unexpected token");
        let err = Error::caused(root, CODE_CONFIG, "manifest rejected");
        assert_eq!(err.code(), CODE_CONFIG);
        assert!(!err.is(&CODE_PARSE));
    }

    #[test]
    fn test_causeless_deferral_resolves_to_ok() {
        let err = Error::new(ErrorCode::WRAPPED, "nothing underneath");
        assert_eq!(err.code(), ErrorCode::OK);
    }

    #[test]
    fn test_resolve_code_of_absence_is_ok() {
        assert_eq!(resolve_code(None), ErrorCode::OK);
        let err = Error::new(CODE_PARSE, "x");
        assert_eq!(resolve_code(Some(&err)), CODE_PARSE);
    }

    #[test]
    fn test_rendering_nests_causes() {
        let root = Error::new(CODE_PARSE, "unexpected token");
        let mid = Error::wrap(root, "reading section");
        let top = Error::wrap(mid, "loading manifest");
        assert_eq!(
            top.to_string(),
            "loading manifest (reading section (unexpected token))"
        );
    }

    #[test]
    fn test_rendering_without_cause_is_just_the_message() {
        assert_eq!(Error::new(CODE_PARSE, "bad input").to_string(), "bad input");
    }

    #[test]
    fn test_chain_walks_outermost_to_root() {
        let root = Error::new(CODE_PARSE, "root");
        let top = Error::wrap(Error::wrap(root, "mid"), "top");

        let messages: Vec<String> = top.chain().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("top"));
        assert_eq!(messages[2], "root");
    }

    #[test]
    fn test_source_exposes_the_cause() {
        let err = Error::wrap(Error::new(CODE_PARSE, "root"), "top");
        let source = StdError::source(&err).expect("cause");
        assert_eq!(source.to_string(), "root");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
