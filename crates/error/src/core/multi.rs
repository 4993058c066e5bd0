//! Aggregation of several errors into one value

use crate::core::error::{Error, Repr};

impl Error {
    /// Combine `next` into `current`, absence-aware.
    ///
    /// Starting from `None`: zero errors stay `None`, a single error is
    /// returned as itself (no aggregate around it), several become an
    /// aggregate in order. Appending to an existing aggregate extends its
    /// own sequence; appending to any other error starts an aggregate
    /// with that error first.
    ///
    /// ```rust
    /// use meridian_error::{Error, ErrorCode};
    ///
    /// let mut combined = None;
    /// for message in ["a", "b"] {
    ///     combined = Error::append(combined, [Error::new(ErrorCode::UNKNOWN, message)]);
    /// }
    /// assert_eq!(combined.unwrap().to_string(), "multierror: [a,b]");
    /// ```
    #[must_use]
    pub fn append(current: Option<Error>, next: impl IntoIterator<Item = Error>) -> Option<Error> {
        let mut next = next.into_iter();
        match current {
            None => {
                let first = next.next()?;
                match next.next() {
                    None => Some(first),
                    Some(second) => {
                        let mut errors = vec![first, second];
                        errors.extend(next);
                        Some(Self::from_repr(Repr::Multi(errors)))
                    }
                }
            }
            Some(current) => match current.into_repr() {
                Repr::Multi(mut errors) => {
                    errors.extend(next);
                    Some(Self::from_repr(Repr::Multi(errors)))
                }
                other => {
                    let mut errors = vec![Self::from_repr(other)];
                    errors.extend(next);
                    Some(Self::from_repr(Repr::Multi(errors)))
                }
            },
        }
    }

    /// The constituent errors of an optional error: an aggregate's
    /// sequence, a single error by itself, or nothing.
    #[must_use]
    pub fn expand(error: Option<Error>) -> Vec<Error> {
        match error {
            None => Vec::new(),
            Some(error) => match error.into_repr() {
                Repr::Multi(errors) => errors,
                other => vec![Self::from_repr(other)],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code::ErrorCode;

    const CODE_A: ErrorCode = ErrorCode::new("a");
    const CODE_B: ErrorCode = ErrorCode::new("b");

    #[test]
    fn test_append_nothing_onto_nothing() {
        assert!(Error::append(None, []).is_none());
    }

    #[test]
    fn test_append_single_returns_the_error_itself() {
        let combined = Error::append(None, [Error::new(CODE_A, "only")]).unwrap();
        // Not an aggregate: the original code and message survive.
        assert_eq!(combined.code(), CODE_A);
        assert_eq!(combined.to_string(), "only");
    }

    #[test]
    fn test_append_several_builds_an_ordered_aggregate() {
        let combined = Error::append(
            None,
            [Error::new(CODE_A, "first"), Error::new(CODE_B, "second")],
        )
        .unwrap();
        assert_eq!(combined.code(), ErrorCode::MULTI);
        assert_eq!(combined.to_string(), "multierror: [first,second]");
    }

    #[test]
    fn test_append_extends_existing_aggregate() {
        let aggregate = Error::append(
            None,
            [Error::new(CODE_A, "first"), Error::new(CODE_B, "second")],
        );
        let extended = Error::append(aggregate, [Error::new(CODE_A, "third")]).unwrap();

        let errors = Error::expand(Some(extended));
        assert_eq!(errors.len(), 3);
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_append_onto_plain_error_starts_an_aggregate() {
        let combined =
            Error::append(Some(Error::new(CODE_A, "first")), [Error::new(CODE_B, "second")])
                .unwrap();
        assert_eq!(combined.code(), ErrorCode::MULTI);
        assert_eq!(combined.to_string(), "multierror: [first,second]");
    }

    #[test]
    fn test_append_nothing_onto_aggregate_keeps_it() {
        let aggregate = Error::append(
            None,
            [Error::new(CODE_A, "first"), Error::new(CODE_B, "second")],
        );
        let unchanged = Error::append(aggregate, []).unwrap();
        assert_eq!(Error::expand(Some(unchanged)).len(), 2);
    }

    #[test]
    fn test_expand_absence_and_single() {
        assert!(Error::expand(None).is_empty());

        let single = Error::expand(Some(Error::new(CODE_A, "only")));
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].to_string(), "only");
    }

    #[test]
    fn test_aggregate_allows_duplicates() {
        let combined = Error::append(
            None,
            [Error::new(CODE_A, "same"), Error::new(CODE_A, "same")],
        )
        .unwrap();
        assert_eq!(combined.to_string(), "multierror: [same,same]");
    }
}
