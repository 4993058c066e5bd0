//! An ordered collection of diagnostics

use crate::core::error::Error;
use crate::diagnostics::diagnostic::Diagnostic;
use crate::diagnostics::severity::Severity;

/// An ordered sequence of [`Diagnostic`]s, typically appended to by a
/// producing pipeline and consumed once at a reporting boundary.
///
/// Order is insertion order; duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Whether any member is at `severity` or above.
    #[must_use]
    pub fn matches(&self, severity: Severity) -> bool {
        self.items.iter().any(|d| d.severity() >= severity)
    }

    /// The members whose severity is *exactly* `severity`.
    ///
    /// Deliberately narrower than [`Diagnostics::matches`]: filtering for
    /// `Warning` does not return `Error` members.
    #[must_use]
    pub fn filter(&self, severity: Severity) -> Diagnostics {
        self.items
            .iter()
            .filter(|d| d.severity() == severity)
            .cloned()
            .collect()
    }

    /// The highest severity across all members; `Unknown` when empty.
    #[must_use]
    pub fn severity(&self) -> Severity {
        Severity::merge_all(self.items.iter().map(Diagnostic::severity))
    }

    /// Render every member at or above `include` as an error and combine
    /// them in member order. `None` when no member qualifies.
    #[must_use]
    pub fn to_error(&self, include: Severity) -> Option<Error> {
        let mut combined = None;
        for diagnostic in &self.items {
            if let Some(error) = diagnostic.to_error(include) {
                combined = Error::append(combined, [error]);
            }
        }
        combined
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
