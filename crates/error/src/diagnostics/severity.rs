//! Severity classification for diagnostics

use std::fmt;

/// How serious a diagnostic is.
///
/// The ordering is total and load-bearing: threshold checks compare with
/// `>=`, so `Unknown < Info < Warning < Error` must hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Not classified. The severity of an empty collection.
    #[default]
    Unknown,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// The higher of the two severities.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// The highest severity among `severities`; `Unknown` when empty.
    #[must_use]
    pub fn merge_all(severities: impl IntoIterator<Item = Self>) -> Self {
        severities.into_iter().fold(Self::Unknown, Self::merge)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
