//! A single severity-tagged diagnostic message

use std::any::Any;
use std::sync::Arc;

use crate::core::code::ErrorCode;
use crate::core::error::Error;
use crate::core::metadata::Metadata;
use crate::diagnostics::severity::Severity;

/// Reserved metadata key carrying an [`ErrorCode`] override for
/// [`Diagnostic::to_error`]. Set it through
/// [`DiagnosticBuilder::code`]; the entry itself is not embedded onto
/// the rendered error.
pub const ERROR_CODE_KEY: &str = "error_code";

/// A severity-tagged message with optional detail and keyed metadata.
///
/// Immutable once built; construction goes through the builder entered
/// with [`Diagnostic::info`], [`Diagnostic::warning`] or
/// [`Diagnostic::error`].
///
/// ```rust
/// use meridian_error::{Diagnostic, Severity};
///
/// let diagnostic = Diagnostic::warning("deprecated field")
///     .detail("`retries` moved to the `backoff` section")
///     .metadata("field", "retries")
///     .build();
///
/// assert_eq!(diagnostic.severity(), Severity::Warning);
/// assert!(diagnostic.to_error(Severity::Error).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    summary: String,
    detail: Option<String>,
    metadata: Metadata,
}

impl Diagnostic {
    /// Start building an informational diagnostic.
    pub fn info(summary: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Info, summary)
    }

    /// Start building a warning diagnostic.
    pub fn warning(summary: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Warning, summary)
    }

    /// Start building an error diagnostic.
    pub fn error(summary: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::new(Severity::Error, summary)
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Render this diagnostic as an [`Error`], gated by a severity
    /// threshold.
    ///
    /// Returns `None` when the diagnostic's severity is strictly below
    /// `include`. Otherwise the error message is
    /// `"[<severity>] <summary>"`, with `": <detail>"` appended when a
    /// detail is present; the code comes from the [`ERROR_CODE_KEY`]
    /// metadata entry when set, else [`ErrorCode::UNKNOWN`]; every other
    /// metadata entry is embedded onto the error, sharing the stored
    /// values.
    #[must_use]
    pub fn to_error(&self, include: Severity) -> Option<Error> {
        if self.severity < include {
            return None;
        }

        let message = match &self.detail {
            Some(detail) => format!("[{}] {}: {}", self.severity, self.summary, detail),
            None => format!("[{}] {}", self.severity, self.summary),
        };

        let code = self
            .metadata
            .get::<ErrorCode>(ERROR_CODE_KEY)
            .cloned()
            .unwrap_or(ErrorCode::UNKNOWN);

        let mut error = Error::new(code, message);
        for (key, value) in self.metadata.iter() {
            if key == ERROR_CODE_KEY {
                continue;
            }
            error = error.embed_value(key.clone(), Arc::clone(value));
        }
        Some(error)
    }
}

/// Fluent construction for [`Diagnostic`]. Chain-returning; finish with
/// [`DiagnosticBuilder::build`].
#[derive(Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    fn new(severity: Severity, summary: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                severity,
                summary: summary.into(),
                detail: None,
                metadata: Metadata::new(),
            },
        }
    }

    /// Set the optional detail text.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.diagnostic.detail = Some(detail.into());
        self
    }

    /// Attach one keyed metadatum.
    #[must_use]
    pub fn metadata<V: Any + Send + Sync>(mut self, key: impl Into<String>, value: V) -> Self {
        self.diagnostic.metadata.insert(key, value);
        self
    }

    /// Merge a whole metadata map; its entries win on key collision.
    #[must_use]
    pub fn metadata_all(mut self, metadata: Metadata) -> Self {
        self.diagnostic.metadata.merge(metadata);
        self
    }

    /// Set the error code used when this diagnostic is rendered as an
    /// error. Stored under [`ERROR_CODE_KEY`].
    #[must_use]
    pub fn code(mut self, code: ErrorCode) -> Self {
        self.diagnostic.metadata.insert(ERROR_CODE_KEY, code);
        self
    }

    /// Freeze the diagnostic.
    #[must_use]
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }
}
