//! Keyed metadata attached to errors independent of message or code
//!
//! Values are stored behind `Arc<dyn Any>` so a metadatum can be shared
//! between a [`Diagnostic`](crate::diagnostics::Diagnostic) and the errors
//! rendered from it without requiring `Clone` on the payload type. Typed
//! reads go through [`Any::downcast_ref`], so a lookup only "sees" a value
//! whose shape matches the requested type.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::error::{BoxedError, Error, Message, Repr, Wrap};

/// A single metadata payload. Opaque until downcast.
pub type MetadataValue = Arc<dyn Any + Send + Sync>;

/// A mapping of string keys to arbitrarily-typed payloads.
///
/// Keys are unique; inserting an existing key overwrites the prior value.
/// Insertion order is irrelevant for lookup.
#[derive(Clone, Default)]
pub struct Metadata {
    entries: HashMap<String, MetadataValue>,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a typed payload under `key`, overwriting any prior value.
    pub fn insert<V: Any + Send + Sync>(&mut self, key: impl Into<String>, value: V) {
        self.insert_value(key, Arc::new(value));
    }

    /// Insert an already-shared payload under `key`.
    pub fn insert_value(&mut self, key: impl Into<String>, value: MetadataValue) {
        self.entries.insert(key.into(), value);
    }

    /// Look up `key` and downcast the payload to `T`.
    ///
    /// Returns `None` when the key is absent *or* when the stored value is
    /// not a `T`.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key).and_then(|value| value.downcast_ref())
    }

    /// Look up `key` without a shape check.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.entries.iter()
    }

    /// Merge `other` into `self`; entries from `other` win on collision.
    pub fn merge(&mut self, other: Metadata) {
        self.entries.extend(other.entries);
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads are opaque `dyn Any`; keys are the useful part.
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        f.write_str("Metadata ")?;
        f.debug_set().entries(keys).finish()
    }
}

impl FromIterator<(String, MetadataValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Error {
    /// Attach one keyed metadatum, returning the resulting error.
    ///
    /// The code, message and cause of the input are preserved. An error
    /// already carrying metadata gains the entry in place (last write per
    /// key wins); a plain wrap grows a metadata map; anything else is
    /// first given a wrapping position to hang the map on, keeping its
    /// rendered message and resolved code.
    #[must_use]
    pub fn embed<V: Any + Send + Sync>(self, key: impl Into<String>, value: V) -> Self {
        self.embed_value(key, Arc::new(value))
    }

    /// As [`Error::embed`], for a payload that is already shared.
    #[must_use]
    pub fn embed_value(self, key: impl Into<String>, value: MetadataValue) -> Self {
        let key = key.into();
        let repr = match self.into_repr() {
            Repr::Data(wrap, mut metadata) => {
                metadata.insert_value(key, value);
                Repr::Data(wrap, metadata)
            }
            Repr::Wrap(wrap) => {
                let mut metadata = Metadata::new();
                metadata.insert_value(key, value);
                Repr::Data(wrap, metadata)
            }
            leaf @ (Repr::Plain(_) | Repr::Multi(_)) => {
                let original = Error::from_repr(leaf);
                let code = original.code();
                let bearer: BoxedError = match original.into_repr() {
                    Repr::Plain(external) => external,
                    multi => Box::new(Error::from_repr(multi)),
                };
                let mut metadata = Metadata::new();
                metadata.insert_value(key, value);
                Repr::Data(
                    Wrap {
                        message: Message::Adopted(bearer),
                        code,
                        cause: None,
                    },
                    metadata,
                )
            }
        };
        Self::from_repr(repr)
    }

    /// Retrieve the metadatum under `key`, searching the causal chain from
    /// the outside in.
    ///
    /// The first chain position holding `key` with a value of shape `T`
    /// wins; a same-key value of the wrong shape does not stop the
    /// descent. Note the asymmetry with [`Error::metadata`], where the
    /// *innermost* value wins — both orders are part of the contract.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.chain()
            .filter_map(Error::local_metadata)
            .find_map(|metadata| metadata.get(key))
    }

    /// Retrieve the metadatum under `key` without a shape check; the first
    /// chain position defining the key wins.
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<&MetadataValue> {
        self.chain()
            .filter_map(Error::local_metadata)
            .find_map(|metadata| metadata.get_value(key))
    }

    /// The union of all metadata across the causal chain.
    ///
    /// On key collision the value *closest to the root cause* wins, the
    /// mirror image of [`Error::get`]'s outermost-wins rule.
    #[must_use]
    pub fn metadata(&self) -> Metadata {
        let mut merged = Metadata::new();
        for error in self.chain() {
            if let Some(metadata) = error.local_metadata() {
                for (key, value) in metadata.iter() {
                    merged.insert_value(key.clone(), Arc::clone(value));
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code::ErrorCode;

    const CODE_IO: ErrorCode = ErrorCode::new("io");

    #[test]
    fn test_embed_then_get_roundtrip() {
        let err = Error::new(CODE_IO, "read failed").embed("path", "/etc/hosts");
        assert_eq!(err.get::<&str>("path"), Some(&"/etc/hosts"));
        assert_eq!(err.get::<&str>("missing"), None);
    }

    #[test]
    fn test_embed_preserves_code_message_and_cause() {
        let err = Error::wrap(Error::new(CODE_IO, "disk gone"), "read failed")
            .embed("attempt", 3_u32);
        assert_eq!(err.code(), CODE_IO);
        assert_eq!(err.to_string(), "read failed (disk gone)");
        assert!(err.cause().is_some());
    }

    #[test]
    fn test_same_key_same_position_overwrites() {
        let err = Error::new(CODE_IO, "x")
            .embed("attempt", 1_u32)
            .embed("attempt", 2_u32);
        assert_eq!(err.get::<u32>("attempt"), Some(&2));
        assert_eq!(err.metadata().len(), 1);
    }

    #[test]
    fn test_retrieval_asymmetry() {
        // Same key at two depths: single-key lookup sees the outermost,
        // the merged map keeps the innermost.
        let inner = Error::new(CODE_IO, "inner").embed("depth", "inner");
        let outer = Error::wrap(inner, "outer").embed("depth", "outer");

        assert_eq!(outer.get::<&str>("depth"), Some(&"outer"));
        assert_eq!(outer.metadata().get::<&str>("depth"), Some(&"inner"));

        // The untyped lookup stops at the first position defining the key.
        let untyped = outer.get_value("depth").expect("present");
        assert_eq!(untyped.downcast_ref::<&str>(), Some(&"outer"));
    }

    #[test]
    fn test_shape_mismatch_does_not_stop_descent() {
        let inner = Error::new(CODE_IO, "inner").embed("attempt", 7_u32);
        let outer = Error::wrap(inner, "outer").embed("attempt", "seven");

        // The outer value is a &str, so a u32 lookup falls through to the
        // inner position; a &str lookup stops at the outer one.
        assert_eq!(outer.get::<u32>("attempt"), Some(&7));
        assert_eq!(outer.get::<&str>("attempt"), Some(&"seven"));
        assert!(outer.get::<i64>("attempt").is_none());
    }

    #[test]
    fn test_merged_metadata_spans_the_chain() {
        let root = Error::new(CODE_IO, "root").embed("a", 1_u32);
        let mid = Error::wrap(root, "mid").embed("b", 2_u32);
        let top = Error::wrap(mid, "top").embed("c", 3_u32);

        let merged = top.metadata();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get::<u32>("a"), Some(&1));
        assert_eq!(merged.get::<u32>("b"), Some(&2));
        assert_eq!(merged.get::<u32>("c"), Some(&3));
    }

    #[test]
    fn test_embed_on_external_error_keeps_rendering() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::external(io).embed("path", "/tmp/x");
        assert_eq!(err.to_string(), "no such file");
        assert_eq!(err.code(), ErrorCode::UNKNOWN);
        assert_eq!(err.get::<&str>("path"), Some(&"/tmp/x"));
    }

    #[test]
    fn test_metadata_debug_lists_keys_only() {
        let mut metadata = Metadata::new();
        metadata.insert("b", 1_u32);
        metadata.insert("a", "x");
        assert_eq!(format!("{metadata:?}"), r#"Metadata {"a", "b"}"#);
    }
}
