//! Ordered field-name lists.

use std::fmt;
use std::sync::Arc;

use crate::{CoreError, CoreResult};

/// The ordered field names every record of a set shares.
///
/// Backed by an `Arc<[String]>` so each record can hold its schema without
/// copying the names; clones are a reference-count bump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema(Arc<[String]>);

impl Schema {
    /// Build a schema from field names, rejecting duplicates.
    pub fn new<I, S>(fields: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        for (i, name) in fields.iter().enumerate() {
            if fields[..i].contains(name) {
                return Err(CoreError::DuplicateField(name.clone()));
            }
        }
        Ok(Schema(fields.into()))
    }

    /// A schema with no fields, used by sets that were never given one.
    pub fn empty() -> Self {
        Schema(Arc::from(Vec::<String>::new()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in schema order.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Position of `field`, if present.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.0.iter().position(|f| f == field)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
