//! `Record` and `RecordSet`: the unit every writer consumes.
//!
//! # Invariant
//!
//! Every record in a [`RecordSet`] has exactly the set's field-name
//! sequence.  The set checks this on every insertion, so writers can emit the
//! schema once (header row, table head, …) and then trust each record's
//! values to line up with it.
//!
//! Both types are write-once: there is no API for changing a value after
//! construction, and writers only ever receive `&RecordSet`.

use crate::{CoreError, CoreResult, Schema, Value};

// ── Record ────────────────────────────────────────────────────────────────────

/// An ordered mapping of field names to scalar values.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    schema: Schema,
    values: Vec<Value>,
}

impl Record {
    /// Pair `values` with `schema`.  The two must have the same length.
    pub fn new(schema: Schema, values: Vec<Value>) -> CoreResult<Self> {
        if schema.len() != values.len() {
            return Err(CoreError::Arity { expected: schema.len(), found: values.len() });
        }
        Ok(Record { schema, values })
    }

    /// Build a record (and a fresh schema) from `(field, value)` pairs.
    ///
    /// Prefer [`Record::new`] with a shared [`Schema`] when producing many
    /// records of the same shape.
    pub fn from_pairs<I, K, V>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let (fields, values): (Vec<String>, Vec<Value>) =
            pairs.into_iter().map(|(k, v)| (k.into(), v.into())).unzip();
        Record::new(Schema::new(fields)?, values)
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Values in schema order.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Look up a value by field name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.schema.position(field).map(|i| &self.values[i])
    }

    /// `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.schema.iter().zip(self.values.iter())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

// ── RecordSet ─────────────────────────────────────────────────────────────────

/// An ordered, schema-uniform sequence of records.
///
/// An empty set still carries its schema, so header-bearing formats can emit
/// a header with no rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSet {
    schema:  Schema,
    records: Vec<Record>,
}

impl RecordSet {
    /// An empty set whose records must match `schema`.
    pub fn new(schema: Schema) -> Self {
        RecordSet { schema, records: Vec::new() }
    }

    /// An empty set with no schema at all.
    pub fn empty() -> Self {
        RecordSet::new(Schema::empty())
    }

    /// Collect `records` into a set, taking the schema from the first one.
    ///
    /// An empty `Vec` yields a schema-less empty set.
    pub fn from_records(records: Vec<Record>) -> CoreResult<Self> {
        let schema = records.first().map(|r| r.schema.clone()).unwrap_or_else(Schema::empty);
        let mut set = RecordSet { schema, records: Vec::with_capacity(records.len()) };
        for record in records {
            set.push(record)?;
        }
        Ok(set)
    }

    /// Append `record`, rejecting it if its schema differs from the set's.
    pub fn push(&mut self, record: Record) -> CoreResult<()> {
        if record.schema != self.schema {
            return Err(CoreError::SchemaMismatch {
                expected: self.schema.clone(),
                found:    record.schema.clone(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecordSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.iter())
    }
}
