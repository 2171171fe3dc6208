//! The two record shapes the generators produce.

use dlp_core::{Record, RecordSet, Schema, Value};

use crate::{FakeRng, GenResult, fake};

/// Field names of the non-sensitive schema, in output order.
pub const NON_SENSITIVE_FIELDS: [&str; 5] = ["Title", "Category", "Version", "Summary", "Tags"];

/// Field names of the sensitive schema, in output order.
pub const SENSITIVE_FIELDS: [&str; 7] =
    ["Name", "Email", "Phone", "NationalID", "CardNumber", "Address", "Notes"];

/// Which record shape to produce.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SchemaKind {
    /// Document metadata with no personal data.
    NonSensitive,
    /// Contact and payment details of a fake person.
    Sensitive,
}

impl SchemaKind {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            SchemaKind::NonSensitive => &NON_SENSITIVE_FIELDS,
            SchemaKind::Sensitive    => &SENSITIVE_FIELDS,
        }
    }

    pub fn schema(self) -> GenResult<Schema> {
        Ok(Schema::new(self.fields().iter().copied())?)
    }

    fn values(self, rng: &mut FakeRng) -> Vec<Value> {
        match self {
            SchemaKind::NonSensitive => vec![
                fake::document_title(rng).into(),
                fake::category(rng).into(),
                fake::version(rng).into(),
                fake::summary(rng).into(),
                fake::tags(rng).into(),
            ],
            SchemaKind::Sensitive => {
                let name = fake::person_name(rng);
                let email = fake::email(rng, &name);
                vec![
                    name.into(),
                    email.into(),
                    fake::phone(rng).into(),
                    fake::national_id(rng).into(),
                    fake::card_number(rng).into(),
                    fake::address(rng).into(),
                    fake::notes(rng).into(),
                ]
            }
        }
    }
}

/// Produce `row_count` records of shape `kind`.
///
/// All records share one [`Schema`] instance; a `row_count` of zero yields
/// an empty set that still carries the schema.
pub fn produce(kind: SchemaKind, row_count: usize, rng: &mut FakeRng) -> GenResult<RecordSet> {
    let schema = kind.schema()?;
    let mut set = RecordSet::new(schema.clone());
    for _ in 0..row_count {
        set.push(Record::new(schema.clone(), kind.values(rng))?)?;
    }
    Ok(set)
}
