//! `dlp-core`: record types shared by every `dlp-*` crate.
//!
//! This crate has no `dlp-*` dependencies and minimal external ones (only
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`value`]       | `Value`: string, integer or decimal scalar            |
//! | [`schema`]      | `Schema`: shared, ordered list of field names         |
//! | [`record`]      | `Record`, `RecordSet`                                 |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize` to `Value` and `Record` (records become   |
//! |         | ordered maps). Required by the JSON writer.                |

pub mod error;
pub mod record;
pub mod schema;
pub mod value;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use record::{Record, RecordSet};
pub use schema::Schema;
pub use value::Value;
