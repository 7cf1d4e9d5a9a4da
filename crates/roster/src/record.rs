//! Core record types for roster.
//!
//! A record is one person: name, position, and seniority level, plus a
//! store-generated identifier. The server treats all three fields as
//! opaque text; the level enumeration is a client-side concern.

use serde::{Deserialize, Serialize};

/// The caller-supplied fields of a record.
///
/// Shared by create and update, which always writes all three together.
/// Values pass through verbatim, with no trimming and no level
/// enforcement; fields missing from a request body deserialize as
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFields {
    /// The person's name.
    pub person_name: String,
    /// The person's position.
    pub person_position: String,
    /// The person's seniority level.
    pub person_level: String,
}

/// A persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-generated identifier (hex `ObjectId`), immutable after
    /// creation. Absent until the store assigns one.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The record's fields.
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl Record {
    /// Create a record that has not been persisted yet.
    #[must_use]
    pub fn new(fields: RecordFields) -> Self {
        Self { id: None, fields }
    }
}

/// Acknowledgment of an insert, mirroring the store's result shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// The generated identifier, as hex.
    pub inserted_id: String,
}

/// Acknowledgment of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Number of records the identifier matched (0 or 1).
    pub matched_count: u64,
    /// Number of records actually changed.
    pub modified_count: u64,
}

/// Acknowledgment of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    /// Whether the store acknowledged the write.
    pub acknowledged: bool,
    /// Number of records removed (0 or 1).
    pub deleted_count: u64,
}
