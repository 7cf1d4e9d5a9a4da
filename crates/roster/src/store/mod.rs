//! Store layer for roster.
//!
//! One trait, two implementations: [`mongo::MongoStore`] talks to the
//! document store; [`memory::MemoryStore`] keeps records in process for
//! tests and local development. Handlers only ever see the trait.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::{Error, Result};
use crate::record::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};

/// Name of the collection all records live in.
pub const COLLECTION_NAME: &str = "records";

/// CRUD operations over the record collection.
///
/// Every operation is independent; the only shared state is the
/// connection behind the implementation. Absent identifiers are not
/// errors: `get` returns `None`, `update` and `delete` acknowledge zero
/// matched or deleted records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Return all records, in store order, without pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn list(&self) -> Result<Vec<Record>>;

    /// Return the record with the given identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unparseable or the store
    /// operation fails.
    async fn get(&self, id: &str) -> Result<Option<Record>>;

    /// Insert a new record with the given fields, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    async fn insert(&self, fields: RecordFields) -> Result<InsertAck>;

    /// Overwrite all three fields of the record with the given identifier.
    ///
    /// A no-op (zero matched) when the identifier does not exist; never
    /// creates a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unparseable or the store
    /// operation fails.
    async fn update(&self, id: &str, fields: RecordFields) -> Result<UpdateAck>;

    /// Remove the record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unparseable or the store
    /// operation fails.
    async fn delete(&self, id: &str) -> Result<DeleteAck>;
}

/// Parse a caller-supplied identifier into an `ObjectId`.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| Error::invalid_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let oid = parse_object_id("64ab00000000000000000001").unwrap();
        assert_eq!(oid.to_hex(), "64ab00000000000000000001");
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        let err = parse_object_id("not-an-id").unwrap_err();
        assert!(err.is_invalid_id());
    }

    #[test]
    fn test_parse_object_id_rejects_short_hex() {
        assert!(parse_object_id("64ab").is_err());
    }
}
