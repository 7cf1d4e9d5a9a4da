//! In-memory record store for tests and local development.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::Result;
use crate::record::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};
use crate::store::{parse_object_id, RecordStore};

/// Record store holding everything in process memory.
///
/// Identifiers are real `ObjectId` hex strings, so identifier handling is
/// exercised exactly as it would be against the document store. Insertion
/// order is the listing order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Record>> {
        let records = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Record>> {
        let id = parse_object_id(id)?.to_hex();
        let records = self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .find(|record| record.id.as_deref() == Some(id.as_str()))
            .cloned())
    }

    async fn insert(&self, fields: RecordFields) -> Result<InsertAck> {
        let inserted_id = ObjectId::new().to_hex();
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        records.push(Record {
            id: Some(inserted_id.clone()),
            fields,
        });

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update(&self, id: &str, fields: RecordFields) -> Result<UpdateAck> {
        let id = parse_object_id(id)?.to_hex();
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        match records
            .iter_mut()
            .find(|record| record.id.as_deref() == Some(id.as_str()))
        {
            Some(record) => {
                let modified = u64::from(record.fields != fields);
                record.fields = fields;
                Ok(UpdateAck {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: modified,
                })
            }
            None => Ok(UpdateAck {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let id = parse_object_id(id)?.to_hex();
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let before = records.len();
        records.retain(|record| record.id.as_deref() != Some(id.as_str()));

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - records.len()) as u64,
        })
    }
}
