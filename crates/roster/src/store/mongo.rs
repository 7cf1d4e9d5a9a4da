//! MongoDB-backed record store.
//!
//! Documents are read and written as raw [`Document`]s and converted at
//! this boundary, so the wire model stays plain JSON everywhere else.

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::record::{DeleteAck, InsertAck, Record, RecordFields, UpdateAck};
use crate::store::{parse_object_id, RecordStore, COLLECTION_NAME};

/// Record store backed by a MongoDB collection.
///
/// One client is opened at startup and shared by all requests; the driver
/// manages its own connection pooling underneath.
pub struct MongoStore {
    records: Collection<Document>,
}

impl MongoStore {
    /// Connect to the document store and select the configured database.
    ///
    /// Issues a `ping` so bad addresses or credentials fail here, at
    /// startup, instead of on the first request. No retry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreConnect`] if the client cannot be built or
    /// the ping fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let uri = config.connection_string();
        let client = Client::with_uri_str(&uri)
            .await
            .map_err(|source| Error::StoreConnect { source })?;

        let db = client.database(config.name_or_default());
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| Error::StoreConnect { source })?;

        info!(database = db.name(), "connected to document store");
        Ok(Self {
            records: db.collection::<Document>(COLLECTION_NAME),
        })
    }
}

impl std::fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoStore")
            .field("collection", &self.records.name())
            .finish()
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn list(&self) -> Result<Vec<Record>> {
        let mut cursor = self.records.find(doc! {}).await?;
        let mut records = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            records.push(document_to_record(&document));
        }
        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<Option<Record>> {
        let oid = parse_object_id(id)?;
        let found = self.records.find_one(doc! { "_id": oid }).await?;
        Ok(found.map(|document| document_to_record(&document)))
    }

    async fn insert(&self, fields: RecordFields) -> Result<InsertAck> {
        let result = self.records.insert_one(fields_document(&fields)).await?;
        let inserted_id = result
            .inserted_id
            .as_object_id()
            .map_or_else(|| result.inserted_id.to_string(), |oid| oid.to_hex());

        debug!(%inserted_id, "inserted record");
        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update(&self, id: &str, fields: RecordFields) -> Result<UpdateAck> {
        let oid = parse_object_id(id)?;
        let result = self
            .records
            .update_one(doc! { "_id": oid }, doc! { "$set": fields_document(&fields) })
            .await?;

        debug!(id, matched = result.matched_count, "updated record");
        Ok(UpdateAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete(&self, id: &str) -> Result<DeleteAck> {
        let oid = parse_object_id(id)?;
        let result = self.records.delete_one(doc! { "_id": oid }).await?;

        debug!(id, deleted = result.deleted_count, "deleted record");
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}

/// Build the stored document from caller-supplied fields, verbatim.
fn fields_document(fields: &RecordFields) -> Document {
    doc! {
        "person_name": fields.person_name.clone(),
        "person_position": fields.person_position.clone(),
        "person_level": fields.person_level.clone(),
    }
}

/// Convert a stored document to a record.
///
/// Field access is forgiving: anything missing or non-textual comes back
/// as an empty string, since nothing was validated on the way in.
fn document_to_record(document: &Document) -> Record {
    let id = document.get_object_id("_id").map(|oid| oid.to_hex()).ok();

    Record {
        id,
        fields: RecordFields {
            person_name: document.get_str("person_name").unwrap_or_default().to_owned(),
            person_position: document
                .get_str("person_position")
                .unwrap_or_default()
                .to_owned(),
            person_level: document.get_str("person_level").unwrap_or_default().to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_fields() -> RecordFields {
        RecordFields {
            person_name: "Ann".to_string(),
            person_position: "Engineer".to_string(),
            person_level: "Junior".to_string(),
        }
    }

    #[test]
    fn test_fields_document_is_verbatim() {
        let fields = RecordFields {
            person_name: "  spaced  ".to_string(),
            person_position: String::new(),
            person_level: "whatever".to_string(),
        };

        let document = fields_document(&fields);
        assert_eq!(document.get_str("person_name").unwrap(), "  spaced  ");
        assert_eq!(document.get_str("person_position").unwrap(), "");
        assert_eq!(document.get_str("person_level").unwrap(), "whatever");
    }

    #[test]
    fn test_document_to_record() {
        let oid = ObjectId::new();
        let mut document = fields_document(&sample_fields());
        document.insert("_id", oid);

        let record = document_to_record(&document);
        assert_eq!(record.id, Some(oid.to_hex()));
        assert_eq!(record.fields, sample_fields());
    }

    #[test]
    fn test_document_to_record_missing_fields() {
        let document = doc! { "_id": ObjectId::new() };

        let record = document_to_record(&document);
        assert!(record.id.is_some());
        assert!(record.fields.person_name.is_empty());
        assert!(record.fields.person_position.is_empty());
        assert!(record.fields.person_level.is_empty());
    }

    #[test]
    fn test_document_to_record_non_oid_id() {
        let document = doc! { "_id": "legacy-string-id", "person_name": "Ann" };

        let record = document_to_record(&document);
        assert!(record.id.is_none());
        assert_eq!(record.fields.person_name, "Ann");
    }
}
