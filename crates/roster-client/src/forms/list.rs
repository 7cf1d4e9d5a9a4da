//! The listing view.

use tracing::{debug, error};

use roster::Record;

use crate::client::ApiClient;

/// State behind the listing view: the records last fetched.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    records: Vec<Record>,
}

impl ListView {
    /// Create an empty listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The records currently shown.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replace the listing with the server's current contents.
    ///
    /// On failure the previous contents stay put; the error is logged.
    pub async fn load(&mut self, client: &ApiClient) {
        match client.list_records().await {
            Ok(records) => self.records = records,
            Err(err) => error!(error = %err, "failed to load records"),
        }
    }

    /// Delete one record and drop it from the local listing.
    ///
    /// The local state only changes when the server acknowledged the
    /// delete; a failure is logged and leaves the listing alone.
    pub async fn delete(&mut self, id: &str, client: &ApiClient) {
        match client.delete_record(id).await {
            Ok(ack) => {
                debug!(?ack, "record deleted");
                self.records
                    .retain(|record| record.id.as_deref() != Some(id));
            }
            Err(err) => error!(error = %err, "delete request failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_listing_is_empty() {
        assert!(ListView::new().records().is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_state() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let mut view = ListView::new();

        view.load(&client).await;
        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_listing() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let mut view = ListView::new();

        view.delete("64ab00000000000000000001", &client).await;
        assert!(view.records().is_empty());
    }
}
