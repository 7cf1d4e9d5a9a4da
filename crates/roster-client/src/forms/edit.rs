//! The "update record" form.

use tracing::{debug, error, warn};

use roster::RecordFields;

use crate::client::ApiClient;
use crate::forms::{Level, Nav};

/// State behind the edit form: the identifier the caller navigated to,
/// plus the three text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    id: String,
    person_name: String,
    person_position: String,
    person_level: String,
}

impl EditForm {
    /// Create the form for the record the caller navigated to. Fields
    /// stay empty until [`EditForm::load`] populates them.
    #[must_use]
    pub fn for_record(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            person_name: String::new(),
            person_position: String::new(),
            person_level: String::new(),
        }
    }

    /// The identifier this form edits.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Fetch the record and populate the fields.
    ///
    /// On failure, or when the record is gone, the fields stay empty
    /// and the problem is only logged.
    pub async fn load(&mut self, client: &ApiClient) {
        match client.get_record(&self.id).await {
            Ok(Some(record)) => {
                self.person_name = record.fields.person_name;
                self.person_position = record.fields.person_position;
                self.person_level = record.fields.person_level;
            }
            Ok(None) => warn!(id = %self.id, "record not found"),
            Err(err) => error!(error = %err, "failed to load record"),
        }
    }

    /// Update the name field.
    pub fn set_person_name(&mut self, value: impl Into<String>) {
        self.person_name = value.into();
    }

    /// Update the position field.
    pub fn set_person_position(&mut self, value: impl Into<String>) {
        self.person_position = value.into();
    }

    /// Select a seniority level.
    pub fn set_person_level(&mut self, level: Level) {
        self.person_level = level.as_str().to_string();
    }

    /// Current name field value.
    #[must_use]
    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    /// Current position field value.
    #[must_use]
    pub fn person_position(&self) -> &str {
        &self.person_position
    }

    /// Current level field value.
    #[must_use]
    pub fn person_level(&self) -> &str {
        &self.person_level
    }

    /// The payload a submission would send, built from current values.
    #[must_use]
    pub fn payload(&self) -> RecordFields {
        RecordFields {
            person_name: self.person_name.clone(),
            person_position: self.person_position.clone(),
            person_level: self.person_level.clone(),
        }
    }

    /// Send the current values to the update endpoint, then hand the
    /// caller back to the listing view, whatever the server said.
    pub async fn submit(&self, client: &ApiClient) -> Nav {
        match client.update_record(&self.id, &self.payload()).await {
            Ok(ack) => debug!(?ack, "record updated"),
            Err(err) => error!(error = %err, "update request failed"),
        }
        Nav::BackToList
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_record_starts_empty() {
        let form = EditForm::for_record("64ab00000000000000000001");
        assert_eq!(form.id(), "64ab00000000000000000001");
        assert!(form.person_name().is_empty());
        assert!(form.person_position().is_empty());
        assert!(form.person_level().is_empty());
    }

    #[test]
    fn test_setters_update_state() {
        let mut form = EditForm::for_record("64ab00000000000000000001");
        form.set_person_name("Bo");
        form.set_person_level(Level::Senior);

        assert_eq!(form.person_name(), "Bo");
        assert_eq!(form.person_level(), "Senior");
    }

    #[tokio::test]
    async fn test_load_failure_leaves_fields_empty() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let mut form = EditForm::for_record("64ab00000000000000000001");

        form.load(&client).await;
        assert!(form.person_name().is_empty());
        assert!(form.person_level().is_empty());
    }

    #[tokio::test]
    async fn test_submit_navigates_back_even_on_failure() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let form = EditForm::for_record("64ab00000000000000000001");

        assert_eq!(form.submit(&client).await, Nav::BackToList);
    }
}
