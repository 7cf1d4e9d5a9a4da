//! The "create new record" form.

use tracing::{debug, error};

use roster::RecordFields;

use crate::client::ApiClient;
use crate::forms::Level;

/// State behind the create form: three text fields, all starting empty.
///
/// Submission posts the current values and then resets the form no matter
/// what the server said. The form gives its user no error feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    person_name: String,
    person_position: String,
    person_level: String,
}

impl CreateForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.person_name.is_empty()
            && self.person_position.is_empty()
            && self.person_level.is_empty()
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

    /// Post the current values to the create endpoint.
    ///
    /// The raw acknowledgment (or the failure) is logged, and the fields
    /// are cleared regardless of the outcome.
    pub async fn submit(&mut self, client: &ApiClient) {
        let payload = self.payload();
        match client.create_record(&payload).await {
            Ok(ack) => debug!(?ack, "record created"),
            Err(err) => error!(error = %err, "create request failed"),
        }
        *self = Self::default();
    }
}
