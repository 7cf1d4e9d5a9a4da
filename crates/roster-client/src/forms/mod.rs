//! Framework-independent form components.
//!
//! Each component is an explicit state holder with pure update functions;
//! nothing here is tied to a rendering layer or its lifecycle. Submission
//! talks to the record API through [`crate::ApiClient`].

mod create;
mod edit;
mod list;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use create::CreateForm;
pub use edit::EditForm;
pub use list::ListView;

/// Seniority levels the forms offer.
///
/// This is the radio-input restriction of the original form, and the only
/// place the enumeration exists; the server stores whatever text it
/// receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Intern level.
    Intern,
    /// Junior level.
    Junior,
    /// Senior level.
    Senior,
}

impl Level {
    /// Every level, in form order.
    pub const ALL: [Self; 3] = [Self::Intern, Self::Junior, Self::Senior];

    /// The text stored for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intern => "Intern",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for text that names no known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Intern" => Ok(Self::Intern),
            "Junior" => Ok(Self::Junior),
            "Senior" => Ok(Self::Senior),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// Where the caller should go after a form action completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Return to the listing view.
    BackToList,
}
