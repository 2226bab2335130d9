use serde::{Deserialize, Serialize};

/// A user who can own tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Availability flag from the data source. Not used for grouping.
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available,
        }
    }
}
