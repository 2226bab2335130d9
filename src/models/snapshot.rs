use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Task, User};

/// Name shown for a user identifier with no matching user.
pub const UNKNOWN_USER: &str = "Unknown";

/// The inbound record returned by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPayload {
    pub tickets: Vec<Task>,
    pub users: Vec<User>,
}

/// The `(tasks, users)` pair held after a successful fetch.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, users: Vec<User>) -> Self {
        Self {
            tasks,
            users,
            fetched_at: Utc::now(),
        }
    }

    pub fn from_payload(payload: BoardPayload) -> Self {
        Self::new(payload.tickets, payload.users)
    }

    /// Look a user up by identifier.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolve a user name, falling back to [`UNKNOWN_USER`].
    pub fn user_name(&self, id: &str) -> &str {
        self.user(id).map_or(UNKNOWN_USER, |u| u.name.as_str())
    }
}
