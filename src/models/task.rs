use serde::{Deserialize, Serialize};

/// A ticket on the board.
///
/// Tasks are immutable snapshots received from the data source. Grouping and
/// ordering only ever rearrange references to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Display tags, in display order. Duplicates are kept.
    #[serde(rename = "tag", default)]
    pub tags: Vec<String>,
    /// Owning user. May reference a user missing from the snapshot.
    pub user_id: String,
    /// Open set of labels such as `Todo`, `In Progress` or `Done`.
    pub status: String,
    /// Expected in `0..=4`, but any value is carried through untouched.
    pub priority: i64,
}

impl Task {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        user_id: impl Into<String>,
        status: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: Vec::new(),
            user_id: user_id.into(),
            status: status.into(),
            priority,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
