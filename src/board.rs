//! Grouping and ordering of tasks into board columns.
//!
//! [`BoardEngine::group`] partitions a task list by a [`GroupBy`] key, then
//! sorts each group by an [`OrderBy`] key. It is a pure transform: no I/O, no
//! memory of previous calls, and every input task lands in exactly one group.

use std::fmt;
use std::str::FromStr;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu_locale_core::Locale;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Task;

/// Errors building a [`BoardEngine`].
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid locale '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },

    #[error("Collation data unavailable: {0}")]
    Collation(String),
}

/// A grouping or ordering mode string that names no mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} mode '{value}'")]
pub struct ParseModeError {
    kind: &'static str,
    value: String,
}

/// How tasks are bucketed into columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    #[default]
    Status,
    User,
    Priority,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::User => "user",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for GroupBy {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "user" => Ok(Self::User),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseModeError {
                kind: "grouping",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How tasks are sorted inside a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Highest priority value first.
    #[default]
    Priority,
    /// Ascending title under locale-aware collation.
    Title,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Title => "title",
        }
    }
}

impl FromStr for OrderBy {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            _ => Err(ParseModeError {
                kind: "ordering",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The display settings a board is computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    #[serde(default)]
    pub group_by: GroupBy,
    #[serde(default)]
    pub order_by: OrderBy,
}

impl ViewOptions {
    pub fn new(group_by: GroupBy, order_by: OrderBy) -> Self {
        Self { group_by, order_by }
    }
}

/// The key a task is bucketed under for the given grouping.
pub fn group_key(task: &Task, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Status => task.status.clone(),
        GroupBy::User => task.user_id.clone(),
        GroupBy::Priority => task.priority.to_string(),
    }
}

/// Position of a priority key among the leading numeric columns, if it has one.
fn column_index(key: &str) -> Option<u32> {
    key.parse::<u32>().ok().filter(|n| n.to_string() == key)
}

/// Tasks partitioned by group key.
///
/// Groups iterate in order of first discovery in the input, except under
/// [`GroupBy::Priority`] where non-negative priorities come first in
/// ascending order. Only keys that occur in the input are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TaskGroups<'a> {
    groups: IndexMap<String, Vec<&'a Task>>,
}

impl<'a> TaskGroups<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&[&'a Task]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Task])> {
        self.groups
            .iter()
            .map(|(key, tasks)| (key.as_str(), tasks.as_slice()))
    }

    /// Total number of tasks across all groups.
    pub fn task_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Groups and orders tasks. Holds the collator used for title ordering.
pub struct BoardEngine {
    collator: CollatorBorrowed<'static>,
}

impl BoardEngine {
    /// Engine using root-locale collation.
    pub fn new() -> Result<Self, BoardError> {
        Self::with_preferences(CollatorPreferences::default())
    }

    /// Engine collating titles for a BCP-47 locale tag such as `en` or `sv-SE`.
    pub fn for_locale(tag: &str) -> Result<Self, BoardError> {
        let locale = tag.parse::<Locale>().map_err(|e| BoardError::InvalidLocale {
            tag: tag.to_string(),
            reason: e.to_string(),
        })?;
        Self::with_preferences(CollatorPreferences::from(locale))
    }

    fn with_preferences(prefs: CollatorPreferences) -> Result<Self, BoardError> {
        let collator = Collator::try_new(prefs, CollatorOptions::default())
            .map_err(|e| BoardError::Collation(e.to_string()))?;
        Ok(Self { collator })
    }

    /// Partition `tasks` by `options.group_by`, then sort each group by
    /// `options.order_by`. Equal keys keep their input order.
    pub fn group<'a>(&self, tasks: &'a [Task], options: ViewOptions) -> TaskGroups<'a> {
        let mut groups: IndexMap<String, Vec<&'a Task>> = IndexMap::new();
        for task in tasks {
            groups
                .entry(group_key(task, options.group_by))
                .or_default()
                .push(task);
        }

        for members in groups.values_mut() {
            self.sort(members, options.order_by);
        }

        if options.group_by == GroupBy::Priority {
            // Numeric columns ascend; negative keys stay in discovery order after them
            groups.sort_by(|a, _, b, _| match (column_index(a), column_index(b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            });
        }

        tracing::trace!(
            group_by = %options.group_by,
            order_by = %options.order_by,
            groups = groups.len(),
            tasks = tasks.len(),
            "Grouped tasks"
        );

        TaskGroups { groups }
    }

    /// Stable in-place sort of one group.
    pub fn sort(&self, tasks: &mut [&Task], order_by: OrderBy) {
        match order_by {
            OrderBy::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority)),
            OrderBy::Title => tasks.sort_by(|a, b| self.collator.compare(&a.title, &b.title)),
        }
    }

    /// Locale-aware comparison of two titles.
    pub fn compare_titles(&self, a: &str, b: &str) -> std::cmp::Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardEngine").finish_non_exhaustive()
    }
}

/// Distinct owning-user identifiers in a group, in order of first appearance.
pub fn distinct_user_ids<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
    let mut ids: Vec<&'a str> = Vec::new();
    for task in tasks {
        if !ids.contains(&task.user_id.as_str()) {
            ids.push(task.user_id.as_str());
        }
    }
    ids
}

/// Distinct priority values in a group, in order of first appearance.
pub fn distinct_priorities(tasks: &[&Task]) -> Vec<i64> {
    let mut priorities = Vec::new();
    for task in tasks {
        if !priorities.contains(&task.priority) {
            priorities.push(task.priority);
        }
    }
    priorities
}
