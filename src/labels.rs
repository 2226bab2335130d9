//! Display labels and symbols for statuses, priorities and users.
//!
//! These tables belong to the presentation layer. Every lookup falls back to
//! a placeholder instead of failing, whatever the grouping mode.

use crate::board::GroupBy;
use crate::models::Snapshot;

const TODO: char = '○';
const IN_PROGRESS: char = '◐';
const DONE: char = '●';
const CANCELED: char = '✗';
const BACKLOG: char = '◌';

const URGENT: char = '!';
const HIGH: char = '▇';
const MEDIUM: char = '▅';
const LOW: char = '▂';
const NO_PRIORITY: char = '…';

/// Label used for a priority outside `0..=4`.
pub const NO_PRIORITY_LABEL: &str = "No Priority";

/// Avatar shown for a task whose owner is not in the snapshot.
pub const UNKNOWN_AVATAR: char = '?';

/// Symbol for a status column. Unrecognized statuses use the backlog symbol.
pub fn status_symbol(status: &str) -> char {
    match status {
        "Todo" => TODO,
        "In Progress" => IN_PROGRESS,
        "Done" => DONE,
        "Canceled" => CANCELED,
        _ => BACKLOG,
    }
}

pub fn priority_label(priority: i64) -> &'static str {
    match priority {
        4 => "Urgent",
        3 => "High",
        2 => "Medium",
        1 => "Low",
        _ => NO_PRIORITY_LABEL,
    }
}

pub fn priority_symbol(priority: i64) -> char {
    match priority {
        4 => URGENT,
        3 => HIGH,
        2 => MEDIUM,
        1 => LOW,
        _ => NO_PRIORITY,
    }
}

/// First character of the owner's name, or [`UNKNOWN_AVATAR`].
pub fn avatar_initial(snapshot: &Snapshot, user_id: &str) -> char {
    snapshot
        .user(user_id)
        .and_then(|u| u.name.chars().next())
        .unwrap_or(UNKNOWN_AVATAR)
}

/// Column heading for a group key under the given grouping.
pub fn column_title(group_by: GroupBy, key: &str, snapshot: &Snapshot) -> String {
    match group_by {
        GroupBy::Status => key.to_string(),
        GroupBy::User => snapshot.user_name(key).to_string(),
        GroupBy::Priority => key
            .parse::<i64>()
            .map_or(NO_PRIORITY_LABEL, priority_label)
            .to_string(),
    }
}

/// Column symbol for a group key under the given grouping.
pub fn column_symbol(group_by: GroupBy, key: &str) -> char {
    match group_by {
        GroupBy::Status => status_symbol(key),
        GroupBy::User => '@',
        GroupBy::Priority => key.parse::<i64>().map_or(NO_PRIORITY, priority_symbol),
    }
}
