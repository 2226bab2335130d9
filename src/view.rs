//! Serializable board view model shared by the terminal renderer and the API.

use serde::{Deserialize, Serialize};

use crate::board::{
    distinct_priorities, distinct_user_ids, GroupBy, OrderBy, TaskGroups, ViewOptions,
};
use crate::labels;
use crate::models::{Snapshot, Task};

/// A fully labelled board, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub group_by: GroupBy,
    pub order_by: OrderBy,
    pub columns: Vec<Column>,
}

/// One group of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub title: String,
    pub symbol: char,
    pub count: usize,
    /// Owner names present in the column, unknown owners included as "Unknown".
    pub users: Vec<String>,
    /// Priority labels present in the column.
    pub priorities: Vec<String>,
    pub cards: Vec<Card>,
}

/// A single task as it appears in a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub user_id: String,
    pub avatar: char,
    pub status: String,
    pub priority: i64,
    pub priority_label: String,
    pub priority_symbol: char,
}

impl Card {
    fn from_task(task: &Task, snapshot: &Snapshot) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            tags: task.tags.clone(),
            user_id: task.user_id.clone(),
            avatar: labels::avatar_initial(snapshot, &task.user_id),
            status: task.status.clone(),
            priority: task.priority,
            priority_label: labels::priority_label(task.priority).to_string(),
            priority_symbol: labels::priority_symbol(task.priority),
        }
    }
}

impl BoardView {
    pub fn build(groups: &TaskGroups<'_>, snapshot: &Snapshot, options: ViewOptions) -> Self {
        let columns = groups
            .iter()
            .map(|(key, tasks)| Column {
                key: key.to_string(),
                title: labels::column_title(options.group_by, key, snapshot),
                symbol: labels::column_symbol(options.group_by, key),
                count: tasks.len(),
                users: distinct_user_ids(tasks)
                    .into_iter()
                    .map(|id| snapshot.user_name(id).to_string())
                    .collect(),
                priorities: distinct_priorities(tasks)
                    .into_iter()
                    .map(|p| labels::priority_label(p).to_string())
                    .collect(),
                cards: tasks
                    .iter()
                    .map(|task| Card::from_task(task, snapshot))
                    .collect(),
            })
            .collect();

        Self {
            group_by: options.group_by,
            order_by: options.order_by,
            columns,
        }
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }
}
