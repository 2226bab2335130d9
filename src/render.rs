//! Plain-text rendering of a board for the terminal.

use crate::board::GroupBy;
use crate::view::{BoardView, Card, Column};

/// Render a board as text, one column after another.
///
/// Example output:
/// ```text
/// ○ Todo (2)
///   CAM-2  A  Add search  [! Urgent]
///             Feature Request
///   CAM-1  ?  Fix login   [▅ Medium]
/// ```
pub fn render_board(view: &BoardView) -> String {
    let mut output = String::new();
    for (i, column) in view.columns.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_column(&mut output, column, view.group_by);
    }
    output
}

fn render_column(output: &mut String, column: &Column, group_by: GroupBy) {
    output.push_str(&format!("{} {} ({})\n", column.symbol, column.title, column.count));

    // Owner names or priority labels, matching the grouping
    let summary = match group_by {
        GroupBy::User => Some(&column.users),
        GroupBy::Priority => Some(&column.priorities),
        GroupBy::Status => None,
    };
    if let Some(items) = summary.filter(|items| !items.is_empty()) {
        output.push_str("  ");
        output.push_str(&items.join(", "));
        output.push('\n');
    }
    render_cards(output, &column.cards);
}

fn render_cards(output: &mut String, cards: &[Card]) {
    let id_width = cards.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
    let title_width = cards
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0);

    for card in cards {
        output.push_str(&format!(
            "  {:<id_width$}  {}  {:<title_width$}  [{} {}]\n",
            card.id, card.avatar, card.title, card.priority_symbol, card.priority_label,
        ));
        if !card.tags.is_empty() {
            output.push_str(&format!(
                "  {:<id_width$}     {}\n",
                "",
                card.tags.join(", ")
            ));
        }
    }
}
