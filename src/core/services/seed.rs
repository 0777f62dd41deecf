use chrono::{NaiveDate, TimeZone, Utc};

use crate::core::models::{AppView, NavItem, NavState, Priority, Status, Task};

pub const APP_TITLE: &str = "Todo Item Tracker";

fn created(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}

/// Sample tasks shown on first load.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Setup project structure".to_string(),
            description: "Create the basic folder structure and install dependencies".to_string(),
            status: Status::Todo,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 8),
            created_at: created(2025, 7, 1),
            assignee: Some("Ali".to_string()),
            tags: tags(&["setup", "urgent"]),
        },
        Task {
            id: "2".to_string(),
            title: "Design kanban board UI".to_string(),
            description: "Create wireframes and design the kanban board interface".to_string(),
            status: Status::Ongoing,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 12),
            created_at: created(2025, 7, 2),
            assignee: Some("Ali".to_string()),
            tags: tags(&["design", "ui"]),
        },
        Task {
            id: "3".to_string(),
            title: "Implement drag and drop".to_string(),
            description: "Add drag and drop functionality between columns".to_string(),
            status: Status::Todo,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 15),
            created_at: created(2025, 7, 3),
            assignee: None,
            tags: tags(&["feature", "interaction"]),
        },
    ]
}

/// Navigation entries with the board selected and badged with `task_count`.
pub fn default_nav(task_count: usize) -> NavState {
    let mut board = NavItem::new(AppView::Board, "Kanban Board", "📋");
    board.badge = Some(task_count.to_string());
    NavState::new(
        vec![
            board,
            NavItem::new(AppView::List, "List View", "📝"),
            NavItem::new(AppView::Calendar, "Calendar", "📅"),
            NavItem::new(AppView::Settings, "Settings", "⚙️"),
        ],
        AppView::Board,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::BoardConfig;
    use crate::core::services::BoardState;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_all_reachable() {
        let tasks = sample_tasks();
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());

        let state = BoardState::new(tasks, BoardConfig::default());
        assert!(state.unreachable_tasks().is_empty());
    }

    #[test]
    fn default_nav_badges_the_board() {
        let nav = default_nav(3);
        assert_eq!(nav.current(), AppView::Board);
        assert_eq!(nav.items()[0].badge.as_deref(), Some("3"));
        assert_eq!(nav.items().iter().filter(|i| i.active).count(), 1);
    }
}
