use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Ongoing,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Ongoing => "ongoing",
            Status::Done => "done",
        }
    }

    /// Label shown on the card badge.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::Ongoing => "In Progress",
            Status::Done => "Done",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Todo => "status-todo",
            Status::Ongoing => "status-ongoing",
            Status::Done => "status-done",
        }
    }

    pub fn all() -> Vec<Status> {
        vec![Status::Todo, Status::Ongoing, Status::Done]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-low",
            Priority::Medium => "priority-medium",
            Priority::High => "priority-high",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-dot bg-green",
            Priority::Medium => "priority-dot bg-yellow",
            Priority::High => "priority-dot bg-red",
        }
    }

    /// Unknown values fall back to medium, like the form's default option.
    pub fn parse(value: &str) -> Priority {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::Low, Priority::Medium, Priority::High]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
}

impl Task {
    /// Builds a brand new task from an editor draft. The id is freshly generated
    /// and any id carried by the draft is ignored.
    pub fn from_draft(draft: TaskDraft, status: Status, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            status,
            priority: draft.priority,
            due_date: draft.due_date,
            created_at: now,
            assignee: draft.assignee,
            tags: draft.tags,
        }
    }

    /// Overwrites the editable fields. `id`, `status` and `created_at` are left alone.
    pub fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.priority = draft.priority;
        self.due_date = draft.due_date;
        self.assignee = draft.assignee;
        self.tags = draft.tags;
    }

    /// A task is overdue once its due date (midnight UTC) is strictly in the past.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc() < now)
            .unwrap_or(false)
    }
}

/// Formats a date as `Jul 8`, adding the year only when it differs from `now`.
pub fn format_short_date(date: NaiveDate, now: DateTime<Utc>) -> String {
    if date.year() == now.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Editable fields of a task as held by the editor form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub assignee: Option<String>,
    pub tags: Vec<String>,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due_date: task.due_date,
            assignee: task.assignee.clone(),
            tags: task.tags.clone(),
        }
    }

    /// `YYYY-MM-DD` as produced by a date input. Blank or garbled input means no deadline.
    pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
    }

    pub fn parse_assignee(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Comma separated tags, trimmed, blanks dropped, order kept.
    pub fn parse_tags(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn due_date_input(&self) -> String {
        self.due_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn tags_input(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_task() -> Task {
        Task {
            id: "1".to_string(),
            title: "Setup project structure".to_string(),
            description: String::new(),
            status: Status::Todo,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2025, 7, 8),
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            assignee: Some("Ali".to_string()),
            tags: vec!["setup".to_string(), "urgent".to_string()],
        }
    }

    #[test]
    fn status_badges_and_classes() {
        let labels: Vec<&str> = Status::all().iter().map(Status::label).collect();
        assert_eq!(labels, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(Status::Ongoing.css_class(), "status-ongoing");
    }

    #[test]
    fn overdue_only_when_due_date_is_strictly_past() {
        let task = sample_task();
        let before = Utc.with_ymd_and_hms(2025, 7, 7, 12, 0, 0).unwrap();
        let exactly = Utc.with_ymd_and_hms(2025, 7, 8, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 7, 8, 0, 0, 1).unwrap();
        assert!(!task.is_overdue(before));
        assert!(!task.is_overdue(exactly));
        assert!(task.is_overdue(after));

        let no_deadline = Task { due_date: None, ..task };
        assert!(!no_deadline.is_overdue(after));
    }

    #[test]
    fn short_date_includes_year_only_when_different() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 8).unwrap();
        let same_year = Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap();
        let next_year = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_short_date(date, same_year), "Jul 8");
        assert_eq!(format_short_date(date, next_year), "Jul 8, 2025");
    }

    #[test]
    fn apply_draft_keeps_identity_fields() {
        let mut task = sample_task();
        let mut draft = TaskDraft::from_task(&task);
        draft.title = "Renamed".to_string();
        draft.assignee = None;
        draft.tags = vec!["later".to_string()];

        task.apply_draft(draft);

        assert_eq!(task.id, "1");
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.created_at, Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.assignee, None);
        assert_eq!(task.tags, vec!["later".to_string()]);
    }

    #[test]
    fn parses_form_inputs() {
        assert_eq!(
            TaskDraft::parse_tags(" design, ui ,, later "),
            vec!["design".to_string(), "ui".to_string(), "later".to_string()]
        );
        assert!(TaskDraft::parse_tags("  ").is_empty());
        assert_eq!(TaskDraft::parse_assignee("   "), None);
        assert_eq!(TaskDraft::parse_assignee(" Ali "), Some("Ali".to_string()));
        assert_eq!(
            TaskDraft::parse_due_date("2025-07-12"),
            NaiveDate::from_ymd_opt(2025, 7, 12)
        );
        assert_eq!(TaskDraft::parse_due_date(""), None);
        assert_eq!(TaskDraft::parse_due_date("12/07/2025"), None);
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("urgent"), Priority::Medium);
    }

    #[test]
    fn serializes_in_camel_case_with_lowercase_enums() {
        let value = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(value["status"], "todo");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["dueDate"], "2025-07-08");
        assert!(value.get("createdAt").is_some());
    }
}
