use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::task::Status;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub id: String,
    pub title: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            max_items: None,
        }
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Effective capacity. Zero counts as no limit.
    pub fn limit(&self) -> Option<usize> {
        self.max_items.filter(|&max| max > 0)
    }

    /// Whether the add affordance is available with `count` cards already in the column.
    pub fn can_accept_new(&self, count: usize) -> bool {
        self.limit().map_or(true, |max| count < max)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duplicate column id: {0}")]
    DuplicateColumnId(String),

    #[error("more than one column for status: {}", .0.as_str())]
    DuplicateStatus(Status),
}

/// Column layout of a board. At most one column per status.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    columns: Vec<ColumnDef>,
}

impl BoardConfig {
    pub fn new(columns: Vec<ColumnDef>) -> Result<Self, ConfigError> {
        let mut ids = HashSet::new();
        let mut statuses = HashSet::new();
        for column in &columns {
            if !ids.insert(column.id.clone()) {
                return Err(ConfigError::DuplicateColumnId(column.id.clone()));
            }
            if !statuses.insert(column.status) {
                return Err(ConfigError::DuplicateStatus(column.status));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column_for(&self, status: Status) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.status == status)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("todo", "To Do", Status::Todo),
                ColumnDef::new("ongoing", "Ongoing", Status::Ongoing),
                ColumnDef::new("done", "Done", Status::Done),
            ],
        }
    }
}
