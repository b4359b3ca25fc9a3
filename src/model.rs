use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TodoError;

/// Date format used for the `due` field on disk and on the command line.
pub const DUE_FORMAT: &str = "%Y-%m-%d";

/// A single task record, optionally owning one level of subtasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 date text (`YYYY-MM-DD`); kept as entered, parsed on demand
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<Todo>,
    #[serde(default)]
    pub completed: bool,
    /// 0 until the store assigns one
    #[serde(default)]
    pub id: u64,
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            project: None,
            description: String::new(),
            due: None,
            assignees: Vec::new(),
            subtasks: Vec::new(),
            completed: false,
            id: 0,
        }
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due(mut self, due: Option<String>) -> Self {
        self.due = due;
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = assignees;
        self
    }

    /// Parse the stored due text. Anything other than a strict `YYYY-MM-DD`
    /// date yields `None`.
    pub fn due_date(&self) -> Option<NaiveDate> {
        let due = self.due.as_deref()?;
        if !is_iso_date_shape(due) {
            return None;
        }
        NaiveDate::parse_from_str(due, DUE_FORMAT).ok()
    }

    /// Largest id held by this record or anything beneath it.
    pub fn max_id(&self) -> u64 {
        self.subtasks
            .iter()
            .map(Todo::max_id)
            .fold(self.id, u64::max)
    }

    /// Convert to a plain JSON structure, subtasks included.
    pub fn to_record(&self) -> Result<Value, TodoError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Build a record from a plain JSON structure, applying defaults for
    /// any missing optional field.
    pub fn from_record(record: Value) -> Result<Self, TodoError> {
        Ok(serde_json::from_value(record)?)
    }
}

/// Exactly four digits, dash, two digits, dash, two digits.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
