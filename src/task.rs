//! To-do tasks, each belonging to a single day of the planner

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A task is either done or not done, and a done task may remember *when* it was completed.
///
/// Keeping both pieces of information in a single enum makes the impossible combination
/// ("has a completion date but is not done") unrepresentable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed(Option<DateTime<Utc>>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}

/// A to-do task
///
/// Tasks live inside a [`DayRecord`](crate::day::DayRecord) and are addressed by their
/// position in the day's list. They carry no identifier of their own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The display text of the task
    text: String,

    /// The category label this task was filed under, if any.
    /// This is a free string: it is stored verbatim and never checked against the
    /// registered label set, so a task may outlive the label it was filed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,

    /// The completion status of this task
    completion_status: CompletionStatus,
}

impl Task {
    /// Create a brand new, uncompleted task
    pub fn new(text: String, label: Option<String>) -> Self {
        Self {
            text,
            label,
            completion_status: CompletionStatus::Uncompleted,
        }
    }

    pub fn text(&self) -> &str          { &self.text }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn completed(&self) -> bool     { self.completion_status.is_completed() }
    pub fn completion_status(&self) -> &CompletionStatus { &self.completion_status }

    /// Rename a task
    pub fn set_text(&mut self, new_text: String) {
        self.text = new_text;
    }

    /// Re-label (or un-label) a task
    pub fn set_label(&mut self, new_label: Option<String>) {
        self.label = new_label;
    }

    /// Set the completion status
    pub fn set_completion_status(&mut self, new_completion_status: CompletionStatus) {
        self.completion_status = new_completion_status;
    }

    /// Flip the completion status, stamping the completion time when the task becomes done.
    ///
    /// Returns the new value of [`Task::completed`]
    pub fn toggle_completion_status(&mut self) -> bool {
        self.completion_status = match self.completion_status {
            CompletionStatus::Uncompleted => CompletionStatus::Completed(Some(Utc::now())),
            CompletionStatus::Completed(_) => CompletionStatus::Uncompleted,
        };
        self.completion_status.is_completed()
    }
}
