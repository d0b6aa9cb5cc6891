//! Per-day planner records: the day classification and the day's ordered task list

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// How a day is classified in the calendar
///
/// Exactly one classification is active per day at any time. A day that was never
/// explicitly classified reads as `Work` (see [`DayRecord::classification`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayClassification {
    Work,
    Vacation,
    Sickness,
}

impl Default for DayClassification {
    fn default() -> Self {
        DayClassification::Work
    }
}

impl Display for DayClassification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayClassification::Work => "work",
            DayClassification::Vacation => "vacation",
            DayClassification::Sickness => "sickness",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DayClassification {
    type Err = Box<dyn Error>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(DayClassification::Work),
            "vacation" => Ok(DayClassification::Vacation),
            "sickness" => Ok(DayClassification::Sickness),
            other => Err(format!("Unknown day classification {:?}", other).into()),
        }
    }
}

/// A single day of the planner
///
/// Day records are created lazily when a day is first written to; a day that was never
/// written to is logically an empty record (no explicit classification, no tasks).
///
/// The task list and the completion flags are kept index-aligned by construction: every
/// task carries its own completion status, and removal splices the one slot out, so the
/// flag at position `i` always belongs to the task at position `i`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The classification explicitly chosen for this day, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classification: Option<DayClassification>,

    /// The day's tasks, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tasks: Vec<Task>,
}

impl DayRecord {
    /// The classification this day displays and counts as.
    /// Falls back to [`DayClassification::Work`] when none was explicitly chosen.
    pub fn classification(&self) -> DayClassification {
        self.classification.unwrap_or_default()
    }

    /// The classification explicitly chosen for this day, or `None`.
    ///
    /// Calendar-display partitioning uses this rather than [`DayRecord::classification`],
    /// so days that were never explicitly set stay uncolored.
    pub fn explicit_classification(&self) -> Option<DayClassification> {
        self.classification
    }

    /// Overwrite the day classification. Idempotent when called with the current value.
    pub fn set_classification(&mut self, classification: DayClassification) {
        self.classification = Some(classification);
    }

    /// The day's tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a particular task
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Returns a particular task, mutably (to rename or re-label it in place)
    pub fn task_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    /// The completion flag of each task, in task order
    pub fn completion_flags(&self) -> impl Iterator<Item = bool> + '_ {
        self.tasks.iter().map(|task| task.completed())
    }

    /// Append a task at the end of the day's list
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove and return the task at `index`, shifting later tasks down by one.
    /// Returns `None` (and changes nothing) when `index` is out of range.
    pub fn remove_task(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        Some(self.tasks.remove(index))
    }

    /// Flip the completion status of the task at `index`.
    /// Returns the new value, or `None` (and changes nothing) when `index` is out of range.
    pub fn toggle_completion(&mut self, index: usize) -> Option<bool> {
        self.tasks
            .get_mut(index)
            .map(|task| task.toggle_completion_status())
    }
}
