//! The planner: the single authoritative store for day-indexed schedule data
//!
//! Several views (calendar grid, day detail, statistics cards) consume the same
//! per-day state; they all go through one [`Planner`] instance instead of
//! re-deriving their own day-to-task dictionaries.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::day::{DayClassification, DayRecord};
use crate::labels::LabelSet;
use crate::stats::{CompletionTally, DateRange, LabelFilter, LabelReport};
use crate::task::Task;

/// The record handed out when a day was never written to
static DEFAULT_DAY: Lazy<DayRecord> = Lazy::new(DayRecord::default);

/// Why a planner operation was rejected
///
/// Rejections are pure no-ops: the planner state is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlannerError {
    /// The task text was empty once surrounding whitespace was trimmed
    EmptyTaskText,
    /// The day has no task at this index
    NoSuchTask { date: NaiveDate, index: usize },
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerError::EmptyTaskText => {
                write!(f, "Cannot add a task with an empty text")
            }
            PlannerError::NoSuchTask { date, index } => {
                write!(f, "No task at index {} on {}", index, date)
            }
        }
    }
}

impl Error for PlannerError {}

/// Day keys partitioned by their explicitly chosen classification,
/// for consumption by a calendar grid that colors days by group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationGroups {
    pub work: Vec<NaiveDate>,
    pub vacation: Vec<NaiveDate>,
    pub sickness: Vec<NaiveDate>,
}

/// The day-indexed schedule store
///
/// Maps calendar days to their [`DayRecord`] (classification, ordered task list,
/// completion flags) and serves both single-day reads/writes and range-based
/// aggregate queries. Day records are created lazily on first write; nothing is
/// pre-allocated for the calendar.
///
/// All operations are synchronous and run to completion: a `&mut` receiver on every
/// mutation means no read can observe a half-applied change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Planner {
    days: BTreeMap<NaiveDate, DayRecord>,
}

impl Planner {
    /// Create an empty planner
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of a day.
    ///
    /// A day that was never written to yields the default record: it reads as a plain
    /// [`work`](DayClassification::Work) day with no tasks. Reading never inserts anything.
    pub fn day(&self, date: NaiveDate) -> &DayRecord {
        self.days.get(&date).unwrap_or(&DEFAULT_DAY)
    }

    /// Mutable access to a day, lazily creating its record
    pub fn day_mut(&mut self, date: NaiveDate) -> &mut DayRecord {
        self.days.entry(date).or_default()
    }

    /// Iterate the days that actually hold a record, in date order.
    ///
    /// Days only ever read through [`Planner::day`] do not appear here.
    pub fn recorded_days(&self) -> impl Iterator<Item = (NaiveDate, &DayRecord)> {
        self.days.iter().map(|(date, day)| (*date, day))
    }

    /// Overwrite the classification of a day. Always succeeds;
    /// idempotent when called with the current value.
    pub fn set_classification(&mut self, date: NaiveDate, classification: DayClassification) {
        self.day_mut(date).set_classification(classification);
    }

    /// Append a task at the end of the day's list.
    ///
    /// `text` is trimmed of surrounding whitespace first; text that is empty after
    /// trimming is rejected without touching anything. `label` is stored verbatim,
    /// whether or not it is registered in any [`LabelSet`].
    pub fn add_task(
        &mut self,
        date: NaiveDate,
        text: &str,
        label: Option<&str>,
    ) -> Result<(), PlannerError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PlannerError::EmptyTaskText);
        }
        let task = Task::new(text.to_string(), label.map(|label| label.to_string()));
        self.day_mut(date).push_task(task);
        Ok(())
    }

    /// Add one task per non-blank line of `input`, in input order, all under the same
    /// optional label.
    ///
    /// Blank lines are silently dropped; an all-blank input adds nothing and is not an
    /// error. Returns how many tasks were added.
    pub fn add_tasks_bulk(&mut self, date: NaiveDate, input: &str, label: Option<&str>) -> usize {
        let mut n_added = 0;
        for line in input.lines() {
            // add_task re-trims and only ever rejects blank lines
            if self.add_task(date, line, label).is_ok() {
                n_added += 1;
            }
        }
        n_added
    }

    /// Remove and return the task at `index` for the given day, shifting later tasks
    /// (and their completion flags with them) down by one.
    pub fn remove_task(&mut self, date: NaiveDate, index: usize) -> Result<Task, PlannerError> {
        self.days
            .get_mut(&date)
            .and_then(|day| day.remove_task(index))
            .ok_or(PlannerError::NoSuchTask { date, index })
    }

    /// Flip the completion flag of the task at `index` for the given day.
    /// Returns the new value. Toggling twice restores the original value.
    pub fn toggle_completion(&mut self, date: NaiveDate, index: usize) -> Result<bool, PlannerError> {
        self.days
            .get_mut(&date)
            .and_then(|day| day.toggle_completion(index))
            .ok_or(PlannerError::NoSuchTask { date, index })
    }

    /// Count the completed and remaining tasks over every day of `range`, inclusive.
    ///
    /// The walk visits each calendar day one by one, so month lengths and leap years
    /// are handled by real date arithmetic. Days without a record contribute nothing.
    /// This is a pure read: calling it repeatedly with unchanged state returns
    /// identical results.
    pub fn aggregate(&self, range: DateRange, filter: &LabelFilter) -> CompletionTally {
        let mut tally = CompletionTally::default();
        for date in range.days() {
            let day = match self.days.get(&date) {
                None => continue,
                Some(day) => day,
            };
            for task in day.tasks() {
                if filter.admits(task.label()) {
                    tally.record(task.completed());
                }
            }
        }
        tally
    }

    /// Partition every recorded day by its explicitly chosen classification.
    ///
    /// Days that were never explicitly classified are omitted from all three groups:
    /// the `work` fallback applies to single-day reads only, so the calendar does not
    /// color the whole year as work days.
    pub fn classification_groups(&self) -> ClassificationGroups {
        let mut groups = ClassificationGroups::default();
        for (date, day) in &self.days {
            match day.explicit_classification() {
                None => continue,
                Some(DayClassification::Work) => groups.work.push(*date),
                Some(DayClassification::Vacation) => groups.vacation.push(*date),
                Some(DayClassification::Sickness) => groups.sickness.push(*date),
            }
        }
        groups
    }

    /// Build the per-label completion overview (today / this month / this year)
    /// around `today`, one report per registered label, in label order
    pub fn label_reports(&self, labels: &LabelSet, today: NaiveDate) -> Vec<LabelReport> {
        labels
            .iter()
            .map(|label| {
                let filter = LabelFilter::named(label);
                LabelReport {
                    label: label.to_string(),
                    day: self.aggregate(DateRange::single(today), &filter),
                    month: self.aggregate(DateRange::month_of(today), &filter),
                    year: self.aggregate(DateRange::year_of(today), &filter),
                }
            })
            .collect()
    }
}
