//! Date ranges, label filters and completion tallies used by aggregation queries

use std::ops::Add;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days
///
/// Ranges are query arguments only; nothing is pre-allocated for the days they span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range spanning `start` to `end` inclusive.
    /// A reversed pair is swapped rather than yielding an empty range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// The one-day range containing only `date`
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// The calendar month containing `date`, first day to last day
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap(/* day 1 exists in every month */);
        let end = match NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1) {
            Some(next_month) => next_month.pred_opt().unwrap(/* a day precedes every first-of-month */),
            None => NaiveDate::from_ymd_opt(start.year(), 12, 31).unwrap(/* Dec 31 exists in every year */),
        };
        Self { start, end }
    }

    /// The calendar year containing `date`, January 1st to December 31st
    pub fn year_of(date: NaiveDate) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap(/* Jan 1 exists in every year */),
            end: NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap(/* Dec 31 exists in every year */),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every day of the range in order, by real date arithmetic
    /// (month lengths and leap years come from the calendar, not from approximations)
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |date| date.succ_opt())
            .take_while(move |date| *date <= end)
    }
}

/// Flags to tell which tasks an aggregation counts
#[derive(Clone, Debug, PartialEq)]
pub enum LabelFilter {
    /// Count every task, labeled or not
    Any,
    /// Count only tasks that carry no label
    /// (used to report "general" tasks separately from per-label breakdowns)
    Unlabeled,
    /// Count only tasks whose label is exactly this string (case-sensitive, no partial match)
    Named(String),
}

impl Default for LabelFilter {
    fn default() -> Self {
        LabelFilter::Any
    }
}

impl LabelFilter {
    pub fn named<S: Into<String>>(label: S) -> Self {
        LabelFilter::Named(label.into())
    }

    /// Whether a task carrying `label` is counted
    pub fn admits(&self, label: Option<&str>) -> bool {
        match self {
            LabelFilter::Any => true,
            LabelFilter::Unlabeled => label.is_none(),
            LabelFilter::Named(wanted) => label == Some(wanted.as_str()),
        }
    }
}

/// The outcome of an aggregation: how many counted tasks are done, and how many are left
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionTally {
    pub completed: usize,
    pub left: usize,
}

impl CompletionTally {
    /// Count one task into the tally
    pub fn record(&mut self, completed: bool) {
        if completed {
            self.completed += 1;
        } else {
            self.left += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.left
    }
}

impl Add for CompletionTally {
    type Output = CompletionTally;
    fn add(self, other: CompletionTally) -> CompletionTally {
        CompletionTally {
            completed: self.completed + other.completed,
            left: self.left + other.left,
        }
    }
}

/// The day/month/year completion overview for one label, as consumed by
/// per-label statistics widgets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelReport {
    pub label: String,
    pub day: CompletionTally,
    pub month: CompletionTally,
    pub year: CompletionTally,
}
