///! Some utility functions

use chrono::NaiveDate;

use crate::day::DayRecord;
use crate::planner::Planner;
use crate::task::Task;

/// A debug utility that pretty-prints a whole planner
pub fn print_planner(planner: &Planner) {
    for (date, day) in planner.recorded_days() {
        print_day(date, day);
    }
}

/// A debug utility that pretty-prints a single day
pub fn print_day(date: NaiveDate, day: &DayRecord) {
    println!("DAY {} ({})", date, day.classification());
    for task in day.tasks() {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    match task.label() {
        Some(label) => println!("    {} {}\t[{}]", completion, task.text(), label),
        None => println!("    {} {}", completion, task.text()),
    }
}
