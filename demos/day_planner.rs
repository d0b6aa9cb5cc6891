//! This is an example of how study-deck can be used.
//! It loads (or creates) a cached planner, seeds it with a few days of tasks,
//! toggles a completion, and prints statistics over several date ranges.

use chrono::NaiveDate;

use study_deck::cache::Cache;
use study_deck::day::DayClassification;
use study_deck::stats::{DateRange, LabelFilter};
use study_deck::utils::print_planner;

fn main() {
    env_logger::init();

    println!("This example shows how study-deck keeps a day planner and derives statistics from it.");
    println!("You can set the RUST_LOG environment variable to display more info.");
    println!();

    let cache_path = std::env::temp_dir().join("study-deck-demo.json");
    let mut cache = match Cache::from_file(&cache_path) {
        Ok(cache) => cache,
        Err(err) => {
            log::warn!("Invalid cache file: {}. Using a default cache", err);
            Cache::new(&cache_path)
        }
    };

    cache.labels_mut().add("Maths");
    cache.labels_mut().add("Chores");

    let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let friday = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();

    let planner = cache.planner_mut();
    if planner.recorded_days().next().is_none() {
        planner.set_classification(friday, DayClassification::Vacation);

        planner.add_task(monday, "revise chapter 3", Some("Maths")).unwrap();
        planner.add_task(monday, "take out the bins", Some("Chores")).unwrap();

        let n_added = planner.add_tasks_bulk(tuesday, "exercise sheet 4\n\nread the lecture notes\n", Some("Maths"));
        println!("{} tasks added in bulk.", n_added);

        planner.toggle_completion(monday, 0).unwrap();
    }

    println!("---- Planner contents ----");
    print_planner(planner);
    println!();

    let week = DateRange::new(monday, friday);

    let everything = planner.aggregate(week, &LabelFilter::Any);
    println!("This week, all tasks: {} completed, {} left.", everything.completed, everything.left);

    let maths = planner.aggregate(week, &LabelFilter::named("Maths"));
    println!("This week, Maths only: {} completed, {} left.", maths.completed, maths.left);

    let general = planner.aggregate(week, &LabelFilter::Unlabeled);
    println!("This week, unlabeled tasks: {} completed, {} left.", general.completed, general.left);
    println!();

    for report in cache.planner().label_reports(cache.labels(), monday) {
        println!(
            "{}: {}/{} today, {}/{} this month, {}/{} this year",
            report.label,
            report.day.completed, report.day.total(),
            report.month.completed, report.month.total(),
            report.year.completed, report.year.total(),
        );
    }

    let groups = cache.planner().classification_groups();
    println!();
    println!("Vacation days on the calendar: {:?}", groups.vacation);

    cache.save_to_file();
    println!("Planner saved to {:?}.", cache_path);
}
