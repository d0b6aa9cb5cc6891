
use study_deck::labels::LabelSet;
use study_deck::planner::Planner;
use study_deck::stats::{CompletionTally, DateRange, LabelFilter};

use scenarii::{date, populate_planner, revision_week};

#[test]
fn single_day_aggregate_counts_completed_and_left() {
    let mut planner = Planner::new();
    let day = date(2024, 3, 14);
    planner.add_task(day, "A", None).unwrap();
    planner.add_task(day, "B", None).unwrap();
    planner.add_task(day, "C", None).unwrap();
    planner.toggle_completion(day, 0).unwrap();
    planner.toggle_completion(day, 2).unwrap();

    let tally = planner.aggregate(DateRange::single(day), &LabelFilter::Any);
    assert_eq!(tally, CompletionTally { completed: 2, left: 1 });
    assert_eq!(tally.total(), 3);
}

#[test]
fn multi_day_aggregate_sums_every_day_exactly_once() {
    let mut planner = Planner::new();
    let first = date(2024, 2, 28);
    let second = date(2024, 2, 29);
    let third = date(2024, 3, 1);
    planner.add_task(first, "A", None).unwrap();
    planner.toggle_completion(first, 0).unwrap();
    // nothing on the 29th
    planner.add_task(third, "B", None).unwrap();
    planner.add_task(third, "C", None).unwrap();

    let range = DateRange::new(first, third);
    let tally = planner.aggregate(range, &LabelFilter::Any);
    assert_eq!(tally, CompletionTally { completed: 1, left: 2 });

    // Per-day tallies sum to the range tally: no double counting, no omitted boundary day
    let summed = planner.aggregate(DateRange::single(first), &LabelFilter::Any)
        + planner.aggregate(DateRange::single(second), &LabelFilter::Any)
        + planner.aggregate(DateRange::single(third), &LabelFilter::Any);
    assert_eq!(summed, tally);
}

#[test]
fn aggregate_boundaries_are_inclusive() {
    let mut planner = Planner::new();
    let start = date(2024, 6, 1);
    let end = date(2024, 6, 30);
    planner.add_task(start, "on the first day", None).unwrap();
    planner.add_task(end, "on the last day", None).unwrap();

    assert_eq!(planner.aggregate(DateRange::new(start, end), &LabelFilter::Any).total(), 2);
    assert_eq!(planner.aggregate(DateRange::new(start, date(2024, 6, 29)), &LabelFilter::Any).total(), 1);
}

#[test]
fn reversed_ranges_are_normalized() {
    let range = DateRange::new(date(2024, 6, 10), date(2024, 6, 1));
    assert_eq!(range.start(), date(2024, 6, 1));
    assert_eq!(range.end(), date(2024, 6, 10));
    assert_eq!(range.days().count(), 10);
}

#[test]
fn tasks_on_a_leap_day_are_counted() {
    let mut planner = Planner::new();
    planner.add_task(date(2024, 2, 29), "only exists every four years", None).unwrap();

    let february = DateRange::month_of(date(2024, 2, 10));
    assert_eq!(february.days().count(), 29);
    assert_eq!(planner.aggregate(february, &LabelFilter::Any).left, 1);

    // A common year has the shorter February
    assert_eq!(DateRange::month_of(date(2023, 2, 10)).days().count(), 28);
}

#[test]
fn month_and_year_windows_cover_their_calendar_boundaries() {
    let june = DateRange::month_of(date(2023, 6, 15));
    assert_eq!(june.start(), date(2023, 6, 1));
    assert_eq!(june.end(), date(2023, 6, 30));

    let december = DateRange::month_of(date(2023, 12, 31));
    assert_eq!(december.start(), date(2023, 12, 1));
    assert_eq!(december.end(), date(2023, 12, 31));

    let year = DateRange::year_of(date(2023, 6, 15));
    assert_eq!(year.start(), date(2023, 1, 1));
    assert_eq!(year.end(), date(2023, 12, 31));
    assert!(year.contains(date(2023, 2, 28)));
}

#[test]
fn label_filter_matches_exactly_and_case_sensitively() {
    let mut planner = Planner::new();
    let day = date(2024, 4, 2);
    planner.add_task(day, "A", Some("Work")).unwrap();
    planner.add_task(day, "B", Some("work")).unwrap();
    planner.add_task(day, "C", Some("Workout")).unwrap();
    planner.add_task(day, "D", None).unwrap();

    let range = DateRange::single(day);
    assert_eq!(planner.aggregate(range, &LabelFilter::named("Work")).total(), 1);
    assert_eq!(planner.aggregate(range, &LabelFilter::Unlabeled).total(), 1);
    assert_eq!(planner.aggregate(range, &LabelFilter::Any).total(), 4);
}

#[test]
fn aggregate_is_a_pure_read() {
    let planner = populate_planner(&revision_week());
    let before = planner.clone();

    let march = DateRange::month_of(date(2024, 3, 1));
    let first = planner.aggregate(march, &LabelFilter::Any);
    let second = planner.aggregate(march, &LabelFilter::Any);

    assert_eq!(first, second);
    assert_eq!(planner, before);
}

#[test]
fn revision_week_statistics_match_the_scenario() {
    let planner = populate_planner(&revision_week());
    let week = DateRange::new(date(2024, 3, 4), date(2024, 3, 8));

    assert_eq!(
        planner.aggregate(week, &LabelFilter::Any),
        CompletionTally { completed: 3, left: 3 }
    );
    assert_eq!(
        planner.aggregate(week, &LabelFilter::named("Maths")),
        CompletionTally { completed: 2, left: 0 }
    );
    assert_eq!(
        planner.aggregate(week, &LabelFilter::Unlabeled),
        CompletionTally { completed: 1, left: 2 }
    );
}

#[test]
fn label_reports_cover_day_month_and_year_windows() {
    let planner = populate_planner(&revision_week());
    let mut labels = LabelSet::new();
    labels.add("Maths");
    labels.add("Chores");

    let today = date(2024, 3, 4);
    let reports = planner.label_reports(&labels, today);
    assert_eq!(reports.len(), 2);

    // The label set iterates in lexicographic order
    assert_eq!(reports[0].label, "Chores");
    assert_eq!(reports[0].day, CompletionTally { completed: 0, left: 1 });
    assert_eq!(reports[0].month, CompletionTally { completed: 0, left: 1 });

    assert_eq!(reports[1].label, "Maths");
    assert_eq!(reports[1].day, CompletionTally { completed: 1, left: 0 });
    assert_eq!(reports[1].month, CompletionTally { completed: 2, left: 0 });
    assert_eq!(reports[1].year, CompletionTally { completed: 2, left: 0 });
}
