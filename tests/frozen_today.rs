//! Tests that pin the host's current date, to check everything date-relative
//! flows through [`taskflow_core::date::today`].
//!
//! These need the `mock_today` feature. They live in their own file (hence
//! their own test binary) because the frozen date is global: this way they
//! cannot race the tests that use the real date.
#![cfg(feature = "mock_today")]

use chrono::NaiveDate;

use taskflow_core::{CalendarCell, MonthGrid, Summary, TaskDraft, TaskId, YearMonth};
use taskflow_core::date::DueDate;
use taskflow_core::settings::FROZEN_TODAY;

mod scenarii;

fn freeze(year: i32, month: u32, day: u32) {
    *FROZEN_TODAY.lock().unwrap() = NaiveDate::from_ymd_opt(year, month, day);
}

// A single test function: the frozen date is a global, so phases must not run concurrently
#[test]
fn test_frozen_today_drives_every_date_relative_answer() {
    let _ = env_logger::builder().is_test(true).try_init();

    freeze(2025, 1, 10);

    // "Due today" flows from the frozen date
    assert_eq!(DueDate::today(), DueDate::new("2025-01-10"));
    let tasks = scenarii::seeded_list();
    assert!(tasks.get(&TaskId::from("1")).unwrap().is_due_today());
    assert!(tasks.get(&TaskId::from("2")).unwrap().is_due_today() == false);
    assert_eq!(tasks.summary(),
               Summary { completed: 1, pending: 3, due_today: 1 });
    assert_eq!(scenarii::seeded_list_with_freeform_due().summary(),
               Summary { completed: 1, pending: 4, due_today: 1 });

    // Blank drafts are due on the frozen date
    assert_eq!(TaskDraft::for_today().due_date, DueDate::new("2025-01-10"));

    // The current month, and its "today" marker
    assert_eq!(YearMonth::current(), YearMonth::new(2025, 0));
    let grid = MonthGrid::build(YearMonth::current());
    assert_eq!(grid.is_today(CalendarCell::Day(10)), true);
    assert_eq!(grid.is_today(CalendarCell::Day(11)), false);

    // Move the clock one day: yesterday's marker moves along
    freeze(2025, 1, 11);
    assert_eq!(grid.is_today(CalendarCell::Day(10)), false);
    assert_eq!(grid.is_today(CalendarCell::Day(11)), true);
    assert_eq!(scenarii::seeded_list().summary().due_today, 1); // the team meeting

    *FROZEN_TODAY.lock().unwrap() = None;
}
