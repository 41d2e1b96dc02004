//! This is an example of how taskflow-core can be used.
//! This binary renders the app's calendar screen in the terminal: a month grid
//! with a dot on every day that has tasks due, and the upcoming due dates below.

use itertools::Itertools;

use taskflow_core::{MonthGrid, YearMonth};
use taskflow_core::calendar::WEEKDAY_LABELS;
use taskflow_core::utils::comparison::compare_tasks_due;
use taskflow_core::utils::print_task;

mod shared;
use shared::sample_tasks;

fn main() {
    env_logger::init();

    let tasks = sample_tasks();
    // The sample tasks are all due in January 2025, so that is the month
    // worth looking at. `YearMonth::current()` would show this month instead.
    let month = YearMonth::new(2025, 0);
    let grid = MonthGrid::build(month);

    println!("{:^28}", month.to_string());
    for label in WEEKDAY_LABELS.iter() {
        print!("{:>4}", label);
    }
    println!();

    for week in grid.cells().chunks(7) {
        for cell in week {
            match cell.day() {
                None => print!("    "),
                Some(day) => {
                    let marker = if grid.day_has_high_priority(&tasks, *cell) {
                        "!"
                    } else if grid.tasks_due_on(&tasks, *cell).is_empty() == false {
                        "."
                    } else if grid.is_today(*cell) {
                        "*"
                    } else {
                        " "
                    };
                    print!("{:>3}{}", day, marker);
                },
            }
        }
        println!();
    }

    println!();
    println!("('!' marks a day with a high-priority task due, '.' any other day with tasks due.)");
    println!("Previous/next months would be: {} / {}", month.previous(), month.next());

    println!();
    println!("Due dates, closest first:");
    for task in tasks.iter().sorted_by(compare_tasks_due) {
        print_task(task);
    }
}
