//! Some utility functions

pub mod comparison;

use std::io::{stdin, stdout, Read, Write};

use crate::list::TaskList;
use crate::task::{Priority, Task};

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &TaskList) {
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let urgency = match task.priority() {
        Priority::High => "!",
        Priority::Medium => "-",
        Priority::Low => ".",
    };
    println!("    {}{} {}\t({}, due {})", completion, urgency, task.title(), task.category(), task.due_date());
}

/// A debug utility that prints the counts of the app's home screen
pub fn print_summary(tasks: &TaskList) {
    let summary = tasks.summary();
    println!("    {} completed, {} pending, {} due today", summary.completed, summary.pending, summary.due_today);
}

/// Wait for the user to press enter
pub fn pause() {
    let mut stdout = stdout();
    stdout.write_all(b"Press Enter to continue...").unwrap();
    stdout.flush().unwrap();
    stdin().read_exact(&mut [0]).unwrap();
}
