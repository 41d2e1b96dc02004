//! Utilities to compare tasks
//!
//! These can be used to sort query results, e.g. by using `sorted_by` from the `itertools` crate

use std::cmp::Ordering;

use crate::task::Task;

/// Compare two tasks by due date, earliest first.
///
/// The canonical `YYYY-MM-DD` texts sort chronologically as plain text, so this
/// is a lexical comparison. Free-form due dates sort wherever their text falls.
pub fn compare_tasks_due(left: &&Task, right: &&Task) -> Ordering {
    Ord::cmp(left.due_date().as_str(), right.due_date().as_str())
}

/// Compare two tasks by priority, most urgent first
pub fn compare_tasks_priority(left: &&Task, right: &&Task) -> Ordering {
    Ord::cmp(&right.priority(), &left.priority())
}

/// Compare two tasks alphabetically by title
pub fn compare_tasks_alpha(left: &&Task, right: &&Task) -> Ordering {
    Ord::cmp(&left.title().to_lowercase(), &right.title().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    use crate::category::Category;
    use crate::date::DueDate;
    use crate::list::TaskList;
    use crate::task::{Priority, TaskId};

    fn chore(title: &str, priority: Priority, due: &str) -> Task {
        Task::new_with_parameters(
            TaskId::random(),
            title.to_string(), String::new(),
            Category::new("Home"), false, priority, DueDate::new(due),
        )
    }

    #[test]
    fn comparators_order_query_results() {
        let tasks = TaskList::from_tasks(vec![
            chore("Repot the ficus", Priority::Low, "2025-05-02"),
            chore("answer the plumber", Priority::High, "2025-05-01"),
            chore("Wash towels", Priority::Medium, "2025-04-30"),
        ]);

        let by_due: Vec<&str> = tasks.iter().sorted_by(compare_tasks_due)
            .map(|task| task.title()).collect();
        assert_eq!(by_due, vec!["Wash towels", "answer the plumber", "Repot the ficus"]);

        let by_urgency: Vec<&str> = tasks.iter().sorted_by(compare_tasks_priority)
            .map(|task| task.title()).collect();
        assert_eq!(by_urgency, vec!["answer the plumber", "Wash towels", "Repot the ficus"]);

        // Alphabetical ordering ignores case
        let by_title: Vec<&str> = tasks.iter().sorted_by(compare_tasks_alpha)
            .map(|task| task.title()).collect();
        assert_eq!(by_title, vec!["answer the plumber", "Repot the ficus", "Wash towels"]);
    }
}
