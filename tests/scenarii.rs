//! The task sets the integration tests run their queries against

use taskflow_core::{Category, DueDate, Priority, Task, TaskId, TaskList};

fn task(id: &str, title: &str, description: &str, category: &str,
        completed: bool, priority: Priority, due: &str) -> Task
{
    Task::new_with_parameters(
        TaskId::from(id),
        title.to_string(),
        description.to_string(),
        Category::new(category),
        completed,
        priority,
        DueDate::new(due),
    )
}

/// The four tasks the app seeds its screens with, in their on-screen order
pub fn seeded_list() -> TaskList {
    TaskList::from_tasks(vec![
        task("1", "Complete project proposal", "Finish the quarterly project proposal for client review",
             "Work", false, Priority::High, "2025-01-10"),
        task("2", "Buy groceries", "Get weekly groceries including fruits and vegetables",
             "Personal", true, Priority::Medium, "2025-01-09"),
        task("3", "Schedule dentist appointment", "Book routine dental checkup for next month",
             "Health", false, Priority::Low, "2025-01-15"),
        task("4", "Team meeting preparation", "Prepare slides and agenda for weekly team meeting",
             "Work", false, Priority::Medium, "2025-01-11"),
    ])
}

/// The seeded list plus a task whose due date is free-form text.
/// Such a date is kept as typed, and is never "due" anywhere.
pub fn seeded_list_with_freeform_due() -> TaskList {
    let freeform = task("5", "Mysterious errand", "", "Personal", false, Priority::Low, "sometime soon");

    let mut tasks: Vec<Task> = seeded_list().tasks().to_vec();
    tasks.push(freeform);
    TaskList::from_tasks(tasks)
}
