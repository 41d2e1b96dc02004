//! The sample tasks most examples start from.
//! These are the four tasks the TaskFlow app seeds its screens with.

use taskflow_core::{Category, DueDate, Priority, Task, TaskId, TaskList};

pub fn sample_tasks() -> TaskList {
    TaskList::from_tasks(vec![
        Task::new_with_parameters(
            TaskId::from("1"),
            "Complete project proposal".to_string(),
            "Finish the quarterly project proposal for client review".to_string(),
            Category::new("Work"),
            false,
            Priority::High,
            DueDate::new("2025-01-10"),
        ),
        Task::new_with_parameters(
            TaskId::from("2"),
            "Buy groceries".to_string(),
            "Get weekly groceries including fruits and vegetables".to_string(),
            Category::new("Personal"),
            true,
            Priority::Medium,
            DueDate::new("2025-01-09"),
        ),
        Task::new_with_parameters(
            TaskId::from("3"),
            "Schedule dentist appointment".to_string(),
            "Book routine dental checkup for next month".to_string(),
            Category::new("Health"),
            false,
            Priority::Low,
            DueDate::new("2025-01-15"),
        ),
        Task::new_with_parameters(
            TaskId::from("4"),
            "Team meeting preparation".to_string(),
            "Prepare slides and agenda for weekly team meeting".to_string(),
            Category::new("Work"),
            false,
            Priority::Medium,
            DueDate::new("2025-01-11"),
        ),
    ])
}
