//! Ordered task lists and their pure transformations

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::date::DueDate;
use crate::filter::TaskFilter;
use crate::task::{DraftError, Task, TaskDraft, TaskId};

/// Completion and due-date counts over a task list.
///
/// The three counts are independent: a pending task due today shows up in both
/// `pending` and `due_today`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// How many tasks are done
    pub completed: usize,
    /// How many tasks are not done yet
    pub pending: usize,
    /// How many tasks are due on the queried date
    pub due_today: usize,
}

/// An ordered collection of tasks.
///
/// This is the value the embedding app owns and re-renders its screens from.
/// Tasks keep the order they were inserted in (newly created tasks go first),
/// and every query hands tasks back in that same order.
///
/// The "mutations" ([`toggle_completion`](TaskList::toggle_completion),
/// [`upsert`](TaskList::upsert), [`delete`](TaskList::delete)) never touch `self`:
/// they hand back a whole new list, so two screens reading the same snapshot can
/// never observe a half-applied change. Lists are small (a person's to-dos), so
/// cloning them is not a concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// A list over tasks the host already has, kept in the given order
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize      { self.tasks.len()      }
    pub fn is_empty(&self) -> bool  { self.tasks.is_empty() }
    pub fn tasks(&self) -> &[Task]  { &self.tasks           }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// The task with this id, if the list holds one
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        match self.get(id) {
            Some(_) => true,
            None => false,
        }
    }

    /// The tasks that survive the given filter, in list order
    pub fn filter(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// The tasks due on the given date, in list order.
    ///
    /// Dates are matched as text (see [`DueDate`]), so a free-form due date
    /// never shows up here.
    pub fn due_on(&self, date: &DueDate) -> Vec<&Task> {
        self.tasks.iter()
            .filter(|task| task.is_due_on(date))
            .collect()
    }

    /// The first `n` tasks of the list.
    ///
    /// Since created tasks are prepended, these are the most recently added ones
    /// (the app's home screen shows the first three).
    pub fn recent(&self, n: usize) -> Vec<&Task> {
        self.tasks.iter().take(n).collect()
    }

    /// Every category that at least one task is filed under, in order of first appearance
    pub fn categories_in_use(&self) -> Vec<Category> {
        self.tasks.iter()
            .map(|task| task.category().clone())
            .unique()
            .collect()
    }

    /// The same list with the completion flag of the given task flipped.
    ///
    /// If no task has this id (e.g. it was deleted from another screen), the
    /// list comes back unchanged.
    pub fn toggle_completion(&self, id: &TaskId) -> TaskList {
        if self.contains(id) == false {
            log::debug!("Asked to toggle task {} that is not in the list. Leaving the list as it is.", id);
            return self.clone();
        }

        let tasks = self.tasks.iter()
            .map(|task| if task.id() == id { task.toggled() } else { task.clone() })
            .collect();
        Self { tasks }
    }

    /// The same list with the draft applied.
    ///
    /// * `editing: None` is the app's Add path: the draft becomes a brand new
    ///   task (random id, not completed) prepended to the list.
    /// * `editing: Some(id)` is the Edit path: that task takes the draft's
    ///   fields, keeping its id and completion flag, and stays where it was.
    ///   If the id is no longer in the list, the list comes back unchanged.
    ///
    /// Either way the draft must pass [`TaskDraft::validate`] first; a rejected
    /// draft leaves every existing task untouched.
    pub fn upsert(&self, draft: &TaskDraft, editing: Option<&TaskId>) -> Result<TaskList, DraftError> {
        draft.validate()?;

        match editing {
            Some(id) => {
                if self.contains(id) == false {
                    log::debug!("Asked to edit task {} that is not in the list. Leaving the list as it is.", id);
                    return Ok(self.clone());
                }
                let tasks = self.tasks.iter()
                    .map(|task| if task.id() == id { task.updated_from(draft) } else { task.clone() })
                    .collect();
                Ok(Self { tasks })
            },
            None => {
                let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
                tasks.push(Task::new(draft));
                tasks.extend(self.tasks.iter().cloned());
                Ok(Self { tasks })
            },
        }
    }

    /// The same list without the given task. Unknown ids leave the list unchanged
    pub fn delete(&self, id: &TaskId) -> TaskList {
        if self.contains(id) == false {
            log::debug!("Asked to delete task {} that is not in the list. Leaving the list as it is.", id);
            return self.clone();
        }

        let tasks = self.tasks.iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Self { tasks }
    }

    /// The counts the app's home screen displays, with "due today" taken
    /// against the host's current date
    pub fn summary(&self) -> Summary {
        self.summary_on(&DueDate::today())
    }

    /// The counts the app's home screen displays, with "due today" taken
    /// against the given date
    pub fn summary_on(&self, today: &DueDate) -> Summary {
        Summary {
            completed: self.tasks.iter().filter(|task| task.completed()).count(),
            pending: self.tasks.iter().filter(|task| task.completed() == false).count(),
            due_today: self.tasks.iter().filter(|task| task.is_due_on(today)).count(),
        }
    }

    #[cfg(any(test, feature = "integration_tests"))]
    pub fn has_same_observable_content_as(&self, other: &TaskList) -> bool {
        self.tasks.len() == other.tasks.len()
            && self.tasks.iter().zip(other.tasks.iter())
                .all(|(mine, theirs)| mine.has_same_observable_content_as(theirs))
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
