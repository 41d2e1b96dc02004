//! To-do tasks and their drafts

use std::fmt::{Display, Formatter};

use csscolorparser::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

use crate::category::Category;
use crate::date::DueDate;

/// An opaque task identifier, unique within a [`crate::TaskList`].
///
/// Ids generated by this crate are random UUIDs, but hosts are free to feed in
/// their own scheme (the sample data uses plain `"1"`, `"2"`...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random id
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str { &self.content }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// How urgent a task is.
///
/// The derived order ranks `High` above `Medium` above `Low`, so that sorting
/// most-urgent-first is a plain descending sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Every priority, in the order the app's picker lists them
    pub fn all() -> [Priority; 3] {
        [Priority::High, Priority::Medium, Priority::Low]
    }

    /// The lowercase label the app displays (and serializes)
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a label back into a priority. Case-insensitive, None for anything unknown
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// The accent color of this priority (the calendar's day-cell dots)
    pub fn color(&self) -> Color {
        let hex = match self {
            Priority::High => "#ef4444",
            Priority::Medium => "#f59e0b",
            Priority::Low => "#3b82f6",
        };
        csscolorparser::parse(hex).unwrap(/* these hex literals are valid colors */)
    }

    /// The background color of the priority badge in the task list
    pub fn badge_background(&self) -> Color {
        let hex = match self {
            Priority::High => "#fee2e2",
            Priority::Medium => "#fef3c7",
            Priority::Low => "#dbeafe",
        };
        csscolorparser::parse(hex).unwrap(/* these hex literals are valid colors */)
    }

    /// The text color of the priority badge in the task list
    pub fn badge_text(&self) -> Color {
        let hex = match self {
            Priority::High => "#dc2626",
            Priority::Medium => "#d97706",
            Priority::Low => "#2563eb",
        };
        csscolorparser::parse(hex).unwrap(/* these hex literals are valid colors */)
    }
}

/// New drafts start at medium priority
impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.label())
    }
}

/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task identifier, unique within its list
    id: TaskId,

    /// The display text. Drafts guarantee this is never blank
    title: String,
    /// Free-form details, possibly empty
    description: String,
    /// The grouping label this task is filed under
    category: Category,
    /// Whether this task is done
    completed: bool,
    /// How urgent this task is
    priority: Priority,
    /// When this task is due, in the app's `YYYY-MM-DD` convention
    due_date: DueDate,
}

impl Task {
    /// Create a brand new task out of a draft.
    ///
    /// This picks a new (random) task id, and the task starts out not completed.
    /// Note that this does not validate the draft ([`crate::TaskList::upsert`] does).
    pub fn new(draft: &TaskDraft) -> Self {
        Self::new_with_parameters(
            TaskId::random(),
            draft.title.clone(),
            draft.description.clone(),
            draft.category.clone(),
            false,
            draft.priority,
            draft.due_date.clone(),
        )
    }

    /// Create a task whose every field is already known (e.g. restored from a host snapshot)
    pub fn new_with_parameters(id: TaskId, title: String, description: String, category: Category,
                               completed: bool, priority: Priority, due_date: DueDate) -> Self
    {
        Self { id, title, description, category, completed, priority, due_date }
    }

    pub fn id(&self) -> &TaskId         { &self.id          }
    pub fn title(&self) -> &str         { &self.title       }
    pub fn description(&self) -> &str   { &self.description }
    pub fn category(&self) -> &Category { &self.category    }
    pub fn completed(&self) -> bool     { self.completed    }
    pub fn priority(&self) -> Priority  { self.priority     }
    pub fn due_date(&self) -> &DueDate  { &self.due_date    }

    /// Whether this task is due on the given date.
    ///
    /// This matches the dates as text, so a free-form due date is never due
    pub fn is_due_on(&self, date: &DueDate) -> bool {
        self.due_date == *date
    }

    /// Whether this task is due on the host's current date
    pub fn is_due_today(&self) -> bool {
        self.is_due_on(&DueDate::today())
    }

    /// The same task with its completion flag flipped.
    ///
    /// This crate hands out new values rather than mutating, so this is how the
    /// app checks a task off (or un-checks it).
    pub fn toggled(&self) -> Task {
        let mut new = self.clone();
        new.completed = !self.completed;
        new
    }

    /// This task with every draft-carried field replaced by the draft's values.
    ///
    /// A draft has no identity and no completion flag, so `id` and `completed`
    /// are preserved. In particular, editing a completed task keeps it completed.
    pub fn updated_from(&self, draft: &TaskDraft) -> Task {
        Task {
            id: self.id.clone(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            category: draft.category.clone(),
            completed: self.completed,
            priority: draft.priority,
            due_date: draft.due_date.clone(),
        }
    }

    #[cfg(any(test, feature = "integration_tests"))]
    pub fn has_same_observable_content_as(&self, other: &Task) -> bool {
           self.title == other.title
        && self.description == other.description
        && self.category == other.category
        && self.completed == other.completed
        && self.priority == other.priority
        && self.due_date == other.due_date
        // ids are ignored (inserting a draft generates a random one)
    }
}

/// The form input for creating or editing a task.
///
/// Unlike a [`Task`], a draft carries no identity and no completion flag: those
/// belong to the list (see [`crate::TaskList::upsert`]). Fields are public because
/// the embedding app mutates a draft as the user types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: DueDate,
}

impl TaskDraft {
    /// The blank draft the app's "Add Task" modal opens with: no text yet, the
    /// configured default category, medium priority, due today
    pub fn for_today() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: Category::default(),
            priority: Priority::default(),
            due_date: DueDate::today(),
        }
    }

    /// A draft with the given title and the usual defaults for everything else
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self { title: title.into(), ..Self::for_today() }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
    pub fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Check this draft describes an acceptable task.
    ///
    /// The app has a single validation rule: a task must have a non-blank title.
    /// Everything else (unknown categories, free-form due dates...) is taken as given.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        Ok(())
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::for_today()
    }
}

/// The reasons a task draft can be turned down
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The app surfaces this as its "add task" alert
    #[error("Please enter a task title")]
    EmptyTitle,
}
