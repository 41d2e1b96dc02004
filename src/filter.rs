//! Filters to narrow down task lists

use crate::category::Category;
use crate::task::Task;

/// Flags to tell which categories should be retained
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Retain every task, regardless of its category
    All,
    /// Retain only the tasks filed under this exact category
    Named(Category),
}

impl CategoryFilter {
    /// The filter behind one of the app's filter chips.
    ///
    /// The chip row has a literal `"All"` chip, so that label maps to
    /// [`CategoryFilter::All`]; any other label is an exact category.
    pub fn from_chip(label: &str) -> Self {
        if label == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(Category::new(label))
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(chosen) => chosen == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

/// What the app's search box and filter chips boil down to.
///
/// An empty/default filter retains everything. Both criteria must agree
/// for a task to be retained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    /// Free-text needle, matched case-insensitively against titles and descriptions.
    /// An empty needle matches every task
    pub search_text: String,
    /// Which categories to retain
    pub category: CategoryFilter,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_text<S: Into<String>>(mut self, needle: S) -> Self {
        self.search_text = needle.into();
        self
    }
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Whether the given task survives this filter
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.category.matches(task.category())
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task.description().to_lowercase().contains(&needle)
    }
}
