//! Task categories

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::settings::{CATEGORIES, DEFAULT_CATEGORY};

/// The coarse grouping label a task is filed under (e.g. `Work` or `Health`).
///
/// As far as tasks are concerned, a category is plain text: this crate never rejects
/// an unknown label. The configured well-known set (see [`crate::settings::CATEGORIES`])
/// only feeds the pickers and filter chips of the embedding app.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Whether this label is part of the configured well-known set
    pub fn is_known(&self) -> bool {
        CATEGORIES.lock().unwrap().contains(&self.0)
    }

    /// The configured well-known categories, in the order the app displays them
    pub fn known() -> Vec<Category> {
        CATEGORIES.lock().unwrap().iter()
            .map(|name| Category::new(name.clone()))
            .collect()
    }
}

/// The default category is the one blank drafts start with (see [`crate::settings::DEFAULT_CATEGORY`])
impl Default for Category {
    fn default() -> Self {
        Category(DEFAULT_CATEGORY.lock().unwrap().clone())
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}
