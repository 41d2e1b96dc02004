//! Support for library configuration options

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// The well-known categories the embedding app offers in its pickers and filter chips.
/// Feel free to override it when initing this library.
///
/// Note that this set is advisory only: tasks accept any category label, including ones
/// that are not listed here (e.g. tasks restored from an older snapshot of the app).
pub static CATEGORIES: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(vec![
    "Work".to_string(),
    "Personal".to_string(),
    "Health".to_string(),
    "Shopping".to_string(),
])));

/// The category a blank task draft starts with.
/// Feel free to override it when initing this library.
pub static DEFAULT_CATEGORY: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Work".to_string())));

/// When set, [`crate::date::today`] returns this date instead of the host's wall-clock date.
///
/// This is only available with the `mock_today` feature, so that tests can pin "today"
/// and get reproducible summaries and month grids.
#[cfg(feature = "mock_today")]
pub static FROZEN_TODAY: Lazy<Arc<Mutex<Option<chrono::NaiveDate>>>> = Lazy::new(|| Arc::new(Mutex::new(None)));
