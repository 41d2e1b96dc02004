//! This crate is the logic core of the TaskFlow task-management app.
//!
//! It owns everything the app's screens compute but none of what they draw: the host UI
//! keeps a [`TaskList`] as its single source of truth, derives each screen from it, and
//! swaps it for the new list that every mutating operation hands back.
//!
//! Tasks live in the [`task`] and [`list`] modules. A [`TaskList`] preserves insertion
//! order, answers the queries of the app's screens ([`TaskList::filter`],
//! [`TaskList::summary`], [`TaskList::recent`]...), and applies the app's three edits
//! ([`TaskList::toggle_completion`], [`TaskList::upsert`], [`TaskList::delete`]) as pure
//! transformations. \
//! The [`calendar`] module lays out the month view: a [`YearMonth`] designates the
//! displayed month and a [`MonthGrid`] holds its cells, ready to be chunked into weeks.
//!
//! There is deliberately no I/O, no persistence and no background work in here: the crate
//! computes values, the host decides what to do with them.

pub mod task;
pub use task::{DraftError, Priority, Task, TaskDraft, TaskId};
pub mod category;
pub use category::Category;
pub mod date;
pub use date::DueDate;
pub mod list;
pub use list::{Summary, TaskList};
pub mod filter;
pub use filter::{CategoryFilter, TaskFilter};
pub mod calendar;
pub use calendar::YearMonth;
pub use calendar::grid::{CalendarCell, MonthGrid};

pub mod settings;
pub mod utils;
