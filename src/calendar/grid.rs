//! The cell layout of a displayed month

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::date::{today, DueDate};
use crate::list::TaskList;
use crate::task::{Priority, Task};

/// One position of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarCell {
    /// A blank cell, padding the first week up to the column day 1 falls on
    Padding,
    /// A day of the displayed month (`1..=31`)
    Day(u32),
}

impl CalendarCell {
    /// The day number of this cell, or None for padding
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Day(day) => Some(*day),
            CalendarCell::Padding => None,
        }
    }

    pub fn is_padding(&self) -> bool {
        match self {
            CalendarCell::Padding => true,
            _ => false,
        }
    }
}

/// The ordered cells of one displayed month, as the app's calendar screen
/// renders them: reading the cells seven at a time yields the weeks.
///
/// A grid starts with one padding cell per weekday column before day 1 (weeks
/// start on Sunday) and then holds every day of the month in order. There is no
/// trailing padding: the last week may stop short, which is how the app draws it.
///
/// Grids are cheap to build, and are meant to be rebuilt from scratch whenever
/// the displayed month or the task list changes. Nothing is cached in between.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Lay out the given month
    pub fn build(month: YearMonth) -> Self {
        let mut cells = Vec::with_capacity((month.leading_weekday() + month.day_count()) as usize);
        for _ in 0..month.leading_weekday() {
            cells.push(CalendarCell::Padding);
        }
        for day in 1..=month.day_count() {
            cells.push(CalendarCell::Day(day));
        }
        Self { month, cells }
    }

    /// The month this grid lays out
    pub fn month(&self) -> YearMonth       { self.month  }
    /// Every cell, in render order (chunk by 7 to get the weeks)
    pub fn cells(&self) -> &[CalendarCell] { &self.cells }

    /// The canonical `YYYY-MM-DD` text of a day cell. Padding cells have no date
    pub fn date_of(&self, cell: CalendarCell) -> Option<DueDate> {
        let day = cell.day()?;
        Some(DueDate::from_ymd(self.month.year(), self.month.month1(), day))
    }

    /// Whether this cell is the host's current date. Padding cells never are
    pub fn is_today(&self, cell: CalendarCell) -> bool {
        let day = match cell.day() {
            Some(day) => day,
            None => return false,
        };
        let now = today();
        now.year() == self.month.year()
            && now.month0() == self.month.month0()
            && now.day() == day
    }

    /// Every task due on this cell's date, in the list's order.
    ///
    /// Padding cells have no tasks. Querying never changes anything: asking
    /// twice hands back the same tasks.
    pub fn tasks_due_on<'list>(&self, tasks: &'list TaskList, cell: CalendarCell) -> Vec<&'list Task> {
        match self.date_of(cell) {
            Some(date) => tasks.due_on(&date),
            None => Vec::new(),
        }
    }

    /// Whether a high-priority task is due on this cell's date.
    ///
    /// The app gives such day cells a red marker, and medium/low dots otherwise
    /// (see [`Priority::color`]).
    pub fn day_has_high_priority(&self, tasks: &TaskList, cell: CalendarCell) -> bool {
        self.tasks_due_on(tasks, cell).iter()
            .any(|task| task.priority() == Priority::High)
    }
}
