use chrono::{Datelike, NaiveDate};

use super::grid::{self, DayCell, Membership, MonthGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// What the calendar is showing. Transitions consume the state and return
/// the next one; nothing mutates it in place.
///
/// `selected_day` is a bare day number and is read against whichever month
/// is displayed, so it can survive navigation into a month where that day
/// does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub selected_day: Option<u32>,
    /// Zero-based: 0 is January.
    pub month: u32,
    pub year: i32,
    pub view_mode: ViewMode,
}

impl CalendarState {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            selected_day: None,
            month: month.min(11),
            year: grid::clamp_year(year),
            view_mode: ViewMode::Month,
        }
    }

    /// Display the month containing `date` with that date selected.
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            selected_day: Some(date.day()),
            ..Self::new(date.year(), date.month0())
        }
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.month, self.year)
    }

    #[must_use]
    pub fn select_day(self, cell: DayCell) -> Self {
        match cell.membership {
            Membership::Current => {
                let selected_day = if self.selected_day == Some(cell.day) {
                    None
                } else {
                    Some(cell.day)
                };
                Self {
                    selected_day,
                    ..self
                }
            }
            Membership::Previous => self.select_in_adjacent(Direction::Previous, cell.day),
            Membership::Next => self.select_in_adjacent(Direction::Next, cell.day),
        }
    }

    /// Move one month and select `day` there, unless the move would leave
    /// the supported year range.
    fn select_in_adjacent(self, direction: Direction, day: u32) -> Self {
        let moved = self.navigate_month(direction);
        if (moved.year, moved.month) == (self.year, self.month) {
            return self;
        }
        Self {
            selected_day: Some(day),
            ..moved
        }
    }

    /// Step one month. Stops at the first and last supported months.
    #[must_use]
    pub fn navigate_month(self, direction: Direction) -> Self {
        let (year, month) = grid::shift_month(self.year, self.month, direction.delta());
        if year != grid::clamp_year(year) {
            log::debug!("{} is the edge of the supported range", self.title());
            return self;
        }
        Self {
            year,
            month,
            ..self
        }
    }

    #[must_use]
    pub fn set_view_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    /// Whether `cell` is drawn as the selection.
    pub fn is_selected(&self, cell: DayCell) -> bool {
        cell.is_current() && self.selected_day == Some(cell.day)
    }

    /// The selected day as a date, if it exists in the displayed month.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        let day = self.selected_day?;
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
    }

    pub fn title(&self) -> String {
        format!("{} {}", grid::month_name(self.month), self.year)
    }
}
