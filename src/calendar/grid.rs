use chrono::{Datelike, NaiveDate};

/// Every month renders as six full weeks.
pub const GRID_CELLS: usize = 42;

/// Years the calendar can display. Both neighbouring months of every month
/// in this range are representable as `NaiveDate`.
pub const MIN_YEAR: i32 = -262_000;
pub const MAX_YEAR: i32 = 262_000;

pub fn clamp_year(year: i32) -> i32 {
    year.clamp(MIN_YEAR, MAX_YEAR)
}

/// Which month a grid cell belongs to, relative to the displayed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    Previous,
    #[default]
    Current,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayCell {
    pub day: u32,
    pub membership: Membership,
}

impl DayCell {
    pub const fn new(day: u32, membership: Membership) -> Self {
        Self { day, membership }
    }

    pub fn is_current(&self) -> bool {
        self.membership == Membership::Current
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: [DayCell; GRID_CELLS],
}

impl MonthGrid {
    /// Lay out `month` (0 = January) of `year` as 42 cells: the tail of the
    /// previous month up to the first weekday, the month itself, then the
    /// start of the next month until the grid is full.
    pub fn build(month: u32, year: i32) -> Self {
        let (year, month) = (clamp_year(year), month.min(11));
        let first_weekday = first_of_month(year, month).weekday().num_days_from_sunday();
        let days = days_in_month(year, month);
        let (prev_year, prev_month) = shift_month(year, month, -1);
        let prev_days = days_in_month(prev_year, prev_month);

        let leading = (prev_days + 1 - first_weekday..=prev_days)
            .map(|day| DayCell::new(day, Membership::Previous));
        let current = (1..=days).map(|day| DayCell::new(day, Membership::Current));
        let trailing = (1..).map(|day| DayCell::new(day, Membership::Next));

        let mut cells = [DayCell::default(); GRID_CELLS];
        for (slot, cell) in cells
            .iter_mut()
            .zip(leading.chain(current).chain(trailing))
        {
            *slot = cell;
        }

        Self { cells }
    }

    pub fn cells(&self) -> &[DayCell; GRID_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<DayCell> {
        self.cells.get(index).copied()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Grid index of `day` of the displayed month.
    pub fn position_of_current(&self, day: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.is_current() && c.day == day)
    }
}

/// Day 1 of the month, with the year clamped into `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(clamp_year(year), month.min(11) + 1, 1).unwrap_or_default()
}

/// Length of the month. Months chrono cannot represent count as 31 days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .zip(NaiveDate::from_ymd_opt(next_year, next_month + 1, 1))
        .map_or(31, |(first, next)| {
            next.signed_duration_since(first).num_days() as u32
        })
}

/// Move a zero-based (year, month) pair by `delta` months.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = i64::from(year) * 12 + i64::from(month) + i64::from(delta);
    let year = total
        .div_euclid(12)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (year, total.rem_euclid(12) as u32)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(grid: &MonthGrid, membership: Membership) -> usize {
        grid.cells()
            .iter()
            .filter(|c| c.membership == membership)
            .count()
    }

    #[test]
    fn every_month_fills_six_weeks() {
        for year in [1900, 1999, 2000, 2024, 2025, 2100] {
            for month in 0..12 {
                let grid = MonthGrid::build(month, year);
                assert_eq!(grid.cells().len(), GRID_CELLS);
                assert_eq!(grid.weeks().count(), 6);
                assert_eq!(
                    count(&grid, Membership::Current) as u32,
                    days_in_month(year, month),
                    "{year}-{month}"
                );
            }
        }
    }

    #[test]
    fn january_2025_leads_with_end_of_december() {
        let grid = MonthGrid::build(0, 2025);
        let cells = grid.cells();
        assert_eq!(cells[0], DayCell::new(29, Membership::Previous));
        assert_eq!(cells[1], DayCell::new(30, Membership::Previous));
        assert_eq!(cells[2], DayCell::new(31, Membership::Previous));
        assert_eq!(cells[3], DayCell::new(1, Membership::Current));
        assert_eq!(cells[33], DayCell::new(31, Membership::Current));
        assert_eq!(cells[34], DayCell::new(1, Membership::Next));
        assert_eq!(cells[41], DayCell::new(8, Membership::Next));
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_cells() {
        let grid = MonthGrid::build(5, 2025);
        assert_eq!(grid.cells()[0], DayCell::new(1, Membership::Current));
        assert_eq!(count(&grid, Membership::Previous), 0);
        assert_eq!(count(&grid, Membership::Next), 12);
        let last_week = grid.weeks().last().unwrap();
        assert!(last_week.iter().all(|c| c.membership == Membership::Next));
    }

    #[test]
    fn february_2015_leaves_two_trailing_rows() {
        let grid = MonthGrid::build(1, 2015);
        assert_eq!(count(&grid, Membership::Current), 28);
        assert_eq!(count(&grid, Membership::Next), 14);
        assert_eq!(grid.cells()[41], DayCell::new(14, Membership::Next));
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
        let grid = MonthGrid::build(2, 2024);
        // March 2024 starts on a Friday, after a 29-day February.
        assert_eq!(grid.cells()[0], DayCell::new(25, Membership::Previous));
        assert_eq!(grid.cells()[4], DayCell::new(29, Membership::Previous));
    }

    #[test]
    fn shift_month_wraps_years() {
        assert_eq!(shift_month(2025, 0, -1), (2024, 11));
        assert_eq!(shift_month(2025, 11, 1), (2026, 0));
        assert_eq!(shift_month(2025, 5, 0), (2025, 5));
        assert_eq!(shift_month(2025, 5, -18), (2023, 11));
    }

    #[test]
    fn boundary_years_build_without_panicking() {
        let last = MonthGrid::build(11, MAX_YEAR);
        assert_eq!(count(&last, Membership::Current), 31);
        let first = MonthGrid::build(0, MIN_YEAR);
        assert_eq!(count(&first, Membership::Current), 31);

        // Out-of-range years are drawn as the nearest supported year.
        assert_eq!(MonthGrid::build(11, 300_000), last);
        assert_eq!(MonthGrid::build(0, i32::MIN), first);
    }

    #[test]
    fn unrepresentable_months_do_not_panic() {
        assert_eq!(days_in_month(262_143, 11), 31);
        assert_eq!(days_in_month(i32::MAX, 11), 31);
        assert_eq!(shift_month(i32::MAX, 11, 1), (i32::MAX, 0));
        assert_eq!(shift_month(i32::MIN, 0, -1), (i32::MIN, 11));
    }

    #[test]
    fn position_of_current_skips_adjacent_months() {
        let grid = MonthGrid::build(0, 2025);
        assert_eq!(grid.position_of_current(1), Some(3));
        assert_eq!(grid.position_of_current(30), Some(32));
        assert_eq!(grid.position_of_current(32), None);
    }
}
