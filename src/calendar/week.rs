use chrono::{Datelike, Duration, NaiveDate};

use super::grid::first_of_month;
use super::state::CalendarState;

/// Day used to anchor the week when nothing is selected.
pub const FALLBACK_DAY: u32 = 13;

/// The Sunday-to-Saturday week around the selected day of the displayed
/// month. A day number past the month's end rolls into the next month.
pub fn week_days_for(state: &CalendarState) -> [NaiveDate; 7] {
    let day = state.selected_day.unwrap_or(FALLBACK_DAY).max(1);
    let reference = first_of_month(state.year, state.month) + Duration::days(i64::from(day) - 1);
    let sunday =
        reference - Duration::days(i64::from(reference.weekday().num_days_from_sunday()));
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state(year: i32, month: u32, selected_day: Option<u32>) -> CalendarState {
        CalendarState {
            selected_day,
            ..CalendarState::new(year, month)
        }
    }

    #[test]
    fn week_around_selected_day() {
        let week = week_days_for(&state(2025, 5, Some(13)));
        assert_eq!(week[0], date(2025, 6, 8));
        assert_eq!(week[6], date(2025, 6, 14));
    }

    #[test]
    fn unselected_state_anchors_on_the_thirteenth() {
        assert_eq!(
            week_days_for(&state(2025, 5, None)),
            week_days_for(&state(2025, 5, Some(13)))
        );
    }

    #[test]
    fn week_can_start_in_previous_month() {
        let week = week_days_for(&state(2025, 2, Some(1)));
        assert_eq!(week[0], date(2025, 2, 23));
        assert_eq!(week[6], date(2025, 3, 1));
    }

    #[test]
    fn overlong_day_rolls_into_next_month() {
        // November has 30 days, so day 31 is December 1st, a Monday.
        let week = week_days_for(&state(2025, 10, Some(31)));
        assert_eq!(week[0], date(2025, 11, 30));
        assert_eq!(week[1], date(2025, 12, 1));
    }

    #[test]
    fn always_seven_consecutive_days_from_sunday() {
        for year in [2023, 2024, 2025] {
            for month in 0..12 {
                for day in [None, Some(1), Some(15), Some(28), Some(31)] {
                    let week = week_days_for(&state(year, month, day));
                    assert_eq!(week[0].weekday(), Weekday::Sun);
                    for pair in week.windows(2) {
                        assert_eq!(pair[1] - pair[0], Duration::days(1));
                    }
                }
            }
        }
    }
}
