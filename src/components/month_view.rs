use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calendar::{CalendarState, DayCell, MonthGrid};
use crate::theme;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &CalendarState,
        grid: &MonthGrid,
        cursor: usize,
        today: NaiveDate,
    ) {
        if area.width < 14 || area.height < 7 {
            return;
        }

        let rows = Layout::vertical(
            std::iter::once(Constraint::Length(1))
                .chain(std::iter::repeat(Constraint::Ratio(1, 6)).take(6)),
        )
        .split(area);
        let column_constraints = [Constraint::Ratio(1, 7); 7];

        // Header row
        let header_cols = Layout::horizontal(column_constraints).split(rows[0]);
        for (name, col) in DAY_NAMES.iter().zip(header_cols.iter()) {
            let label = if col.width as usize > name.len() {
                name.to_string()
            } else {
                name.chars().take(col.width.min(3) as usize).collect()
            };
            let para = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", label, width = col.width as usize),
                theme::current().header,
            )));
            frame.render_widget(para, *col);
        }

        for (week_idx, week) in grid.weeks().enumerate() {
            let cols = Layout::horizontal(column_constraints).split(rows[week_idx + 1]);
            for (day_idx, cell) in week.iter().enumerate() {
                let index = week_idx * 7 + day_idx;
                let style = cell_style(state, *cell, today, index == cursor);
                let para = Paragraph::new(Line::from(Span::styled(
                    format!(" {:>2} ", cell.day),
                    style,
                )));
                frame.render_widget(para, cols[day_idx]);
            }
        }
    }
}

/// Style of one grid cell, shared by the month view and the mini month.
pub fn cell_style(state: &CalendarState, cell: DayCell, today: NaiveDate, is_cursor: bool) -> Style {
    let theme = theme::current();
    let is_today = cell.is_current()
        && NaiveDate::from_ymd_opt(state.year, state.month + 1, cell.day) == Some(today);

    let base = if state.is_selected(cell) {
        theme.selected
    } else if is_today {
        theme.today
    } else if cell.is_current() {
        Style::default()
    } else {
        theme.dim
    };

    if is_cursor {
        base.patch(theme.cursor)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::components::test_util::buffer_text;

    #[test]
    fn renders_header_and_adjacent_days() {
        let state = CalendarState::new(2025, 0);
        let grid = state.grid();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(84, 13)).unwrap();
        terminal
            .draw(|f| MonthView::render(f, f.area(), &state, &grid, 3, today))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let first_row = text.lines().next().unwrap();
        assert!(first_row.contains("Sunday"));
        assert!(first_row.contains("Wednesday"));
        let second_row = text.lines().nth(1).unwrap();
        assert!(second_row.contains("29"));
        assert!(second_row.contains(" 1 "));
    }

    #[test]
    fn selected_cell_uses_selected_style() {
        let state = CalendarState {
            selected_day: Some(13),
            ..CalendarState::new(2025, 5)
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let theme = theme::current();

        let selected = DayCell::new(13, crate::calendar::Membership::Current);
        assert_eq!(cell_style(&state, selected, today, false), theme.selected);

        let trailing = DayCell::new(13, crate::calendar::Membership::Next);
        assert_eq!(cell_style(&state, trailing, today, false), theme.dim);

        let today_cell = DayCell::new(2, crate::calendar::Membership::Current);
        assert_eq!(cell_style(&state, today_cell, today, false), theme.today);
        assert_eq!(
            cell_style(&state, today_cell, today, true),
            theme.today.patch(theme.cursor)
        );
    }

    #[test]
    fn tiny_area_draws_nothing() {
        let state = CalendarState::new(2025, 0);
        let grid = state.grid();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|f| MonthView::render(f, f.area(), &state, &grid, 0, today))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).trim().is_empty());
    }
}
