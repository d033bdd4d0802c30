use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::HOURS_PER_DAY;
use crate::theme;

const TIME_COL_W: u16 = 6;

pub struct WeekView;

impl WeekView {
    /// Draw `days` as columns with one row per hour from `first_hour`, pulled
    /// back when needed so the rows never run past 11 PM.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        days: &[NaiveDate; 7],
        selected: Option<NaiveDate>,
        today: NaiveDate,
        first_hour: usize,
    ) {
        if area.width < TIME_COL_W + 7 || area.height < 2 {
            return;
        }
        let theme = theme::current();

        let cols = Layout::horizontal(
            std::iter::once(Constraint::Length(TIME_COL_W))
                .chain(std::iter::repeat(Constraint::Ratio(1, 7)).take(7)),
        )
        .split(area);

        let visible_hours = (area.height as usize - 1).min(HOURS_PER_DAY);
        let first_hour = first_hour.min(HOURS_PER_DAY - visible_hours);

        let rows = Layout::vertical(
            std::iter::repeat(Constraint::Length(1))
                .take(visible_hours + 1)
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

        // Day headers
        for (offset, date) in days.iter().enumerate() {
            let col = cols[offset + 1];
            let label = if col.width >= 7 {
                format!("{} {}", date.format("%a"), date.day())
            } else {
                format!("{}", date.day())
            };
            let style = if Some(*date) == selected {
                theme.selected
            } else if *date == today {
                theme.today
            } else {
                theme.header
            };
            let para = Paragraph::new(Line::from(Span::styled(
                format!("{:^width$}", label, width = col.width as usize),
                style,
            )));
            frame.render_widget(para, col.intersection(rows[0]));
        }

        // Hour rows
        for row in 0..visible_hours {
            let hour = first_hour + row;
            let row_area = rows[row + 1];
            let label = Paragraph::new(Line::from(Span::styled(
                format!("{:>5} ", hour_label(hour)),
                theme.dim,
            )));
            frame.render_widget(label, cols[0].intersection(row_area));

            for col in cols.iter().skip(1) {
                let cell = col.intersection(row_area);
                let rule = "\u{00b7}".repeat(cell.width as usize);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(rule, theme.border))),
                    cell,
                );
            }
        }
    }
}

/// "12 AM", "1 AM", ..., "11 PM".
pub fn hour_label(hour: usize) -> String {
    let twelve = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    format!("{} {}", twelve, suffix)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::calendar::{week_days_for, CalendarState};
    use crate::components::test_util::buffer_text;

    #[test]
    fn hour_labels_wrap_at_noon() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(9), "9 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(23), "11 PM");
    }

    #[test]
    fn renders_week_header_and_scrolled_hours() {
        let state = CalendarState {
            selected_day: Some(13),
            ..CalendarState::new(2025, 5)
        };
        let days = week_days_for(&state);
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(76, 6)).unwrap();
        terminal
            .draw(|f| {
                WeekView::render(f, f.area(), &days, state.selected_date(), today, 8)
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Sun 8"));
        assert!(lines[0].contains("Fri 13"));
        assert!(lines[0].contains("Sat 14"));
        assert!(lines[1].starts_with(" 8 AM"));
        assert!(lines[5].starts_with("12 PM"));
    }

    #[test]
    fn scroll_is_pulled_back_to_fill_the_area() {
        let days = week_days_for(&CalendarState::new(2025, 5));
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(76, 5)).unwrap();
        terminal
            .draw(|f| WeekView::render(f, f.area(), &days, None, today, 23))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with(" 8 PM"));
        assert!(lines[4].starts_with("11 PM"));
    }
}
