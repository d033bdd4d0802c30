use chrono::Datelike;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Page};
use crate::calendar::ViewMode;
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = theme::current().status;
        let w = area.width as usize;

        let mode_str = match (app.page, app.state.view_mode) {
            (Page::Calendar, ViewMode::Month) => "[m]Month".to_string(),
            (Page::Calendar, ViewMode::Week) => "[w]Week".to_string(),
            (page, _) => page.label().to_string(),
        };

        // A selected day the displayed month lacks is not shown.
        let selected = match app.state.selected_date() {
            Some(date) => format!(" {} {}", app.state.title(), date.day()),
            None => format!(" {}", app.state.title()),
        };

        // Show status message if present, otherwise show width-aware hints
        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else if w >= 90 {
            " hjkl:Move Enter:Select [/]:Month m/w:View b:Menu ?:Help q:Quit ".to_string()
        } else if w >= 60 {
            " Enter:Select [/]:Month ?:Help q:Quit ".to_string()
        } else {
            " ?:Help q:Quit ".to_string()
        };

        let left = format!(" {}{} ", mode_str, selected);
        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right_text.len()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right_text, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::calendar::CalendarState;
    use crate::components::test_util::buffer_text;
    use crate::config::Config;

    #[test]
    fn shows_mode_selection_and_message() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let mut app = App::new(&Config::default(), CalendarState::on_date(today), today, 100);
        app.status_message = Some("Showing today".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| StatusBar::render(f, f.area(), &app))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with(" [m]Month June 2025 13"));
        assert!(text.trim_end().ends_with("Showing today"));
    }

    #[test]
    fn missing_selected_day_is_left_out() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let mut app = App::new(&Config::default(), CalendarState::on_date(today), today, 100);
        app.navigate_month(crate::calendar::Direction::Next);
        assert_eq!(app.state.selected_day, Some(31));

        let mut terminal = Terminal::new(TestBackend::new(100, 1)).unwrap();
        terminal
            .draw(|f| StatusBar::render(f, f.area(), &app))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with(" [m]Month February 2025 "));
        assert!(!text.contains("31"));
    }
}
