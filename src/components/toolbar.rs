use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::calendar::ViewMode;
use crate::theme;

/// The Month/Week switch on the left and the year on the right.
pub struct ViewToolbar;

impl ViewToolbar {
    pub fn render(frame: &mut Frame, area: Rect, mode: ViewMode, year: i32) {
        let theme = theme::current();
        let tab = |label: &'static str, active: bool| {
            let style = if active { theme.accent } else { theme.dim };
            Span::styled(label, style)
        };

        let toggle = Line::from(vec![
            Span::raw(" "),
            tab(" Month ", mode == ViewMode::Month),
            Span::raw(" "),
            tab(" Week ", mode == ViewMode::Week),
        ]);
        frame.render_widget(Paragraph::new(toggle), area);

        let year = Paragraph::new(Line::from(Span::styled(
            format!("{} ", year),
            theme.header,
        )))
        .alignment(Alignment::Right);
        frame.render_widget(year, area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::components::test_util::buffer_text;

    #[test]
    fn shows_both_modes_and_year() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| ViewToolbar::render(f, f.area(), ViewMode::Week, 2025))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.starts_with("  Month   Week "));
        assert!(text.ends_with("2025 "));
        assert_eq!(
            terminal.backend().buffer()[(10, 0)].style().bg,
            theme::current().accent.bg
        );
    }
}
