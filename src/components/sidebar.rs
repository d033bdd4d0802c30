use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Page;
use crate::theme;

pub const EXPANDED_WIDTH: u16 = 22;
pub const COLLAPSED_WIDTH: u16 = 6;

pub struct Sidebar;

impl Sidebar {
    /// `icons_only` draws the collapsed rail: page initials, no labels.
    pub fn render(frame: &mut Frame, area: Rect, active: Page, icons_only: bool) {
        let theme = theme::current();
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(theme.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sections = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(Page::FOOTER.len() as u16 + 1),
        ])
        .split(inner);

        let brand = if icons_only {
            Line::from(Span::styled(" \u{25a0}", theme.header))
        } else {
            Line::from(Span::styled(" \u{25a0} Dochi.", theme.header))
        };
        frame.render_widget(Paragraph::new(brand), sections[0]);

        let mut main_lines = Vec::new();
        if !icons_only {
            main_lines.push(Line::from(Span::styled(" MAIN", theme.dim)));
        }
        main_lines.extend(
            Page::MAIN
                .iter()
                .zip(1..)
                .map(|(page, n)| page_line(*page, n, *page == active, icons_only)),
        );
        frame.render_widget(Paragraph::new(main_lines), sections[1]);

        let mut footer_lines = vec![Line::from(Span::styled(
            "\u{2500}".repeat(inner.width as usize),
            theme.border,
        ))];
        footer_lines.extend(
            Page::FOOTER
                .iter()
                .zip(Page::MAIN.len() as u32 + 1..)
                .map(|(page, n)| page_line(*page, n, *page == active, icons_only)),
        );
        frame.render_widget(Paragraph::new(footer_lines), sections[2]);
    }
}

fn page_line(page: Page, number: u32, active: bool, icons_only: bool) -> Line<'static> {
    let style = if active {
        theme::current().accent
    } else {
        Style::default()
    };
    let text = if icons_only {
        format!(" {} ", page.label().chars().next().unwrap_or(' '))
    } else if page == Page::Profile {
        format!(" {} username \u{22ef}", number)
    } else {
        format!(" {} {}", number, page.label())
    };
    Line::from(Span::styled(text, style))
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::components::test_util::buffer_text;

    fn draw(width: u16, icons_only: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 14)).unwrap();
        terminal
            .draw(|f| Sidebar::render(f, f.area(), Page::Calendar, icons_only))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn expanded_shows_labels() {
        let text = draw(EXPANDED_WIDTH, false);
        assert!(text.contains("Dochi."));
        assert!(text.contains("MAIN"));
        assert!(text.contains("2 Calendar"));
        assert!(text.contains("6 Settings"));
        assert!(text.contains("username"));
    }

    #[test]
    fn collapsed_shows_initials() {
        let text = draw(COLLAPSED_WIDTH, true);
        assert!(!text.contains("MAIN"));
        assert!(!text.contains("Calendar"));
        assert!(text.lines().any(|l| l.starts_with(" C ")));
    }
}
