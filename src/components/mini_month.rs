use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::month_view::cell_style;
use crate::calendar::{CalendarState, MonthGrid};
use crate::theme;

const DAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Width of the bordered mini month: seven 3-column cells plus borders.
pub const MINI_MONTH_WIDTH: u16 = 23;
pub const MINI_MONTH_HEIGHT: u16 = 9;

pub struct MiniMonth;

impl MiniMonth {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &CalendarState,
        grid: &MonthGrid,
        cursor: Option<usize>,
        today: NaiveDate,
    ) {
        let theme = theme::current();
        let block = Block::default()
            .title(format!(" \u{2039} {} \u{203a} ", state.title()))
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let header = Line::from(
            DAY_INITIALS
                .iter()
                .map(|d| Span::styled(format!("{:>2} ", d), theme.dim))
                .collect::<Vec<_>>(),
        );

        let mut lines = vec![header];
        for (week_idx, week) in grid.weeks().enumerate() {
            let spans: Vec<Span> = week
                .iter()
                .enumerate()
                .map(|(day_idx, cell)| {
                    let style = cell_style(state, *cell, today, Some(week_idx * 7 + day_idx) == cursor);
                    Span::styled(format!("{:>2} ", cell.day), style)
                })
                .collect();
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
