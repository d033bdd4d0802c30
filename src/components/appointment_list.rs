use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::calendar::Appointment;
use crate::theme;

pub struct AppointmentList;

impl AppointmentList {
    pub fn render(frame: &mut Frame, area: Rect, appointments: &[Appointment]) {
        let theme = theme::current();
        let block = Block::default()
            .title(" Today's Events ")
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        if appointments.is_empty() {
            let msg = Paragraph::new("No appointments").style(theme.dim).block(block);
            frame.render_widget(msg, area);
            return;
        }

        let items: Vec<ListItem> = appointments
            .iter()
            .map(|appt| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(" \u{25cf} ", Style::default().fg(appt.color)),
                        Span::styled(appt.title.clone(), theme.header),
                    ]),
                    Line::from(Span::styled(format!("   {}", appt.time_range()), theme.dim)),
                ])
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::calendar::appointment::sample_appointments;
    use crate::components::test_util::buffer_text;

    #[test]
    fn lists_titles_with_times() {
        let mut terminal = Terminal::new(TestBackend::new(32, 8)).unwrap();
        let appointments = sample_appointments();
        terminal
            .draw(|f| AppointmentList::render(f, f.area(), &appointments))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Today's Events"));
        assert!(text.contains("Appointment 1"));
        assert!(text.contains("9.00 A.M. \u{2013} 9.30 A.M."));
        assert!(text.contains("Appointment 3"));
    }

    #[test]
    fn empty_list_says_so() {
        let mut terminal = Terminal::new(TestBackend::new(32, 4)).unwrap();
        terminal
            .draw(|f| AppointmentList::render(f, f.area(), &[]))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("No appointments"));
    }
}
