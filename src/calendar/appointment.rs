use ratatui::style::Color;

/// A display-only entry in the "Today's Events" list.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: u32,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: Color,
}

impl Appointment {
    pub fn time_range(&self) -> String {
        format!("{} \u{2013} {}", self.start, self.end)
    }
}

/// Shown when the config file lists no appointments.
pub fn sample_appointments() -> Vec<Appointment> {
    [
        ("9.00 A.M.", "9.30 A.M.", Color::Rgb(45, 212, 191)),
        ("10.30 A.M.", "13.00 P.M.", Color::Rgb(192, 132, 252)),
        ("16.00 P.M.", "17.30 P.M.", Color::Rgb(156, 163, 175)),
        ("18.00 P.M.", "19.00 P.M.", Color::Rgb(244, 114, 182)),
        ("20.00 P.M.", "21.00 P.M.", Color::Rgb(96, 165, 250)),
        ("22.00 P.M.", "22.30 P.M.", Color::Rgb(74, 222, 128)),
    ]
    .into_iter()
    .zip(1..)
    .map(|((start, end, color), id)| Appointment {
        id,
        title: format!("Appointment {}", id),
        start: start.to_string(),
        end: end.to_string(),
        color,
    })
    .collect()
}
