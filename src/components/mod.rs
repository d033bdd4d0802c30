pub mod appointment_list;
pub mod mini_month;
pub mod month_view;
pub mod sidebar;
pub mod status_bar;
pub mod toolbar;
pub mod week_view;

pub use appointment_list::AppointmentList;
pub use mini_month::MiniMonth;
pub use month_view::MonthView;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use toolbar::ViewToolbar;
pub use week_view::WeekView;

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// The buffer's symbols, one line per row.
    pub fn buffer_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
