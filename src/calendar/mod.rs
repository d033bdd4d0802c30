pub mod appointment;
pub mod grid;
pub mod state;
pub mod week;

pub use appointment::Appointment;
pub use grid::{DayCell, Membership, MonthGrid, GRID_CELLS, MAX_YEAR, MIN_YEAR};
pub use state::{CalendarState, Direction, ViewMode};
pub use week::week_days_for;
