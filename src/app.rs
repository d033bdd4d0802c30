use chrono::{Local, NaiveDate};

use crate::calendar::{
    week_days_for, Appointment, CalendarState, Direction, MonthGrid, ViewMode, GRID_CELLS,
};
use crate::config::Config;

/// Hours drawn by the week view.
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Todo,
    Calendar,
    Focus,
    Dochi,
    Bin,
    Settings,
    Support,
    Profile,
}

impl Page {
    pub const MAIN: [Page; 5] = [Page::Todo, Page::Calendar, Page::Focus, Page::Dochi, Page::Bin];
    pub const FOOTER: [Page; 3] = [Page::Settings, Page::Support, Page::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Page::Todo => "To-Do",
            Page::Calendar => "Calendar",
            Page::Focus => "Focus",
            Page::Dochi => "Dochi",
            Page::Bin => "Bin",
            Page::Settings => "Settings",
            Page::Support => "Support",
            Page::Profile => "Profile",
        }
    }

    /// Pages in sidebar order, numbered from 1 for the keyboard.
    pub fn from_number(n: u32) -> Option<Page> {
        Page::MAIN
            .iter()
            .chain(Page::FOOTER.iter())
            .nth(n.checked_sub(1)? as usize)
            .copied()
    }
}

/// Width class of the terminal, as far as layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Sidebar becomes an overlay menu.
    Compact,
    Narrow,
    Wide,
}

impl Viewport {
    pub const NARROW_MIN: u16 = 60;
    pub const WIDE_MIN: u16 = 100;

    pub fn from_width(width: u16) -> Self {
        if width >= Self::WIDE_MIN {
            Viewport::Wide
        } else if width >= Self::NARROW_MIN {
            Viewport::Narrow
        } else {
            Viewport::Compact
        }
    }

    pub fn is_compact(self) -> bool {
        self == Viewport::Compact
    }
}

pub struct App {
    pub running: bool,
    pub state: CalendarState,
    pub grid: MonthGrid,
    /// Index into `grid` of the highlighted cell.
    pub cursor: usize,
    pub page: Page,
    pub viewport: Viewport,
    pub sidebar_collapsed: bool,
    pub menu_open: bool,
    pub appointments: Vec<Appointment>,
    pub today: NaiveDate,
    /// First hour shown by the week view.
    pub week_scroll: usize,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config, state: CalendarState, today: NaiveDate, width: u16) -> Self {
        let grid = state.grid();
        let mut app = Self {
            running: true,
            state: state.set_view_mode(config.start_view),
            grid,
            cursor: 0,
            page: Page::Calendar,
            viewport: Viewport::from_width(width),
            sidebar_collapsed: false,
            menu_open: false,
            appointments: config.appointments.clone(),
            today,
            week_scroll: 8,
            show_help: false,
            status_message: None,
        };
        app.on_resize(width);
        app.cursor = app.anchor_cursor();
        app
    }

    /// Apply a state transition, rebuilding the grid if the month changed.
    fn apply(&mut self, next: CalendarState) {
        let month_changed = (next.year, next.month) != (self.state.year, self.state.month);
        if next.selected_day != self.state.selected_day {
            log::debug!("selected day {:?} -> {:?}", self.state.selected_day, next.selected_day);
        }
        self.state = next;
        if month_changed {
            log::info!("showing {}", self.state.title());
            self.grid = self.state.grid();
            self.cursor = self.anchor_cursor();
        }
    }

    /// Where the cursor lands after the month changes: the selected day if
    /// the month has it, otherwise the 1st.
    fn anchor_cursor(&self) -> usize {
        self.state
            .selected_day
            .and_then(|d| self.grid.position_of_current(d))
            .or_else(|| self.grid.position_of_current(1))
            .unwrap_or(0)
    }

    /// The day cursor is only drawn and driven in the month view.
    pub fn cursor_active(&self) -> bool {
        self.state.view_mode == ViewMode::Month
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if !self.cursor_active() {
            return;
        }
        let max = GRID_CELLS as isize - 1;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    pub fn select_at_cursor(&mut self) {
        if !self.cursor_active() {
            return;
        }
        if let Some(cell) = self.grid.get(self.cursor) {
            let next = self.state.select_day(cell);
            self.apply(next);
        }
    }

    pub fn navigate_month(&mut self, direction: Direction) {
        let next = self.state.navigate_month(direction);
        self.apply(next);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode != self.state.view_mode {
            log::debug!("view mode {:?} -> {:?}", self.state.view_mode, mode);
        }
        let next = self.state.set_view_mode(mode);
        self.apply(next);
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.jump_to(self.today);
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        let next = CalendarState {
            view_mode: self.state.view_mode,
            ..CalendarState::on_date(date)
        };
        self.apply(next);
        self.cursor = self.anchor_cursor();
    }

    pub fn week_days(&self) -> [NaiveDate; 7] {
        week_days_for(&self.state)
    }

    pub fn scroll_week(&mut self, delta: isize) {
        let max = HOURS_PER_DAY as isize - 1;
        self.week_scroll = (self.week_scroll as isize + delta).clamp(0, max) as usize;
    }

    pub fn on_resize(&mut self, width: u16) {
        let viewport = Viewport::from_width(width);
        match viewport {
            Viewport::Wide => {
                self.menu_open = false;
                self.sidebar_collapsed = false;
            }
            Viewport::Narrow => self.sidebar_collapsed = true,
            Viewport::Compact => {}
        }
        if viewport != self.viewport {
            log::debug!(
                "viewport {:?} -> {:?} at {} columns",
                self.viewport,
                viewport,
                width
            );
        }
        self.viewport = viewport;
    }

    pub fn toggle_sidebar(&mut self) {
        if self.viewport.is_compact() {
            self.menu_open = !self.menu_open;
        } else {
            self.sidebar_collapsed = !self.sidebar_collapsed;
        }
    }

    pub fn open_page(&mut self, page: Page) {
        self.page = page;
        if self.viewport.is_compact() {
            self.menu_open = false;
        }
    }

    /// Sidebar shows icons only.
    pub fn sidebar_icons_only(&self) -> bool {
        self.sidebar_collapsed && !self.viewport.is_compact()
    }
}
