mod app;
mod calendar;
mod components;
mod config;
mod event;
mod theme;
mod tui;

use std::path::{Path, PathBuf};
use std::time::Duration;

use app::{App, Page, Viewport};
use calendar::{CalendarState, Direction, ViewMode, MAX_YEAR, MIN_YEAR};
use chrono::{Datelike, Local};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use event::AppEvent;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Debug, Parser)]
#[command(name = "dochi-calendar", about = "A month and week calendar for the terminal.")]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the log here instead of the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Month to show first (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Year to show first
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64)
    )]
    year: Option<i32>,

    /// Start in the week view
    #[arg(short, long)]
    week: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let _logger = init_logger(args.log_file.as_deref())?;

    let mut config = Config::load(args.config.as_deref())?;
    if args.week {
        config.start_view = ViewMode::Week;
    }
    theme::init(config.theme.clone());

    let today = Local::now().date_naive();
    let state = if args.month.is_some() || args.year.is_some() {
        CalendarState::new(
            args.year.unwrap_or_else(|| today.year()),
            args.month.map_or(today.month0(), |m| m - 1),
        )
    } else {
        CalendarState::on_date(today)
    };

    let (width, _) = crossterm::terminal::size().wrap_err("failed to query terminal size")?;
    let mut app = App::new(&config, state, today, width);
    log::info!("starting on {} ({:?})", app.state.title(), app.state.view_mode);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn init_logger(log_file: Option<&Path>) -> Result<LoggerHandle> {
    let spec = match log_file {
        Some(path) => FileSpec::try_from(path)
            .wrap_err_with(|| format!("invalid log file {}", path.display()))?,
        None => FileSpec::default()
            .directory(config::default_log_dir().unwrap_or_else(std::env::temp_dir))
            .basename(config::APP_NAME)
            .suppress_timestamp(),
    };

    let handle = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?
        .log_to_file(spec)
        .append()
        .start()
        .wrap_err("failed to start logger")?;
    Ok(handle)
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content + status bar
            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            render_content(frame, layout[0], app);

            if app.show_help {
                render_help(frame, area);
            }

            components::StatusBar::render(frame, layout[1], app);
        })?;

        match event::next_event(Duration::from_millis(100))? {
            Some(AppEvent::Resize(width)) => app.on_resize(width),
            Some(AppEvent::Key(key)) => {
                // Clear status message on any key
                app.status_message = None;

                // Help overlay takes priority
                if app.show_help {
                    if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
                        app.show_help = false;
                    }
                    continue;
                }

                handle_key(app, key.code, key.modifiers);
            }
            None => {}
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Char('?'), _) => app.show_help = true,
        (KeyCode::Esc, _) => app.menu_open = false,
        (KeyCode::Char('b'), _) => app.toggle_sidebar(),
        (KeyCode::Char(c @ '1'..='8'), _) => {
            if let Some(page) = c.to_digit(10).and_then(Page::from_number) {
                app.open_page(page);
            }
        }
        _ if app.page == Page::Calendar => handle_calendar_key(app, code),
        _ => {}
    }
}

fn handle_calendar_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-7),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(7),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_at_cursor(),
        KeyCode::Char('[') => app.navigate_month(Direction::Previous),
        KeyCode::Char(']') => app.navigate_month(Direction::Next),
        KeyCode::Char('m') => app.set_view_mode(ViewMode::Month),
        KeyCode::Char('w') => app.set_view_mode(ViewMode::Week),
        KeyCode::Tab => {
            let next = match app.state.view_mode {
                ViewMode::Month => ViewMode::Week,
                ViewMode::Week => ViewMode::Month,
            };
            app.set_view_mode(next);
        }
        KeyCode::PageUp | KeyCode::Char('K') => app.scroll_week(-1),
        KeyCode::PageDown | KeyCode::Char('J') => app.scroll_week(1),
        KeyCode::Char('t') => {
            app.go_to_today();
            app.status_message = Some("Showing today".to_string());
        }
        _ => {}
    }
}

fn render_content(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    use components::sidebar::{COLLAPSED_WIDTH, EXPANDED_WIDTH};

    let main_area = if app.viewport.is_compact() {
        area
    } else {
        let sidebar_w = if app.sidebar_icons_only() {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        };
        let columns =
            Layout::horizontal([Constraint::Length(sidebar_w), Constraint::Min(1)]).split(area);
        components::Sidebar::render(frame, columns[0], app.page, app.sidebar_icons_only());
        columns[1]
    };

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(main_area);
    let header = Paragraph::new(format!(" {}", app.page.label()))
        .style(theme::current().header)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme::current().border),
        );
    frame.render_widget(header, rows[0]);

    if app.page == Page::Calendar {
        render_calendar_page(frame, rows[1], app);
    } else {
        let msg = Paragraph::new(format!("This is the {} page", app.page.label()))
            .style(theme::current().dim)
            .alignment(ratatui::layout::Alignment::Center);
        let [middle] = Layout::vertical([Constraint::Length(1)])
            .flex(ratatui::layout::Flex::Center)
            .areas(rows[1]);
        frame.render_widget(msg, middle);
    }

    // Compact viewports get the sidebar as an overlay menu.
    if app.viewport.is_compact() && app.menu_open {
        let menu = Rect::new(area.x, area.y, EXPANDED_WIDTH.min(area.width), area.height);
        frame.render_widget(Clear, menu);
        components::Sidebar::render(frame, menu, app.page, false);
    }
}

fn render_calendar_page(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    use components::mini_month::{MINI_MONTH_HEIGHT, MINI_MONTH_WIDTH};

    if app.viewport != Viewport::Compact && area.width >= MINI_MONTH_WIDTH + 40 {
        let columns =
            Layout::horizontal([Constraint::Length(MINI_MONTH_WIDTH), Constraint::Min(20)])
                .split(area);
        let left =
            Layout::vertical([Constraint::Length(MINI_MONTH_HEIGHT), Constraint::Min(0)])
                .split(columns[0]);

        let cursor = app.cursor_active().then_some(app.cursor);
        components::MiniMonth::render(frame, left[0], &app.state, &app.grid, cursor, app.today);
        components::AppointmentList::render(frame, left[1], &app.appointments);
        render_calendar_panel(frame, columns[1], app);
    } else {
        let list_h = (app.appointments.len() as u16 * 2 + 2).min(area.height / 3);
        let rows = Layout::vertical([Constraint::Min(8), Constraint::Length(list_h)]).split(area);
        render_calendar_panel(frame, rows[0], app);
        components::AppointmentList::render(frame, rows[1], &app.appointments);
    }
}

fn render_calendar_panel(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let theme = theme::current();
    let block = Block::default()
        .title(format!(" {} ", app.state.title()))
        .title_style(theme.header)
        .borders(Borders::ALL)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    components::ViewToolbar::render(frame, rows[0], app.state.view_mode, app.state.year);

    match app.state.view_mode {
        ViewMode::Month => components::MonthView::render(
            frame,
            rows[2],
            &app.state,
            &app.grid,
            app.cursor,
            app.today,
        ),
        ViewMode::Week => components::WeekView::render(
            frame,
            rows[2],
            &app.week_days(),
            app.state.selected_date(),
            app.today,
            app.week_scroll,
        ),
    }
}

fn render_help(frame: &mut ratatui::Frame, area: Rect) {
    use ratatui::style::{Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Wrap;

    let theme = theme::current();
    let popup_w = area.width.clamp(30, 52).min(area.width);
    let popup_h = area.height.clamp(12, 22).min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(theme.header)
        .borders(Borders::ALL)
        .border_style(theme.border);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let binding = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), theme.accent),
            Span::raw(" "),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Calendar", section_style)),
        binding("hjkl", "Move the day cursor"),
        binding("Enter", "Select / clear day"),
        binding("[ / ]", "Previous / next month"),
        binding("t", "Jump to today"),
        binding("m / w", "Month / week view"),
        binding("Tab", "Switch view"),
        binding("J / K", "Scroll week hours"),
        Line::from(""),
        Line::from(Span::styled("Navigation", section_style)),
        binding("1-8", "Open sidebar page"),
        binding("b", "Collapse sidebar / menu"),
        Line::from(""),
        binding("q", "Quit"),
        binding("Esc / ?", "Close popup"),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
