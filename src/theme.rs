use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the theme resolved from the config file. Only the first call wins.
pub fn init(theme: Theme) {
    if THEME.set(theme).is_err() {
        log::debug!("theme already installed, keeping the first one");
    }
}

/// Get the active theme, falling back to the default palette.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    #[allow(dead_code)]
    pub name: String,
    pub today: Style,
    pub selected: Style,
    pub cursor: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    /// Active sidebar page and active view toggle.
    pub accent: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let pink = Color::Rgb(255, 212, 242);
        let purple = Color::Rgb(126, 34, 206);
        Self {
            name: "default".to_string(),
            today: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(purple).bg(pink).add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            accent: Style::default().fg(purple).bg(pink),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "default" => Self::default(),
            other => {
                log::warn!("unknown theme preset {:?}, using default", other);
                Self::default()
            }
        }
    }

    fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            today: Style::default()
                .fg(Color::Rgb(241, 250, 140))
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(255, 121, 198)), // pink
            header: Style::default().fg(Color::Rgb(248, 248, 242)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            status: Style::default()
                .fg(Color::Rgb(248, 248, 242))
                .bg(Color::Rgb(68, 71, 90)),
            accent: Style::default().fg(Color::Black).bg(Color::Rgb(189, 147, 249)), // purple
            ..Self::default()
        }
    }

    fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            today: Style::default()
                .fg(Color::Rgb(250, 189, 47))
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(211, 134, 155)), // purple
            header: Style::default().fg(Color::Rgb(235, 219, 178)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            status: Style::default()
                .fg(Color::Rgb(235, 219, 178))
                .bg(Color::Rgb(80, 73, 69)),
            accent: Style::default().fg(Color::Black).bg(Color::Rgb(131, 165, 152)), // aqua
            ..Self::default()
        }
    }

    fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            today: Style::default()
                .fg(Color::Rgb(235, 203, 139))
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Black).bg(Color::Rgb(180, 142, 173)), // aurora
            header: Style::default().fg(Color::Rgb(229, 233, 240)).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            status: Style::default()
                .fg(Color::Rgb(229, 233, 240))
                .bg(Color::Rgb(67, 76, 94)),
            accent: Style::default().fg(Color::Black).bg(Color::Rgb(136, 192, 208)), // frost
            ..Self::default()
        }
    }
}

// ── TOML config types ──

/// The `[theme]` table of the config file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ThemeConfig {
    preset: Option<String>,
    today_fg: Option<String>,
    selected_fg: Option<String>,
    selected_bg: Option<String>,
    header_fg: Option<String>,
    dim_fg: Option<String>,
    border_fg: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    accent_fg: Option<String>,
    accent_bg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Theme {
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let fg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color_logged) {
                *style = style.fg(c);
            }
        };
        fg(&mut theme.today, &self.today_fg);
        fg(&mut theme.selected, &self.selected_fg);
        fg(&mut theme.header, &self.header_fg);
        fg(&mut theme.dim, &self.dim_fg);
        fg(&mut theme.border, &self.border_fg);
        fg(&mut theme.status, &self.status_fg);
        fg(&mut theme.accent, &self.accent_fg);

        let bg = |style: &mut Style, value: &Option<String>| {
            if let Some(c) = value.as_deref().and_then(parse_color_logged) {
                *style = style.bg(c);
            }
        };
        bg(&mut theme.selected, &self.selected_bg);
        bg(&mut theme.status, &self.status_bg);
        bg(&mut theme.accent, &self.accent_bg);

        theme
    }
}

fn parse_color_logged(s: &str) -> Option<Color> {
    let color = parse_color(s);
    if color.is_none() {
        log::warn!("ignoring unrecognised color {:?}", s);
    }
    color
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#').filter(|h| h.len() == 6) {
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" | "purple" => Some(Color::Magenta),
        "cyan" | "teal" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" | "pink" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
