use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use ratatui::style::Color;
use serde::Deserialize;

use crate::calendar::appointment::{sample_appointments, Appointment};
use crate::calendar::ViewMode;
use crate::theme::{self, Theme, ThemeConfig};

pub const APP_NAME: &str = "dochi-calendar";

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub appointments: Vec<Appointment>,
    pub start_view: ViewMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            appointments: sample_appointments(),
            start_view: ViewMode::Month,
        }
    }
}

impl Config {
    /// Load `explicit` if given, otherwise the per-user config file if it
    /// exists. An explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path),
                None => {
                    log::info!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: ConfigFile = toml::from_str(content)?;
        Ok(raw.into_config())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME).join("config.toml"))
}

pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(APP_NAME))
}

// ── TOML config types ──

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeConfig,
    #[serde(default)]
    appointments: Vec<AppointmentConfig>,
    start_view: Option<StartView>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum StartView {
    Month,
    Week,
}

#[derive(Debug, Deserialize)]
struct AppointmentConfig {
    id: u32,
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    color: Option<String>,
}

impl ConfigFile {
    fn into_config(self) -> Config {
        let appointments = if self.appointments.is_empty() {
            sample_appointments()
        } else {
            self.appointments
                .into_iter()
                .map(AppointmentConfig::into_appointment)
                .collect()
        };

        Config {
            theme: self.theme.into_theme(),
            appointments,
            start_view: match self.start_view {
                Some(StartView::Week) => ViewMode::Week,
                Some(StartView::Month) | None => ViewMode::Month,
            },
        }
    }
}

impl AppointmentConfig {
    fn into_appointment(self) -> Appointment {
        let color = match self.color.as_deref() {
            Some(name) => theme::parse_color(name).unwrap_or_else(|| {
                log::warn!(
                    "appointment {} has unrecognised color {:?}",
                    self.id,
                    name
                );
                Color::Gray
            }),
            None => Color::Gray,
        };
        Appointment {
            id: self.id,
            title: self.title,
            start: self.start,
            end: self.end,
            color,
        }
    }
}
