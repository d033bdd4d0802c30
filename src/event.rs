use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input the app reacts to.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16),
}

/// Wait up to `timeout` for a key press or a resize; everything else is
/// dropped.
pub fn next_event(timeout: Duration) -> Result<Option<AppEvent>> {
    loop {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(Some(AppEvent::Key(key)))
            }
            Event::Resize(width, _) => return Ok(Some(AppEvent::Resize(width))),
            _ => continue,
        }
    }
}
