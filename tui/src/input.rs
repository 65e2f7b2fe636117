//! Input handling for the kitchen TUI.
//!
//! Synchronous: the binary calls [`handle_events`] once per frame and it
//! blocks for at most [`INPUT_POLL_TIMEOUT`] waiting for the first event.

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tracing::debug;

use kitchen_engine::{App, CursorMove};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Wait briefly for input and apply everything queued. Returns whether the
/// app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if !event::poll(INPUT_POLL_TIMEOUT)? {
        return Ok(app.should_quit());
    }

    for _ in 0..MAX_EVENTS_PER_FRAME {
        let ev = event::read()?;
        if apply_event(app, ev) {
            return Ok(true);
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns whether the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if !matches!(key.kind, KeyEventKind::Release) {
                handle_key(app, key);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(CursorMove::Left),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(CursorMove::Right),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(CursorMove::Up),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(CursorMove::Down),
        KeyCode::Char('g') | KeyCode::Home => app.move_cursor(CursorMove::Home),
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(CursorMove::End),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate();
        }
        KeyCode::Esc => {
            app.clear_selection();
        }
        KeyCode::Char('y') => app.request_copy(),
        other => debug!(key = ?other, "Unbound key"),
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click_at(mouse.column, mouse.row);
    }
}
