//! Keyboard focus and cursor movement.

use kitchen_types::PanelSide;

use super::App;

/// Cursor movement inside the focused grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl App {
    pub fn toggle_focus(&mut self) {
        self.view.focus = self.view.focus.other();
    }

    pub fn set_focus(&mut self, side: PanelSide) {
        self.view.focus = side;
    }

    /// Move the focused panel's cursor, clamped to the palette.
    ///
    /// Vertical moves step by the row width recorded at the last draw.
    pub fn move_cursor(&mut self, movement: CursorMove) {
        let side = self.view.focus;
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let columns = self
            .view
            .grid(side)
            .map_or(1, |grid| grid.columns.max(1));
        let last = len - 1;
        let current = self.view.cursor(side).min(last);

        let next = match movement {
            CursorMove::Left => current.saturating_sub(1),
            CursorMove::Right => (current + 1).min(last),
            CursorMove::Up => current.checked_sub(columns).unwrap_or(current),
            CursorMove::Down => {
                let below = current + columns;
                if below <= last { below } else { current }
            }
            CursorMove::Home => 0,
            CursorMove::End => last,
        };
        self.view.cursors[side.index()] = next;
    }

    /// Put the cursor on the panel's first enabled item, if there is one.
    pub(super) fn jump_to_first_enabled(&mut self, side: PanelSide) {
        if let Some(index) = self.panel(side).iter().position(|item| item.enabled) {
            self.view.cursors[side.index()] = index;
        }
    }
}
