//! UI area positioning for mouse event handling
//!
//! Centralizes the screen geometry shared by the renderer and the mouse
//! handler, so a click can be mapped back to a field or button.
//!
//! # Layout
//!
//! ```text
//! Row 0:     Form border / action panel border
//! Row 1+:    Fields (3 rows each) | Buttons (3 rows each)
//! Bottom:    Status bar (1 row)
//! ```

/// Height of one field box (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Width of the action panel on the right of the form
pub const ACTION_PANEL_WIDTH: u16 = 20;

/// Height of the status bar at the bottom of the screen
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// UI area for calculating mouse offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    /// Field list inside the form block
    FormContent,
    /// Buttons inside the action panel block
    ActionPanel,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::FormContent => 1, // +1 for border
            UiArea::ActionPanel => 1, // +1 for border
        }
    }

    /// Convert absolute mouse row to row relative to this UI area
    #[inline]
    pub fn relative_row(self, mouse_row: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y())
    }

    /// Check if a mouse position is inside this area for a terminal of the given size
    pub fn contains(self, column: u16, row: u16, (height, width): (u16, u16)) -> bool {
        let bottom = height.saturating_sub(STATUS_BAR_HEIGHT + 1); // exclusive of bottom border
        if row < self.start_y() || row >= bottom {
            return false;
        }
        let panel_x = width.saturating_sub(ACTION_PANEL_WIDTH);
        match self {
            UiArea::FormContent => column >= 1 && column + 1 < panel_x,
            UiArea::ActionPanel => column > panel_x && column + 1 < width,
        }
    }
}

/// Number of whole field boxes that fit in a terminal of the given height
pub fn visible_field_rows(terminal_height: u16) -> usize {
    let inner = terminal_height.saturating_sub(STATUS_BAR_HEIGHT + 2); // - status bar - borders
    ((inner / FIELD_HEIGHT) as usize).max(1)
}
