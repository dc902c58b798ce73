//! Global application state shared across all screens.

use crate::widgets::ToastManager;

/// State that survives screen changes.
#[derive(Debug, Default)]
pub struct GlobalState {
    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,

    /// Transient notifications drawn over every screen.
    pub toasts: ToastManager,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }
}
