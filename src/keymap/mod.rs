//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::KeyBinding;
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q")
    /// Checks overrides first, then preset. Returns generic fallback if not found.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Display string for a pair of actions, e.g. "←/→"
    pub fn pair_display(&self, first: Action, second: Action) -> String {
        format!(
            "{}/{}",
            self.get_key_display_for_action(first),
            self.get_key_display_for_action(second)
        )
    }

    /// Footer text for screens without text input
    pub fn footer_browse(&self) -> String {
        format!(
            "{}: Move | {}: Select | {}: Quit | {}: Help",
            self.pair_display(Action::MoveLeft, Action::MoveRight),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Quit),
            self.get_key_display_for_action(Action::Help),
        )
    }

    /// Footer text for the sign-up and sign-in forms
    pub fn footer_form(&self) -> String {
        format!(
            "{}: Fields | {}: Submit | {}: Show password | {}: Switch | {}: Back",
            self.pair_display(Action::NextField, Action::PrevField),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::TogglePassword),
            self.get_key_display_for_action(Action::SwitchMode),
            self.get_key_display_for_action(Action::Cancel),
        )
    }
}
