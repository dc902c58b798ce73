//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move highlight up
    MoveUp,
    /// Move highlight down
    MoveDown,
    /// Previous slide / move cursor left / previous option
    MoveLeft,
    /// Next slide / move cursor right / next option
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Selection & Confirmation ============
    /// Press the primary button (Enter)
    Confirm,
    /// Go back (Esc)
    Cancel,

    // ============ Forms ============
    /// Move to next form field
    NextField,
    /// Move to previous form field
    PrevField,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,
    /// Show or hide the password
    TogglePassword,
    /// Swap between sign up and sign in
    SwitchMode,

    // ============ Account ============
    /// Sign out from the dashboard
    SignOut,

    // ============ Global ============
    /// Show help overlay
    Help,
    /// Quit the application
    Quit,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Previous / move left",
            Action::MoveRight => "Next / move right",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::Confirm => "Confirm / submit",
            Action::Cancel => "Go back",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::TogglePassword => "Show / hide password",
            Action::SwitchMode => "Switch sign up / sign in",
            Action::SignOut => "Sign out",
            Action::Help => "Show help",
            Action::Quit => "Quit",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel => "Selection",

            Action::NextField
            | Action::PrevField
            | Action::Backspace
            | Action::DeleteChar
            | Action::TogglePassword
            | Action::SwitchMode => "Forms",

            Action::SignOut => "Account",

            Action::Help | Action::Quit => "Global",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_description() {
        assert_eq!(Action::MoveUp.description(), "Move up");
        assert_eq!(Action::Quit.description(), "Quit");
    }

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::Quit.category(), "Global");
        assert_eq!(Action::TogglePassword.category(), "Forms");
        assert_eq!(Action::SignOut.category(), "Account");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::TogglePassword).unwrap();
        assert_eq!(json, "\"toggle_password\"");
    }

    #[test]
    fn test_action_deserialization() {
        let action: Action = serde_json::from_str("\"sign_out\"").unwrap();
        assert_eq!(action, Action::SignOut);
    }
}
