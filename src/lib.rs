//! FitState - a terminal mock-up of a fitness app
//!
//! Onboarding carousel, sign-up and sign-in forms with a simulated server
//! round trip, and a dashboard of canned workouts. One navigation controller
//! decides which screen is mounted; screens only ask it for transitions.

// Core modules
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod delay;
pub mod forms;
pub mod keymap;
pub mod screens;
pub mod session;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use session::Session;
pub use state::navigation::{Navigator, Trigger, UserRecord, ViewState};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
