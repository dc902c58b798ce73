//! Application state management.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    Session                          │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────┐  ┌──────────────────────────┐    │
//! │  │ Navigator     │  │ ScreenState              │    │
//! │  │ - view        │  │ ┌────────────────────┐   │    │
//! │  │ - slide       │  │ │ Onboarding         │   │    │
//! │  │ - user        │  │ │ SignUp(form)       │   │    │
//! │  └───────────────┘  │ │ ...                │   │    │
//! │  ┌───────────────┐  │ └────────────────────┘   │    │
//! │  │ GlobalState   │  └──────────────────────────┘    │
//! │  │ - help_shown  │                                  │
//! │  │ - toasts      │                                  │
//! │  └───────────────┘                                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The navigator decides which view is active; `ScreenState` holds the one
//! controller that draws it.

pub mod global;
pub mod navigation;
pub mod screen;

pub use global::GlobalState;
pub use navigation::{Credentials, Navigator, Trigger, UserRecord, ViewState};
pub use screen::ScreenState;
