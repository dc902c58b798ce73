//! Screen controllers for the application.
//!
//! Each view of the navigator has one screen controller implementing the
//! [`Screen`] trait. A controller owns its local state (form fields, focus,
//! pending submission) and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      Session                           │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Router                    │    │
//! │  │  match navigator.view() {                      │    │
//! │  │    Onboarding => onboarding.handle_event(...)  │    │
//! │  │    SignUp     => sign_up.handle_event(...)     │    │
//! │  │    ...                                         │    │
//! │  │  }                                             │    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  │  - on_delay_elapsed(id, context) -> Action     │    │
//! │  │  - is_input_focused() -> bool                  │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod auth_choice;
pub mod dashboard;
pub mod onboarding;
pub mod screen_trait;
pub mod sign_in;
pub mod sign_up;
mod submission;

pub use auth_choice::{AuthChoiceScreen, AuthOption};
pub use dashboard::DashboardScreen;
pub use onboarding::OnboardingScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;

/// Flatten a rendered buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y + area.height {
        let row: String = (area.x..area.x + area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect();
        rows.push(row);
    }
    rows.join("\n")
}
