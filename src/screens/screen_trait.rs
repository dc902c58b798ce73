//! Screen trait and associated types.
//!
//! Every view of the navigator is drawn by one screen controller. Screens own
//! their local state, read shared resources through a context object and
//! report what should happen next as a [`ScreenAction`] instead of touching
//! navigation directly.

use crate::config::Config;
use crate::delay::{DelayId, Timers};
use crate::keymap::{Action, Keymap};
use crate::state::navigation::{Navigator, Trigger};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub navigator: &'a Navigator,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, navigator: &'a Navigator) -> Self {
        Self { config, navigator }
    }

    pub fn keymap(&self) -> &'a Keymap {
        &self.config.keymap
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub navigator: &'a Navigator,
    /// Source of simulated submission delays.
    pub timers: &'a Timers,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, navigator: &'a Navigator, timers: &'a Timers) -> Self {
        Self {
            config,
            navigator,
            timers,
        }
    }

    pub fn keymap(&self) -> &'a Keymap {
        &self.config.keymap
    }

    /// Keymap action for a key press. Releases and repeats map to nothing.
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.config.keymap.get_action(key.code, key.modifiers)
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Hand a trigger to the navigator.
    Dispatch(Trigger),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     highlighted: usize,
/// }
///
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         // Draw widgets
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         match event {
///             Event::Key(key) => match ctx.action_for(&key) {
///                 Some(Action::Confirm) => Ok(ScreenAction::Dispatch(Trigger::ChooseSignIn)),
///                 _ => Ok(ScreenAction::None),
///             },
///             _ => Ok(ScreenAction::None),
///         }
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// A delay posted on the completion queue has elapsed. Screens that did
    /// not start the delay ignore it.
    fn on_delay_elapsed(&mut self, _id: DelayId, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    /// Check if a text input is currently focused.
    ///
    /// When true, single-key bindings such as quit and help are disabled so
    /// users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Whether the screen animates and needs periodic redraws.
    fn needs_tick(&self) -> bool {
        false
    }

    /// Called when the screen is unmounted. Pending work must be cancelled.
    fn on_exit(&mut self) {}
}
