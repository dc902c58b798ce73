//! Session: the navigator, the mounted screen and everything around them.
//!
//! The session is terminal-agnostic. It takes input events, drains the
//! completion queue of submission delays and draws into any ratatui frame,
//! so workflow tests drive it directly with a `TestBackend`.

use crate::components::HelpOverlay;
use crate::config::Config;
use crate::delay::{DelayProvider, Timers};
use crate::keymap::{Action, KeymapPreset};
use crate::screens::{RenderContext, ScreenAction, ScreenContext};
use crate::state::{GlobalState, Navigator, ScreenState, Trigger, ViewState};
use crate::utils::TextInput;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct Session {
    config: Config,
    config_path: PathBuf,
    navigator: Navigator,
    screen: ScreenState,
    global: GlobalState,
    timers: Timers,
    should_quit: bool,
}

impl Session {
    /// Start a session on the first onboarding slide.
    pub fn new(config: Config, config_path: PathBuf, delay: Box<dyn DelayProvider>) -> Self {
        let navigator = Navigator::new();
        let screen = ScreenState::for_view(navigator.view());
        Self {
            config,
            config_path,
            navigator,
            screen,
            global: GlobalState::new(),
            timers: Timers::new(delay),
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn global(&self) -> &GlobalState {
        &self.global
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Route one input event: global keys first, then the mounted screen.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                info!("Quit requested (Ctrl+C)");
                self.should_quit = true;
                return Ok(());
            }

            if self.global.show_help_overlay {
                self.handle_help_key(key);
                return Ok(());
            }

            if let Some(action) = self.config.keymap.get_action(key.code, key.modifiers) {
                let typing = self.screen.as_screen().is_input_focused();
                if !typing || TextInput::is_action_allowed_when_focused(&action) {
                    match action {
                        Action::Help => {
                            self.global.toggle_help();
                            return Ok(());
                        }
                        Action::Quit => {
                            info!("Quit requested");
                            self.should_quit = true;
                            return Ok(());
                        }
                        _ => {}
                    }
                }
            }
        }

        let action = {
            let ctx = ScreenContext::new(&self.config, &self.navigator, &self.timers);
            self.screen.as_screen_mut().handle_event(event, &ctx)?
        };
        self.apply(action);
        Ok(())
    }

    /// Deliver every completed delay to the mounted screen.
    pub fn process_timers(&mut self) -> Result<()> {
        while let Some(id) = self.timers.try_next() {
            let action = {
                let ctx = ScreenContext::new(&self.config, &self.navigator, &self.timers);
                self.screen.as_screen_mut().on_delay_elapsed(id, &ctx)?
            };
            if action == ScreenAction::None {
                debug!(?id, "Delay completion had no owner");
            }
            self.apply(action);
        }
        Ok(())
    }

    /// Expire old toasts. Returns whether one is still showing.
    pub fn tick(&mut self) -> bool {
        self.global.toasts.tick()
    }

    /// Whether something on screen animates without input.
    pub fn needs_tick(&self) -> bool {
        self.screen.as_screen().needs_tick() || self.global.toasts.has_toast()
    }

    /// Draw the mounted screen, then the overlays above it.
    pub fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.navigator);
        self.screen.as_screen_mut().render(frame, area, &ctx)?;

        if self.global.show_help_overlay {
            let path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &path)?;
        }
        self.global.toasts.render(frame, area);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::Dispatch(trigger) => self.dispatch(trigger),
        }
    }

    fn dispatch(&mut self, trigger: Trigger) {
        let before = self.navigator.view();
        self.navigator.dispatch(trigger);
        let after = self.navigator.view();
        if after == before {
            return;
        }

        self.screen.as_screen_mut().on_exit();
        self.screen = ScreenState::for_view(after);

        match (before, after) {
            (_, ViewState::Dashboard) => {
                if let Some(user) = self.navigator.user() {
                    self.global
                        .toasts
                        .success(format!("Welcome, {}!", user.display_name()));
                }
            }
            (ViewState::Dashboard, ViewState::AuthChoice) => self.global.toasts.info("Signed out"),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: &KeyEvent) {
        let preset = match key.code {
            KeyCode::Char(c) => KeymapPreset::from_digit(c),
            _ => None,
        };
        match preset {
            Some(preset) => self.switch_preset(preset),
            None => self.global.show_help_overlay = false,
        }
    }

    /// Use `preset` from now on and store it in the config file. Only the
    /// preset is written: command-line overrides stay out of the file.
    fn switch_preset(&mut self, preset: KeymapPreset) {
        if self.config.keymap.preset == preset {
            return;
        }
        info!(preset = preset.name(), "Switching keymap preset");
        self.config.keymap.preset = preset;

        let saved = Config::load_or_create(&self.config_path).and_then(|mut on_disk| {
            on_disk.keymap.preset = preset;
            on_disk.save(&self.config_path)
        });
        match saved {
            Ok(()) => self
                .global
                .toasts
                .info(format!("Keymap: {}", preset.name())),
            Err(e) => {
                warn!("Failed to save keymap preset: {:#}", e);
                self.global.toasts.error("Could not save keymap preset");
            }
        }
    }
}
