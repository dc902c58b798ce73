//! Shared test utilities for workflow integration tests.
//!
//! Provides `TestSession` - a `Session` wired to `ImmediateDelay` with its
//! config file in a temporary directory, plus helpers to feed keys and read
//! back what was drawn.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use fitstate::config::Config;
use fitstate::delay::ImmediateDelay;
use fitstate::{Session, ViewState};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated session. The temp directory is removed on drop.
#[allow(dead_code)]
pub struct TestSession {
    temp_dir: TempDir,
    pub config_path: PathBuf,
    pub session: Session,
}

#[allow(dead_code)]
impl TestSession {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        let session = Session::new(config, config_path.clone(), Box::new(ImmediateDelay));
        Self {
            temp_dir,
            config_path,
            session,
        }
    }

    /// Press a key without modifiers.
    pub fn press(&mut self, code: KeyCode) {
        self.key(code, KeyModifiers::NONE);
    }

    /// Press Ctrl+`c`.
    pub fn ctrl(&mut self, c: char) {
        self.key(KeyCode::Char(c), KeyModifiers::CONTROL);
    }

    pub fn key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.session
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .expect("Event handling failed");
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Deliver completed submission delays.
    pub fn settle(&mut self) {
        self.session
            .process_timers()
            .expect("Timer processing failed");
    }

    pub fn view(&self) -> ViewState {
        self.session.navigator().view()
    }

    /// Walk the carousel with Enter and land on the sign-up/sign-in choice.
    pub fn finish_onboarding(&mut self) {
        for _ in 0..3 {
            self.press(KeyCode::Enter);
        }
        assert_eq!(self.view(), ViewState::AuthChoice);
    }

    pub fn open_sign_up(&mut self) {
        self.finish_onboarding();
        self.press(KeyCode::Enter);
        assert_eq!(self.view(), ViewState::SignUp);
    }

    pub fn open_sign_in(&mut self) {
        self.finish_onboarding();
        self.press(KeyCode::Down);
        self.press(KeyCode::Enter);
        assert_eq!(self.view(), ViewState::SignIn);
    }

    /// Fill every required sign-up field, leaving focus on Password.
    pub fn fill_sign_up(&mut self, name: &str, email: &str) {
        self.type_text(name);
        self.press(KeyCode::Tab);
        self.press(KeyCode::Right);
        self.press(KeyCode::Tab);
        self.type_text("170cm");
        self.press(KeyCode::Tab);
        self.type_text("65kg");
        self.press(KeyCode::Tab);
        self.type_text(email);
        self.press(KeyCode::Tab);
        self.type_text("secret");
    }

    pub fn fill_sign_in(&mut self, email: &str, password: &str) {
        self.type_text(email);
        self.press(KeyCode::Tab);
        self.type_text(password);
    }

    /// Render the session into a fresh test terminal and return its text.
    pub fn render(&mut self, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height))
            .expect("Failed to create test terminal");
        terminal
            .draw(|frame| {
                self.session.draw(frame).expect("Render failed");
            })
            .expect("Draw failed");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
