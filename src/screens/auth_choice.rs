//! Sign-up / sign-in choice.

use crate::catalog::{AUTH_HEADLINE, AUTH_WELCOME};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::navigation::Trigger;
use crate::styles::theme;
use crate::utils::{centered_column, create_standard_layout};
use crate::widgets::{Button, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// The two buttons, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthOption {
    #[default]
    SignUp,
    SignIn,
}

impl AuthOption {
    pub fn label(&self) -> &'static str {
        match self {
            AuthOption::SignUp => "Sign up",
            AuthOption::SignIn => "Sign in",
        }
    }

    fn other(self) -> Self {
        match self {
            AuthOption::SignUp => AuthOption::SignIn,
            AuthOption::SignIn => AuthOption::SignUp,
        }
    }

    fn trigger(self) -> Trigger {
        match self {
            AuthOption::SignUp => Trigger::ChooseSignUp,
            AuthOption::SignIn => Trigger::ChooseSignIn,
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthChoiceScreen {
    /// Highlighted button. Render-only, reset every time the screen mounts.
    highlighted: AuthOption,
}

impl AuthChoiceScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> AuthOption {
        self.highlighted
    }

    fn headline() -> Vec<Line<'static>> {
        let t = theme();
        let last = AUTH_HEADLINE.len() - 1;
        AUTH_HEADLINE
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == last {
                    t.emphasis_style()
                } else {
                    t.text_style().add_modifier(Modifier::BOLD)
                };
                Line::from(Span::styled(*text, style))
            })
            .collect()
    }
}

impl Screen for AuthChoiceScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, ctx.navigator.view().title(), "Your training, your pace")?;

        let column = centered_column(body, 56);
        let [_, headline_area, welcome_area, up_area, in_area, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(AUTH_HEADLINE.len() as u16 + 1),
            Constraint::Min(2),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(Paragraph::new(Self::headline()), headline_area);
        frame.render_widget(
            Paragraph::new(AUTH_WELCOME)
                .style(t.muted_style())
                .wrap(Wrap { trim: true }),
            welcome_area,
        );

        for (option, rect) in [(AuthOption::SignUp, up_area), (AuthOption::SignIn, in_area)] {
            frame.render_widget(
                Button::new(option.label())
                    .primary(option == AuthOption::SignUp)
                    .highlighted(option == self.highlighted),
                rect,
            );
        }

        Footer::render(frame, footer, &ctx.keymap().footer_browse())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };

        match ctx.action_for(&key) {
            Some(
                Action::MoveUp
                | Action::MoveDown
                | Action::MoveLeft
                | Action::MoveRight
                | Action::NextField
                | Action::PrevField,
            ) => {
                self.highlighted = self.highlighted.other();
                Ok(ScreenAction::None)
            }
            Some(Action::Confirm) => Ok(ScreenAction::Dispatch(self.highlighted.trigger())),
            _ => Ok(ScreenAction::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::delay::{ImmediateDelay, Timers};
    use crate::screens::buffer_text;
    use crate::state::navigation::Navigator;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn press(screen: &mut AuthChoiceScreen, code: KeyCode) -> ScreenAction {
        let config = Config::default();
        let nav = Navigator::new();
        let timers = Timers::new(Box::new(ImmediateDelay));
        let ctx = ScreenContext::new(&config, &nav, &timers);
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), &ctx)
            .unwrap()
    }

    #[test]
    fn test_enter_chooses_highlighted() {
        let mut screen = AuthChoiceScreen::new();
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Dispatch(Trigger::ChooseSignUp)
        );

        assert_eq!(press(&mut screen, KeyCode::Down), ScreenAction::None);
        assert_eq!(screen.highlighted(), AuthOption::SignIn);
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenAction::Dispatch(Trigger::ChooseSignIn)
        );
    }

    #[test]
    fn test_highlight_toggles_back() {
        let mut screen = AuthChoiceScreen::new();
        press(&mut screen, KeyCode::Tab);
        press(&mut screen, KeyCode::Up);
        assert_eq!(screen.highlighted(), AuthOption::SignUp);
    }

    #[test]
    fn test_render_shows_headline_and_buttons() {
        let config = Config::default();
        let nav = Navigator::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&config, &nav);
                AuthChoiceScreen::new()
                    .render(frame, frame.area(), &ctx)
                    .unwrap();
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Get Healthy!"));
        assert!(text.contains("Sign up"));
        assert!(text.contains("Sign in"));
    }
}
