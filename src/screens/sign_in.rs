//! Sign-in form. Same submission protocol as the sign-up form, with only
//! email and password.

use crate::components::{Footer, Header};
use crate::delay::DelayId;
use crate::forms::{SignInDraft, SignInField};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::screens::submission::Submission;
use crate::state::navigation::{Credentials, Trigger};
use crate::styles::theme;
use crate::utils::{centered_column, create_standard_layout, TextInput};
use crate::widgets::{Button, TextInputWidget, TextInputWidgetExt, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::{debug, warn};

pub struct SignInScreen {
    email: TextInput,
    password: TextInput,
    focus: SignInField,
    show_password: bool,
    submission: Submission<SignInDraft>,
    error: Option<String>,
    invalid: Option<SignInField>,
}

impl Default for SignInScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            focus: SignInField::Email,
            show_password: false,
            submission: Submission::new("sign-in"),
            error: None,
            invalid: None,
        }
    }

    pub fn focus(&self) -> SignInField {
        self.focus
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> SignInDraft {
        SignInDraft {
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
        }
    }

    fn input_mut(&mut self, field: SignInField) -> &mut TextInput {
        match field {
            SignInField::Email => &mut self.email,
            SignInField::Password => &mut self.password,
        }
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.invalid = None;
    }

    fn submit(&mut self, ctx: &ScreenContext) {
        if self.submission.is_busy() {
            return;
        }

        let draft = self.draft();
        if let Some(missing) = draft.first_missing() {
            warn!(field = missing.label(), "Sign-in blocked: required field is empty");
            self.focus = missing;
            self.invalid = Some(missing);
            self.error = Some(format!("{} is required", missing.label()));
            return;
        }

        self.clear_error();
        self.submission.start(ctx.timers, ctx.config.submit_delay(), draft);
    }
}

impl Screen for SignInScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let keymap = ctx.keymap();
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(
            frame,
            header,
            ctx.navigator.view().title(),
            "Sign in to continue your training",
        )?;

        let column = centered_column(body, 56);
        let [_, email_area, password_area, forgot_area, error_area, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .areas(column);

        let submitting = self.is_submitting();
        let email_title = format!("{} *", SignInField::Email.label());
        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title(&email_title)
                .placeholder(SignInField::Email.placeholder())
                .focused(self.focus == SignInField::Email)
                .disabled(submitting)
                .invalid(self.invalid == Some(SignInField::Email)),
            email_area,
        );

        let password_title = format!("{} *", SignInField::Password.label());
        let toggle_hint = format!(
            "{}: {}",
            keymap.get_key_display_for_action(Action::TogglePassword),
            if self.show_password { "hide" } else { "show" }
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title(&password_title)
                .placeholder(SignInField::Password.placeholder())
                .focused(self.focus == SignInField::Password)
                .disabled(submitting)
                .invalid(self.invalid == Some(SignInField::Password))
                .masked(!self.show_password)
                .hint(&toggle_hint),
            password_area,
        );

        // Decorative, there is no recovery flow
        frame.render_widget(
            Paragraph::new(Span::styled("Forgot Password?", t.emphasis_style()))
                .alignment(Alignment::Right),
            forgot_area,
        );

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.as_str(), t.error_style())),
                error_area,
            );
        }

        let button = match self.submission.spinner_frame() {
            Some(frame) => Button::new("Signing In...")
                .prefix(frame)
                .disabled(true),
            None => Button::new("Sign In").highlighted(true),
        };
        frame.render_widget(button, button_area);

        Footer::render(frame, footer, &keymap.footer_form())?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        // Both fields are text fields, so printable keys are always typed
        if let Some(c) = TextInput::typed_char(&key) {
            if !self.is_submitting() {
                self.input_mut(self.focus).insert_char(c);
                self.clear_error();
            }
            return Ok(ScreenAction::None);
        }

        let Some(action) = ctx.action_for(&key) else {
            return Ok(ScreenAction::None);
        };
        if !TextInput::is_action_allowed_when_focused(&action) {
            return Ok(ScreenAction::None);
        }

        match action {
            Action::Cancel => return Ok(ScreenAction::Dispatch(Trigger::Back)),
            Action::SwitchMode => return Ok(ScreenAction::Dispatch(Trigger::SwitchMode)),
            Action::TogglePassword => self.show_password = !self.show_password,
            Action::NextField | Action::MoveDown => self.focus = self.focus.next(),
            Action::PrevField | Action::MoveUp => self.focus = self.focus.previous(),
            _ if self.is_submitting() => {
                debug!(?action, "Ignoring edit while submitting");
            }
            Action::Confirm => self.submit(ctx),
            other => {
                let focus = self.focus;
                self.input_mut(focus).handle_action(other);
                if matches!(other, Action::Backspace | Action::DeleteChar) {
                    self.clear_error();
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn on_delay_elapsed(&mut self, id: DelayId, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match self.submission.complete(id) {
            Some(draft) => {
                ScreenAction::Dispatch(Trigger::SubmitSuccess(Credentials::SignIn(draft)))
            }
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn needs_tick(&self) -> bool {
        self.is_submitting()
    }

    fn on_exit(&mut self) {
        self.submission.cancel();
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

    fn context<'a>(config: &'a Config, nav: &'a Navigator, timers: &'a Timers) -> ScreenContext<'a> {
        ScreenContext::new(config, nav, timers)
    }

    fn press(screen: &mut SignInScreen, ctx: &ScreenContext, code: KeyCode) -> ScreenAction {
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), ctx)
            .unwrap()
    }

    fn type_text(screen: &mut SignInScreen, ctx: &ScreenContext, text: &str) {
        for c in text.chars() {
            press(screen, ctx, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_missing_password_is_blocked() {
        let config = Config::default();
        let nav = Navigator::new();
        let mut timers = Timers::new(Box::new(ImmediateDelay));
        {
            let ctx = context(&config, &nav, &timers);
            let mut screen = SignInScreen::new();
            type_text(&mut screen, &ctx, "b@x.com");
            press(&mut screen, &ctx, KeyCode::Enter);
            assert_eq!(screen.error(), Some("Password is required"));
            assert_eq!(screen.focus(), SignInField::Password);
            assert!(!screen.is_submitting());
        }
        assert!(timers.try_next().is_none());
    }

    #[test]
    fn test_submit_then_complete() {
        let config = Config::default();
        let nav = Navigator::new();
        let mut timers = Timers::new(Box::new(ImmediateDelay));
        let mut screen = SignInScreen::new();
        {
            let ctx = context(&config, &nav, &timers);
            type_text(&mut screen, &ctx, "b@x.com");
            press(&mut screen, &ctx, KeyCode::Tab);
            type_text(&mut screen, &ctx, "hunter2");
            press(&mut screen, &ctx, KeyCode::Enter);
            assert!(screen.is_submitting());
            // A second submit while busy starts nothing
            press(&mut screen, &ctx, KeyCode::Enter);
        }

        let id = timers.try_next().unwrap();
        assert!(timers.try_next().is_none());

        let ctx = context(&config, &nav, &timers);
        let action = screen.on_delay_elapsed(id, &ctx).unwrap();
        assert_eq!(
            action,
            ScreenAction::Dispatch(Trigger::SubmitSuccess(Credentials::SignIn(SignInDraft {
                email: "b@x.com".to_string(),
                password: "hunter2".to_string(),
            })))
        );
        assert!(!screen.is_submitting());
    }

    #[test]
    fn test_back_and_switch_stay_available_while_submitting() {
        let config = Config::default();
        let nav = Navigator::new();
        let timers = Timers::new(Box::new(ImmediateDelay));
        let ctx = context(&config, &nav, &timers);
        let mut screen = SignInScreen::new();
        type_text(&mut screen, &ctx, "b@x.com");
        press(&mut screen, &ctx, KeyCode::Tab);
        type_text(&mut screen, &ctx, "p");
        press(&mut screen, &ctx, KeyCode::Enter);

        assert_eq!(press(&mut screen, &ctx, KeyCode::Esc), ScreenAction::Dispatch(Trigger::Back));
        let switch = screen
            .handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL)),
                &ctx,
            )
            .unwrap();
        assert_eq!(switch, ScreenAction::Dispatch(Trigger::SwitchMode));
    }

    #[test]
    fn test_render_shows_forgot_password() {
        let config = Config::default();
        let nav = Navigator::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&config, &nav);
                SignInScreen::new().render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Forgot Password?"));
        assert!(text.contains("Sign In"));
        assert!(text.contains("Email Address"));
    }
}
