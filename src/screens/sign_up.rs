//! Sign-up form.
//!
//! Collects a [`SignUpDraft`] and runs the simulated submission: after the
//! required-field guard passes, the draft is snapshotted and a delay is
//! started. When the delay completes the snapshot is handed to the navigator.

use crate::components::{Footer, Header};
use crate::delay::DelayId;
use crate::forms::{Gender, PhotoRef, SignUpDraft, SignUpField};
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
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::{debug, warn};

pub struct SignUpScreen {
    name: TextInput,
    height: TextInput,
    weight: TextInput,
    email: TextInput,
    password: TextInput,
    photo: TextInput,
    gender: Option<Gender>,
    focus: SignUpField,
    show_password: bool,
    submission: Submission<SignUpDraft>,
    error: Option<String>,
    invalid: Option<SignUpField>,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            name: TextInput::new(),
            height: TextInput::new(),
            weight: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::new(),
            photo: TextInput::new(),
            gender: None,
            focus: SignUpField::Name,
            show_password: false,
            submission: Submission::new("sign-up"),
            error: None,
            invalid: None,
        }
    }

    pub fn focus(&self) -> SignUpField {
        self.focus
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_busy()
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Message shown under the form after a blocked submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current field values, exactly as typed.
    pub fn draft(&self) -> SignUpDraft {
        SignUpDraft {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
            gender: self.gender,
            height: self.height.text().to_string(),
            weight: self.weight.text().to_string(),
            photo: PhotoRef::from_input(self.photo.text()),
        }
    }

    fn input(&self, field: SignUpField) -> Option<&TextInput> {
        match field {
            SignUpField::Name => Some(&self.name),
            SignUpField::Gender => None,
            SignUpField::Height => Some(&self.height),
            SignUpField::Weight => Some(&self.weight),
            SignUpField::Email => Some(&self.email),
            SignUpField::Password => Some(&self.password),
            SignUpField::Photo => Some(&self.photo),
        }
    }

    fn input_mut(&mut self, field: SignUpField) -> Option<&mut TextInput> {
        match field {
            SignUpField::Name => Some(&mut self.name),
            SignUpField::Gender => None,
            SignUpField::Height => Some(&mut self.height),
            SignUpField::Weight => Some(&mut self.weight),
            SignUpField::Email => Some(&mut self.email),
            SignUpField::Password => Some(&mut self.password),
            SignUpField::Photo => Some(&mut self.photo),
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
            warn!(field = missing.label(), "Sign-up blocked: required field is empty");
            self.focus = missing;
            self.invalid = Some(missing);
            self.error = Some(format!("{} is required", missing.label()));
            return;
        }

        self.clear_error();
        self.submission.start(ctx.timers, ctx.config.submit_delay(), draft);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, field: SignUpField, hint: &str) {
        let Some(input) = self.input(field) else {
            return;
        };
        let title = field_title(field);
        let mut widget = TextInputWidget::new(input)
            .title(&title)
            .placeholder(field.placeholder())
            .focused(self.focus == field)
            .disabled(self.is_submitting())
            .invalid(self.invalid == Some(field));
        if field == SignUpField::Password {
            widget = widget.masked(!self.show_password).hint(hint);
        }
        frame.render_text_input_widget(widget, area);
    }

    fn render_gender(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.focus == SignUpField::Gender;
        let border = if self.invalid == Some(SignUpField::Gender) {
            t.error_style()
        } else if self.is_submitting() {
            t.disabled_style()
        } else if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(format!(" {} ", field_title(SignUpField::Gender)));

        let line = match self.gender {
            Some(gender) if focused => Line::from(vec![
                Span::styled("‹ ", t.muted_style()),
                Span::styled(gender.label(), t.text_style()),
                Span::styled(" ›", t.muted_style()),
            ]),
            Some(gender) => Line::from(Span::styled(gender.label(), t.text_style())),
            None => Line::from(Span::styled(
                SignUpField::Gender.placeholder(),
                t.muted_style(),
            )),
        };
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn photo_line(&self) -> Line<'static> {
        let t = theme();
        match PhotoRef::from_input(self.photo.text()) {
            Some(photo) => Line::from(vec![
                Span::styled("✓ ", t.success_style()),
                Span::styled(format!("Photo: {}", photo.file_name()), t.text_style()),
            ]),
            None => Line::from(Span::styled("No photo selected", t.muted_style())),
        }
    }
}

fn field_title(field: SignUpField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

impl Screen for SignUpScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let keymap = ctx.keymap();
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(
            frame,
            header,
            ctx.navigator.view().title(),
            "Tell us a little about yourself",
        )?;

        let column = centered_column(body, 64);
        let [pair_a, pair_b, email_area, password_area, photo_area, preview_area, error_area, button_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(BUTTON_HEIGHT),
            ])
            .areas(column);

        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]);
        let [name_area, gender_area] = halves.areas(pair_a);
        let [height_area, weight_area] = halves.areas(pair_b);

        let toggle_hint = format!(
            "{}: {}",
            keymap.get_key_display_for_action(Action::TogglePassword),
            if self.show_password { "hide" } else { "show" }
        );

        self.render_input(frame, name_area, SignUpField::Name, "");
        self.render_gender(frame, gender_area);
        self.render_input(frame, height_area, SignUpField::Height, "");
        self.render_input(frame, weight_area, SignUpField::Weight, "");
        self.render_input(frame, email_area, SignUpField::Email, "");
        self.render_input(frame, password_area, SignUpField::Password, &toggle_hint);
        self.render_input(frame, photo_area, SignUpField::Photo, "");
        frame.render_widget(Paragraph::new(self.photo_line()), preview_area);

        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(error.as_str(), t.error_style())),
                error_area,
            );
        }

        let button = match self.submission.spinner_frame() {
            Some(frame) => Button::new("Creating...")
                .prefix(frame)
                .disabled(true),
            None => Button::new("Create Account").highlighted(true),
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

        let typing = self.input(self.focus).is_some();
        if typing {
            if let Some(c) = TextInput::typed_char(&key) {
                if !self.is_submitting() {
                    let focus = self.focus;
                    if let Some(input) = self.input_mut(focus) {
                        input.insert_char(c);
                    }
                    self.clear_error();
                }
                return Ok(ScreenAction::None);
            }
        }

        let Some(action) = ctx.action_for(&key) else {
            return Ok(ScreenAction::None);
        };
        if typing && !TextInput::is_action_allowed_when_focused(&action) {
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
            Action::MoveRight if self.focus == SignUpField::Gender => {
                self.gender = Some(Gender::next(self.gender));
                self.clear_error();
            }
            Action::MoveLeft if self.focus == SignUpField::Gender => {
                self.gender = Some(Gender::previous(self.gender));
                self.clear_error();
            }
            other => {
                let focus = self.focus;
                let edited = matches!(other, Action::Backspace | Action::DeleteChar);
                if let Some(input) = self.input_mut(focus) {
                    input.handle_action(other);
                }
                if edited {
                    self.clear_error();
                }
            }
        }
        Ok(ScreenAction::None)
    }

    fn on_delay_elapsed(&mut self, id: DelayId, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match self.submission.complete(id) {
            Some(draft) => {
                ScreenAction::Dispatch(Trigger::SubmitSuccess(Credentials::SignUp(draft)))
            }
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.input(self.focus).is_some()
    }

    fn needs_tick(&self) -> bool {
        self.is_submitting()
    }

    fn on_exit(&mut self) {
        self.submission.cancel();
    }
}
