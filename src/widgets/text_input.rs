//! Text input widget for rendering TextInput instances.
//!
//! This widget provides a centralized way to render text input fields with:
//! - Consistent styling across the application
//! - Cursor positioning when focused
//! - Placeholder text support
//! - Password masking
//! - Disabled state while a form is submitting
//! - An error highlight for a required field left blank

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use fitstate::widgets::TextInputWidget;
/// use fitstate::utils::TextInput;
///
/// let input = TextInput::with_text("hello");
/// let widget = TextInputWidget::new(&input)
///     .title("Name")
///     .placeholder("Full name")
///     .focused(true);
/// // frame.render_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    disabled: bool,
    /// Mask the text with bullets (passwords)
    masked: bool,
    /// Draw the border in the error color
    invalid: bool,
    /// Hint drawn at the right end of the bottom border
    hint: Option<&'a str>,
}

impl<'a> TextInputWidget<'a> {
    /// Create a new text input widget.
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            disabled: false,
            masked: false,
            invalid: false,
            hint: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.disabled || self.input.text().is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        if self.invalid {
            t.error_style()
        } else if self.disabled {
            t.disabled_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        if let Some(hint) = self.hint {
            block = block.title_bottom(Line::from(format!(" {} ", hint)).right_aligned());
        }

        block
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// Since the Widget trait doesn't have access to Frame, we need this extension
/// to properly set the cursor position.
pub trait TextInputWidgetExt {
    /// Render a TextInputWidget and set cursor position if focused.
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let show_cursor = widget.focused && !widget.disabled;
        let cursor_pos = widget.input.cursor().min(widget.input.text().chars().count());
        let inner = widget.create_block().inner(area);

        self.render_widget(widget, area);

        if show_cursor && inner.width > 0 {
            let x = inner.x + (cursor_pos as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}
