//! Bordered push button.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

/// Rows a button occupies (label plus borders)
pub const BUTTON_HEIGHT: u16 = 3;

/// A one-line button. Primary buttons are filled with the accent color,
/// secondary ones are outlined.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    /// Glyph drawn before the label (the busy spinner)
    prefix: Option<&'a str>,
    primary: bool,
    highlighted: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            prefix: None,
            primary: true,
            highlighted: false,
            disabled: false,
        }
    }

    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    fn text(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{} {}", prefix, self.label),
            None => self.label.to_string(),
        }
    }

    fn styles(&self) -> (Style, Style) {
        let t = theme();
        if self.disabled {
            return (t.disabled_style(), t.disabled_style());
        }
        let border = if self.highlighted || self.primary {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let label = if self.primary || self.highlighted {
            t.button_style()
        } else {
            t.button_outline_style()
        };
        (border, label)
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, label_style) = self.styles();
        let marker = if self.highlighted && !self.disabled { "▸ " } else { "" };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let text = format!(" {}{} ", marker, self.text());
        Paragraph::new(text)
            .style(label_style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
