//! Onboarding carousel.
//!
//! Three motivational slides. The slide index lives in the navigator; this
//! screen only turns keys into advance/retreat/complete requests.

use crate::catalog::{image_caption, SlideContent, LAST_SLIDE, SLIDES};
use crate::components::Footer;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::navigation::Trigger;
use crate::styles::theme;
use crate::utils::centered_column;
use crate::widgets::{Button, FitstateLogo, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

#[derive(Debug, Default)]
pub struct OnboardingScreen;

impl OnboardingScreen {
    pub fn new() -> Self {
        Self
    }

    /// Request for the key bound to `action` on slide `slide`.
    fn trigger_for_action(action: Action, slide: usize) -> Option<Trigger> {
        match action {
            Action::MoveRight if slide < LAST_SLIDE => Some(Trigger::Advance),
            Action::MoveLeft if slide > 0 => Some(Trigger::Retreat),
            Action::Confirm if slide == LAST_SLIDE => Some(Trigger::Complete),
            Action::Confirm => Some(Trigger::Advance),
            _ => None,
        }
    }

    /// Pressing an indicator moves one step toward it.
    fn trigger_for_indicator(target: usize, slide: usize) -> Option<Trigger> {
        match target.cmp(&slide) {
            std::cmp::Ordering::Less => Some(Trigger::Retreat),
            std::cmp::Ordering::Greater => Some(Trigger::Advance),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn indicator_line(slide: usize) -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        for i in 0..SLIDES.len() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if i == slide {
                spans.push(Span::styled("━━━", t.title_style()));
            } else {
                spans.push(Span::styled("─", t.muted_style()));
            }
        }
        Line::from(spans).centered()
    }

    fn slide_text(slide: &SlideContent) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = vec![
            Line::from(Span::styled(
                format!("[ {} ]", image_caption(slide.image_ref)),
                t.muted_style(),
            ))
            .centered(),
            Line::from(""),
            Line::from(Span::styled(slide.title, t.text_style().add_modifier(Modifier::BOLD)))
                .centered(),
        ];
        if let Some(subtitle) = slide.subtitle {
            lines.push(Line::from(Span::styled(subtitle, t.emphasis_style())).centered());
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!("\u{201C}{}\u{201D}", slide.description),
                t.muted_style().add_modifier(Modifier::ITALIC),
            ))
            .centered(),
        );
        lines
    }
}

impl Screen for OnboardingScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let slide = ctx.navigator.current_slide().unwrap_or(0);
        let content = &SLIDES[slide.min(LAST_SLIDE)];

        let [logo_area, body, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(Footer::HEIGHT),
        ])
        .areas(area);

        if let Some(logo) = FitstateLogo::fitting(logo_area) {
            let [logo_rect] = Layout::horizontal([Constraint::Length(logo.width())])
                .flex(Flex::Center)
                .areas(logo_area);
            frame.render_widget(logo, logo_rect);
        }

        let column = centered_column(body, 64);
        let [text_area, nav_area, button_area, _] = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(column);

        frame.render_widget(
            Paragraph::new(Self::slide_text(content)).wrap(Wrap { trim: true }),
            text_area,
        );

        // ‹ indicators ›, arrows dimmed where the navigator would refuse
        let arrow = |enabled: bool| {
            if enabled {
                t.title_style()
            } else {
                t.disabled_style()
            }
        };
        let [prev_area, dots_area, next_area] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(nav_area);
        frame.render_widget(Paragraph::new(Span::styled(" ‹ ", arrow(slide > 0))), prev_area);
        frame.render_widget(Paragraph::new(Self::indicator_line(slide)), dots_area);
        frame.render_widget(
            Paragraph::new(Span::styled(" › ", arrow(slide < LAST_SLIDE))),
            next_area,
        );

        frame.render_widget(Button::new(content.button_label).highlighted(true), button_area);

        let keymap = ctx.keymap();
        Footer::render(
            frame,
            footer_area,
            &format!(
                "{}: Slides | 1-3: Jump | {}: {} | {}: Quit",
                keymap.pair_display(Action::MoveLeft, Action::MoveRight),
                keymap.get_key_display_for_action(Action::Confirm),
                content.button_label,
                keymap.get_key_display_for_action(Action::Quit),
            ),
        )?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }
        let Some(slide) = ctx.navigator.current_slide() else {
            return Ok(ScreenAction::None);
        };

        let trigger = if let Some(action) = ctx.action_for(&key) {
            Self::trigger_for_action(action, slide)
        } else {
            match key.code {
                KeyCode::Char(c @ '1'..='3') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Self::trigger_for_indicator(c as usize - '1' as usize, slide)
                }
                _ => None,
            }
        };

        Ok(trigger.map_or(ScreenAction::None, ScreenAction::Dispatch))
    }
}
