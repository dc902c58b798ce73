//! Dashboard shown to a signed-in user.
//!
//! Everything here is static except the greeting. Category chips and the
//! bottom navigation are drawn but never change.

use crate::catalog::{Workout, BOTTOM_NAV, CATEGORIES, CHALLENGE, WORKOUTS};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::navigation::{Trigger, DEFAULT_DISPLAY_NAME};
use crate::styles::theme;
use crate::utils::{centered_column, create_standard_layout};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Default)]
pub struct DashboardScreen;

impl DashboardScreen {
    pub fn new() -> Self {
        Self
    }

    fn greeting(name: &str) -> Vec<Line<'_>> {
        let t = theme();
        vec![
            Line::from(Span::styled("Welcome Back", t.muted_style())),
            Line::from(Span::styled(name, t.text_style().add_modifier(Modifier::BOLD))),
        ]
    }

    fn render_challenge(frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let lines = vec![
            Line::from(Span::styled(CHALLENGE.teaser, t.text_style())),
            Line::from(vec![
                Span::styled(CHALLENGE.goal, t.emphasis_style()),
                Span::raw(" "),
                Span::styled(CHALLENGE.unit, t.text_style().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(
                format!("[ {} ]", CHALLENGE.action_label),
                t.button_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn chips() -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, category) in CATEGORIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if category.active {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            spans.push(Span::styled(format!(" {} ", category.name), style));
        }
        Line::from(spans)
    }

    fn workout_line(workout: &Workout) -> Line<'static> {
        let t = theme();
        Line::from(vec![
            Span::styled(format!("  {:<12}", workout.title), t.text_style()),
            Span::styled(format!("{:<14}", workout.tutorials), t.muted_style()),
            Span::styled(workout.duration, t.muted_style()),
        ])
    }

    fn bottom_nav() -> Line<'static> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, label) in BOTTOM_NAV.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  │  ", t.border_style()));
            }
            let style = if i == 0 { t.title_style() } else { t.muted_style() };
            spans.push(Span::styled(*label, style));
        }
        Line::from(spans).centered()
    }
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, ctx.navigator.view().title(), "Today's training")?;

        let name = ctx
            .navigator
            .user()
            .map(|user| user.display_name())
            .unwrap_or(DEFAULT_DISPLAY_NAME);

        let column = centered_column(body, 64);
        let [greeting_area, challenge_area, chips_area, list_title_area, list_area, nav_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(WORKOUTS.len() as u16),
                Constraint::Length(1),
            ])
            .areas(column);

        frame.render_widget(Paragraph::new(Self::greeting(name)), greeting_area);
        Self::render_challenge(frame, challenge_area);
        frame.render_widget(Paragraph::new(Self::chips()), chips_area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Suggested Workout",
                t.text_style().add_modifier(Modifier::BOLD),
            )),
            list_title_area,
        );
        let workouts: Vec<Line> = WORKOUTS.iter().map(Self::workout_line).collect();
        frame.render_widget(Paragraph::new(workouts), list_area);
        frame.render_widget(Paragraph::new(Self::bottom_nav()), nav_area);

        let keymap = ctx.keymap();
        Footer::render(
            frame,
            footer,
            &format!(
                "{}: Sign out | {}: Quit | {}: Help",
                keymap.get_key_display_for_action(Action::SignOut),
                keymap.get_key_display_for_action(Action::Quit),
                keymap.get_key_display_for_action(Action::Help),
            ),
        )?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        match ctx.action_for(&key) {
            Some(Action::SignOut) => Ok(ScreenAction::Dispatch(Trigger::SignOut)),
            _ => Ok(ScreenAction::None),
        }
    }
}
