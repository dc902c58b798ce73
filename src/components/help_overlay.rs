//! Help Overlay Component
//!
//! Displays current keybindings when user presses '?' key.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup_area = center_popup(area, 90, 90);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner_area);

        // Preset selector: the active preset is bracketed
        let mut selector = vec![Span::styled("Preset: ", t.muted_style())];
        for (i, preset) in [KeymapPreset::Standard, KeymapPreset::Vim, KeymapPreset::Emacs]
            .into_iter()
            .enumerate()
        {
            if i > 0 {
                selector.push(Span::raw("  "));
            }
            selector.push(Span::styled(format!("{} ", i + 1), t.emphasis_style()));
            if preset == keymap.preset {
                selector.push(Span::styled(
                    format!("[{}]", preset.name()),
                    t.title_style().add_modifier(Modifier::BOLD),
                ));
            } else {
                selector.push(Span::styled(preset.name(), t.muted_style()));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(selector)).alignment(Alignment::Center),
            preset_area,
        );

        // Group bindings by category, keeping first-seen category order
        let bindings = keymap.all_bindings();
        let mut categories: Vec<&str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines: Vec<Line> = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                t.card_style().add_modifier(Modifier::BOLD),
            )));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), bindings_area);

        let footer_text = format!(
            "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer_text)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            footer_area,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(keymap: &Keymap) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        terminal
            .draw(|frame| {
                HelpOverlay::render(frame, frame.area(), keymap, "/tmp/config.toml").unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_lists_bindings_for_active_preset() {
        let text = rendered(&Keymap::default());
        assert!(text.contains("Standard Preset"));
        assert!(text.contains("[Standard]"));
        assert!(text.contains("Show / hide password"));
        assert!(text.contains("/tmp/config.toml"));
    }

    #[test]
    fn test_marks_vim_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: Vec::new(),
        };
        assert!(rendered(&keymap).contains("[Vim]"));
    }
}
