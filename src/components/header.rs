use crate::styles::theme;
use crate::widgets::FitstateLogo;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Rows a header wants: the regular logo plus the border
    pub const HEIGHT: u16 = 5;

    /// Render a header with the logo on the left and a short description on
    /// the right. Narrow terminals drop the description, then shrink the logo.
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, description: &str) -> Result<u16> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let logo = FitstateLogo::fitting(inner_area);
        let logo_width = logo.map(|l| l.width() + 2).unwrap_or(0);

        let [logo_area, desc_area] = Layout::horizontal([
            Constraint::Length(logo_width),
            Constraint::Min(0),
        ])
        .areas(inner_area);

        if let Some(logo) = logo {
            let top = logo_area.height.saturating_sub(logo.height()) / 2;
            let logo_rect = Rect::new(
                logo_area.x,
                logo_area.y + top,
                logo.width().min(logo_area.width),
                logo.height().min(logo_area.height),
            );
            frame.render_widget(logo, logo_rect);
        }

        // Center description vertically
        let desc_lines = description.lines().count() as u16;
        let top_padding = desc_area.height.saturating_sub(desc_lines) / 2;
        let [_, desc_area] =
            Layout::vertical([Constraint::Length(top_padding), Constraint::Min(0)])
                .areas(desc_area);

        let description_para = Paragraph::new(description)
            .style(t.muted_style())
            .alignment(Alignment::Right)
            .wrap(Wrap { trim: true });
        frame.render_widget(description_para, desc_area);

        Ok(area.height)
    }
}
