//! The [`FitstateLogo`] widget renders the app's wordmark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Widget;

/// A widget that renders the FitState wordmark
///
/// Comes in two sizes: `Regular` (3 lines of box drawing characters) for
/// roomy terminals and `Compact` (a single spaced line) for cramped ones.
///
/// # Examples
///
/// ```rust
/// use fitstate::widgets::FitstateLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(FitstateLogo::regular(), frame.area());
/// # }
/// ```
///
/// Renders:
///
/// ```text
/// ┏━╸╻╺┳╸┏━┓╺┳╸┏━┓╺┳╸┏━╸
/// ┣╸ ┃ ┃ ┗━┓ ┃ ┣━┫ ┃ ┣╸
/// ╹  ╹ ╹ ┗━┛ ╹ ╹ ╹ ╹ ┗━╸
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FitstateLogo {
    size: Size,
}

/// The size of the logo
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    #[default]
    Regular,
    Compact,
}

impl FitstateLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn regular() -> Self {
        Self::new(Size::Regular)
    }

    pub const fn compact() -> Self {
        Self::new(Size::Compact)
    }

    /// The largest logo that fits in `area`, if any
    pub fn fitting(area: Rect) -> Option<Self> {
        [Size::Regular, Size::Compact]
            .into_iter()
            .find(|size| size.width() <= area.width && size.height() <= area.height)
            .map(Self::new)
    }

    /// Returns the width of the logo in terminal cells
    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    /// Returns the height of the logo in lines
    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for FitstateLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::raw(self.size.as_str())
            .style(theme().title_style())
            .render(area, buf);
    }
}

impl Size {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => indoc! {"
            ┏━╸╻╺┳╸┏━┓╺┳╸┏━┓╺┳╸┏━╸
            ┣╸ ┃ ┃ ┗━┓ ┃ ┣━┫ ┃ ┣╸
            ╹  ╹ ╹ ┗━┛ ╹ ╹ ╹ ╹ ┗━╸
            "},
            Self::Compact => "F I T S T A T E",
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            Self::Regular => 22,
            Self::Compact => 15,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Regular => 3,
            Self::Compact => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logo_is_regular() {
        assert_eq!(FitstateLogo::default(), FitstateLogo::regular());
    }

    #[test]
    fn logo_dimensions_match_content() {
        for size in [Size::Regular, Size::Compact] {
            let lines: Vec<&str> = size.as_str().lines().collect();
            assert_eq!(lines.len() as u16, size.height(), "{:?} height mismatch", size);

            // All logo chars are 1 cell wide
            let max_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
            assert_eq!(max_width, size.width(), "{:?} width mismatch", size);
        }
    }

    #[test]
    fn fitting_picks_largest_that_fits() {
        assert_eq!(
            FitstateLogo::fitting(Rect::new(0, 0, 80, 10)),
            Some(FitstateLogo::regular())
        );
        assert_eq!(
            FitstateLogo::fitting(Rect::new(0, 0, 16, 1)),
            Some(FitstateLogo::compact())
        );
        assert_eq!(FitstateLogo::fitting(Rect::new(0, 0, 10, 1)), None);
    }
}
