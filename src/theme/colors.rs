//! Color definitions for htmlquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the htmlquill terminal UI. Colors are organized into
//! three categories: content styling, UI chrome, and semantic colors.

use ratatui::style::Color;

/// Defines all colors used in an htmlquill theme.
///
/// # Examples
///
/// ```
/// use htmlquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Content colors
    /// Color for heading blocks.
    pub heading: Color,
    /// Color for block quotes and their gutter marker.
    pub quote: Color,
    /// Color for list bullets and numbers.
    pub list_marker: Color,
    /// Color for code-marked text runs.
    pub code: Color,

    // UI colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the caret.
    pub cursor: Color,
    /// Background color for the selection highlight.
    pub selection_bg: Color,
    /// Background color for the toolbar row.
    pub toolbar_bg: Color,
    /// Foreground color for inactive toolbar buttons.
    pub toolbar_fg: Color,
    /// Background color for active toolbar buttons.
    pub toolbar_active_bg: Color,
    /// Foreground color for active toolbar buttons.
    pub toolbar_active_fg: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the palette adapts to the user's terminal color
    /// scheme; the background stays whatever the terminal uses.
    ///
    /// # Examples
    ///
    /// ```
    /// use htmlquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.status_line_bg, Color::White);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            heading: Color::LightBlue,    // ANSI 12
            quote: Color::Green,          // ANSI 2
            list_marker: Color::Magenta,  // ANSI 5
            code: Color::Yellow,          // ANSI 3

            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,  // ANSI 7
            cursor: Color::LightBlue, // ANSI 12 (match heading color)
            selection_bg: Color::DarkGray, // ANSI 8
            toolbar_bg: Color::Black,
            toolbar_fg: Color::Gray,
            toolbar_active_bg: Color::LightBlue,
            toolbar_active_fg: Color::Black,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,

            error: Color::Red,      // ANSI 1
            warning: Color::Yellow, // ANSI 3
            info: Color::LightBlue, // ANSI 12
        }
    }

    /// Returns the default light color scheme.
    ///
    /// A light theme with high contrast for well-lit environments.
    ///
    /// # Examples
    ///
    /// ```
    /// use htmlquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            heading: Color::Rgb(64, 120, 242),
            quote: Color::Rgb(80, 161, 79),
            list_marker: Color::Rgb(166, 38, 164),
            code: Color::Rgb(193, 132, 1),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(64, 120, 242),
            selection_bg: Color::Rgb(229, 229, 230),
            toolbar_bg: Color::Rgb(234, 234, 235),
            toolbar_fg: Color::Rgb(56, 58, 66),
            toolbar_active_bg: Color::Rgb(64, 120, 242),
            toolbar_active_fg: Color::Rgb(250, 250, 250),
            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(193, 132, 1),
            info: Color::Rgb(64, 120, 242),
        }
    }

    /// Returns the gruvbox dark color scheme.
    ///
    /// Retro groove color scheme with warm, earthy tones.
    pub fn gruvbox_dark() -> Self {
        Self {
            heading: Color::Rgb(131, 165, 152),    // aqua
            quote: Color::Rgb(184, 187, 38),       // green
            list_marker: Color::Rgb(211, 134, 155), // purple
            code: Color::Rgb(250, 189, 47),        // yellow

            background: Color::Rgb(40, 40, 40),
            foreground: Color::Rgb(235, 219, 178),
            cursor: Color::Rgb(254, 128, 25), // orange
            selection_bg: Color::Rgb(80, 73, 69),
            toolbar_bg: Color::Rgb(60, 56, 54),
            toolbar_fg: Color::Rgb(235, 219, 178),
            toolbar_active_bg: Color::Rgb(254, 128, 25),
            toolbar_active_fg: Color::Rgb(40, 40, 40),
            status_line_bg: Color::Rgb(80, 73, 69),
            status_line_fg: Color::Rgb(235, 219, 178),

            error: Color::Rgb(251, 73, 52),
            warning: Color::Rgb(250, 189, 47),
            info: Color::Rgb(131, 165, 152),
        }
    }

    /// Returns the nord color scheme.
    ///
    /// Arctic, north-bluish color palette.
    pub fn nord() -> Self {
        Self {
            heading: Color::Rgb(136, 192, 208),    // nord8
            quote: Color::Rgb(163, 190, 140),      // nord14
            list_marker: Color::Rgb(180, 142, 173), // nord15
            code: Color::Rgb(235, 203, 139),       // nord13

            background: Color::Rgb(46, 52, 64),    // nord0
            foreground: Color::Rgb(216, 222, 233), // nord4
            cursor: Color::Rgb(136, 192, 208),
            selection_bg: Color::Rgb(67, 76, 94), // nord2
            toolbar_bg: Color::Rgb(59, 66, 82),   // nord1
            toolbar_fg: Color::Rgb(216, 222, 233),
            toolbar_active_bg: Color::Rgb(136, 192, 208),
            toolbar_active_fg: Color::Rgb(46, 52, 64),
            status_line_bg: Color::Rgb(67, 76, 94),
            status_line_fg: Color::Rgb(236, 239, 244), // nord6

            error: Color::Rgb(191, 97, 106),   // nord11
            warning: Color::Rgb(235, 203, 139), // nord13
            info: Color::Rgb(136, 192, 208),   // nord8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_uses_terminal_background() {
        assert_eq!(ThemeColors::default_dark().background, Color::Reset);
    }

    #[test]
    fn test_light_background_is_light() {
        let colors = ThemeColors::default_light();
        assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    }
}
