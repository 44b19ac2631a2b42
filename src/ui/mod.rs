//! UI module for the htmlquill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal
//! interface, including layout management and widget composition.

pub mod editor_view;
pub mod help_overlay;
pub mod message_area;
pub mod status_line;
pub mod toolbar;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::config::Config;
use crate::editor::state::EditorState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of four areas:
/// - Toolbar (top, optional): formatting buttons with live active state
/// - Editor area: the document with live styling and alignment
/// - Status line: mode, file info, and caret position
/// - Message area (bottom): messages and hints
///
/// # Example
///
/// ```
/// use htmlquill::theme::get_builtin_theme;
/// use htmlquill::ui::UI;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the
    /// theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the UI to the terminal.
    ///
    /// Draws the complete layout: toolbar (when configured), editor view,
    /// status line, and message area, plus the help overlay when visible.
    /// Rendering is a read of the current state; the only state it touches
    /// is the scroll offset, adjusted to keep the caret visible.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &mut EditorState,
        config: &Config,
    ) -> Result<()> {
        terminal.draw(|f| {
            let toolbar_height = u16::from(config.show_toolbar);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(toolbar_height), // Toolbar
                    Constraint::Min(1),                 // Editor area
                    Constraint::Length(1),              // Status line
                    Constraint::Length(1),              // Message area
                ])
                .split(f.area());

            // Keep the caret inside the viewport
            let viewport_height = chunks[1].height as usize;
            let caret_line = editor_view::caret_line_index(state);
            let mut offset = state.scroll_offset();
            if caret_line < offset {
                offset = caret_line;
            } else if viewport_height > 0 && caret_line >= offset + viewport_height {
                offset = caret_line + 1 - viewport_height;
            }
            state.set_scroll_offset(offset);

            if config.show_toolbar {
                toolbar::render_toolbar(f, chunks[0], state, &self.theme.colors);
            }
            editor_view::render_editor_view(f, chunks[1], state, &self.theme.colors);
            status_line::render_status_line(f, chunks[2], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[3], state, &self.theme.colors);

            // Help overlay (rendered on top if visible)
            if state.show_help() {
                help_overlay::render_help_overlay(f, &self.theme.colors, state.help_scroll());
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{Block, Node};
    use crate::document::tree::Document;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn test_state() -> EditorState {
        EditorState::new(Document::new(vec![Node::Block(Block::paragraph(
            "Hello world",
        ))]))
    }

    #[test]
    fn test_ui_creation() {
        let theme = get_builtin_theme("default-dark").unwrap();
        let ui = UI::new(theme);
        assert_eq!(ui.theme_name(), "default-dark");
    }

    #[test]
    fn test_set_theme() {
        let theme = get_builtin_theme("default-dark").unwrap();
        let mut ui = UI::new(theme);

        assert!(ui.set_theme("nord"));
        assert_eq!(ui.theme_name(), "nord");
        assert!(!ui.set_theme("bogus"));
        assert_eq!(ui.theme_name(), "nord");
    }

    #[test]
    fn test_render_executes() {
        let theme = get_builtin_theme("default-dark").unwrap();
        let ui = UI::new(theme);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = test_state();
        let result = ui.render(&mut terminal, &mut state, &Config::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_without_toolbar() {
        let theme = get_builtin_theme("default-light").unwrap();
        let ui = UI::new(theme);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = test_state();
        let config = Config {
            show_toolbar: false,
            ..Config::default()
        };
        assert!(ui.render(&mut terminal, &mut state, &config).is_ok());
    }

    #[test]
    fn test_render_with_help_overlay() {
        let theme = get_builtin_theme("default-dark").unwrap();
        let ui = UI::new(theme);

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut state = test_state();
        state.toggle_help();
        state.set_filename("page.html".to_string());

        assert!(ui.render(&mut terminal, &mut state, &Config::default()).is_ok());

        let buffer = terminal.backend().buffer();
        assert!(buffer.area().width > 0);
    }
}
