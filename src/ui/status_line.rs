//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode (EDIT, VIEW)
//! - Filename (or "[No Name]" if unsaved)
//! - Dirty indicator "[+]" for unsaved changes
//! - The block kind at the caret and the caret position
//!
//! Example status line: `EDIT | page.html [+]          paragraph 1:5`

use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use crate::ui::editor_view;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing mode, filename, and caret context.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let mode_text = format!("{}", state.mode());
    let filename = state.filename().unwrap_or("[No Name]");
    let dirty_indicator = if state.is_dirty() { " [+]" } else { "" };

    let left = format!("{} | {}{}", mode_text, filename, dirty_indicator);

    // Block kind at the caret plus line:column
    let caret = state.caret();
    let block_path = &caret.path[..caret.path.len().saturating_sub(1)];
    let kind = state
        .document()
        .get_block(block_path)
        .map(|block| block.kind.name())
        .unwrap_or("");
    let line = editor_view::caret_line_index(state) + 1;
    let right = format!("{} {}:{}", kind, line, caret.offset + 1);

    let width = area.width as usize;
    let padding = width
        .saturating_sub(left.chars().count())
        .saturating_sub(right.chars().count());

    let content = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(padding)),
        Span::raw(right),
    ]);

    let paragraph = Paragraph::new(content).style(
        Style::default()
            .bg(colors.status_line_bg)
            .fg(colors.status_line_fg),
    );

    f.render_widget(paragraph, area);
}
