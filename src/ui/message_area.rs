//! Message area rendering for displaying messages and hints.

use crate::editor::state::{EditorState, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Displays:
/// - Messages: errors, warnings, info
/// - A selection hint while the selection anchor is pinned
/// - Empty otherwise
pub fn render_message_area(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        )])
    } else if state.is_selecting() {
        Line::from(vec![Span::styled(
            "-- SELECT --",
            Style::default().fg(colors.info),
        )])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
