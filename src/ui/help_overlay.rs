//! Help overlay listing the editor's keybindings.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// The help text, one (key, description) pair per row. An empty key starts
/// a section header.
const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "Marks"),
    ("Ctrl+B", "Toggle bold"),
    ("Ctrl+I", "Toggle italic"),
    ("Ctrl+U", "Toggle underline"),
    ("Ctrl+`", "Toggle code"),
    ("", "Blocks"),
    ("Alt+1", "Toggle heading 1"),
    ("Alt+2", "Toggle heading 2"),
    ("Alt+Q", "Toggle block quote"),
    ("Alt+8", "Toggle bulleted list"),
    ("Alt+7", "Toggle numbered list"),
    ("", "Alignment"),
    ("Alt+L", "Align left"),
    ("Alt+C", "Align center"),
    ("Alt+R", "Align right"),
    ("Alt+J", "Justify"),
    ("", "Selection"),
    ("Alt+V", "Pin/unpin the selection anchor"),
    ("Ctrl+A", "Select all"),
    ("Arrows", "Move caret (extends while pinned)"),
    ("Home/End", "Start/end of block"),
    ("", "Application"),
    ("Ctrl+S", "Save"),
    ("Ctrl+Q", "Quit (twice on unsaved changes)"),
    ("F1", "Toggle this help"),
    ("Esc", "Dismiss overlay / message"),
];

/// Renders the help overlay centered over the editor, scrolled by
/// `scroll` rows.
pub fn render_help_overlay(f: &mut Frame, colors: &ThemeColors, scroll: usize) {
    let area = centered_rect(f.area(), 44, 20);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .skip(scroll)
        .map(|(key, description)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    description.to_string(),
                    Style::default()
                        .fg(colors.info)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("  {key:<10}"), Style::default().fg(colors.info)),
                    Span::raw(description.to_string()),
                ])
            }
        })
        .collect();

    let block = Block::default()
        .title(" Help (Up/Down to scroll, Esc to close) ")
        .borders(Borders::ALL)
        .style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Centers a fixed-size rect inside the given area, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 44, 20);
        assert!(rect.x + rect.width <= 80);
        assert!(rect.y + rect.height <= 24);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 44, 20);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);
    }
}
