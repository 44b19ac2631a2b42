//! Formatting toolbar widget.
//!
//! One row of buttons for the mark, block, and alignment toggles. On every
//! render each button re-evaluates its active-state query against the live
//! selection and restyles itself, so the toolbar always reflects the
//! formatting at the caret. [`hit_test`] maps a mouse column onto the
//! button's command; a press fires the command without ever moving the
//! caret, so the selection is intact when the command runs.

use crate::document::node::{Alignment, BlockFormat, BlockKind, Mark};
use crate::editor::mode::EditorMode;
use crate::editor::state::EditorState;
use crate::input::keys::InputEvent;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One toolbar entry: a labeled button or a group divider.
#[derive(Debug, Clone, Copy)]
pub enum ToolbarItem {
    Button {
        label: &'static str,
        event: InputEvent,
    },
    Divider,
}

/// The fixed toolbar layout: marks, block kinds, alignments.
pub const ITEMS: &[ToolbarItem] = &[
    ToolbarItem::Button {
        label: "B",
        event: InputEvent::ToggleMark(Mark::Bold),
    },
    ToolbarItem::Button {
        label: "I",
        event: InputEvent::ToggleMark(Mark::Italic),
    },
    ToolbarItem::Button {
        label: "U",
        event: InputEvent::ToggleMark(Mark::Underline),
    },
    ToolbarItem::Button {
        label: "</>",
        event: InputEvent::ToggleMark(Mark::Code),
    },
    ToolbarItem::Divider,
    ToolbarItem::Button {
        label: "H1",
        event: InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::HeadingOne)),
    },
    ToolbarItem::Button {
        label: "H2",
        event: InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::HeadingTwo)),
    },
    ToolbarItem::Button {
        label: "\"",
        event: InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::BlockQuote)),
    },
    ToolbarItem::Button {
        label: "*",
        event: InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::BulletedList)),
    },
    ToolbarItem::Button {
        label: "1.",
        event: InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::NumberedList)),
    },
    ToolbarItem::Divider,
    ToolbarItem::Button {
        label: "L",
        event: InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Left)),
    },
    ToolbarItem::Button {
        label: "C",
        event: InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Center)),
    },
    ToolbarItem::Button {
        label: "R",
        event: InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Right)),
    },
    ToolbarItem::Button {
        label: "J",
        event: InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Justify)),
    },
];

/// Returns whether a button's command reads as active at the current
/// selection.
fn is_active(state: &EditorState, event: InputEvent) -> bool {
    match event {
        InputEvent::ToggleMark(mark) => state.is_mark_active(mark),
        InputEvent::ToggleBlock(format) => state.is_block_active(format),
        _ => false,
    }
}

/// Renders the toolbar row.
pub fn render_toolbar(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let base = Style::default().bg(colors.toolbar_bg).fg(colors.toolbar_fg);
    let active = Style::default()
        .bg(colors.toolbar_active_bg)
        .fg(colors.toolbar_active_fg);

    let mut spans: Vec<Span> = Vec::new();
    for item in ITEMS {
        match item {
            ToolbarItem::Divider => spans.push(Span::styled(" |", base)),
            ToolbarItem::Button { label, event } => {
                spans.push(Span::styled(" ", base));
                let style = if is_active(state, *event) { active } else { base };
                spans.push(Span::styled(format!("[{label}]"), style));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(base);
    f.render_widget(paragraph, area);
}

/// Maps a 0-based column on the toolbar row to the command of the button
/// under it. Returns `None` between buttons, past the row's end, or in View
/// mode (a read-only editor's toolbar is inert).
pub fn hit_test(column: u16, mode: EditorMode) -> Option<InputEvent> {
    if !mode.is_editable() {
        return None;
    }

    let column = column as usize;
    let mut cursor = 0usize;

    for item in ITEMS {
        match item {
            ToolbarItem::Divider => cursor += 2, // " |"
            ToolbarItem::Button { label, event } => {
                cursor += 1; // leading space
                let width = label.chars().count() + 2; // "[label]"
                if (cursor..cursor + width).contains(&column) {
                    return Some(*event);
                }
                cursor += width;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_first_button() {
        // Row starts " [B]": columns 1..=3 are the bold button
        assert_eq!(
            hit_test(1, EditorMode::Edit),
            Some(InputEvent::ToggleMark(Mark::Bold))
        );
        assert_eq!(
            hit_test(3, EditorMode::Edit),
            Some(InputEvent::ToggleMark(Mark::Bold))
        );
        // Column 0 is the leading space
        assert_eq!(hit_test(0, EditorMode::Edit), None);
    }

    #[test]
    fn test_hit_test_second_button() {
        // " [B] [I]": italic occupies columns 5..=7
        assert_eq!(
            hit_test(6, EditorMode::Edit),
            Some(InputEvent::ToggleMark(Mark::Italic))
        );
        assert_eq!(hit_test(4, EditorMode::Edit), None);
    }

    #[test]
    fn test_hit_test_past_end() {
        assert_eq!(hit_test(500, EditorMode::Edit), None);
    }

    #[test]
    fn test_hit_test_inert_in_view_mode() {
        assert_eq!(hit_test(1, EditorMode::View), None);
    }

    #[test]
    fn test_every_button_is_reachable() {
        let mut found = 0;
        for column in 0..120u16 {
            if hit_test(column, EditorMode::Edit).is_some() {
                found += 1;
            }
        }
        // Sum of "[label]" widths over all 13 buttons
        let expected: usize = ITEMS
            .iter()
            .filter_map(|item| match item {
                ToolbarItem::Button { label, .. } => Some(label.chars().count() + 2),
                ToolbarItem::Divider => None,
            })
            .sum();
        assert_eq!(found, expected);
    }
}
