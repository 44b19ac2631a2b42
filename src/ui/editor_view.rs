//! Editor view: renders the document tree with live formatting.
//!
//! Each leaf block renders as one line: headings bold and colored, quotes
//! behind a gutter marker, list items behind bullets or numbers. Inline
//! marks map onto terminal styling, the selection gets a background
//! highlight, and the caret renders reversed.
//!
//! Block alignment is applied here, in the live view only; the HTML
//! serializer does not emit it.

use crate::document::node::{Alignment, Block, BlockKind, Node, TextRun};
use crate::editor::selection::Point;
use crate::editor::state::EditorState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the document into the given area, honoring the scroll offset.
pub fn render_editor_view(f: &mut Frame, area: Rect, state: &EditorState, colors: &ThemeColors) {
    let lines = build_lines(state, colors);
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .scroll((state.scroll_offset() as u16, 0));
    f.render_widget(paragraph, area);
}

/// Returns the view line the caret sits on, for scroll adjustment.
pub fn caret_line_index(state: &EditorState) -> usize {
    let caret = state.caret();
    let block_path: &[usize] = &caret.path[..caret.path.len().saturating_sub(1)];

    let mut line = 0;
    for (index, node) in state.document().children().iter().enumerate() {
        let Node::Block(block) = node else { continue };
        if block.kind.is_list() {
            for (item_index, _) in block.children.iter().enumerate() {
                if block_path == [index, item_index] {
                    return line;
                }
                line += 1;
            }
        } else {
            if block_path == [index] {
                return line;
            }
            line += 1;
        }
    }
    line.saturating_sub(1)
}

/// Builds one styled line per leaf block.
fn build_lines(state: &EditorState, colors: &ThemeColors) -> Vec<Line<'static>> {
    let (sel_start, sel_end) = state.selection().unhung_range(state.document());
    let selection = if state.selection().is_collapsed() {
        None
    } else {
        Some((sel_start, sel_end))
    };
    let caret = state.caret();

    let mut lines = Vec::new();
    for (index, node) in state.document().children().iter().enumerate() {
        let Node::Block(block) = node else { continue };

        if block.kind.is_list() {
            for (item_index, item) in block.children.iter().enumerate() {
                let Node::Block(item_block) = item else { continue };
                let marker = match block.kind {
                    BlockKind::BulletedList => "  • ".to_string(),
                    _ => format!("  {}. ", item_index + 1),
                };
                lines.push(block_line(
                    item_block,
                    vec![index, item_index],
                    Some(Span::styled(
                        marker,
                        Style::default().fg(colors.list_marker),
                    )),
                    selection.as_ref(),
                    caret,
                    colors,
                ));
            }
        } else {
            let marker = match block.kind {
                BlockKind::BlockQuote => Some(Span::styled(
                    "> ".to_string(),
                    Style::default().fg(colors.quote),
                )),
                _ => None,
            };
            lines.push(block_line(
                block,
                vec![index],
                marker,
                selection.as_ref(),
                caret,
                colors,
            ));
        }
    }
    lines
}

/// Builds the line for one leaf block: marker, runs, caret, alignment.
fn block_line(
    block: &Block,
    block_path: Vec<usize>,
    marker: Option<Span<'static>>,
    selection: Option<&(Point, Point)>,
    caret: &Point,
    colors: &ThemeColors,
) -> Line<'static> {
    let base = block_base_style(block, colors);

    let mut spans: Vec<Span<'static>> = Vec::new();
    if let Some(marker) = marker {
        spans.push(marker);
    }

    let run_count = block.children.len();
    for (run_index, child) in block.children.iter().enumerate() {
        let Node::Text(run) = child else { continue };

        let mut run_path = block_path.clone();
        run_path.push(run_index);

        let sel_range = selection.and_then(|(start, end)| run_overlap(&run_path, run, start, end));
        let caret_offset = (caret.path == run_path).then_some(caret.offset);

        spans.extend(run_spans(run, base, sel_range, caret_offset, colors));

        // A caret at the end of the block's last run renders as a reversed
        // cell after the text
        let at_end = caret_offset == Some(run.len()) && run_index == run_count - 1;
        if at_end {
            spans.push(Span::styled(
                " ".to_string(),
                base.add_modifier(Modifier::REVERSED),
            ));
        }
    }

    // An empty block still shows the caret
    if run_count == 0 && caret.path.len() == block_path.len() + 1 && caret.path.starts_with(&block_path) {
        spans.push(Span::styled(
            " ".to_string(),
            base.add_modifier(Modifier::REVERSED),
        ));
    }

    let line = Line::from(spans);
    match block.align {
        Some(Alignment::Center) => line.centered(),
        Some(Alignment::Right) => line.right_aligned(),
        // Justify has no terminal equivalent; it renders flush left
        Some(Alignment::Left) | Some(Alignment::Justify) | None => line.left_aligned(),
    }
}

/// Style applied to a whole block by its kind.
fn block_base_style(block: &Block, colors: &ThemeColors) -> Style {
    match block.kind {
        BlockKind::HeadingOne => Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
        BlockKind::HeadingTwo => Style::default().fg(colors.heading),
        BlockKind::BlockQuote => Style::default()
            .fg(colors.quote)
            .add_modifier(Modifier::ITALIC),
        BlockKind::Paragraph
        | BlockKind::NumberedList
        | BlockKind::BulletedList
        | BlockKind::ListItem => Style::default().fg(colors.foreground),
    }
}

/// Returns the selected sub-range of a run, if the selection touches it.
fn run_overlap(
    run_path: &[usize],
    run: &TextRun,
    start: &Point,
    end: &Point,
) -> Option<(usize, usize)> {
    use crate::editor::selection::compare_paths;
    use std::cmp::Ordering;

    if compare_paths(run_path, &start.path) == Ordering::Less
        || compare_paths(run_path, &end.path) == Ordering::Greater
    {
        return None;
    }
    let len = run.len();
    let lo = if run_path == start.path {
        start.offset.min(len)
    } else {
        0
    };
    let hi = if run_path == end.path {
        end.offset.min(len)
    } else {
        len
    };
    (lo < hi).then_some((lo, hi))
}

/// Splits one run into styled spans for marks, selection, and caret.
fn run_spans(
    run: &TextRun,
    base: Style,
    selection: Option<(usize, usize)>,
    caret: Option<usize>,
    colors: &ThemeColors,
) -> Vec<Span<'static>> {
    let mut style = base;
    if run.marks.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.marks.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if run.marks.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if run.marks.code {
        style = style.fg(colors.code);
    }

    let chars: Vec<char> = run.text.chars().collect();
    let mut spans = Vec::new();
    let mut segment = String::new();
    let mut segment_style = style;

    let style_at = |index: usize| {
        let mut s = style;
        if let Some((lo, hi)) = selection {
            if index >= lo && index < hi {
                s = s.bg(colors.selection_bg);
            }
        }
        if caret == Some(index) {
            s = s.add_modifier(Modifier::REVERSED);
        }
        s
    };

    for (index, ch) in chars.iter().enumerate() {
        let ch_style = style_at(index);
        if ch_style != segment_style && !segment.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut segment), segment_style));
        }
        segment_style = ch_style;
        segment.push(*ch);
    }
    if !segment.is_empty() {
        spans.push(Span::styled(segment, segment_style));
    }

    spans
}
