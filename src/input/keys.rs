//! Keyboard event mapping and input event types.

use crate::document::node::{Alignment, BlockFormat, BlockKind, Mark};
use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (toggle a mark, move the caret,
/// save) rather than specific key presses, allowing mode-specific
/// keybindings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// User wants to quit the editor
    Quit,
    /// Save the document
    Save,
    /// Toggle the help overlay
    Help,
    /// Dismiss overlays / messages, drop an armed selection
    Cancel,
    /// Toggle an inline mark at the selection
    ToggleMark(Mark),
    /// Toggle a block kind or alignment at the selection
    ToggleBlock(BlockFormat),
    /// Move caret left one character
    MoveLeft,
    /// Move caret right one character
    MoveRight,
    /// Move caret to the previous block
    MoveUp,
    /// Move caret to the next block
    MoveDown,
    /// Move caret to the start of the current leaf
    MoveHome,
    /// Move caret to the end of the current leaf
    MoveEnd,
    /// Pin/unpin the selection anchor; movement extends while pinned
    ToggleSelecting,
    /// Select the whole document
    SelectAll,
    /// Type a character at the caret
    InsertCharacter(char),
    /// Split the current block (Enter)
    InsertNewline,
    /// Delete backward (Backspace)
    DeleteBackward,
    /// Unknown or unmapped key
    Unknown,
}

/// The fixed chord table for the four inline marks. Dispatch is a linear
/// scan of this table on every keystroke; no state persists between
/// keystrokes.
pub const MARK_BINDINGS: [(Key, Mark); 4] = [
    (Key::Ctrl('b'), Mark::Bold),
    (Key::Ctrl('i'), Mark::Italic),
    (Key::Ctrl('u'), Mark::Underline),
    (Key::Ctrl('`'), Mark::Code),
];

/// Maps a termion Event to an InputEvent based on the current editor mode.
///
/// Edit mode interprets plain characters as typed text and chords as
/// commands; View mode maps only navigation and application-level keys, so
/// a read-only editor can never emit a mutating event.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use htmlquill::document::node::Mark;
/// use htmlquill::editor::mode::EditorMode;
/// use htmlquill::input::keys::{map_key_event, InputEvent};
///
/// let event = Event::Key(Key::Ctrl('b'));
/// let input_event = map_key_event(event, EditorMode::Edit);
/// assert_eq!(input_event, InputEvent::ToggleMark(Mark::Bold));
/// ```
pub fn map_key_event(event: Event, mode: EditorMode) -> InputEvent {
    // We only care about key events; mouse events are routed separately
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    // Keys that behave the same in both modes
    match key {
        Key::Ctrl('q') => return InputEvent::Quit,
        Key::F(1) => return InputEvent::Help,
        Key::Esc => return InputEvent::Cancel,
        Key::Left => return InputEvent::MoveLeft,
        Key::Right => return InputEvent::MoveRight,
        Key::Up => return InputEvent::MoveUp,
        Key::Down => return InputEvent::MoveDown,
        Key::Home => return InputEvent::MoveHome,
        Key::End => return InputEvent::MoveEnd,
        _ => {}
    }

    match mode {
        EditorMode::Edit => {
            // Mark chords: a linear scan of the fixed table
            for (binding, mark) in MARK_BINDINGS {
                if key == binding {
                    return InputEvent::ToggleMark(mark);
                }
            }

            match key {
                Key::Ctrl('s') => InputEvent::Save,
                Key::Ctrl('a') => InputEvent::SelectAll,
                // Block kinds
                Key::Alt('1') => {
                    InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::HeadingOne))
                }
                Key::Alt('2') => {
                    InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::HeadingTwo))
                }
                Key::Alt('q') => {
                    InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::BlockQuote))
                }
                Key::Alt('8') => {
                    InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::BulletedList))
                }
                Key::Alt('7') => {
                    InputEvent::ToggleBlock(BlockFormat::Kind(BlockKind::NumberedList))
                }
                // Alignment
                Key::Alt('l') => InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Left)),
                Key::Alt('c') => InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Center)),
                Key::Alt('r') => InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Right)),
                Key::Alt('j') => InputEvent::ToggleBlock(BlockFormat::Align(Alignment::Justify)),
                // Selection
                Key::Alt('v') => InputEvent::ToggleSelecting,
                // Editing
                Key::Char('\n') => InputEvent::InsertNewline,
                Key::Backspace => InputEvent::DeleteBackward,
                Key::Char(c) => InputEvent::InsertCharacter(c),
                _ => InputEvent::Unknown,
            }
        }
        EditorMode::View => match key {
            Key::Char('q') => InputEvent::Quit,
            _ => InputEvent::Unknown,
        },
    }
}
