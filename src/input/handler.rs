//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::config::Config;
use crate::editor::state::{EditorState, MessageLevel};
use crate::file::saver::save_html_file;
use crate::ui::toolbar;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates editor state.
///
/// The InputHandler polls for termion events, converts them to high-level
/// [`InputEvent`]s through the mode-aware key map, and applies them to the
/// editor state.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None otherwise.
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Use the stored events iterator to maintain position in the input
        // buffer. This prevents character loss during rapid input (paste).
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates editor state.
    ///
    /// Returns Ok(true) if the application should quit, Ok(false)
    /// otherwise.
    pub fn handle_event(
        &mut self,
        event: Event,
        state: &mut EditorState,
        config: &Config,
    ) -> Result<bool> {
        if let Event::Mouse(mouse) = event {
            if config.enable_mouse {
                self.handle_mouse(mouse, state, config);
            }
            return Ok(false);
        }

        let input = map_key_event(event, state.mode());
        self.apply(input, state, config)
    }

    /// Applies a high-level input event to the editor state.
    pub fn apply(
        &mut self,
        input: InputEvent,
        state: &mut EditorState,
        config: &Config,
    ) -> Result<bool> {
        // The help overlay captures navigation while visible
        if state.show_help() {
            match input {
                InputEvent::MoveUp => {
                    state.scroll_help(-1);
                    return Ok(false);
                }
                InputEvent::MoveDown => {
                    state.scroll_help(1);
                    return Ok(false);
                }
                InputEvent::Help | InputEvent::Cancel => {
                    state.toggle_help();
                    return Ok(false);
                }
                InputEvent::Quit => return Ok(state.confirm_quit()),
                _ => return Ok(false),
            }
        }

        match input {
            InputEvent::Quit => return Ok(state.confirm_quit()),
            InputEvent::Save => self.save(state, config),
            InputEvent::Help => state.toggle_help(),
            InputEvent::Cancel => {
                if state.is_selecting() {
                    state.toggle_selecting();
                } else {
                    state.clear_message();
                }
            }
            InputEvent::ToggleMark(mark) => state.toggle_mark(mark),
            InputEvent::ToggleBlock(format) => state.toggle_block(format),
            InputEvent::MoveLeft => state.move_left(),
            InputEvent::MoveRight => state.move_right(),
            InputEvent::MoveUp => state.move_up(),
            InputEvent::MoveDown => state.move_down(),
            InputEvent::MoveHome => state.move_home(),
            InputEvent::MoveEnd => state.move_end(),
            InputEvent::ToggleSelecting => state.toggle_selecting(),
            InputEvent::SelectAll => state.select_all(),
            InputEvent::InsertCharacter(ch) => state.insert_char(ch),
            InputEvent::InsertNewline => state.insert_newline(),
            InputEvent::DeleteBackward => state.delete_backward(),
            InputEvent::Unknown => {}
        }

        Ok(false)
    }

    /// Routes mouse events: presses on the toolbar row fire the button's
    /// command, the wheel scrolls.
    ///
    /// A toolbar press never moves the caret, so the selection is still
    /// valid at the moment the command executes.
    fn handle_mouse(&mut self, mouse: MouseEvent, state: &mut EditorState, config: &Config) {
        match mouse {
            MouseEvent::Press(MouseButton::Left, x, y) => {
                // termion coordinates are 1-based; the toolbar is row 1
                if config.show_toolbar && y == 1 {
                    if let Some(input) = toolbar::hit_test(x.saturating_sub(1), state.mode()) {
                        let _ = self.apply(input, state, config);
                    }
                }
            }
            MouseEvent::Press(MouseButton::WheelUp, _, _) => state.move_up(),
            MouseEvent::Press(MouseButton::WheelDown, _, _) => state.move_down(),
            _ => {}
        }
    }

    /// Saves the current HTML rendition to the state's filename.
    fn save(&mut self, state: &mut EditorState, config: &Config) {
        let Some(filename) = state.filename().map(str::to_string) else {
            state.set_message(
                "No file name: start htmlquill with a file argument".to_string(),
                MessageLevel::Error,
            );
            return;
        };

        match save_html_file(&filename, state.html(), config) {
            Ok(()) => {
                state.clear_dirty();
                state.set_message(format!("Saved to {}", filename), MessageLevel::Info);
            }
            Err(err) => {
                state.set_message(format!("Save failed: {}", err), MessageLevel::Error);
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
