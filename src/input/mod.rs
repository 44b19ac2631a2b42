//! Input handling for keyboard events and formatting chords.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::InputEvent;
