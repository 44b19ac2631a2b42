//! HTML output for rich text documents.
//!
//! The [`serializer`] module turns the document tree into the HTML string
//! handed to the change callback and written on save.

pub mod serializer;
