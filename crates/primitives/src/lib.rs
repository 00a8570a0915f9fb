//! Core types for navigation tracking: file identifiers, char spans, cursors,
//! and declaration kinds.

/// Cursor snapshot of the focused editor.
pub mod cursor;
/// Declaration nodes reported by the host's syntax tree.
pub mod decl;
/// Stable file identifiers and editability classes.
pub mod file;
/// Char index and span types.
pub mod range;

pub use cursor::Cursor;
pub use decl::{DeclKind, Declaration};
pub use file::{FileClass, FileId};
pub use range::{CharIdx, CharLen, Span};
