use crate::{CharIdx, FileId};

/// Caret position of the focused editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor {
	pub file: FileId,
	pub offset: CharIdx,
}

impl Cursor {
	pub fn new(file: impl Into<FileId>, offset: CharIdx) -> Self {
		Self {
			file: file.into(),
			offset,
		}
	}

	/// Returns true if the caret rests exactly at `offset` in `file`.
	pub fn is_at(&self, file: &FileId, offset: CharIdx) -> bool {
		self.file == *file && self.offset == offset
	}
}
