//! Seam between the navigation tracker and the embedding editor.
//!
//! The host owns documents, focus, syntax trees and the decoration surface.
//! The tracker only queries it and asks it for side effects; event delivery
//! is inverted through [`Session::dispatch`](crate::Session::dispatch).

use std::sync::Arc;

use retrace_primitives::{CharIdx, Cursor, Declaration, FileClass, FileId};

use crate::error::HostError;

/// Editor services consumed by the tracker.
///
/// Implementations must not call back into the owning [`Session`](crate::Session)
/// from these methods. Side-effect requests ([`request_reevaluation`] and
/// [`navigate_to`]) are best effort and may be deferred by the host.
///
/// [`request_reevaluation`]: Host::request_reevaluation
/// [`navigate_to`]: Host::navigate_to
pub trait Host {
	/// Returns false when no workspace context exists. The tracker is inert
	/// while this holds.
	fn session_active(&self) -> bool {
		true
	}

	/// Focused file and caret position.
	fn active_cursor(&self) -> Result<Cursor, HostError>;

	/// Named declarations enclosing `offset`, innermost first.
	fn declaration_ancestors(
		&self,
		file: &FileId,
		offset: CharIdx,
	) -> Result<Vec<Declaration>, HostError>;

	/// Whether `file` is part of the editable workspace.
	fn classify_file(&self, file: &FileId) -> FileClass;

	/// Whether `file` can still be opened. A stored source whose file fails
	/// this check is treated as cleared.
	fn is_file_valid(&self, _file: &FileId) -> bool {
		true
	}

	/// Fire-and-forget hint to redraw decorations in `file`.
	fn request_reevaluation(&self, file: &FileId);

	/// Moves the focused editor to `file` at `offset`.
	fn navigate_to(&self, file: &FileId, offset: CharIdx);
}

impl<H: Host + ?Sized> Host for Arc<H> {
	fn session_active(&self) -> bool {
		(**self).session_active()
	}

	fn active_cursor(&self) -> Result<Cursor, HostError> {
		(**self).active_cursor()
	}

	fn declaration_ancestors(
		&self,
		file: &FileId,
		offset: CharIdx,
	) -> Result<Vec<Declaration>, HostError> {
		(**self).declaration_ancestors(file, offset)
	}

	fn classify_file(&self, file: &FileId) -> FileClass {
		(**self).classify_file(file)
	}

	fn is_file_valid(&self, file: &FileId) -> bool {
		(**self).is_file_valid(file)
	}

	fn request_reevaluation(&self, file: &FileId) {
		(**self).request_reevaluation(file)
	}

	fn navigate_to(&self, file: &FileId, offset: CharIdx) {
		(**self).navigate_to(file, offset)
	}
}

/// Notifications the host forwards to [`Session::dispatch`](crate::Session::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
	/// A command is about to execute.
	BeforeCommand {
		/// Host command id.
		command: String,
	},
	/// A command finished executing.
	AfterCommand {
		/// Host command id.
		command: String,
	},
	/// A document's text changed.
	DocumentChanged {
		/// File backing the document.
		file: FileId,
	},
	/// A file was opened in an editor.
	FileOpened {
		/// The opened file.
		file: FileId,
	},
	/// A file's last editor was closed.
	FileClosed {
		/// The closed file.
		file: FileId,
	},
	/// Editor focus moved. Either side is `None` when no editor is focused.
	FocusChanged {
		/// File that lost focus.
		old: Option<FileId>,
		/// File that gained focus.
		new: Option<FileId>,
	},
}

impl HostEvent {
	/// Short name used in log fields.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::BeforeCommand { .. } => "before_command",
			Self::AfterCommand { .. } => "after_command",
			Self::DocumentChanged { .. } => "document_changed",
			Self::FileOpened { .. } => "file_opened",
			Self::FileClosed { .. } => "file_closed",
			Self::FocusChanged { .. } => "focus_changed",
		}
	}
}
