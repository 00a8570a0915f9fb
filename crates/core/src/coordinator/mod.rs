//! Retires the navigation record when the file hosting the marker is
//! disturbed.
//!
//! Every trigger keys off the store's marker file (the destination), never
//! the source file: editing the origin of a jump leaves the return point
//! intact, while editing, closing, or leaving the destination retires it.
//!
//! # Triggers
//!
//! | Trigger           | Matches                         | Re-evaluates |
//! |-------------------|---------------------------------|--------------|
//! | document mutation | mutated file == marker file     | that file    |
//! | file close        | closed file == marker file      | nothing      |
//! | focus change      | old == marker file, old != new  | old file     |
//!
//! All triggers are idempotent: an empty record makes them no-ops.

use std::fmt;

use retrace_primitives::FileId;

use crate::host::Host;
use crate::store::NavigationStore;


/// Why a record was retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearReason {
	/// The destination document was edited.
	DocumentChanged,
	/// The destination file was closed.
	FileClosed,
	/// Focus left the destination file.
	FocusLost,
}

impl fmt::Display for ClearReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::DocumentChanged => "document modification",
			Self::FileClosed => "file close",
			Self::FocusLost => "focus change",
		})
	}
}

/// Outcome of a single trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
	/// The event did not concern the marker file.
	Ignored,
	/// The record and marker file were cleared.
	Cleared {
		reason: ClearReason,
		/// File a re-evaluation was requested for, if any.
		refresh: Option<FileId>,
	},
}

impl Invalidation {
	pub fn is_cleared(&self) -> bool {
		matches!(self, Self::Cleared { .. })
	}
}

/// Applies the invalidation rules to host notifications.
pub struct Coordinator<'a, H: ?Sized> {
	host: &'a H,
	store: &'a NavigationStore,
}

impl<'a, H: Host + ?Sized> Coordinator<'a, H> {
	pub fn new(host: &'a H, store: &'a NavigationStore) -> Self {
		Self { host, store }
	}

	/// A document was edited anywhere in it.
	pub fn document_changed(&self, file: &FileId) -> Invalidation {
		self.retire(file, ClearReason::DocumentChanged, true)
	}

	/// Nothing to do for opened files; accepted so every lifecycle event has
	/// a handler.
	pub fn file_opened(&self, file: &FileId) -> Invalidation {
		tracing::trace!(file = %file, "nav.file_opened");
		Invalidation::Ignored
	}

	/// The last editor of `file` closed. Nothing is redrawn in a closed file.
	pub fn file_closed(&self, file: &FileId) -> Invalidation {
		self.retire(file, ClearReason::FileClosed, false)
	}

	/// Focus moved from `old` to `new`; either may be absent.
	pub fn focus_changed(&self, old: Option<&FileId>, new: Option<&FileId>) -> Invalidation {
		let Some(old) = old else {
			return Invalidation::Ignored;
		};
		if new == Some(old) {
			return Invalidation::Ignored;
		}
		self.retire(old, ClearReason::FocusLost, true)
	}

	fn retire(&self, file: &FileId, reason: ClearReason, refresh: bool) -> Invalidation {
		let Some(prev) = self.store.clear_if_marked(file) else {
			tracing::trace!(file = %file, %reason, "nav.invalidate.ignored");
			return Invalidation::Ignored;
		};

		tracing::info!(
			file = %file,
			%reason,
			source = ?prev.source().map(|s| s.file.name()),
			"clearing navigation record"
		);

		let refresh = refresh.then(|| {
			self.host.request_reevaluation(file);
			file.clone()
		});
		Invalidation::Cleared { reason, refresh }
	}
}
