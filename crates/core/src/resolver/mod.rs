//! Decides where the back marker is drawn and performs its activation.
//!
//! The host runs re-evaluation passes that ask, candidate by candidate,
//! whether a marker belongs there. [`Resolver::resolve`] answers from the
//! store snapshot, the candidate, and the focused caret. Its side effects are
//! confined to the store: recording the marker file on a positive answer
//! (only for the source it read), dropping tracking left behind once the
//! record is gone, and retiring a record whose source file vanished.
//!
//! # Matching rules
//!
//! In order, a candidate gets no marker when:
//!
//! 1. the record is empty (and a stale marker file matching the candidate's
//!    file is dropped),
//! 2. the source file is no longer valid (the record is cleared),
//! 3. the caret sits exactly on the recorded source offset in the source file,
//! 4. the candidate is not a declaration name in the focused file,
//! 5. the caret is outside both the name and its enclosing declaration.
//!
//! Rule 3 compares the caret only, never candidate spans, so a jump into the
//! same declaration it started from (recursion) still shows a marker once the
//! caret has moved.

mod marker;

use retrace_primitives::{FileId, Span};

pub use self::marker::{BackMarker, Icon, back_tooltip};
use crate::host::Host;
use crate::store::NavigationStore;

/// What a candidate element is in the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateRole {
	/// The identifier token naming a declaration.
	DeclarationName,
	/// Any other element.
	Other,
}

/// One element the host offers during a re-evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
	pub file: FileId,
	pub span: Span,
	pub role: CandidateRole,
	/// Span of the declaration this element names, when it names one.
	pub declaration: Option<Span>,
}

impl Candidate {
	/// Name token of a declaration spanning `declaration`.
	pub fn declaration_name(
		file: impl Into<FileId>,
		span: impl Into<Span>,
		declaration: impl Into<Span>,
	) -> Self {
		Self {
			file: file.into(),
			span: span.into(),
			role: CandidateRole::DeclarationName,
			declaration: Some(declaration.into()),
		}
	}

	pub fn other(file: impl Into<FileId>, span: impl Into<Span>) -> Self {
		Self {
			file: file.into(),
			span: span.into(),
			role: CandidateRole::Other,
			declaration: None,
		}
	}

	fn covers(&self, offset: usize) -> bool {
		self.span.contains(offset) || self.declaration.is_some_and(|d| d.contains(offset))
	}
}

/// Result of [`Resolver::activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
	/// Whether the marker still belonged to the live record.
	pub live: bool,
	/// Whether the host was asked to move to the source.
	pub navigated: bool,
	/// Files a re-evaluation was requested for, in order.
	pub refreshed: Vec<FileId>,
}

/// Answers "marker here?" for candidates and handles marker clicks.
pub struct Resolver<'a, H: ?Sized> {
	host: &'a H,
	store: &'a NavigationStore,
}

impl<'a, H: Host + ?Sized> Resolver<'a, H> {
	pub fn new(host: &'a H, store: &'a NavigationStore) -> Self {
		Self { host, store }
	}

	pub fn resolve(&self, candidate: &Candidate) -> Option<BackMarker> {
		let snapshot = self.store.snapshot();
		let Some(source) = snapshot.source() else {
			if self.store.unmark(&candidate.file) {
				tracing::debug!(file = %candidate.file, "dropped stale marker tracking");
			}
			return None;
		};

		if !self.host.is_file_valid(&source.file) {
			tracing::debug!(source = %source.file, "source file no longer valid, clearing record");
			let shown_in = self
				.store
				.clear_if_current(source)
				.and_then(|prev| prev.marker_file().cloned());
			if let Some(file) = shown_in.filter(|f| *f != candidate.file) {
				self.host.request_reevaluation(&file);
			}
			return None;
		}

		let cursor = self.host.active_cursor().ok()?;
		if cursor.is_at(&source.file, source.offset) {
			tracing::trace!(file = %cursor.file, offset = cursor.offset, "caret still at jump origin");
			return None;
		}

		if candidate.role != CandidateRole::DeclarationName || candidate.file != cursor.file {
			return None;
		}

		if !candidate.covers(cursor.offset) {
			tracing::trace!(
				file = %candidate.file,
				start = candidate.span.start,
				caret = cursor.offset,
				"candidate not under caret"
			);
			return None;
		}

		if !self.store.mark(&cursor.file, source) {
			tracing::trace!(file = %cursor.file, "record replaced during pass");
			return None;
		}
		tracing::debug!(
			file = %cursor.file,
			start = candidate.span.start,
			source = %source.file,
			"nav.marker.shown"
		);
		Some(BackMarker::new(source.clone(), cursor.file, candidate.span))
	}

	/// Runs one pass over the candidates of `file` and collects the markers.
	pub fn resolve_all<'c>(
		&self,
		file: &FileId,
		candidates: impl IntoIterator<Item = &'c Candidate>,
	) -> Vec<BackMarker> {
		candidates
			.into_iter()
			.filter(|c| c.file == *file)
			.filter_map(|c| self.resolve(c))
			.collect()
	}

	/// Jumps back to the marker's source, retires the record, and asks for
	/// the marker to be redrawn away.
	///
	/// A marker whose source is no longer the live record (retired or
	/// superseded before the host redrew it) only triggers a redraw of its
	/// own file: no navigation, and a newer record is left untouched.
	pub fn activate(&self, marker: &BackMarker) -> Activation {
		let source = marker.source();
		let host_file = marker.host_file();

		if !self.store.snapshot().is_current(source) {
			tracing::debug!(host = %host_file, source = %source.file, "ignoring click on stale marker");
			self.host.request_reevaluation(host_file);
			return Activation {
				live: false,
				navigated: false,
				refreshed: vec![host_file.clone()],
			};
		}

		let navigated = self.host.is_file_valid(&source.file);
		if navigated {
			self.host.navigate_to(&source.file, source.offset);
		} else {
			tracing::debug!(source = %source.file, "source file gone, skipping navigation");
		}

		self.store.clear_if_current(source);
		tracing::info!(
			host = %host_file,
			source = %source.file,
			offset = source.offset,
			"nav.marker.activated"
		);

		let mut refreshed = vec![host_file.clone()];
		if navigated && source.file != *host_file {
			refreshed.push(source.file.clone());
		}
		for file in &refreshed {
			self.host.request_reevaluation(file);
		}
		Activation {
			live: true,
			navigated,
			refreshed,
		}
	}
}
