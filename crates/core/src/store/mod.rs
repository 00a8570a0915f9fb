//! Single-slot navigation record.
//!
//! [`NavigationStore`] holds at most one [`NavigationSource`] together with
//! the file currently hosting the back marker. Both live in one immutable
//! [`NavState`] published through [`ArcSwap`], so a re-evaluation pass on a
//! worker thread always observes the record and the marker file from the same
//! write.
//!
//! # Invariants
//!
//! * Writing a source replaces the previous one; nothing is ever appended.
//! * `marker_file` is `Some` only while `source` is `Some`. Clearing the record
//!   clears the marker file in the same swap, and [`NavigationStore::mark`]
//!   refuses unless the source it is given is still the live record.
//! * Writing a new source keeps the previously tracked marker file, so
//!   invalidation triggers on that file still retire the new record. The
//!   record stays [`NavPhase::Armed`] until a marker is drawn for it.

use std::sync::Arc;

use arc_swap::ArcSwap;
use retrace_primitives::{CharIdx, FileId};


/// Where a jump originated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationSource {
	/// File the cursor was in when the jump fired.
	pub file: FileId,
	/// Caret offset at the time of the jump.
	pub offset: CharIdx,
	/// Display name of the enclosing function or type, if any.
	pub scope_label: Option<String>,
}

impl NavigationSource {
	pub fn new(file: impl Into<FileId>, offset: CharIdx) -> Self {
		Self {
			file: file.into(),
			offset,
			scope_label: None,
		}
	}

	pub fn with_scope_label(mut self, label: impl Into<String>) -> Self {
		self.scope_label = Some(label.into());
		self
	}
}

/// Coarse state of the record and marker pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPhase {
	/// No return point.
	Empty,
	/// A return point exists but no marker has been rendered for it.
	Armed,
	/// A marker is shown in the given file.
	Shown(FileId),
}

/// File hosting a marker, and the source it was drawn for.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
	file: FileId,
	drawn_for: Arc<NavigationSource>,
}

/// Immutable snapshot of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
	source: Option<Arc<NavigationSource>>,
	marker: Option<Marker>,
}

impl NavState {
	pub fn source(&self) -> Option<&Arc<NavigationSource>> {
		self.source.as_ref()
	}

	/// File tracked as hosting the marker. May be left over from a record
	/// that has since been superseded.
	pub fn marker_file(&self) -> Option<&FileId> {
		self.marker.as_ref().map(|m| &m.file)
	}

	pub fn is_empty(&self) -> bool {
		self.source.is_none() && self.marker.is_none()
	}

	/// `Shown` only when the tracked marker was drawn for the current source;
	/// a marker file carried over from a prior cycle leaves the record `Armed`.
	pub fn phase(&self) -> NavPhase {
		match (&self.source, &self.marker) {
			(None, _) => NavPhase::Empty,
			(Some(source), Some(marker)) if Arc::ptr_eq(source, &marker.drawn_for) => {
				NavPhase::Shown(marker.file.clone())
			}
			(Some(_), _) => NavPhase::Armed,
		}
	}

	/// Returns true if a record exists and a marker file, current or stale,
	/// is tracked in `file`.
	pub fn is_marked_in(&self, file: &FileId) -> bool {
		self.source.is_some() && self.marker_file() == Some(file)
	}

	/// Returns true if `expected` is the live record (same write, not merely
	/// an equal value).
	pub fn is_current(&self, expected: &Arc<NavigationSource>) -> bool {
		self.source.as_ref().is_some_and(|s| Arc::ptr_eq(s, expected))
	}
}

/// Session-scoped holder of the navigation record.
///
/// All consumers go through this type; none keeps its own cached copy.
#[derive(Debug, Default)]
pub struct NavigationStore {
	state: ArcSwap<NavState>,
}

impl NavigationStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Consistent snapshot of the record and marker file.
	pub fn snapshot(&self) -> Arc<NavState> {
		self.state.load_full()
	}

	pub fn source(&self) -> Option<Arc<NavigationSource>> {
		self.state.load().source.clone()
	}

	pub fn marker_file(&self) -> Option<FileId> {
		self.state.load().marker_file().cloned()
	}

	/// Replaces the record. Any tracked marker file is kept.
	pub fn set(&self, source: NavigationSource) -> Arc<NavigationSource> {
		let source = Arc::new(source);
		self.state.rcu(|cur| NavState {
			source: Some(Arc::clone(&source)),
			marker: cur.marker.clone(),
		});
		source
	}

	/// Empties the record and the marker file.
	///
	/// Returns the previous snapshot if anything was cleared.
	pub fn clear(&self) -> Option<Arc<NavState>> {
		let prev = self.state.swap(Arc::new(NavState::default()));
		(!prev.is_empty()).then_some(prev)
	}

	/// Clears both fields only while `expected` is still the live record.
	pub fn clear_if_current(&self, expected: &Arc<NavigationSource>) -> Option<Arc<NavState>> {
		let prev = self.state.rcu(|cur| {
			if cur.is_current(expected) {
				Arc::new(NavState::default())
			} else {
				Arc::clone(cur)
			}
		});
		prev.is_current(expected).then_some(prev)
	}

	/// Clears both fields if the record exists and its marker is tracked in
	/// `file`. The check and the clear happen in one swap.
	pub fn clear_if_marked(&self, file: &FileId) -> Option<Arc<NavState>> {
		let prev = self.state.rcu(|cur| {
			if cur.is_marked_in(file) {
				Arc::new(NavState::default())
			} else {
				Arc::clone(cur)
			}
		});
		prev.is_marked_in(file).then_some(prev)
	}

	/// Records `file` as hosting the marker drawn for `expected`.
	///
	/// Returns false (and changes nothing) unless `expected` is the live
	/// record.
	pub fn mark(&self, file: &FileId, expected: &Arc<NavigationSource>) -> bool {
		let prev = self.state.rcu(|cur| {
			if cur.is_current(expected) {
				Arc::new(NavState {
					source: Some(Arc::clone(expected)),
					marker: Some(Marker {
						file: file.clone(),
						drawn_for: Arc::clone(expected),
					}),
				})
			} else {
				Arc::clone(cur)
			}
		});
		prev.is_current(expected)
	}

	/// Drops the marker file if it equals `file`. Used to tear down tracking
	/// left behind once the record is gone.
	pub fn unmark(&self, file: &FileId) -> bool {
		let prev = self.state.rcu(|cur| {
			if cur.marker_file() == Some(file) {
				Arc::new(NavState {
					source: cur.source.clone(),
					marker: None,
				})
			} else {
				Arc::clone(cur)
			}
		});
		prev.marker_file() == Some(file)
	}
}
