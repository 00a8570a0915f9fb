use std::hash::{Hash, Hasher};
use std::sync::Arc;

use retrace_primitives::{FileId, Span};

use crate::store::NavigationSource;

/// Icons the tracker asks the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
	/// "Go back" arrow.
	Back,
}

impl Icon {
	/// Fallback glyph for text-only frontends.
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Back => "\u{2190}",
		}
	}
}

/// The inline "back" affordance attached to a declaration name.
///
/// Equality and hashing consider the [`NavigationSource`] only, so a host
/// diffing one pass against the next keeps an unchanged marker in place
/// regardless of where its anchor moved.
#[derive(Debug, Clone)]
pub struct BackMarker {
	source: Arc<NavigationSource>,
	host_file: FileId,
	anchor: Span,
}

impl BackMarker {
	pub(crate) fn new(source: Arc<NavigationSource>, host_file: FileId, anchor: Span) -> Self {
		Self {
			source,
			host_file,
			anchor,
		}
	}

	pub fn source(&self) -> &Arc<NavigationSource> {
		&self.source
	}

	/// File the marker is drawn in.
	pub fn host_file(&self) -> &FileId {
		&self.host_file
	}

	/// Span of the declaration name the marker is attached to.
	pub fn anchor(&self) -> Span {
		self.anchor
	}

	pub fn icon(&self) -> Icon {
		Icon::Back
	}

	pub fn tooltip(&self) -> String {
		back_tooltip(&self.source)
	}
}

impl PartialEq for BackMarker {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl Eq for BackMarker {}

impl Hash for BackMarker {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.source.hash(state);
	}
}

/// Tooltip text for a return point.
pub fn back_tooltip(source: &NavigationSource) -> String {
	let file_name = source.file.name();
	match source.scope_label.as_deref() {
		Some(label) => format!("Go back to call in {label} ({file_name})"),
		None => format!("Go back to {file_name}"),
	}
}
