//! Captures the return point before a jump-like command runs.

use std::sync::Arc;

use retrace_primitives::{DeclKind, Declaration, FileId};

use crate::config::NavConfig;
use crate::host::Host;
use crate::store::{NavigationSource, NavigationStore};

#[cfg(test)]
mod tests;

/// Result of [`Interceptor::before_command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
	/// The command is not jump-like.
	NotJump,
	/// No cursor could be resolved; nothing changed.
	Unresolved,
	/// The jump starts in read-only code; the record was cleared.
	ReadOnlyOrigin,
	/// The record now holds this source.
	Recorded(Arc<NavigationSource>),
}

/// Observes outgoing commands and writes the navigation record.
pub struct Interceptor<'a, H: ?Sized> {
	host: &'a H,
	store: &'a NavigationStore,
	config: &'a NavConfig,
}

impl<'a, H: Host + ?Sized> Interceptor<'a, H> {
	pub fn new(host: &'a H, store: &'a NavigationStore, config: &'a NavConfig) -> Self {
		Self {
			host,
			store,
			config,
		}
	}

	/// Records the current caret as the return point if `command` is jump-like.
	pub fn before_command(&self, command: &str) -> Capture {
		if !self.config.is_jump_command(command) {
			return Capture::NotJump;
		}

		let cursor = match self.host.active_cursor() {
			Ok(cursor) => cursor,
			Err(err) => {
				tracing::debug!(command, error = %err, "nav.capture.unresolved");
				return Capture::Unresolved;
			}
		};

		if self.host.classify_file(&cursor.file).is_read_only() {
			tracing::debug!(command, file = %cursor.file, "skipping jump from read-only file");
			self.store.clear();
			return Capture::ReadOnlyOrigin;
		}

		let label = self.scope_label(&cursor.file, cursor.offset);
		let mut source = NavigationSource::new(cursor.file, cursor.offset);
		source.scope_label = label;

		let source = self.store.set(source);
		tracing::debug!(
			command,
			file = %source.file,
			offset = source.offset,
			scope = source.scope_label.as_deref().unwrap_or(""),
			"nav.record"
		);
		Capture::Recorded(source)
	}

	/// Requests a redraw of the focused file once a jump has landed, so the
	/// marker does not wait for an unrelated pass.
	///
	/// Returns the file a re-evaluation was requested for.
	pub fn after_command(&self, command: &str) -> Option<FileId> {
		if !self.config.is_jump_command(command) || self.store.source().is_none() {
			return None;
		}
		let cursor = self.host.active_cursor().ok()?;
		tracing::trace!(command, file = %cursor.file, "nav.after_jump.refresh");
		self.host.request_reevaluation(&cursor.file);
		Some(cursor.file)
	}

	fn scope_label(&self, file: &FileId, offset: usize) -> Option<String> {
		match self.host.declaration_ancestors(file, offset) {
			Ok(ancestors) => enclosing_scope_label(&ancestors),
			Err(err) => {
				tracing::debug!(file = %file, offset, error = %err, "declaration lookup failed");
				None
			}
		}
	}
}

/// Picks the label for a return point from declarations ordered innermost
/// first: the innermost function wins, else the innermost type.
pub fn enclosing_scope_label(ancestors: &[Declaration]) -> Option<String> {
	let mut fallback = None;
	for decl in ancestors {
		match decl.kind {
			DeclKind::Function => return Some(decl.name.clone()),
			DeclKind::Type if fallback.is_none() => fallback = Some(decl.name.clone()),
			_ => {}
		}
	}
	fallback
}
