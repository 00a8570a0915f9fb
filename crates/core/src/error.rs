//! Error types for host queries and configuration loading.

use retrace_primitives::FileId;
use thiserror::Error;

/// Errors reported by [`Host`](crate::Host) queries.
///
/// None of these reach the host's dispatch loop: every handler treats them
/// as "nothing to do" and logs at debug level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// No workspace session is available; the system goes inert.
	#[error("no active workspace session")]
	NoSession,

	/// No editor currently holds focus.
	#[error("no focused editor")]
	NoActiveEditor,

	/// The file is not known to the host (closed, deleted, never opened).
	#[error("unknown file: {0}")]
	UnknownFile(FileId),

	/// The syntax tree could not be queried.
	#[error("syntax query failed for {file}: {message}")]
	Syntax {
		/// File whose tree was queried.
		file: FileId,
		/// Host-provided description.
		message: String,
	},
}

/// Errors that can occur when loading [`NavConfig`](crate::NavConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// A jump command id was empty after trimming.
	#[error("jump command ids must not be empty")]
	EmptyCommandId,
}
