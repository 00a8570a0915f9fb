use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Stable identifier for a file known to the host.
///
/// Holds the shared path only, never a handle into host state, so a stored
/// identifier can outlive the editor that produced it. Comparing identifiers
/// compares paths.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(Arc<Path>);

impl FileId {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self(Arc::from(path.as_ref()))
	}

	pub fn path(&self) -> &Path {
		&self.0
	}

	/// Display name: the final path component, or the whole path when it has
	/// none (e.g. `/`).
	pub fn name(&self) -> String {
		self.0
			.file_name()
			.map(|n| n.to_string_lossy().into_owned())
			.unwrap_or_else(|| self.0.display().to_string())
	}
}

impl fmt::Debug for FileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FileId({})", self.0.display())
	}
}

impl fmt::Display for FileId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.display())
	}
}

impl From<&str> for FileId {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<&Path> for FileId {
	fn from(path: &Path) -> Self {
		Self::new(path)
	}
}

/// Whether a file belongs to the editable workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileClass {
	/// Part of the user's workspace.
	Editable,
	/// Library sources, SDK classes, or other non-editable code.
	ExternalReadOnly,
}

impl FileClass {
	#[inline]
	pub fn is_read_only(self) -> bool {
		matches!(self, Self::ExternalReadOnly)
	}
}
