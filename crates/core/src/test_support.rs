//! In-memory [`Host`] that records side-effect requests.

use parking_lot::Mutex;
use retrace_primitives::{CharIdx, Cursor, Declaration, FileClass, FileId};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::HostError;
use crate::host::Host;

#[derive(Debug)]
struct State {
	session_active: bool,
	cursor: Option<Cursor>,
	declarations: FxHashMap<FileId, Vec<Declaration>>,
	read_only: FxHashSet<FileId>,
	invalid: FxHashSet<FileId>,
	reevaluations: Vec<FileId>,
	navigations: Vec<Cursor>,
	panic_on_cursor: bool,
}

impl Default for State {
	fn default() -> Self {
		Self {
			session_active: true,
			cursor: None,
			declarations: FxHashMap::default(),
			read_only: FxHashSet::default(),
			invalid: FxHashSet::default(),
			reevaluations: Vec::new(),
			navigations: Vec::new(),
			panic_on_cursor: false,
		}
	}
}

/// Scriptable host for tests.
///
/// Declarations are registered per file; ancestors of an offset are the
/// registered declarations whose span contains it, smallest first.
#[derive(Debug, Default)]
pub struct TestHost {
	state: Mutex<State>,
}

impl TestHost {
	pub fn new() -> Self {
		Self::default()
	}

	/// Focuses `file` with the caret at `offset`.
	pub fn focus(&self, file: impl Into<FileId>, offset: CharIdx) {
		self.state.lock().cursor = Some(Cursor::new(file, offset));
	}

	/// Leaves no editor focused.
	pub fn unfocus(&self) {
		self.state.lock().cursor = None;
	}

	pub fn declare(&self, file: impl Into<FileId>, decl: Declaration) {
		self.state
			.lock()
			.declarations
			.entry(file.into())
			.or_default()
			.push(decl);
	}

	pub fn set_read_only(&self, file: impl Into<FileId>) {
		self.state.lock().read_only.insert(file.into());
	}

	/// Makes `file` fail [`Host::is_file_valid`].
	pub fn invalidate(&self, file: impl Into<FileId>) {
		self.state.lock().invalid.insert(file.into());
	}

	pub fn set_session_active(&self, active: bool) {
		self.state.lock().session_active = active;
	}

	/// Makes [`Host::active_cursor`] panic, to exercise handler isolation.
	pub fn panic_on_cursor(&self, enabled: bool) {
		self.state.lock().panic_on_cursor = enabled;
	}

	pub fn cursor(&self) -> Option<Cursor> {
		self.state.lock().cursor.clone()
	}

	/// Drains recorded re-evaluation requests.
	pub fn take_reevaluations(&self) -> Vec<FileId> {
		std::mem::take(&mut self.state.lock().reevaluations)
	}

	pub fn navigations(&self) -> Vec<Cursor> {
		self.state.lock().navigations.clone()
	}
}

impl Host for TestHost {
	fn session_active(&self) -> bool {
		self.state.lock().session_active
	}

	fn active_cursor(&self) -> Result<Cursor, HostError> {
		let state = self.state.lock();
		if state.panic_on_cursor {
			drop(state);
			panic!("test host cursor lookup panicked");
		}
		state.cursor.clone().ok_or(HostError::NoActiveEditor)
	}

	fn declaration_ancestors(
		&self,
		file: &FileId,
		offset: CharIdx,
	) -> Result<Vec<Declaration>, HostError> {
		let state = self.state.lock();
		let mut ancestors: Vec<Declaration> = state
			.declarations
			.get(file)
			.into_iter()
			.flatten()
			.filter(|d| d.span.contains(offset))
			.cloned()
			.collect();
		ancestors.sort_by_key(|d| d.span.len());
		Ok(ancestors)
	}

	fn classify_file(&self, file: &FileId) -> FileClass {
		if self.state.lock().read_only.contains(file) {
			FileClass::ExternalReadOnly
		} else {
			FileClass::Editable
		}
	}

	fn is_file_valid(&self, file: &FileId) -> bool {
		!self.state.lock().invalid.contains(file)
	}

	fn request_reevaluation(&self, file: &FileId) {
		self.state.lock().reevaluations.push(file.clone());
	}

	fn navigate_to(&self, file: &FileId, offset: CharIdx) {
		let mut state = self.state.lock();
		let target = Cursor::new(file.clone(), offset);
		state.navigations.push(target.clone());
		state.cursor = Some(target);
	}
}
