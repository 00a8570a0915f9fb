//! Per-workspace entry point wiring host events to the tracker components.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use retrace_primitives::FileId;

use crate::config::NavConfig;
use crate::coordinator::Coordinator;
use crate::host::{Host, HostEvent};
use crate::interceptor::Interceptor;
use crate::resolver::{Activation, BackMarker, Candidate, Resolver};
use crate::store::{NavState, NavigationStore};

/// Navigation tracking for one workspace session.
///
/// Every entry point is guarded: with tracking disabled or no host session
/// it does nothing, and a panic raised underneath is logged and swallowed so
/// it never unwinds into the host's dispatch loop.
pub struct Session<H> {
	host: H,
	store: NavigationStore,
	config: NavConfig,
}

impl<H: Host> Session<H> {
	pub fn new(host: H, config: NavConfig) -> Self {
		Self {
			host,
			store: NavigationStore::new(),
			config,
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn config(&self) -> &NavConfig {
		&self.config
	}

	pub fn store(&self) -> &NavigationStore {
		&self.store
	}

	/// Consistent view of the record and marker file.
	pub fn state(&self) -> Arc<NavState> {
		self.store.snapshot()
	}

	/// Routes one host notification.
	pub fn dispatch(&self, event: HostEvent) {
		let kind = event.kind();
		self.guarded(kind, || match &event {
			HostEvent::BeforeCommand { command } => {
				self.interceptor().before_command(command);
			}
			HostEvent::AfterCommand { command } => {
				self.interceptor().after_command(command);
			}
			HostEvent::DocumentChanged { file } => {
				self.coordinator().document_changed(file);
			}
			HostEvent::FileOpened { file } => {
				self.coordinator().file_opened(file);
			}
			HostEvent::FileClosed { file } => {
				self.coordinator().file_closed(file);
			}
			HostEvent::FocusChanged { old, new } => {
				self.coordinator().focus_changed(old.as_ref(), new.as_ref());
			}
		});
	}

	/// Asks whether `candidate` hosts the back marker in this pass.
	pub fn resolve(&self, candidate: &Candidate) -> Option<BackMarker> {
		self.guarded("resolve", || self.resolver().resolve(candidate))
			.flatten()
	}

	/// Runs a re-evaluation pass over `file`.
	pub fn resolve_all<'c>(
		&self,
		file: &FileId,
		candidates: impl IntoIterator<Item = &'c Candidate>,
	) -> Vec<BackMarker> {
		self.guarded("resolve_all", || self.resolver().resolve_all(file, candidates))
			.unwrap_or_default()
	}

	/// Handles a click on `marker`.
	pub fn activate(&self, marker: &BackMarker) -> Option<Activation> {
		self.guarded("activate", || self.resolver().activate(marker))
	}

	fn interceptor(&self) -> Interceptor<'_, H> {
		Interceptor::new(&self.host, &self.store, &self.config)
	}

	fn coordinator(&self) -> Coordinator<'_, H> {
		Coordinator::new(&self.host, &self.store)
	}

	fn resolver(&self) -> Resolver<'_, H> {
		Resolver::new(&self.host, &self.store)
	}

	fn guarded<R>(&self, op: &'static str, f: impl FnOnce() -> R) -> Option<R> {
		let result = catch_unwind(AssertUnwindSafe(|| {
			if !self.config.enabled || !self.host.session_active() {
				tracing::trace!(op, "nav.inert");
				return None;
			}
			Some(f())
		}));
		match result {
			Ok(value) => value,
			Err(_) => {
				tracing::error!(op, "navigation handler panicked; event dropped");
				None
			}
		}
	}
}
