//! Single-slot "jump back" tracking for editor navigation.
//!
//! A jump-like command (go to definition, implementation, ...) records where
//! it started. The landing declaration then offers an inline back marker that
//! returns there. The marker retires itself when the destination is edited,
//! closed, or loses focus, or when it is used.
//!
//! # Components
//!
//! * [`NavigationStore`]: the one shared record, published atomically.
//! * [`Interceptor`]: captures the return point before a jump runs.
//! * [`Coordinator`]: applies invalidation triggers.
//! * [`Resolver`]: decides where the marker is drawn and handles clicks.
//! * [`Session`]: owns the above for one workspace and routes [`HostEvent`]s.
//!
//! The embedding editor implements [`Host`] and forwards its notifications
//! to [`Session::dispatch`].

pub mod config;
pub mod coordinator;
pub mod error;
pub mod host;
pub mod interceptor;
pub mod resolver;
pub mod session;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::NavConfig;
pub use coordinator::{ClearReason, Coordinator, Invalidation};
pub use error::{ConfigError, HostError};
pub use host::{Host, HostEvent};
pub use interceptor::{Capture, Interceptor};
pub use resolver::{Activation, BackMarker, Candidate, CandidateRole, Icon, Resolver};
pub use retrace_primitives as primitives;
pub use session::Session;
pub use store::{NavPhase, NavState, NavigationSource, NavigationStore};
