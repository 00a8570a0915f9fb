//! End-to-end navigation scenarios driven through [`Session`] the way a host
//! editor would: commands, focus moves, re-evaluation passes, and clicks.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use retrace_core::primitives::{Cursor, DeclKind, Declaration, FileId};
use retrace_core::test_support::TestHost;
use retrace_core::{Candidate, HostEvent, NavConfig, NavPhase, NavigationSource, Session};

fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

fn a() -> FileId {
	FileId::from("a.txt")
}

fn b() -> FileId {
	FileId::from("b.txt")
}

/// `bar`'s name token in `b.txt`; the declaration spans `[38..90)`.
fn bar_name() -> Candidate {
	Candidate::declaration_name("b.txt", 40..43, 38..90)
}

/// A pass over `b.txt` as a host would run it: every declaration name.
fn b_candidates() -> Vec<Candidate> {
	vec![
		Candidate::declaration_name("b.txt", 3..8, 0..30),
		bar_name(),
		Candidate::other("b.txt", 50..52),
		Candidate::declaration_name("b.txt", 95..99, 92..140),
	]
}

/// Cursor at `a.txt:120` inside `foo`; go-to-declaration lands on `b.txt:40`.
fn jumped() -> (Arc<TestHost>, Session<Arc<TestHost>>) {
	init_tracing();
	let host = Arc::new(TestHost::new());
	host.declare("a.txt", Declaration::new("foo", DeclKind::Function, 100..200));
	host.declare("b.txt", Declaration::new("bar", DeclKind::Function, 38..90));
	let session = Session::new(Arc::clone(&host), NavConfig::default());

	host.focus("a.txt", 120);
	session.dispatch(HostEvent::BeforeCommand {
		command: "goto-declaration".into(),
	});
	host.focus("b.txt", 40);
	session.dispatch(HostEvent::FocusChanged {
		old: Some(a()),
		new: Some(b()),
	});
	session.dispatch(HostEvent::AfterCommand {
		command: "goto-declaration".into(),
	});
	(host, session)
}

fn show_marker(host: &TestHost, session: &Session<Arc<TestHost>>) -> retrace_core::BackMarker {
	let markers = session.resolve_all(&b(), &b_candidates());
	assert_eq!(markers.len(), 1);
	host.take_reevaluations();
	markers.into_iter().next().unwrap()
}

#[test]
fn test_jump_records_source_and_shows_marker() {
	let (host, session) = jumped();

	let source = session.store().source().expect("record");
	assert_eq!(*source, NavigationSource::new("a.txt", 120).with_scope_label("foo"));
	assert_eq!(host.take_reevaluations(), vec![b()]);

	let marker = show_marker(&host, &session);
	assert_eq!(marker.anchor(), bar_name().span);
	assert_eq!(marker.tooltip(), "Go back to call in foo (a.txt)");
	assert_eq!(session.state().phase(), NavPhase::Shown(b()));
}

#[test]
fn test_editing_destination_retires_marker() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	session.dispatch(HostEvent::DocumentChanged { file: b() });
	assert!(session.state().is_empty());
	assert_eq!(host.take_reevaluations(), vec![b()]);
	assert!(session.resolve_all(&b(), &b_candidates()).is_empty());
}

#[test]
fn test_editing_source_keeps_marker() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	session.dispatch(HostEvent::DocumentChanged { file: a() });
	assert_eq!(session.state().phase(), NavPhase::Shown(b()));
	assert!(host.take_reevaluations().is_empty());
	assert_eq!(session.resolve_all(&b(), &b_candidates()).len(), 1);
}

#[test]
fn test_closing_destination_retires_silently() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	session.dispatch(HostEvent::FileClosed { file: b() });
	assert!(session.state().is_empty());
	assert!(host.take_reevaluations().is_empty());
}

#[test]
fn test_switching_away_retires_marker() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	host.focus("c.txt", 0);
	session.dispatch(HostEvent::FocusChanged {
		old: Some(b()),
		new: Some(FileId::from("c.txt")),
	});
	assert!(session.state().is_empty());
	assert_eq!(host.take_reevaluations(), vec![b()]);
}

#[test]
fn test_refocusing_destination_keeps_marker() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	session.dispatch(HostEvent::FocusChanged {
		old: Some(b()),
		new: Some(b()),
	});
	session.dispatch(HostEvent::FileOpened {
		file: FileId::from("c.txt"),
	});
	assert_eq!(session.state().phase(), NavPhase::Shown(b()));
}

#[test]
fn test_clicking_marker_returns_to_origin() {
	let (host, session) = jumped();
	let marker = show_marker(&host, &session);

	let activation = session.activate(&marker).expect("session active");
	assert!(activation.navigated);
	assert_eq!(host.navigations(), vec![Cursor::new("a.txt", 120)]);
	assert_eq!(host.cursor(), Some(Cursor::new("a.txt", 120)));
	assert!(session.state().is_empty());
	assert_eq!(host.take_reevaluations(), vec![b(), a()]);

	// The follow-up pass in the origin shows nothing.
	let foo_name = Candidate::declaration_name("a.txt", 104..107, 100..200);
	assert!(session.resolve(&foo_name).is_none());
}

#[test]
fn test_jump_from_library_offers_no_way_back() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	host.set_read_only("vendor/lib.rs");
	host.focus("vendor/lib.rs", 10);
	session.dispatch(HostEvent::BeforeCommand {
		command: "goto-definition".into(),
	});
	assert!(session.state().is_empty());

	host.focus("b.txt", 40);
	assert!(session.resolve_all(&b(), &b_candidates()).is_empty());
}

#[test]
fn test_new_jump_supersedes_previous() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	// Jump again from inside `bar`, landing back in `a.txt`.
	host.focus("b.txt", 60);
	session.dispatch(HostEvent::BeforeCommand {
		command: "goto-definition".into(),
	});
	let source = session.store().source().unwrap();
	assert_eq!(*source, NavigationSource::new("b.txt", 60).with_scope_label("bar"));

	host.focus("a.txt", 105);
	let foo_name = Candidate::declaration_name("a.txt", 104..107, 100..200);
	let marker = session.resolve(&foo_name).expect("marker on foo");
	assert_eq!(marker.tooltip(), "Go back to call in bar (b.txt)");
	assert_eq!(session.state().phase(), NavPhase::Shown(a()));
}

#[test]
fn test_unrelated_commands_leave_state_alone() {
	let (host, session) = jumped();
	show_marker(&host, &session);
	let before = session.state();

	session.dispatch(HostEvent::BeforeCommand {
		command: "hover".into(),
	});
	session.dispatch(HostEvent::AfterCommand {
		command: "hover".into(),
	});
	assert_eq!(session.state(), before);
	assert!(host.take_reevaluations().is_empty());
}

#[test]
fn test_click_on_retired_marker_keeps_newer_jump() {
	let (host, session) = jumped();
	let marker = show_marker(&host, &session);

	session.dispatch(HostEvent::DocumentChanged { file: b() });
	host.focus("c.txt", 10);
	session.dispatch(HostEvent::BeforeCommand {
		command: "goto-definition".into(),
	});
	assert_eq!(session.state().phase(), NavPhase::Armed);
	host.take_reevaluations();

	// The host has not redrawn `b.txt` yet, so the old icon is still clickable.
	let activation = session.activate(&marker).expect("session active");
	assert!(!activation.live);
	assert!(!activation.navigated);
	assert!(host.navigations().is_empty());
	assert_eq!(host.cursor(), Some(Cursor::new("c.txt", 10)));
	assert_eq!(*session.store().source().unwrap(), NavigationSource::new("c.txt", 10));
	assert_eq!(host.take_reevaluations(), vec![b()]);
}

#[test]
fn test_new_jump_reports_armed_until_marker_drawn() {
	let (host, session) = jumped();
	show_marker(&host, &session);

	host.focus("b.txt", 60);
	session.dispatch(HostEvent::BeforeCommand {
		command: "goto-definition".into(),
	});
	assert_eq!(session.state().phase(), NavPhase::Armed);
	assert_eq!(session.state().marker_file(), Some(&b()));
}
