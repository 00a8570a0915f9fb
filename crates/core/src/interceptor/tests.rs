use retrace_primitives::{DeclKind, Declaration, FileId};

use super::*;
use crate::test_support::TestHost;

fn decl(name: &str, kind: DeclKind, range: std::ops::Range<usize>) -> Declaration {
	Declaration::new(name, kind, range)
}

fn setup() -> (TestHost, NavigationStore, NavConfig) {
	let host = TestHost::new();
	host.declare("a.txt", decl("Widget", DeclKind::Type, 0..400));
	host.declare("a.txt", decl("foo", DeclKind::Function, 100..200));
	host.declare("a.txt", decl("BAR", DeclKind::Other, 300..320));
	(host, NavigationStore::new(), NavConfig::default())
}

#[test]
fn test_non_jump_command_is_ignored() {
	let (host, store, config) = setup();
	host.focus("a.txt", 120);
	let capture = Interceptor::new(&host, &store, &config).before_command("hover");
	assert_eq!(capture, Capture::NotJump);
	assert!(store.source().is_none());
}

#[test]
fn test_records_innermost_function() {
	let (host, store, config) = setup();
	host.focus("a.txt", 120);
	let capture = Interceptor::new(&host, &store, &config).before_command("goto-definition");

	let expected = NavigationSource::new("a.txt", 120).with_scope_label("foo");
	assert!(matches!(&capture, Capture::Recorded(s) if **s == expected));
	assert_eq!(*store.source().unwrap(), expected);
}

#[test]
fn test_falls_back_to_type_outside_functions() {
	let (host, store, config) = setup();
	host.focus("a.txt", 310);
	Interceptor::new(&host, &store, &config).before_command("goto-implementation");
	assert_eq!(store.source().unwrap().scope_label.as_deref(), Some("Widget"));
}

#[test]
fn test_top_level_has_no_label() {
	let (host, store, config) = setup();
	host.focus("a.txt", 900);
	Interceptor::new(&host, &store, &config).before_command("goto-declaration");
	let source = store.source().unwrap();
	assert_eq!(source.offset, 900);
	assert!(source.scope_label.is_none());
}

#[test]
fn test_read_only_origin_clears_record() {
	let (host, store, config) = setup();
	store.set(NavigationSource::new("a.txt", 5));
	host.set_read_only("lib.rs");
	host.focus("lib.rs", 10);

	let capture = Interceptor::new(&host, &store, &config).before_command("goto-definition");
	assert_eq!(capture, Capture::ReadOnlyOrigin);
	assert!(store.snapshot().is_empty());
}

#[test]
fn test_no_focused_editor_is_noop() {
	let (host, store, config) = setup();
	let previous = store.set(NavigationSource::new("a.txt", 5));

	let capture = Interceptor::new(&host, &store, &config).before_command("goto-definition");
	assert_eq!(capture, Capture::Unresolved);
	assert_eq!(store.source(), Some(previous));
}

#[test]
fn test_configured_command_set() {
	let (host, store, _) = setup();
	let config = NavConfig::default().with_jump_commands(["gd"]);
	host.focus("a.txt", 120);

	let interceptor = Interceptor::new(&host, &store, &config);
	assert_eq!(interceptor.before_command("goto-definition"), Capture::NotJump);
	assert!(matches!(interceptor.before_command("gd"), Capture::Recorded(_)));
}

#[test]
fn test_after_command_refreshes_landing_file() {
	let (host, store, config) = setup();
	host.focus("a.txt", 120);
	let interceptor = Interceptor::new(&host, &store, &config);
	interceptor.before_command("goto-definition");
	host.focus("b.txt", 40);

	assert_eq!(interceptor.after_command("goto-definition"), Some(FileId::from("b.txt")));
	assert_eq!(host.take_reevaluations(), vec![FileId::from("b.txt")]);
}

#[test]
fn test_after_command_without_record_does_nothing() {
	let (host, store, config) = setup();
	host.focus("b.txt", 40);
	let interceptor = Interceptor::new(&host, &store, &config);
	assert_eq!(interceptor.after_command("goto-definition"), None);
	assert_eq!(interceptor.after_command("hover"), None);
	assert!(host.take_reevaluations().is_empty());
}

#[test]
fn test_enclosing_scope_label_prefers_innermost_function() {
	let ancestors = [
		decl("inner_closure_owner", DeclKind::Function, 10..20),
		decl("Impl", DeclKind::Type, 0..100),
		decl("outer", DeclKind::Function, 0..200),
	];
	assert_eq!(enclosing_scope_label(&ancestors).as_deref(), Some("inner_closure_owner"));
}

#[test]
fn test_enclosing_scope_label_innermost_type() {
	let ancestors = [
		decl("field", DeclKind::Other, 10..20),
		decl("Inner", DeclKind::Type, 0..100),
		decl("Outer", DeclKind::Type, 0..200),
	];
	assert_eq!(enclosing_scope_label(&ancestors).as_deref(), Some("Inner"));
	assert_eq!(enclosing_scope_label(&[]), None);
}
