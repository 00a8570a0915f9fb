use crate::Span;

/// Coarse classification of a syntax-tree declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
	/// Functions, methods, closures bound to a name.
	Function,
	/// Structs, enums, classes, traits, objects.
	Type,
	/// Modules, constants, fields, and anything else with a name.
	Other,
}

/// A named declaration enclosing some position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
	pub name: String,
	pub kind: DeclKind,
	/// Full extent of the declaration, including its body.
	pub span: Span,
}

impl Declaration {
	pub fn new(name: impl Into<String>, kind: DeclKind, span: impl Into<Span>) -> Self {
		Self {
			name: name.into(),
			kind,
			span: span.into(),
		}
	}
}
