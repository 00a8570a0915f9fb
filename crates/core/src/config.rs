//! Navigation tracking configuration.
//!
//! Which commands count as jump-like is configuration, not core logic. The
//! defaults cover the editor's definition, declaration, type-definition and
//! implementation jumps.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Command ids treated as jump-like when no configuration overrides them.
pub const DEFAULT_JUMP_COMMANDS: &[&str] = &[
	"goto-definition",
	"goto-declaration",
	"goto-type-definition",
	"goto-implementation",
];

/// Configuration for one workspace session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
	/// When false every handler is inert.
	pub enabled: bool,
	/// Commands whose execution records a return point.
	pub jump_commands: FxHashSet<String>,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			jump_commands: DEFAULT_JUMP_COMMANDS.iter().map(|s| (*s).to_string()).collect(),
		}
	}
}

impl NavConfig {
	/// Parses a TOML document, filling absent fields with defaults.
	///
	/// ```toml
	/// enabled = true
	/// jump_commands = ["goto-definition", "goto-implementation"]
	/// ```
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let raw: Self = toml::from_str(input)?;
		raw.normalized()
	}

	/// Trims command ids and rejects empty ones.
	pub fn normalized(self) -> Result<Self, ConfigError> {
		let mut jump_commands = FxHashSet::default();
		for id in self.jump_commands {
			let id = id.trim();
			if id.is_empty() {
				return Err(ConfigError::EmptyCommandId);
			}
			jump_commands.insert(id.to_string());
		}
		Ok(Self {
			enabled: self.enabled,
			jump_commands,
		})
	}

	/// Builder-style override of the jump command set.
	pub fn with_jump_commands<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.jump_commands = ids.into_iter().map(Into::into).collect();
		self
	}

	#[inline]
	pub fn is_jump_command(&self, command: &str) -> bool {
		self.jump_commands.contains(command)
	}
}
