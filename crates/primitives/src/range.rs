/// A position in the text, measured in characters (not bytes).
///
/// Offsets recorded for navigation use the same coordinate space as the
/// host's caret.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A half-open char range `[start, end)` covering a syntax element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
	/// First char of the element.
	pub start: CharIdx,
	/// One past the last char of the element.
	pub end: CharIdx,
}

impl Span {
	/// Creates a span, normalizing reversed bounds.
	pub fn new(start: CharIdx, end: CharIdx) -> Self {
		Self {
			start: start.min(end),
			end: start.max(end),
		}
	}

	/// Creates a zero-width span at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns true if `pos` falls within the span (exclusive of `end`).
	///
	/// A zero-width span contains its own start, so a caret resting on an
	/// empty token still matches.
	pub fn contains(&self, pos: CharIdx) -> bool {
		if self.is_empty() {
			return pos == self.start;
		}
		pos >= self.start && pos < self.end
	}

	/// Returns true if `other` lies entirely inside this span.
	pub fn encloses(&self, other: &Span) -> bool {
		self.start <= other.start && other.end <= self.end
	}
}

impl From<std::ops::Range<CharIdx>> for Span {
	fn from(range: std::ops::Range<CharIdx>) -> Self {
		Self::new(range.start, range.end)
	}
}
