use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::join_with_en;

/// `[book number] book name [chapter] : verse tail`
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*(?:(\d+)\s*)?(\p{L}+)\s*(?:(\d+)\s*)?:(.*)$")
		.expect("scripture reference pattern is valid")
});

static VERSE_RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(\d+[a-zA-Z]?)\s*[-–]\s*(\d+[a-zA-Z]?)").expect("verse range pattern is valid")
});

static VERSE_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\b\d+[a-zA-Z]?\b").expect("verse pattern is valid"));

/// An inclusive span of verses. Both ends are kept as written, so `9a` and
/// out of order spans like `9 - 3` survive formatting untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseRange {
	pub start: String,
	pub end: String,
}

impl VerseRange {
	pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
		Self {
			start: start.into(),
			end: end.into(),
		}
	}
}

impl Display for VerseRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} - {}", self.start, self.end)
	}
}

/// The verse part of a scripture reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptureVerses {
	/// One or more ranges, e.g. `1 - 3 en 7 - 9`.
	Ranges(Vec<VerseRange>),
	/// Separate verses, e.g. `1, 3 en 5`.
	List(Vec<String>),
	/// A tail that could not be read as verses. Rendered verbatim.
	Raw(String),
}

impl Display for ScriptureVerses {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Ranges(ranges) => {
				let ranges: Vec<String> = ranges.iter().map(ToString::to_string).collect();
				f.write_str(&join_with_en(&ranges))
			}
			Self::List(verses) => f.write_str(&join_with_en(verses)),
			Self::Raw(raw) => f.write_str(raw),
		}
	}
}

/// A structured reference such as `1 Johannes 1 : 1b - 9a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureReference {
	pub book_number: Option<String>,
	pub book_name: String,
	pub chapter: Option<String>,
	pub verses: Option<ScriptureVerses>,
}

impl ScriptureReference {
	/// Read a reference from free text. Returns `None` when the input does
	/// not have the `book chapter : verses` shape.
	pub fn parse(input: &str) -> Option<Self> {
		let captures = REFERENCE_PATTERN.captures(input)?;
		let tail = captures.get(4).map_or("", |m| m.as_str());

		Some(Self {
			book_number: captures.get(1).map(|m| m.as_str().to_string()),
			book_name: captures.get(2)?.as_str().to_string(),
			chapter: captures.get(3).map(|m| m.as_str().to_string()),
			verses: parse_verses(tail),
		})
	}
}

impl Display for ScriptureReference {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut parts: Vec<String> = Vec::with_capacity(4);
		if let Some(number) = &self.book_number {
			parts.push(number.clone());
		}
		parts.push(self.book_name.clone());
		if let Some(chapter) = &self.chapter {
			parts.push(chapter.clone());
		}
		if let Some(verses) = &self.verses {
			parts.push(format!(": {verses}"));
		}

		f.write_str(&parts.join(" "))
	}
}

/// The result of reading a scripture reference. Input that is not a
/// reference is carried through as [`Scripture::Opaque`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scripture {
	Reference(ScriptureReference),
	Opaque(String),
}

impl Display for Scripture {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Reference(reference) => reference.fmt(f),
			Self::Opaque(text) => f.write_str(text),
		}
	}
}

pub fn parse_scripture(input: &str) -> Scripture {
	ScriptureReference::parse(input)
		.map_or_else(|| Scripture::Opaque(input.to_string()), Scripture::Reference)
}

/// Rewrite a scripture reference in the canonical `Johannes 1 : 1, 3 en 5`
/// style. Anything that is not a reference comes back unchanged.
pub fn format_scripture(input: &str) -> String {
	parse_scripture(input).to_string()
}

fn parse_verses(tail: &str) -> Option<ScriptureVerses> {
	let tail = tail.trim();
	if tail.is_empty() {
		return None;
	}

	let ranges: Vec<VerseRange> = VERSE_RANGE_PATTERN
		.captures_iter(tail)
		.map(|captures| VerseRange::new(&captures[1], &captures[2]))
		.collect();

	if !ranges.is_empty() {
		// A range mixed with loose verses (`1-3, 5`) has no agreed reading.
		// Keep the text as written instead of dropping part of it.
		let rest = VERSE_RANGE_PATTERN.replace_all(tail, " ");
		let only_separators = rest
			.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
			.all(|word| word.is_empty() || word == "en");

		return Some(if only_separators {
			ScriptureVerses::Ranges(ranges)
		} else {
			ScriptureVerses::Raw(tail.to_string())
		});
	}

	let verses: Vec<String> = VERSE_PATTERN
		.find_iter(tail)
		.map(|m| m.as_str().to_string())
		.collect();

	if verses.is_empty() {
		Some(ScriptureVerses::Raw(tail.to_string()))
	} else {
		Some(ScriptureVerses::List(verses))
	}
}
