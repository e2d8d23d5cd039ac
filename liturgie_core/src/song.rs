use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::VerseRange;
use crate::join_with_en;

static SONG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(Psalm|Gezang)\s+(\d+)(?:\s*:\s*(.+))?$").expect("song pattern is valid")
});

static SONG_RANGE_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("song range pattern is valid"));

static SONG_VERSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?i)\d+|voorzang|vz").expect("song verse pattern is valid")
});

/// Marker for the sung introduction, written `vz` or `voorzang` by hand.
pub const VOORZANG: &str = "VZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongType {
	Psalm,
	Gezang,
}

impl SongType {
	pub fn label(self) -> &'static str {
		match self {
			Self::Psalm => "Psalm",
			Self::Gezang => "Gezang",
		}
	}
}

impl Display for SongType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongVerses {
	Range(VerseRange),
	/// Verse numbers and [`VOORZANG`] markers in the order they were written.
	List(Vec<String>),
	Raw(String),
}

impl Display for SongVerses {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Range(range) => range.fmt(f),
			Self::List(verses) => f.write_str(&join_with_en(verses)),
			Self::Raw(raw) => f.write_str(raw),
		}
	}
}

/// A structured hymn reference such as `Gezang 12 : 4 en 5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongReference {
	pub r#type: SongType,
	pub number: String,
	pub verses: Option<SongVerses>,
}

impl SongReference {
	pub fn parse(input: &str) -> Option<Self> {
		let captures = SONG_PATTERN.captures(input)?;
		let r#type = match captures.get(1)?.as_str() {
			"Psalm" => SongType::Psalm,
			_ => SongType::Gezang,
		};

		Some(Self {
			r#type,
			number: captures.get(2)?.as_str().to_string(),
			verses: captures.get(3).map(|m| parse_verses(m.as_str())),
		})
	}

	/// Visual width of the label and number, in digits. `Gezang` is one
	/// character longer than `Psalm` and counts as one extra digit.
	pub fn weight(&self) -> usize {
		let extra = match self.r#type {
			SongType::Psalm => 0,
			SongType::Gezang => 1,
		};

		self.number.chars().count() + extra
	}

	/// Render with `padding` spaces in front of the number.
	pub fn render(&self, padding: usize) -> String {
		let mut rendered = format!("{} {}{}", self.r#type, " ".repeat(padding), self.number);
		if let Some(verses) = &self.verses {
			rendered.push_str(" : ");
			rendered.push_str(&verses.to_string());
		}

		rendered
	}
}

impl Display for SongReference {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.render(0))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Song {
	Reference(SongReference),
	Opaque(String),
}

impl Song {
	pub fn reference(&self) -> Option<&SongReference> {
		match self {
			Self::Reference(reference) => Some(reference),
			Self::Opaque(_) => None,
		}
	}
}

impl Display for Song {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Reference(reference) => reference.fmt(f),
			Self::Opaque(text) => f.write_str(text),
		}
	}
}

pub fn parse_song(input: &str) -> Song {
	SongReference::parse(input).map_or_else(|| Song::Opaque(input.to_string()), Song::Reference)
}

/// Rewrite a single song reference canonically, e.g.
/// `Psalm 18 : voorzang, 1, 2` becomes `Psalm 18 : VZ, 1 en 2`.
pub fn format_song(input: &str) -> String {
	parse_song(input).to_string()
}

/// Format a list of song references so that their numbers line up.
///
/// Each structured song gets `2 * (max_weight - weight)` spaces in front of
/// its number, where the weight is taken from [`SongReference::weight`].
/// Entries that are not song references are returned untouched and do not
/// take part in the alignment.
pub fn format_songs<S: AsRef<str>>(inputs: &[S]) -> Vec<String> {
	let songs: Vec<Song> = inputs.iter().map(|input| parse_song(input.as_ref())).collect();
	let max_weight = songs
		.iter()
		.filter_map(Song::reference)
		.map(SongReference::weight)
		.max()
		.unwrap_or(0);

	songs
		.into_iter()
		.map(|song| {
			match song {
				Song::Reference(reference) => {
					reference.render(2 * max_weight.saturating_sub(reference.weight()))
				}
				Song::Opaque(text) => text,
			}
		})
		.collect()
}

fn parse_verses(tail: &str) -> SongVerses {
	if let Some(captures) = SONG_RANGE_PATTERN.captures(tail.trim()) {
		return SongVerses::Range(VerseRange::new(&captures[1], &captures[2]));
	}

	let verses: Vec<String> = SONG_VERSE_PATTERN
		.find_iter(tail)
		.map(|m| {
			let token = m.as_str();
			if token.starts_with(|c: char| c.is_ascii_digit()) {
				token.to_string()
			} else {
				VOORZANG.to_string()
			}
		})
		.collect();

	if verses.is_empty() {
		SongVerses::Raw(tail.to_string())
	} else {
		SongVerses::List(verses)
	}
}
