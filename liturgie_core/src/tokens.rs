use std::ops::Range;

/// A piece of template source, either literal text or a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// Literal text between tags.
	Text(String),
	/// `{{name}}`, `{{{name}}}` or `{{& name}}`
	Variable { name: String, escape: bool },
	/// `{{#name}}`
	SectionOpen(String),
	/// `{{^name}}`
	InvertedOpen(String),
	/// `{{/name}}`
	SectionClose(String),
	/// `{{! ... }}`
	Comment,
}

impl Token {
	/// Tags that take their whole line with them when they stand alone on it.
	pub fn is_standalone_candidate(&self) -> bool {
		matches!(
			self,
			Token::SectionOpen(_) | Token::InvertedOpen(_) | Token::SectionClose(_) | Token::Comment
		)
	}

	pub fn text(&self) -> Option<&str> {
		match self {
			Token::Text(text) => Some(text),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
	pub token: Token,
	/// Byte range of the token in the template source.
	pub span: Range<usize>,
}

impl SpannedToken {
	pub fn new(token: Token, span: Range<usize>) -> Self {
		Self { token, span }
	}
}

/// A 1-indexed line and column inside template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
	pub line: usize,
	pub column: usize,
}

impl LineColumn {
	pub fn of(source: &str, offset: usize) -> Self {
		let offset = offset.min(source.len());
		let before = source.get(..offset).unwrap_or(source);
		let line = before.matches('\n').count() + 1;
		let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
		let column = before[line_start..].chars().count() + 1;

		Self { line, column }
	}
}
