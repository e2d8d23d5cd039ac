use logos::Logos;

use crate::LiturgieError;
use crate::LiturgieResult;
use crate::tokens::LineColumn;
use crate::tokens::SpannedToken;
use crate::tokens::Token;

/// Raw tokens produced by logos. Everything that is not a brace pair is
/// text, so the lexer never fails.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("{{{")]
	TripleOpen,
	#[token("}}}")]
	TripleClose,
	#[token("{{")]
	Open,
	#[token("}}")]
	Close,
	#[regex(r"[^{}]+")]
	Text,
	#[regex(r"[{}]")]
	Brace,
}

type RawTokens = Vec<(Result<RawToken, ()>, std::ops::Range<usize>)>;

/// Split template source into literal text and tags.
pub fn tokenize(source: &str) -> LiturgieResult<Vec<SpannedToken>> {
	let raw_tokens: RawTokens = RawToken::lexer(source).spanned().collect();
	let mut tokens = vec![];
	let mut text_from = 0;
	let mut cursor = 0;

	while let Some((raw, span)) = raw_tokens.get(cursor) {
		let triple = match raw {
			Ok(RawToken::Open) => false,
			Ok(RawToken::TripleOpen) => true,
			_ => {
				cursor += 1;
				continue;
			}
		};

		let tag_start = span.start;
		let Some(close) = find_close(&raw_tokens, cursor + 1, triple) else {
			let LineColumn { line, column } = LineColumn::of(source, tag_start);
			return Err(LiturgieError::UnclosedTag { line, column });
		};

		push_text(&mut tokens, source, text_from, tag_start);
		let content = &source[span.end..close.content_end];
		let token = classify_tag(content, triple, source, tag_start)?;
		tokens.push(SpannedToken::new(token, tag_start..close.tag_end));

		text_from = close.tag_end;
		cursor = close.next_cursor;
	}

	push_text(&mut tokens, source, text_from, source.len());
	strip_standalone_lines(&mut tokens);

	Ok(tokens)
}

struct TagClose {
	content_end: usize,
	tag_end: usize,
	next_cursor: usize,
}

fn find_close(raw_tokens: &RawTokens, from: usize, triple: bool) -> Option<TagClose> {
	raw_tokens
		.iter()
		.enumerate()
		.skip(from)
		.find_map(|(index, (raw, span))| {
			match (raw, triple) {
				(Ok(RawToken::TripleClose), true) | (Ok(RawToken::Close), false) => {
					Some(TagClose {
						content_end: span.start,
						tag_end: span.end,
						next_cursor: index + 1,
					})
				}
				// `{{name}}}` closes after two braces, the last one is text.
				(Ok(RawToken::TripleClose), false) => {
					Some(TagClose {
						content_end: span.start,
						tag_end: span.start + 2,
						next_cursor: index + 1,
					})
				}
				_ => None,
			}
		})
}

fn push_text(tokens: &mut Vec<SpannedToken>, source: &str, start: usize, end: usize) {
	if start < end {
		tokens.push(SpannedToken::new(
			Token::Text(source[start..end].to_string()),
			start..end,
		));
	}
}

fn classify_tag(content: &str, triple: bool, source: &str, offset: usize) -> LiturgieResult<Token> {
	let trimmed = content.trim();
	let LineColumn { line, column } = LineColumn::of(source, offset);
	let empty = || LiturgieError::EmptyTag { line, column };

	if triple {
		if trimmed.is_empty() {
			return Err(empty());
		}
		return Ok(Token::Variable {
			name: trimmed.to_string(),
			escape: false,
		});
	}

	let mut chars = trimmed.chars();
	let Some(sigil) = chars.next() else {
		return Err(empty());
	};
	let name = chars.as_str().trim();

	let token = match sigil {
		'!' => return Ok(Token::Comment),
		'>' | '=' => {
			return Err(LiturgieError::UnsupportedTag {
				tag: trimmed.to_string(),
				line,
				column,
			});
		}
		'#' => Token::SectionOpen(name.to_string()),
		'^' => Token::InvertedOpen(name.to_string()),
		'/' => Token::SectionClose(name.to_string()),
		'&' => {
			Token::Variable {
				name: name.to_string(),
				escape: false,
			}
		}
		_ => {
			return Ok(Token::Variable {
				name: trimmed.to_string(),
				escape: true,
			});
		}
	};

	if name.is_empty() {
		return Err(empty());
	}

	Ok(token)
}

/// Remove the line of every section, inverted, closing or comment tag that
/// has nothing but whitespace around it on its line.
fn strip_standalone_lines(tokens: &mut [SpannedToken]) {
	let last = tokens.len().saturating_sub(1);
	let mut strip_leading = vec![false; tokens.len()];
	let mut strip_trailing = vec![false; tokens.len()];

	for index in 0..tokens.len() {
		if !tokens[index].token.is_standalone_candidate() {
			continue;
		}

		let starts_line = index == 0
			|| tokens[index - 1].token.text().is_some_and(|text| {
				let tail = text.rsplit('\n').next().unwrap_or_default();
				is_blank(tail) && (text.contains('\n') || index - 1 == 0)
			});
		let ends_line = index == last
			|| tokens[index + 1].token.text().is_some_and(|text| {
				let head = text.split('\n').next().unwrap_or_default();
				is_blank(head.trim_end_matches('\r')) && (text.contains('\n') || index + 1 == last)
			});

		if starts_line && ends_line {
			if index > 0 {
				strip_trailing[index - 1] = true;
			}
			if index < last {
				strip_leading[index + 1] = true;
			}
		}
	}

	for (index, spanned) in tokens.iter_mut().enumerate() {
		let Token::Text(text) = &mut spanned.token else {
			continue;
		};

		let start = if strip_leading[index] {
			text.find('\n').map_or(text.len(), |idx| idx + 1)
		} else {
			0
		};
		let end = if strip_trailing[index] {
			text.rfind('\n').map_or(0, |idx| idx + 1)
		} else {
			text.len()
		};

		*text = if start < end {
			text[start..end].to_string()
		} else {
			String::new()
		};
	}
}

fn is_blank(text: &str) -> bool {
	text.chars().all(|c| c == ' ' || c == '\t')
}
