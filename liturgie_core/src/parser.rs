use std::ops::Range;

use crate::LiturgieError;
use crate::LiturgieResult;
use crate::lexer::tokenize;
use crate::tokens::LineColumn;
use crate::tokens::Token;

/// A node of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Text(String),
	Variable {
		name: String,
		escape: bool,
	},
	Section {
		name: String,
		inverted: bool,
		children: Vec<Node>,
		/// Byte range of the unrendered section body in the template source.
		/// Lambda helpers receive this text.
		inner: Range<usize>,
	},
}

/// A parsed logic-less template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	source: String,
	nodes: Vec<Node>,
}

impl Template {
	pub fn parse(source: impl Into<String>) -> LiturgieResult<Self> {
		let source = source.into();
		let nodes = build_nodes(&source)?;
		Ok(Self { source, nodes })
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}
}

/// An open section waiting for its closing tag.
struct SectionCreator {
	name: String,
	inverted: bool,
	opening: Range<usize>,
	children: Vec<Node>,
}

fn build_nodes(source: &str) -> LiturgieResult<Vec<Node>> {
	let tokens = tokenize(source)?;
	let mut root: Vec<Node> = vec![];
	let mut pending: Vec<SectionCreator> = vec![];

	for spanned in tokens {
		let inverted = matches!(spanned.token, Token::InvertedOpen(_));
		let node = match spanned.token {
			Token::Text(text) if text.is_empty() => continue,
			Token::Comment => continue,
			Token::Text(text) => Node::Text(text),
			Token::Variable { name, escape } => Node::Variable { name, escape },
			Token::SectionOpen(name) | Token::InvertedOpen(name) => {
				pending.push(SectionCreator {
					name,
					inverted,
					opening: spanned.span,
					children: vec![],
				});
				continue;
			}
			Token::SectionClose(name) => {
				let LineColumn { line, column } = LineColumn::of(source, spanned.span.start);
				let Some(creator) = pending.pop() else {
					return Err(LiturgieError::UnexpectedClosingTag { name, line, column });
				};

				if creator.name != name {
					return Err(LiturgieError::MismatchedSection {
						expected: creator.name,
						found: name,
						line,
						column,
					});
				}

				Node::Section {
					name: creator.name,
					inverted: creator.inverted,
					children: creator.children,
					inner: creator.opening.end..spanned.span.start,
				}
			}
		};

		match pending.last_mut() {
			Some(parent) => parent.children.push(node),
			None => root.push(node),
		}
	}

	if let Some(creator) = pending.pop() {
		let LineColumn { line, column } = LineColumn::of(source, creator.opening.start);
		return Err(LiturgieError::UnclosedSection {
			name: creator.name,
			line,
			column,
		});
	}

	Ok(root)
}
