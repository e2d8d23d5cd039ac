use std::collections::BTreeMap;

use serde_json::Value;

use crate::LiturgieResult;
use crate::parser::Node;
use crate::parser::Template;

/// Render callback handed to a helper. It renders template text against the
/// context the helper was invoked in.
pub type RenderFn<'r> = dyn Fn(&str) -> LiturgieResult<String> + 'r;

/// A lambda section helper. It receives the unrendered body of
/// `{{#name}}...{{/name}}` and is responsible for rendering it.
pub type Helper = dyn for<'r> Fn(&str, &RenderFn<'r>) -> LiturgieResult<String> + Send + Sync;

/// Renders parsed templates against json data, with optional lambda helpers.
///
/// Helpers shadow data of the same name when used as a section.
#[derive(Default)]
pub struct Renderer {
	helpers: BTreeMap<String, Box<Helper>>,
}

impl std::fmt::Debug for Renderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Renderer")
			.field("helpers", &self.helpers.keys().collect::<Vec<_>>())
			.finish()
	}
}

impl Renderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a lambda section helper under `name`.
	#[must_use]
	pub fn with_helper<F>(mut self, name: impl Into<String>, helper: F) -> Self
	where
		F: for<'r> Fn(&str, &RenderFn<'r>) -> LiturgieResult<String> + Send + Sync + 'static,
	{
		self.helpers.insert(name.into(), Box::new(helper));
		self
	}

	pub fn helper_names(&self) -> impl Iterator<Item = &str> {
		self.helpers.keys().map(String::as_str)
	}

	pub fn render(&self, template: &Template, data: &Value) -> LiturgieResult<String> {
		self.render_with_stack(template, &[data])
	}

	/// Parse and render template source in one go.
	pub fn render_str(&self, source: &str, data: &Value) -> LiturgieResult<String> {
		let template = Template::parse(source)?;
		self.render(&template, data)
	}

	fn render_with_stack(&self, template: &Template, stack: &[&Value]) -> LiturgieResult<String> {
		let mut stack = stack.to_vec();
		let mut out = String::with_capacity(template.source().len());
		self.render_nodes(template.source(), template.nodes(), &mut stack, &mut out)?;
		Ok(out)
	}

	fn render_nodes<'a>(
		&self,
		source: &str,
		nodes: &[Node],
		stack: &mut Vec<&'a Value>,
		out: &mut String,
	) -> LiturgieResult<()> {
		for node in nodes {
			match node {
				Node::Text(text) => out.push_str(text),
				Node::Variable { name, escape } => {
					let value = lookup(stack, name).map(display_value).unwrap_or_default();
					if *escape {
						out.push_str(&escape_html(&value));
					} else {
						out.push_str(&value);
					}
				}
				Node::Section {
					name,
					inverted,
					children,
					inner,
				} => {
					if let Some(helper) = self.helpers.get(name) {
						// A helper is always truthy, so its inverted section is empty.
						if !inverted {
							let context = stack.clone();
							let render = |text: &str| {
								let template = Template::parse(text)?;
								self.render_with_stack(&template, &context)
							};
							out.push_str(&helper(&source[inner.clone()], &render)?);
						}
						continue;
					}

					let value = lookup(stack, name).filter(|value| is_truthy(value));
					match (value, inverted) {
						(None, true) => self.render_nodes(source, children, stack, out)?,
						(None, false) | (Some(_), true) => {}
						(Some(Value::Array(items)), false) => {
							for item in items {
								stack.push(item);
								self.render_nodes(source, children, stack, out)?;
								stack.pop();
							}
						}
						(Some(value), false) => {
							stack.push(value);
							self.render_nodes(source, children, stack, out)?;
							stack.pop();
						}
					}
				}
			}
		}

		Ok(())
	}
}

/// Resolve a possibly dotted name against the context stack, innermost
/// frame first. `.` is the current frame.
fn lookup<'a>(stack: &[&'a Value], name: &str) -> Option<&'a Value> {
	if name == "." {
		return stack.last().copied();
	}

	let mut parts = name.split('.');
	let first = parts.next()?;
	let base = stack
		.iter()
		.rev()
		.copied()
		.find_map(|frame| frame.get(first))?;

	parts.try_fold(base, |value, part| value.get(part))
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(_) => true,
	}
}

fn display_value(value: &Value) -> String {
	match value {
		Value::Null | Value::Object(_) => String::new(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		Value::String(text) => text.clone(),
		Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
	}
}

/// Escape text for html the way mustache.js does.
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			'/' => escaped.push_str("&#x2F;"),
			'`' => escaped.push_str("&#x60;"),
			'=' => escaped.push_str("&#x3D;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
