use std::collections::BTreeMap;
use std::path::Path;

use derive_more::Deref;
use derive_more::DerefMut;
use serde::Deserialize;
use serde::Serialize;

use crate::LiturgieError;
use crate::LiturgieResult;
use crate::PositionLabel;
use crate::format_scripture;
use crate::format_song;
use crate::format_songs;

/// A single named entry of a [`TextStore`].
///
/// The serialized form is also what templates see, e.g.
///
/// ```json
/// { "type": "text", "value": "Johannes 1 : 1 - 18", "position": "center" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TextFieldValue {
	Text {
		value: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		position: Option<PositionLabel>,
	},
	TextArray {
		values: Vec<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		position: Option<PositionLabel>,
	},
	MultilineText {
		lines: Vec<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		position: Option<PositionLabel>,
	},
	#[serde(rename_all = "camelCase")]
	Citation { value: String, is_quotation: bool },
}

impl TextFieldValue {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text {
			value: value.into(),
			position: None,
		}
	}

	pub fn text_array<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Self::TextArray {
			values: values.into_iter().map(Into::into).collect(),
			position: None,
		}
	}

	pub fn multiline<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
		Self::MultilineText {
			lines: lines.into_iter().map(Into::into).collect(),
			position: None,
		}
	}

	pub fn citation(value: impl Into<String>, is_quotation: bool) -> Self {
		Self::Citation {
			value: value.into(),
			is_quotation,
		}
	}

	/// Set the slide position. Citations have no position and are returned
	/// unchanged.
	#[must_use]
	pub fn with_position(mut self, label: PositionLabel) -> Self {
		match &mut self {
			Self::Text { position, .. }
			| Self::TextArray { position, .. }
			| Self::MultilineText { position, .. } => *position = Some(label),
			Self::Citation { .. } => {}
		}
		self
	}

	pub fn position(&self) -> Option<PositionLabel> {
		match self {
			Self::Text { position, .. }
			| Self::TextArray { position, .. }
			| Self::MultilineText { position, .. } => *position,
			Self::Citation { .. } => None,
		}
	}

	/// Run every string in the value through `format`. Lists are formatted
	/// as one batch so songs line up.
	pub fn apply_format(&mut self, format: FieldFormat) {
		match self {
			Self::Text { value, .. } | Self::Citation { value, .. } => {
				*value = format.format_one(value);
			}
			Self::TextArray { values: items, .. } | Self::MultilineText { lines: items, .. } => {
				*items = format.format_many(items);
			}
		}
	}
}

/// Which reference formatter a text store field goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldFormat {
	Scripture,
	Song,
}

impl FieldFormat {
	pub fn format_one(self, input: &str) -> String {
		match self {
			Self::Scripture => format_scripture(input),
			Self::Song => format_song(input),
		}
	}

	pub fn format_many(self, inputs: &[String]) -> Vec<String> {
		match self {
			Self::Scripture => inputs.iter().map(|input| format_scripture(input)).collect(),
			Self::Song => format_songs(inputs),
		}
	}
}

/// Named text fields for one service, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, DerefMut)]
#[serde(transparent)]
pub struct TextStore(BTreeMap<String, TextFieldValue>);

impl TextStore {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_field(mut self, name: impl Into<String>, value: TextFieldValue) -> Self {
		self.0.insert(name.into(), value);
		self
	}

	pub fn from_json(content: &str) -> LiturgieResult<Self> {
		Self::parse_json(content, "<inline>")
	}

	/// Load a store from a json file.
	pub fn load(path: &Path) -> LiturgieResult<Self> {
		let display = path.display().to_string();
		let content = std::fs::read_to_string(path).map_err(|e| {
			LiturgieError::TextStoreParse {
				path: display.clone(),
				reason: e.to_string(),
			}
		})?;

		Self::parse_json(&content, &display)
	}

	fn parse_json(content: &str, path: &str) -> LiturgieResult<Self> {
		serde_json::from_str(content).map_err(|e| {
			LiturgieError::TextStoreParse {
				path: path.to_string(),
				reason: e.to_string(),
			}
		})
	}

	/// The store as template data: one top-level key per field.
	pub fn to_template_data(&self) -> LiturgieResult<serde_json::Value> {
		serde_json::to_value(self).map_err(|e| LiturgieError::TemplateData(e.to_string()))
	}

	pub fn apply_format(&mut self, field: &str, format: FieldFormat) -> LiturgieResult<()> {
		let value = self
			.0
			.get_mut(field)
			.ok_or_else(|| LiturgieError::UnknownField(field.to_string()))?;
		value.apply_format(format);

		Ok(())
	}

	/// Apply a field to format mapping. Fields missing from the store are
	/// skipped.
	pub fn apply_formatting(&mut self, formatting: &BTreeMap<String, FieldFormat>) {
		for (field, format) in formatting {
			match self.0.get_mut(field) {
				Some(value) => {
					value.apply_format(*format);
					tracing::debug!(field = %field, ?format, "formatted field");
				}
				None => tracing::warn!(field = %field, "formatted field is not in the text store"),
			}
		}
	}
}
