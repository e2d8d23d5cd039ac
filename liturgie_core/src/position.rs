use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

/// Where a text block is placed on a presentation slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionLabel {
	TopLeft,
	BottomLeft,
	TopRight,
	BottomRight,
	Center,
}

impl PositionLabel {
	pub const ALL: [Self; 5] = [
		Self::TopLeft,
		Self::BottomLeft,
		Self::TopRight,
		Self::BottomRight,
		Self::Center,
	];

	/// The name used in text stores and template data.
	pub fn name(self) -> &'static str {
		match self {
			Self::TopLeft => "topLeft",
			Self::BottomLeft => "bottomLeft",
			Self::TopRight => "topRight",
			Self::BottomRight => "bottomRight",
			Self::Center => "center",
		}
	}

	/// The css class the presentation stylesheets use for this position.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::TopLeft => "top-left",
			Self::BottomLeft => "bottom-left",
			Self::TopRight => "top-right",
			Self::BottomRight => "bottom-right",
			Self::Center => "center",
		}
	}

	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|label| label.name() == name)
	}
}

impl Display for PositionLabel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

pub fn position_css_class(label: PositionLabel) -> &'static str {
	label.css_class()
}

/// Map a position name to its css class. Unknown names map to an empty
/// string.
pub fn position_css_class_for(name: &str) -> &'static str {
	PositionLabel::from_name(name.trim()).map_or("", PositionLabel::css_class)
}
