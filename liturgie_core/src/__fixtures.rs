use std::path::Path;

use crate::AnyEmptyResult;
use crate::PositionLabel;
use crate::TextFieldValue;
use crate::TextStore;

pub(crate) const SERVICE_STORE_JSON: &str = r#"{
	"reading": { "type": "text", "value": "Johannes 1:1,3,5", "position": "topLeft" },
	"songs": { "type": "textArray", "values": ["Psalm 2 : 1", "Gezang 12 : 4, 5, 6, 7"] },
	"announcements": { "type": "multilineText", "lines": ["Collecte", "Koffie"], "position": "bottomRight" },
	"quote": { "type": "citation", "value": "Mattheüs 5:9", "isQuotation": true }
}"#;

pub(crate) fn service_store() -> TextStore {
	TextStore::new()
		.with_field(
			"reading",
			TextFieldValue::text("Johannes 1:1,3,5").with_position(PositionLabel::TopLeft),
		)
		.with_field(
			"songs",
			TextFieldValue::text_array(["Psalm 2 : 1", "Gezang 12 : 4, 5, 6, 7"]),
		)
		.with_field(
			"announcements",
			TextFieldValue::multiline(["Collecte", "Koffie"]).with_position(PositionLabel::BottomRight),
		)
		.with_field("quote", TextFieldValue::citation("Mattheüs 5:9", true))
}

pub(crate) fn write_files(root: &Path, files: &[(&str, &str)]) -> AnyEmptyResult {
	for (name, content) in files {
		let path = root.join(name);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, content)?;
	}

	Ok(())
}
