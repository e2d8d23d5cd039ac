mod common;

use liturgie_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

const STORE_JSON: &str = r#"{
  "reading": { "type": "text", "value": "Johannes 1:1,3,5", "position": "topLeft" },
  "songs": { "type": "textArray", "values": ["Psalm 2 : 1", "Gezang 12 : 4, 5, 6, 7"] }
}"#;

const SLIDE_TEMPLATE: &str = "<div class=\"{{#positionClass}}{{reading.position}}{{/positionClass}}\">{{reading.value}}</div>\n<ul>\n{{#songs.values}}\n<li>{{.}}</li>\n{{/songs.values}}\n</ul>\n";

const CONFIG_TOML: &str = r#"templateDir = "templates"
outputDir = "output"

[formatting]
reading = "scripture"
songs = "song"
"#;

#[test]
fn fill_uses_config_and_formats_fields() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[
			("liturgie.toml", CONFIG_TOML),
			("texts.json", STORE_JSON),
			("templates/slide.mustache", SLIDE_TEMPLATE),
		],
	)?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("slide.html").and(predicates::str::contains(
			"Filled 1 template(s).",
		)));

	let rendered = std::fs::read_to_string(tmp.path().join("output/slide.html"))?;
	similar_asserts::assert_eq!(
		rendered,
		"<div class=\"top-left\">Johannes 1 : 1, 3 en 5</div>\n<ul>\n<li>Psalm     2 : \
		 1</li>\n<li>Gezang 12 : 4, 5, 6 en 7</li>\n</ul>\n"
	);

	Ok(())
}

#[test]
fn fill_flags_work_without_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[
			("texts.json", STORE_JSON),
			("slides/slide.mustache", "{{reading.value}}"),
		],
	)?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.arg("--template-dir")
		.arg(tmp.path().join("slides"))
		.arg("--output-dir")
		.arg(tmp.path().join("out"))
		.assert()
		.success();

	// Without a config nothing is formatted.
	let rendered = std::fs::read_to_string(tmp.path().join("out/slide.html"))?;
	assert_eq!(rendered, "Johannes 1:1,3,5");

	Ok(())
}

#[test]
fn fill_json_lists_written_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[
			("liturgie.toml", CONFIG_TOML),
			("texts.json", STORE_JSON),
			("templates/a.mustache", "a"),
			("templates/b.mustache", "b"),
			("templates/notes.txt", "not a template"),
		],
	)?;

	let output = common::liturgie_cmd()
		.arg("fill")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.output()?;

	assert!(output.status.success());
	let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	let written: Vec<&str> = value["written"]
		.as_array()
		.map(|items| items.iter().filter_map(serde_json::Value::as_str).collect())
		.unwrap_or_default();

	assert_eq!(written.len(), 2);
	assert!(written[0].ends_with("a.html"));
	assert!(written[1].ends_with("b.html"));
	assert!(!tmp.path().join("output/notes.html").exists());

	Ok(())
}

#[test]
fn fill_without_config_or_flags_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(tmp.path(), &[("texts.json", STORE_JSON)])?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("missing configuration"));

	Ok(())
}

#[test]
fn fill_reports_missing_template_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[("liturgie.toml", CONFIG_TOML), ("texts.json", STORE_JSON)],
	)?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("cannot read template directory"));

	assert!(!tmp.path().join("output").exists());

	Ok(())
}

#[test]
fn fill_reports_broken_template() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[
			("liturgie.toml", CONFIG_TOML),
			("texts.json", STORE_JSON),
			("templates/broken.mustache", "{{#songs}}never closed"),
		],
	)?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("broken.mustache"));

	Ok(())
}

#[test]
fn fill_rejects_invalid_store() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_files(
		tmp.path(),
		&[
			("liturgie.toml", CONFIG_TOML),
			("texts.json", "{ \"reading\": 3 }"),
			("templates/slide.mustache", "x"),
		],
	)?;

	let _ = common::liturgie_cmd()
		.arg("fill")
		.arg("--path")
		.arg(tmp.path())
		.arg("--store")
		.arg(tmp.path().join("texts.json"))
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to load text store"));

	Ok(())
}
