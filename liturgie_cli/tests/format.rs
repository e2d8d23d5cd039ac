mod common;

use liturgie_core::AnyEmptyResult;
use rstest::rstest;

#[rstest]
#[case::verse_list("Johannes 1:1,3,5", "Johannes 1 : 1, 3 en 5\n")]
#[case::book_number("1 Johannes 1:1b-9a", "1 Johannes 1 : 1b - 9a\n")]
#[case::not_a_reference("Welkom", "Welkom\n")]
fn scripture_prints_formatted_reference(#[case] input: &str, #[case] expected: &str) {
	let _ = common::liturgie_cmd()
		.arg("scripture")
		.arg(input)
		.assert()
		.success()
		.stdout(expected.to_string());
}

#[rstest]
#[case::voorzang("Psalm 18 : voorzang, 1, 2", "Psalm 18 : VZ, 1 en 2\n")]
#[case::range("Gezang 12 : 4 - 6", "Gezang 12 : 4 - 6\n")]
#[case::no_verses("Psalm 23", "Psalm 23\n")]
#[case::unknown_type("Lied 4 : 1", "Lied 4 : 1\n")]
fn song_prints_formatted_reference(#[case] input: &str, #[case] expected: &str) {
	let _ = common::liturgie_cmd()
		.arg("song")
		.arg(input)
		.assert()
		.success()
		.stdout(expected.to_string());
}

#[test]
fn songs_aligns_numbers() {
	let _ = common::liturgie_cmd()
		.args(["songs", "Psalm 2 : 1", "Gezang 12 : 4, 5, 6, 7", "Collecte"])
		.assert()
		.success()
		.stdout("Psalm     2 : 1\nGezang 12 : 4, 5, 6 en 7\nCollecte\n");
}

#[test]
fn songs_json_output() -> AnyEmptyResult {
	let output = common::liturgie_cmd()
		.args(["songs", "--format", "json", "Psalm 100", "Gezang 8 : vz"])
		.output()?;

	assert!(output.status.success());
	let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
	similar_asserts::assert_eq!(
		value,
		serde_json::json!(["Psalm 100", "Gezang   8 : VZ"])
	);

	Ok(())
}

#[test]
fn songs_requires_a_reference() {
	let _ = common::liturgie_cmd().arg("songs").assert().failure();
}

#[test]
fn missing_subcommand_exits_with_usage_hint() {
	let _ = common::liturgie_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("No subcommand specified"));
}
