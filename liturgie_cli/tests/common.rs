use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn liturgie_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("liturgie"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

/// Write `files` below `root`, creating parent directories as needed.
#[allow(dead_code)]
pub fn write_files(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
	for (name, content) in files {
		let path = root.join(name);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, content)?;
	}

	Ok(())
}
