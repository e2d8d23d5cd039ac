use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::FieldFormat;
use crate::LiturgieError;
use crate::LiturgieResult;
use crate::TemplateConfig;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["liturgie.toml", ".liturgie.toml", "liturgie.json"];

/// Configuration loaded from `liturgie.toml` or the desktop app's
/// `liturgie.json` store.
///
/// ```toml
/// templateDir = "templates"
/// outputDir = "output"
///
/// [formatting]
/// reading = "scripture"
/// songs = "song"
/// ```
///
/// Relative directories are resolved against the directory holding the
/// config file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LiturgieConfig {
	/// Directory holding the `*.mustache` templates.
	#[serde(alias = "template_dir")]
	pub template_dir: PathBuf,
	/// Directory the rendered `*.html` files are written to.
	#[serde(alias = "output_dir")]
	pub output_dir: PathBuf,
	/// Text store fields that are run through a reference formatter before
	/// the templates are filled.
	#[serde(default)]
	pub formatting: BTreeMap<String, FieldFormat>,
}

impl LiturgieConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if there is none.
	pub fn load(root: &Path) -> LiturgieResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::from_path(&config_path).map(Some)
	}

	/// Read a config file, picking the format from its extension.
	pub fn from_path(path: &Path) -> LiturgieResult<Self> {
		let content = std::fs::read_to_string(path)?;
		let format = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or("")
			.to_ascii_lowercase();
		let config = Self::parse(&content, &format)?;
		let base = path.parent().unwrap_or_else(|| Path::new("."));
		tracing::debug!(path = %path.display(), "loaded config");

		Ok(config.resolve_relative_to(base))
	}

	pub fn parse(content: &str, format: &str) -> LiturgieResult<Self> {
		match format {
			"toml" => toml::from_str(content).map_err(|e| LiturgieError::ConfigParse(e.to_string())),
			"json" => {
				serde_json::from_str(content).map_err(|e| LiturgieError::ConfigParse(e.to_string()))
			}
			other => Err(LiturgieError::UnsupportedConfigFormat(other.to_string())),
		}
	}

	#[must_use]
	pub fn resolve_relative_to(mut self, base: &Path) -> Self {
		if self.template_dir.is_relative() {
			self.template_dir = base.join(&self.template_dir);
		}
		if self.output_dir.is_relative() {
			self.output_dir = base.join(&self.output_dir);
		}
		self
	}

	pub fn template_config(&self) -> TemplateConfig {
		TemplateConfig {
			template_dir: self.template_dir.clone(),
			output_dir: self.output_dir.clone(),
		}
	}
}
