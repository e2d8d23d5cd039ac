use std::path::Path;
use std::path::PathBuf;

use crate::LiturgieError;
use crate::LiturgieResult;
use crate::Renderer;
use crate::Template;
use crate::TextStore;
use crate::html_encode;
use crate::position_css_class_for;

/// Extension that marks a file in the template directory as a template.
pub const TEMPLATE_EXTENSION: &str = "mustache";
/// Extension of the rendered output files.
pub const OUTPUT_EXTENSION: &str = "html";
/// Section helper mapping a position name to its css class.
pub const POSITION_HELPER: &str = "positionClass";
/// Section helper replacing accented characters with html entities.
pub const HTML_ENCODE_HELPER: &str = "htmlEncode";

/// Where templates are read from and where their output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateConfig {
	pub template_dir: PathBuf,
	pub output_dir: PathBuf,
}

/// Result of filling a template directory.
#[derive(Debug, Default)]
pub struct FillReport {
	/// Output files that were written, in template name order.
	pub written: Vec<PathBuf>,
}

/// A renderer with the `positionClass` and `htmlEncode` helpers installed.
pub fn projection_renderer() -> Renderer {
	Renderer::new()
		.with_helper(POSITION_HELPER, |text, render| {
			let rendered = render(text)?;
			let class = position_css_class_for(&rendered);
			if class.is_empty() && !rendered.trim().is_empty() {
				tracing::warn!(position = %rendered.trim(), "unknown position label");
			}
			Ok(class.to_string())
		})
		.with_helper(HTML_ENCODE_HELPER, |text, render| Ok(html_encode(&render(text)?)))
}

/// Render a single template against a text store with the projection
/// helpers.
pub fn render_template_str(source: &str, store: &TextStore) -> LiturgieResult<String> {
	let data = store.to_template_data()?;
	projection_renderer().render_str(source, &data)
}

/// List the template files directly inside `dir`, sorted by path.
pub fn find_template_files(dir: &Path) -> LiturgieResult<Vec<PathBuf>> {
	let directory_error = |e: std::io::Error| {
		LiturgieError::TemplateDirectory {
			path: dir.display().to_string(),
			reason: e.to_string(),
		}
	};

	let mut templates = vec![];
	for entry in std::fs::read_dir(dir).map_err(directory_error)? {
		let path = entry.map_err(directory_error)?.path();
		if path.is_file() && is_template_file(&path) {
			templates.push(path);
		}
	}
	templates.sort();

	Ok(templates)
}

pub fn is_template_file(path: &Path) -> bool {
	path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXTENSION)
}

/// The output path for a template: its base name with the output extension
/// inside `output_dir`.
pub fn output_path(template: &Path, output_dir: &Path) -> PathBuf {
	let mut name = template
		.file_stem()
		.unwrap_or(template.as_os_str())
		.to_os_string();
	name.push(".");
	name.push(OUTPUT_EXTENSION);
	output_dir.join(name)
}

/// Render every template in the template directory against `store` and write
/// the results to the output directory, overwriting existing files.
///
/// All templates are rendered before the output directory is touched, so a
/// missing template directory or a broken template fails without writing
/// anything. Errors name the template they happened in.
pub fn fill_templates(config: &TemplateConfig, store: &TextStore) -> LiturgieResult<FillReport> {
	let templates = find_template_files(&config.template_dir)?;
	let data = store.to_template_data()?;
	let renderer = projection_renderer();

	let mut rendered_outputs: Vec<(PathBuf, String)> = Vec::with_capacity(templates.len());
	for template_path in &templates {
		let rendered = render_template_file(&renderer, template_path, &data)
			.map_err(|source| template_error(template_path, source))?;
		let output = output_path(template_path, &config.output_dir);
		tracing::debug!(template = %template_path.display(), output = %output.display(), "rendered template");
		rendered_outputs.push((output, rendered));
	}

	std::fs::create_dir_all(&config.output_dir).map_err(|e| {
		LiturgieError::OutputDirectory {
			path: config.output_dir.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let mut report = FillReport::default();
	for (output, rendered) in rendered_outputs {
		std::fs::write(&output, rendered)
			.map_err(|e| template_error(&output, LiturgieError::Io(e)))?;
		report.written.push(output);
	}

	tracing::info!(
		count = report.written.len(),
		output_dir = %config.output_dir.display(),
		"filled templates"
	);

	Ok(report)
}

fn render_template_file(
	renderer: &Renderer,
	template_path: &Path,
	data: &serde_json::Value,
) -> LiturgieResult<String> {
	let source = std::fs::read_to_string(template_path)?;
	let template = Template::parse(source)?;
	renderer.render(&template, data)
}

fn template_error(path: &Path, source: LiturgieError) -> LiturgieError {
	LiturgieError::TemplateFile {
		path: path.display().to_string(),
		source: Box::new(source),
	}
}
