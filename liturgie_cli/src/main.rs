use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use liturgie_cli::Commands;
use liturgie_cli::LiturgieCli;
use liturgie_cli::OutputFormat;
use liturgie_core::AnyEmptyResult;
use liturgie_core::FieldFormat;
use liturgie_core::LiturgieConfig;
use liturgie_core::LiturgieError;
use liturgie_core::TemplateConfig;
use liturgie_core::TextStore;
use liturgie_core::fill_templates;
use liturgie_core::format_scripture;
use liturgie_core::format_song;
use liturgie_core::format_songs;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = LiturgieCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_logging(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Scripture { reference }) => {
			println!("{}", format_scripture(reference));
			Ok(())
		}
		Some(Commands::Song { reference }) => {
			println!("{}", format_song(reference));
			Ok(())
		}
		Some(Commands::Songs { references, format }) => run_songs(references, *format),
		Some(Commands::Fill {
			store,
			template_dir,
			output_dir,
			format,
		}) => {
			run_fill(
				&args,
				store,
				template_dir.as_deref(),
				output_dir.as_deref(),
				*format,
			)
		}
		None => {
			eprintln!("No subcommand specified. Run `liturgie --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<LiturgieError>() {
			Ok(liturgie_err) => {
				let report: miette::Report = (*liturgie_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr so formatted references on stdout stay pipeable.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.finish();

	tracing::subscriber::set_global_default(subscriber).ok();
}

fn resolve_root(args: &LiturgieCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn run_songs(references: &[String], format: OutputFormat) -> AnyEmptyResult {
	let formatted = format_songs(references);

	match format {
		OutputFormat::Text => {
			for line in &formatted {
				println!("{line}");
			}
		}
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&formatted)?);
		}
	}

	Ok(())
}

/// Combine the config file with the directory flags. Flags win, and a
/// config file is only required when a flag is missing.
fn resolve_fill_settings(
	root: &Path,
	template_dir: Option<&Path>,
	output_dir: Option<&Path>,
) -> Result<(TemplateConfig, BTreeMap<String, FieldFormat>), LiturgieError> {
	let config = LiturgieConfig::load(root)?;
	let (config_dirs, formatting) = match config {
		Some(config) => (Some(config.template_config()), config.formatting),
		None => (None, BTreeMap::new()),
	};

	let template_dir = template_dir
		.map(Path::to_path_buf)
		.or_else(|| config_dirs.as_ref().map(|dirs| dirs.template_dir.clone()))
		.ok_or_else(|| LiturgieError::MissingConfig("no template directory".into()))?;
	let output_dir = output_dir
		.map(Path::to_path_buf)
		.or_else(|| config_dirs.as_ref().map(|dirs| dirs.output_dir.clone()))
		.ok_or_else(|| LiturgieError::MissingConfig("no output directory".into()))?;

	Ok((
		TemplateConfig {
			template_dir,
			output_dir,
		},
		formatting,
	))
}

fn run_fill(
	args: &LiturgieCli,
	store_path: &Path,
	template_dir: Option<&Path>,
	output_dir: Option<&Path>,
	format: OutputFormat,
) -> AnyEmptyResult {
	let root = resolve_root(args);
	let (template_config, formatting) = resolve_fill_settings(&root, template_dir, output_dir)?;

	let mut store = TextStore::load(store_path)?;
	store.apply_formatting(&formatting);

	let report = fill_templates(&template_config, &store)?;

	match format {
		OutputFormat::Text => {
			for path in &report.written {
				println!("  {} {}", colored!("wrote", green), path.display());
			}
			println!(
				"{}",
				colored!(
					format!("Filled {} template(s).", report.written.len()),
					bold
				)
			);
		}
		OutputFormat::Json => {
			let written: Vec<String> = report
				.written
				.iter()
				.map(|path| path.display().to_string())
				.collect();
			let output = serde_json::json!({ "written": written });
			println!("{}", serde_json::to_string_pretty(&output)?);
		}
	}

	Ok(())
}
