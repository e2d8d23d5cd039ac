use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Format scripture and song references and fill presentation templates.",
	long_about = "liturgie formats the references read out during a service and renders the \
	              service texts into presentation templates.\n\nQuick start:\n  liturgie \
	              scripture \"Johannes 1:1,3,5\"\n  liturgie songs \"Psalm 2 : 1\" \"Gezang 12 : \
	              4, 5\"\n  liturgie fill --store texts.json"
)]
pub struct LiturgieCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the directory holding `liturgie.toml` or `liturgie.json`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Format a scripture reference.
	///
	/// Prints the reference in the canonical `Johannes 1 : 1, 3 en 5` style.
	/// Text that is not a reference is printed unchanged.
	Scripture {
		/// The reference, e.g. `1 Johannes 1:1b-9a`.
		reference: String,
	},
	/// Format a single psalm or hymn reference.
	///
	/// `vz` and `voorzang` are written as `VZ`. Text that is not a
	/// `Psalm` or `Gezang` reference is printed unchanged.
	Song {
		/// The reference, e.g. `Psalm 18 : voorzang, 1, 2`.
		reference: String,
	},
	/// Format a list of song references with their numbers aligned.
	Songs {
		/// The references, one per argument.
		#[arg(required = true)]
		references: Vec<String>,

		/// Output format. `text` prints one reference per line, `json`
		/// prints an array of strings.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Render every template in the template directory with a text store.
	///
	/// Reads `liturgie.toml` (or `liturgie.json`) for the template and
	/// output directories and for the fields to run through the reference
	/// formatters. Each `name.mustache` template is written to
	/// `name.html` in the output directory.
	Fill {
		/// Json file holding the text store.
		#[arg(long)]
		store: PathBuf,

		/// Template directory, overriding the config.
		#[arg(long)]
		template_dir: Option<PathBuf>,

		/// Output directory, overriding the config.
		#[arg(long)]
		output_dir: Option<PathBuf>,

		/// Output format for the list of written files.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
