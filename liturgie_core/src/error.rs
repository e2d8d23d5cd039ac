use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum LiturgieError {
	#[error(transparent)]
	#[diagnostic(code(liturgie::io_error))]
	Io(#[from] std::io::Error),

	#[error("cannot read template directory `{path}`: {reason}")]
	#[diagnostic(
		code(liturgie::template_directory),
		help("set `templateDir` in liturgie.toml or pass `--template-dir`")
	)]
	TemplateDirectory { path: String, reason: String },

	#[error("cannot create output directory `{path}`: {reason}")]
	#[diagnostic(
		code(liturgie::output_directory),
		help("check `outputDir` in liturgie.toml or `--output-dir`")
	)]
	OutputDirectory { path: String, reason: String },

	#[error("template `{path}` failed")]
	#[diagnostic(code(liturgie::template_file))]
	TemplateFile {
		path: String,
		#[source]
		source: Box<LiturgieError>,
	},

	#[error("unclosed tag at {line}:{column}")]
	#[diagnostic(code(liturgie::unclosed_tag), help("close the tag with `}}}}`"))]
	UnclosedTag { line: usize, column: usize },

	#[error("empty tag at {line}:{column}")]
	#[diagnostic(code(liturgie::empty_tag))]
	EmptyTag { line: usize, column: usize },

	#[error("missing closing tag for section `{name}` opened at {line}:{column}")]
	#[diagnostic(
		code(liturgie::unclosed_section),
		help("add `{{{{/{name}}}}}` to close this section")
	)]
	UnclosedSection {
		name: String,
		line: usize,
		column: usize,
	},

	#[error("closing tag `{name}` at {line}:{column} has no open section")]
	#[diagnostic(code(liturgie::unexpected_closing_tag))]
	UnexpectedClosingTag {
		name: String,
		line: usize,
		column: usize,
	},

	#[error("section `{expected}` closed by `{found}` at {line}:{column}")]
	#[diagnostic(code(liturgie::mismatched_section))]
	MismatchedSection {
		expected: String,
		found: String,
		line: usize,
		column: usize,
	},

	#[error("unsupported tag `{tag}` at {line}:{column}")]
	#[diagnostic(
		code(liturgie::unsupported_tag),
		help("partials and delimiter changes are not supported")
	)]
	UnsupportedTag {
		tag: String,
		line: usize,
		column: usize,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(liturgie::config_parse),
		help("the config needs `templateDir` and `outputDir` entries")
	)]
	ConfigParse(String),

	#[error("unsupported config file format: `{0}`")]
	#[diagnostic(code(liturgie::unsupported_config_format), help("use toml or json"))]
	UnsupportedConfigFormat(String),

	#[error("missing configuration: {0}")]
	#[diagnostic(
		code(liturgie::missing_config),
		help("create a liturgie.toml or pass the directory flags")
	)]
	MissingConfig(String),

	#[error("failed to load text store `{path}`: {reason}")]
	#[diagnostic(code(liturgie::text_store))]
	TextStoreParse { path: String, reason: String },

	#[error("failed to build template data: {0}")]
	#[diagnostic(code(liturgie::template_data))]
	TemplateData(String),

	#[error("text store has no field named `{0}`")]
	#[diagnostic(code(liturgie::unknown_field))]
	UnknownField(String),
}

pub type LiturgieResult<T> = Result<T, LiturgieError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
