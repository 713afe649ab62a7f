use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fatex operations
#[derive(Error, Diagnostic, Debug)]
pub enum FatexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(fatex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fatex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(fatex::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed metadata record '{slug}': {message}")]
    #[diagnostic(
        code(fatex::malformed_record),
        help("Every icon needs a label, a hex unicode value and at least one style")
    )]
    MalformedRecord { slug: String, message: String },

    #[error("Macro name '{name}' in style '{style}' is produced by both '{first}' and '{second}'")]
    #[diagnostic(
        code(fatex::name_collision),
        help("Add a full-label override for one of the icons")
    )]
    NameCollision {
        style: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("No package variant for style '{style}' in the {family} family")]
    #[diagnostic(code(fatex::missing_variant))]
    MissingVariant { family: String, style: String },

    #[error("No font version for package variant '{variant}'")]
    #[diagnostic(
        code(fatex::missing_version),
        help("Pass --font-version or set `version` in fatex.yaml")
    )]
    MissingVersion { variant: String },

    #[error("Validation error: {message}")]
    #[diagnostic(code(fatex::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(fatex::render))]
    Render { message: String },

    #[error("Fetch error: {message}")]
    #[diagnostic(code(fatex::fetch))]
    Fetch {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(fatex::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FatexError>;
