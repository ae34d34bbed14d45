use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dtok operations
#[derive(Error, Diagnostic, Debug)]
pub enum DtokError {
    #[error("Invalid configuration at `{path}`: {message}")]
    #[diagnostic(code(dtok::validate))]
    Validation {
        /// Dotted path of the offending field, e.g. `spacing.modes[0].tokens.range`.
        path: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dtok::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dtok::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Contrast check failed: {message}")]
    #[diagnostic(code(dtok::contrast))]
    Contrast { message: String },

    /// A generator invariant was broken after validation passed.
    #[error("Internal error: {message}")]
    #[diagnostic(
        code(dtok::internal),
        help("This is a bug in dtok, not in your configuration")
    )]
    Internal { message: String },
}

impl DtokError {
    /// Shorthand for a validation error without help text.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Attach help text to a validation or parse error.
    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Validation { help, .. } | Self::Parse { help, .. } => {
                *help = Some(text.into());
            }
            Self::Io { .. } | Self::Contrast { .. } | Self::Internal { .. } => {}
        }
        self
    }

    /// The field path of a validation error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Validation { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, DtokError>;
