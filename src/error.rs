use miette::Diagnostic;
use thiserror::Error;

/// Main error type for strokify operations
#[derive(Error, Diagnostic, Debug)]
pub enum StrokifyError {
    #[error("IO error: {0}")]
    #[diagnostic(code(strokify::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(strokify::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(strokify::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(strokify::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(strokify::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette has no colours")]
    #[diagnostic(
        code(strokify::palette),
        help("The device must offer at least one colour to match against")
    )]
    EmptyPalette,

    #[error("Invalid pixel buffer: {message}")]
    #[diagnostic(code(strokify::buffer))]
    InvalidBuffer { message: String },
}

pub type Result<T> = std::result::Result<T, StrokifyError>;
