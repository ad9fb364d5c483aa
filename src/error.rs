use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: invalid JSON: {source}", path.display())]
    JsonParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}:{line}: expected a JSON object", path.display())]
    NotAnObject { path: PathBuf, line: usize },

    #[error("{}:{line}: missing key '{key}'", path.display())]
    MissingKey {
        path: PathBuf,
        line: usize,
        key: String,
    },

    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// Failure while writing tables to the output stream.
    #[error("output error: {0}")]
    Render(#[from] io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Process exit code. 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } | Self::Render(_) => 1,
            Self::MissingKey { .. } => 3,
            Self::IndexOutOfRange { .. } => 4,
            Self::InvalidArgs(_) => 5,
            Self::JsonParse { .. } | Self::NotAnObject { .. } => 6,
        }
    }

    /// Downstream closed the pipe (`mt-inspect ... | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Render(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
