use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Text file not in supported format. Player '{name}' starts more than one row (line {line})")]
    DuplicatePlayer { name: String, line: usize },

    #[error("Unknown player '{name}' on line {line}: every seen player must start its own row")]
    UnknownPlayer { name: String, line: usize },

    #[error("The supplied file is not supported. Please enter the name of a text file, ending with '.txt': {0}")]
    InvalidSource(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GraphError {
    /// Short, stable category name for logs
    pub const fn kind(&self) -> &'static str {
        match self {
            GraphError::DuplicatePlayer { .. } => "format",
            GraphError::UnknownPlayer { .. } => "lookup",
            GraphError::InvalidSource(_) => "argument",
            GraphError::IoError(_) => "io",
        }
    }
}
