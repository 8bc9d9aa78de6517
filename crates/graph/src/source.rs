use crate::error::{GraphError, Result};
use std::path::{Path, PathBuf};

/// Where raw visibility rows come from
pub trait RecordSource {
    /// Load every raw line, in order
    fn load_lines(&self) -> Result<Vec<String>>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}

/// A `.txt` file on disk
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    /// Accepts only UTF-8 paths ending in `.txt`
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.to_string_lossy().into_owned();

        match path.to_str() {
            Some(raw) if raw.ends_with(".txt") => Ok(Self {
                path: path.to_path_buf(),
            }),
            _ => Err(GraphError::InvalidSource(display)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for TextFileSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Rows held in memory
#[derive(Debug, Clone, Default)]
pub struct InlineSource {
    text: String,
}

impl InlineSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RecordSource for InlineSource {
    fn load_lines(&self) -> Result<Vec<String>> {
        Ok(self.text.lines().map(str::to_string).collect())
    }

    fn describe(&self) -> String {
        "<inline>".to_string()
    }
}
