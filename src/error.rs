use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BadgeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
