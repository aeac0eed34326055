use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to read from {}", .path.display())]
pub struct ReadFileError {
    pub path: PathBuf,
    pub source: std::io::Error,
}
