use std::fs;
use std::path::{Path, PathBuf};

use crate::{compile, render::OutputTree};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),
}

/// Read a markdown source file.
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| IoError::NotUtf8(path.to_path_buf()))
}

/// Read and compile a markdown file.
pub fn compile_file(path: &Path) -> Result<OutputTree, IoError> {
    let source = read_source(path)?;
    log::debug!("compiling {} ({} bytes)", path.display(), source.len());
    Ok(compile(&source))
}
