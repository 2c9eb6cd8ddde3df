use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{LINE_SEPARATOR, convert_lines, split_lines};
use crate::translate::trim_line_end;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that `path` names an existing regular file.
pub fn validate_input_file(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IoError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Read a markdown file as lines with trailing whitespace removed
pub fn read_markdown_lines(path: &Path) -> Result<Vec<String>, IoError> {
    validate_input_file(path)?;
    let content = fs::read_to_string(path)?;
    Ok(split_lines(&content)
        .into_iter()
        .map(|line| trim_line_end(line).to_string())
        .collect())
}

/// Write HTML lines to `path`, creating or truncating it
pub fn write_html_lines(path: &Path, lines: &[String]) -> Result<(), IoError> {
    fs::write(path, lines.join(LINE_SEPARATOR))?;
    Ok(())
}

/// Convert the markdown file at `input` and write the HTML to `output`.
///
/// Returns the number of HTML lines written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize, IoError> {
    let lines = read_markdown_lines(input)?;
    log::debug!("read {} lines from {}", lines.len(), input.display());

    let html = convert_lines(&lines);
    write_html_lines(output, &html)?;
    Ok(html.len())
}
