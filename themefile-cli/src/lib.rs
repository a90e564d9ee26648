//! CLI library for testing purposes

pub mod check;
pub mod debug;
pub mod format;
pub mod query;
pub mod validation;
pub mod view;

use themefile::{Document, traits::Parser};

use crate::validation::validate_file_path;

/// Read and parse a theme file, turning every failure into a printable message.
pub fn load_document(input: &str) -> Result<Document, String> {
    validate_file_path(input)?;
    Document::read_from(input).map_err(|e| format!("{}: {}", input, e))
}
