use themefile::{Document, traits::Parser};

use crate::validation::validate_output_path;

/// Run the format command: write the canonical form of a document to
/// `output`, or to stdout when no output path is given.
pub fn run_format_command(doc: &Document, output: Option<&str>) -> Result<(), String> {
    match output {
        Some(path) => {
            validate_output_path(path)?;
            doc.write_to(path)
                .map_err(|e| format!("Error writing to {}: {}", path, e))?;
            tracing::info!(output = path, "Wrote formatted theme file");
        }
        None => print!("{}", doc),
    }
    Ok(())
}
