use crate::load_document;

/// Run the check command: parse a theme file and summarize it.
///
/// Returns the summary line printed on success.
pub fn run_check_command(input: &str) -> Result<String, String> {
    let doc = load_document(input)?;

    let named = doc.sections().flatten().count();
    tracing::info!(input, sections = named, "Theme file is valid");

    Ok(format!("ok: {} section(s)", named))
}
