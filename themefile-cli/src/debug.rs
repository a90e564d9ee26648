use themefile::Document;

/// Run the dump command: render a parsed document as pretty JSON.
pub fn document_to_json(doc: &Document) -> Result<String, String> {
    serde_json::to_string_pretty(doc).map_err(|e| format!("Error serializing to JSON: {}", e))
}
