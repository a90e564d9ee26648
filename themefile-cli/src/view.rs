use themefile::{Document, Line};

const PREAMBLE_LABEL: &str = "(preamble)";

/// Section names in file order, one per entry.
///
/// The unnamed preamble is listed as `(preamble)` when `all` is set and
/// skipped otherwise.
pub fn section_listing(doc: &Document, all: bool) -> Vec<String> {
    doc.sections()
        .filter_map(|name| match name {
            Some(name) => Some(name.to_string()),
            None if all => Some(PREAMBLE_LABEL.to_string()),
            None => None,
        })
        .collect()
}

/// Keys of the first section named `section`, as `key` or `key[locale]`.
///
/// Comment lines are not listed.
pub fn key_listing(doc: &Document, section: &str, include_localized: bool) -> Vec<String> {
    doc.lines_in_section(section, include_localized)
        .filter_map(Line::as_key_value)
        .map(|kv| match &kv.locale {
            Some(locale) => format!("{}[{}]", kv.key, locale),
            None => kv.key.clone(),
        })
        .collect()
}

/// Print the sections of a document.
pub fn print_sections(doc: &Document, all: bool) {
    for name in section_listing(doc, all) {
        println!("{}", name);
    }
}

/// Print the keys of one section; fails if the section does not exist.
pub fn print_keys(doc: &Document, section: &str, include_localized: bool) -> Result<(), String> {
    if doc.section(section).is_none() {
        return Err(format!("Section not found: {}", section));
    }
    for key in key_listing(doc, section, include_localized) {
        println!("{}", key);
    }
    Ok(())
}
