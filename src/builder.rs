//! Builder for creating a `Document` in memory with a fluent interface.
//!
//! Lines added before the first call to [`DocumentBuilder::section`] go to
//! the unnamed preamble. Nothing is checked until [`DocumentBuilder::build`],
//! which makes sure the result can be written out and parsed back unchanged.
//!
//! # Example
//!
//! ```rust
//! use themefile::Document;
//!
//! let doc = Document::builder()
//!     .comment("# Generated")
//!     .section("Icon Theme")
//!     .entry("Name", "Hicolor")
//!     .localized_entry("Name", "de", "Hifarbe")
//!     .build()?;
//!
//! assert_eq!(doc.to_string(), "# Generated\n[Icon Theme]\nName=Hicolor\nName[de]=Hifarbe\n");
//! # Ok::<(), themefile::Error>(())
//! ```

use crate::{
    document::Document,
    error::Error,
    types::{KeyValue, Line, Section, is_key_char},
};

#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    sections: Vec<Section>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Creates a new `DocumentBuilder` holding only an empty preamble.
    pub fn new() -> Self {
        Self {
            sections: vec![Section::preamble()],
        }
    }

    /// Starts a new `[name]` section; following lines are added to it.
    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.sections.push(Section::new(name));
        self
    }

    /// Adds a comment or blank line to the current section.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw line, e.g. `# comment` or an empty string
    pub fn comment(self, text: impl Into<String>) -> Self {
        self.push(Line::comment(text))
    }

    /// Adds an untagged `key=value` line to the current section.
    pub fn entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(Line::key_value(key, None::<String>, value))
    }

    /// Adds a `key[locale]=value` line to the current section.
    pub fn localized_entry(
        self,
        key: impl Into<String>,
        locale: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.push(Line::key_value(key, Some(locale), value))
    }

    /// Validates the collected sections and builds the document.
    ///
    /// # Returns
    ///
    /// The `Document`, or an `Error::Validation` naming the first item that
    /// could not survive a write/parse round trip.
    pub fn build(self) -> Result<Document, Error> {
        Document::try_from(self.sections)
    }

    fn push(mut self, line: Line) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.lines.push(line);
        }
        self
    }
}

/// Checks `sections` against the text format and normalizes the preamble.
///
/// An empty leading preamble followed by named sections is dropped, and an
/// empty list becomes a single empty preamble, which is what parsing the
/// serialized form would produce.
pub(crate) fn validate_sections(mut sections: Vec<Section>) -> Result<Vec<Section>, Error> {
    if sections.len() > 1 && sections[0].is_preamble() && sections[0].lines.is_empty() {
        sections.remove(0);
    }
    if sections.is_empty() {
        sections.push(Section::preamble());
    }

    for (index, section) in sections.iter().enumerate() {
        match &section.name {
            None if index > 0 => {
                return Err(Error::validation_error(format!(
                    "unnamed section at position {} (only the first section may be unnamed)",
                    index
                )));
            }
            None => {}
            Some(name) => validate_section_name(name)?,
        }

        for line in &section.lines {
            match line {
                Line::Comment { text } => validate_comment(text)?,
                Line::KeyValue(kv) => validate_key_value(kv)?,
            }
        }
    }

    Ok(sections)
}

fn validate_section_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::validation_error("section name must not be empty"));
    }
    if name.contains('\0') {
        return Err(Error::validation_error(format!(
            "section name {:?} contains a NUL character",
            name
        )));
    }
    Ok(())
}

fn validate_comment(text: &str) -> Result<(), Error> {
    if text.contains('\n') {
        return Err(Error::validation_error(format!(
            "comment {:?} spans more than one line",
            text
        )));
    }
    let blank = text.bytes().all(|b| b.is_ascii_whitespace());
    if !blank && !text.starts_with('#') {
        return Err(Error::validation_error(format!(
            "comment {:?} must be blank or start with '#'",
            text
        )));
    }
    Ok(())
}

fn validate_key_value(kv: &KeyValue) -> Result<(), Error> {
    if kv.key.is_empty() || !kv.key.chars().all(is_key_char) {
        return Err(Error::validation_error(format!(
            "invalid key {:?} (allowed: ASCII letters, digits and '-')",
            kv.key
        )));
    }
    if let Some(locale) = &kv.locale {
        if locale.contains(']') || locale.contains('\n') {
            return Err(Error::validation_error(format!(
                "invalid locale {:?} for key {}",
                locale, kv.key
            )));
        }
    }
    if kv.value.contains('\0') {
        return Err(Error::validation_error(format!(
            "value of key {} contains a NUL character",
            kv.key
        )));
    }
    Ok(())
}
