//! The parsed theme file and everything you can ask of it.
//!
//! A [`Document`] is built once, by [`crate::parse`] or a
//! [`crate::DocumentBuilder`], and is read-only afterwards. Lookups never
//! fail: a missing section, key or locale is simply `None`.

use std::{fmt, sync::OnceLock};

use serde::Serialize;

use crate::{
    builder::DocumentBuilder,
    error::Error,
    escape::escape,
    locale::LocalePreference,
    types::{Line, Section},
};

/// An ordered list of sections plus a cached locale preference.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    sections: Vec<Section>,

    /// Set by [`Document::with_locale`], or from the environment on the
    /// first localized lookup.
    #[serde(skip)]
    locale: OnceLock<LocalePreference>,
}

impl Document {
    /// Builds a document from sections that already satisfy the preamble invariant.
    pub(crate) fn from_sections_unchecked(sections: Vec<Section>) -> Self {
        Document {
            sections,
            locale: OnceLock::new(),
        }
    }

    /// Starts building a document in memory.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Fixes the locale preference used by [`Document::get_locale_string`].
    ///
    /// Has no effect if a localized lookup already ran and cached a preference.
    pub fn with_locale(self, preference: LocalePreference) -> Self {
        let _ = self.locale.set(preference);
        self
    }

    /// The locale preference in use, reading the environment if none is set yet.
    pub fn locale(&self) -> &LocalePreference {
        self.locale.get_or_init(LocalePreference::from_env)
    }

    /// Returns an iterator over all sections, preamble included.
    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Iterates over section names in file order; the preamble yields `None`.
    pub fn sections(&self) -> impl Iterator<Item = Option<&str>> {
        self.sections.iter().map(|s| s.name.as_deref())
    }

    /// Finds the first section with the given name.
    ///
    /// Later sections with the same name are never visible.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
    }

    /// Iterates over the lines of the first section named `name`.
    ///
    /// Comment lines are always yielded. With `include_localized == false`,
    /// key/value lines carrying a locale tag are skipped.
    pub fn lines_in_section<'a>(
        &'a self,
        name: &str,
        include_localized: bool,
    ) -> impl Iterator<Item = &'a Line> + use<'a> {
        self.section(name)
            .into_iter()
            .flat_map(|s| s.lines.iter())
            .filter(move |line| include_localized || line.locale().is_none())
    }

    /// Looks up `key` with exactly the given `locale` (`None` = untagged).
    pub fn get_raw(&self, section: &str, key: &str, locale: Option<&str>) -> Option<&str> {
        self.section(section)?
            .find(key, locale)
            .map(|kv| kv.value.as_str())
    }

    /// Looks up the untagged value of `key`.
    pub fn get_string(&self, section: &str, key: &str) -> Option<&str> {
        self.get_raw(section, key, None)
    }

    /// Looks up the untagged value of `key` as an integer.
    ///
    /// Parsing is permissive: leading digits are used and anything after them
    /// is ignored, so `"42px"` gives `42` and `"abc"` gives `0`. Only a
    /// missing key gives `None`.
    pub fn get_integer(&self, section: &str, key: &str) -> Option<i64> {
        self.get_string(section, key).map(parse_leading_integer)
    }

    /// Looks up `key` for the document's locale preference: the full tag
    /// first, then the primary language, then the untagged value.
    pub fn get_locale_string(&self, section: &str, key: &str) -> Option<&str> {
        self.get_locale_string_with(section, key, self.locale())
    }

    /// Like [`Document::get_locale_string`] with an explicit preference.
    pub fn get_locale_string_with(
        &self,
        section: &str,
        key: &str,
        preference: &LocalePreference,
    ) -> Option<&str> {
        let section = self.section(section)?;
        preference
            .candidates()
            .find_map(|locale| section.find(key, locale))
            .map(|kv| kv.value.as_str())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Document {}

impl TryFrom<Vec<Section>> for Document {
    type Error = Error;

    /// Validates that the sections can be written out and parsed back unchanged.
    fn try_from(sections: Vec<Section>) -> Result<Self, Self::Error> {
        crate::builder::validate_sections(sections).map(Document::from_sections_unchecked)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the document in the theme file text format.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            if let Some(name) = &section.name {
                writeln!(f, "[{}]", escape(name, false))?;
            }

            for line in &section.lines {
                match line {
                    Line::Comment { text } => writeln!(f, "{}", text)?,
                    Line::KeyValue(kv) => {
                        f.write_str(&kv.key)?;
                        if let Some(locale) = &kv.locale {
                            write!(f, "[{}]", locale)?;
                        }
                        writeln!(f, "={}", escape(&kv.value, true))?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// C `atoi` semantics, saturating instead of overflowing.
fn parse_leading_integer(value: &str) -> i64 {
    // `isspace` also covers vertical tab, which `is_ascii_whitespace` does not.
    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}
