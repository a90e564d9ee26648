//! Core data model of a theme file.
//! The parser decodes into these; the serializer writes these back out.

use serde::{Deserialize, Serialize};

/// One `[Name]` group of lines, or the unnamed preamble before the first header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Section {
    /// Section name as written between the brackets (unescaped).
    /// `None` for the preamble.
    pub name: Option<String>,

    /// Lines of the section, in file order.
    #[serde(default)]
    pub lines: Vec<Line>,
}

impl Section {
    /// Creates an empty section with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: Some(name.into()),
            lines: Vec::new(),
        }
    }

    /// Creates an empty preamble section.
    pub fn preamble() -> Self {
        Section::default()
    }

    pub fn is_preamble(&self) -> bool {
        self.name.is_none()
    }

    /// Returns the first key/value line matching `key` and `locale` exactly.
    ///
    /// `locale == None` only matches untagged lines.
    pub fn find(&self, key: &str, locale: Option<&str>) -> Option<&KeyValue> {
        self.key_values()
            .find(|kv| kv.key == key && kv.locale.as_deref() == locale)
    }

    /// Iterates over the key/value lines, skipping comments.
    pub fn key_values(&self) -> impl Iterator<Item = &KeyValue> {
        self.lines.iter().filter_map(Line::as_key_value)
    }
}

/// A single line inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Line {
    /// A comment or blank line, kept verbatim (without the line break).
    Comment { text: String },

    /// A `key[locale]=value` line.
    KeyValue(KeyValue),
}

impl Line {
    pub fn comment(text: impl Into<String>) -> Self {
        Line::Comment { text: text.into() }
    }

    pub fn key_value(
        key: impl Into<String>,
        locale: Option<impl Into<String>>,
        value: impl Into<String>,
    ) -> Self {
        Line::KeyValue(KeyValue {
            key: key.into(),
            locale: locale.map(Into::into),
            value: value.into(),
        })
    }

    pub fn as_key_value(&self) -> Option<&KeyValue> {
        match self {
            Line::KeyValue(kv) => Some(kv),
            Line::Comment { .. } => None,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Line::Comment { .. })
    }

    /// Key of the line, `None` for comments.
    pub fn key(&self) -> Option<&str> {
        self.as_key_value().map(|kv| kv.key.as_str())
    }

    /// Locale tag of the line, `None` for comments and untagged keys.
    pub fn locale(&self) -> Option<&str> {
        self.as_key_value().and_then(|kv| kv.locale.as_deref())
    }

    /// The unescaped value, or the raw text of a comment.
    pub fn value(&self) -> &str {
        match self {
            Line::Comment { text } => text,
            Line::KeyValue(kv) => &kv.value,
        }
    }
}

/// A `key[locale]=value` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyValue {
    /// Case-sensitive key, restricted to ASCII letters, digits and `-`.
    pub key: String,

    /// Raw text between the brackets of `key[locale]`, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub locale: Option<String>,

    /// Unescaped value.
    pub value: String,
}

/// Returns `true` for the characters allowed in a key: ASCII letters, digits and `-`.
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
