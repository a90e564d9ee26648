//! Line-oriented parser for theme files.
//!
//! Every line is one of:
//!
//! - a section header, `[Name]`, with an escaped name;
//! - a comment (`#...`) or a whitespace-only line, kept verbatim;
//! - a `key[locale]=value` pair, with an escaped value.
//!
//! The first malformed line aborts the parse.

use crate::{
    document::Document,
    error::{ParseError, ParseErrorKind},
    escape::unescape,
    types::{KeyValue, Line, Section, is_key_char},
};

/// Parses `text` into a [`Document`].
///
/// # Example
///
/// ```rust
/// let doc = themefile::parse("[Icon Theme]\nName=Hicolor\n")?;
/// assert_eq!(doc.get_string("Icon Theme", "Name"), Some("Hicolor"));
/// # Ok::<(), themefile::ParseError>(())
/// ```
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let mut parser = LineParser::new();

    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        if let Err(error) = parser.parse_line(line) {
            tracing::debug!(%error, "Failed to parse theme file");
            return Err(error);
        }
    }

    let sections = parser.finish();
    tracing::debug!(
        sections = sections.len(),
        lines = sections.iter().map(|s| s.lines.len()).sum::<usize>(),
        "Parsed theme file"
    );
    Ok(Document::from_sections_unchecked(sections))
}

/// Parser state: the sections built so far and the current line number.
struct LineParser {
    sections: Vec<Section>,
    line_nr: usize,
}

impl LineParser {
    fn new() -> Self {
        // Anything before the first header lands in the unnamed preamble.
        LineParser {
            sections: vec![Section::preamble()],
            line_nr: 1,
        }
    }

    fn finish(self) -> Vec<Section> {
        self.sections
    }

    fn parse_line(&mut self, line: &str) -> Result<(), ParseError> {
        if line.starts_with('[') {
            self.parse_section_start(line)?;
        } else if is_blank(line) || line.starts_with('#') {
            self.current().lines.push(Line::comment(line));
        } else {
            let kv = self.parse_key_value(line)?;
            self.current().lines.push(Line::KeyValue(kv));
        }
        self.line_nr += 1;
        Ok(())
    }

    fn parse_section_start(&mut self, line: &str) -> Result<(), ParseError> {
        if line.len() <= 2 || !line.ends_with(']') {
            return Err(self.error(
                ParseErrorKind::InvalidSyntax,
                "Invalid syntax for section header",
            ));
        }

        let name = unescape(&line[1..line.len() - 1]).ok_or_else(|| {
            self.error(
                ParseErrorKind::InvalidEscapes,
                "Invalid escaping in section name",
            )
        })?;

        self.open_section(name);
        Ok(())
    }

    fn open_section(&mut self, name: String) {
        tracing::trace!(section = %name, line = self.line_nr, "Opening section");

        if let [preamble] = self.sections.as_mut_slice() {
            if preamble.is_preamble() && preamble.lines.is_empty() {
                // Nothing before the first header: reuse the empty preamble.
                preamble.name = Some(name);
                return;
            }
        }

        self.sections.push(Section::new(name));
    }

    fn parse_key_value(&self, line: &str) -> Result<KeyValue, ParseError> {
        let bytes = line.as_bytes();
        let end = bytes.len();

        let key_end = line.find(|c: char| !is_key_char(c)).unwrap_or(end);
        if key_end == 0 {
            return Err(self.error(ParseErrorKind::InvalidSyntax, "Empty key name"));
        }
        let key = &line[..key_end];
        let mut pos = key_end;

        let mut locale = None;
        if pos < end && bytes[pos] == b'[' {
            let locale_start = pos + 1;
            let locale_len = line[locale_start..].find(']').ok_or_else(|| {
                self.error(
                    ParseErrorKind::InvalidSyntax,
                    "Unterminated locale specification in key",
                )
            })?;
            locale = Some(&line[locale_start..locale_start + locale_len]);
            pos = locale_start + locale_len + 1;
        }

        pos = skip_spaces(bytes, pos);

        if pos < end && bytes[pos] != b'=' {
            return Err(self.error(
                ParseErrorKind::InvalidChars,
                "Invalid characters in key name",
            ));
        }
        if pos == end {
            return Err(self.error(
                ParseErrorKind::InvalidSyntax,
                "No '=' in key/value pair",
            ));
        }

        let value_start = skip_spaces(bytes, pos + 1);
        let value = unescape(&line[value_start..]).ok_or_else(|| {
            self.error(ParseErrorKind::InvalidEscapes, "Invalid escaping in value")
        })?;

        Ok(KeyValue {
            key: key.to_string(),
            locale: locale.map(str::to_string),
            value,
        })
    }

    fn current(&mut self) -> &mut Section {
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    fn error(&self, kind: ParseErrorKind, message: &str) -> ParseError {
        let section = self.sections.last().and_then(|s| s.name.as_deref());
        ParseError::new(kind, self.line_nr, section, message)
    }
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_whitespace())
}

fn skip_spaces(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos] == b' ' {
        pos += 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(text: &str) -> ParseError {
        match parse(text) {
            Ok(doc) => panic!("expected an error, parsed {:?}", doc),
            Err(e) => e,
        }
    }

    #[test]
    fn test_parse_single_section() {
        let doc = parse("[Foo]\nkey=hello\n").unwrap();
        let sections: Vec<_> = doc.iter().collect();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name.as_deref(), Some("Foo"));
        assert_eq!(
            sections[0].lines,
            vec![Line::key_value("key", None::<String>, "hello")]
        );
    }

    #[test]
    fn test_preamble_holds_leading_comments() {
        let doc = parse("# leading\n\n[A]\nk=v").unwrap();
        let sections: Vec<_> = doc.iter().collect();
        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_preamble());
        assert_eq!(
            sections[0].lines,
            vec![Line::comment("# leading"), Line::comment("")]
        );
        assert_eq!(sections[1].name.as_deref(), Some("A"));
    }

    #[test]
    fn test_key_value_without_section_stays_in_preamble() {
        let doc = parse("key=a\\sb\n").unwrap();
        let sections: Vec<_> = doc.iter().collect();
        assert_eq!(sections.len(), 1);
        assert!(sections[0].is_preamble());
        assert_eq!(sections[0].lines[0].value(), "a b");
    }

    #[test]
    fn test_empty_input_has_empty_preamble() {
        let doc = parse("").unwrap();
        let sections: Vec<_> = doc.iter().collect();
        assert_eq!(sections, vec![&Section::preamble()]);
    }

    #[test]
    fn test_trailing_newline_does_not_add_a_line() {
        let doc = parse("[A]\n\n").unwrap();
        let section = doc.section("A").unwrap();
        assert_eq!(section.lines, vec![Line::comment("")]);
    }

    #[test]
    fn test_second_header_appends_section() {
        let doc = parse("[A]\n[B]\n").unwrap();
        let names: Vec<_> = doc.sections().collect();
        assert_eq!(names, vec![Some("A"), Some("B")]);
    }

    #[test]
    fn test_section_name_is_unescaped() {
        let doc = parse("[Tab\\tName]\n").unwrap();
        let names: Vec<_> = doc.sections().collect();
        assert_eq!(names, vec![Some("Tab\tName")]);
    }

    #[test]
    fn test_locale_and_spaces_around_equals() {
        let doc = parse("[S]\nName[de_DE@euro]   =   Wert mit Leerzeichen \n").unwrap();
        let kv = doc.section("S").unwrap().lines[0].as_key_value().unwrap();
        assert_eq!(kv.key, "Name");
        assert_eq!(kv.locale.as_deref(), Some("de_DE@euro"));
        assert_eq!(kv.value, "Wert mit Leerzeichen ");
    }

    #[test]
    fn test_leading_escaped_space_in_value() {
        let doc = parse("[S]\nk=\\shello\n").unwrap();
        assert_eq!(doc.get_string("S", "k"), Some(" hello"));
    }

    #[test]
    fn test_whitespace_only_line_is_comment() {
        let doc = parse("[S]\n \t \nk=v\n").unwrap();
        assert_eq!(doc.section("S").unwrap().lines[0], Line::comment(" \t "));
    }

    #[test]
    fn test_unterminated_header() {
        let err = parse_err("[Bad\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.line(), 1);
        assert_eq!(err.section(), None);
    }

    #[test]
    fn test_header_too_short() {
        let err = parse_err("[]\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_header_with_bad_escape() {
        let err = parse_err("[A\\x]\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidEscapes);
    }

    #[test]
    fn test_bad_value_escape_reports_section_and_line() {
        let err = parse_err("[Icons]\n# c\nk=v\\q\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidEscapes);
        assert_eq!(err.line(), 3);
        assert_eq!(err.section(), Some("Icons"));
        assert_eq!(
            err.to_string(),
            "Error in section Icons at line 3: Invalid escaping in value"
        );
    }

    #[test]
    fn test_empty_key() {
        let err = parse_err("=value\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.message, "Empty key name");
    }

    #[test]
    fn test_indented_comment_is_not_a_comment() {
        let err = parse_err("  # indented\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
    }

    #[test]
    fn test_unterminated_locale() {
        let err = parse_err("Name[de=x\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.message, "Unterminated locale specification in key");
    }

    #[test]
    fn test_invalid_chars_before_equals() {
        let err = parse_err("k\\x=v\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidChars);

        let err = parse_err("two words=v\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidChars);

        let err = parse_err("Name[de]x=v\n");
        assert_eq!(err.kind, ParseErrorKind::InvalidChars);
    }

    #[test]
    fn test_missing_equals() {
        let err = parse_err("[S]\nkey   \n");
        assert_eq!(err.kind, ParseErrorKind::InvalidSyntax);
        assert_eq!(err.message, "No '=' in key/value pair");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_header_error_reports_previous_section() {
        let err = parse_err("[A]\nk=v\n[B\n");
        assert_eq!(err.line(), 3);
        assert_eq!(err.section(), Some("A"));
    }

    #[test]
    fn test_carriage_return_is_kept_in_value() {
        let doc = parse("[S]\nk=v\r\n").unwrap();
        assert_eq!(doc.get_string("S", "k"), Some("v\r"));
    }
}
