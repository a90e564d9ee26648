//! Traits for reading and writing theme files through files and streams.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Read, Write},
    path::Path,
};

use crate::{document::Document, error::Error, parser::parse};

/// A trait for parsing and writing a theme file from/to one stream or path.
///
/// # Example
///
/// ```rust,no_run
/// use themefile::{Document, traits::Parser};
/// let doc = Document::read_from("/usr/share/icons/hicolor/index.theme")?;
/// doc.write_to("index.theme.copy")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, decoding UTF-16 and dropping a byte order mark.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading theme file");

        let file = File::open(path).map_err(Error::Io)?;
        let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);
        Self::from_reader(BufReader::new(decoder))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl Parser for Document {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_str(&content)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.to_string().as_bytes())?;
        writer.flush().map_err(Error::Io)
    }

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(parse(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_and_to_writer() {
        let doc = Document::from_reader(Cursor::new("[A]\nk=v\n")).unwrap();
        assert_eq!(doc.get_string("A", "k"), Some("v"));

        let mut out = Vec::new();
        doc.to_writer(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[A]\nk=v\n");
    }

    #[test]
    fn test_from_bytes_reports_parse_errors() {
        let err = Document::from_bytes(b"[A]\nnot valid\n").unwrap_err();
        match err {
            Error::Parse(e) => assert_eq!(e.line(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_utf8_input_is_io_error() {
        let err = Document::from_bytes(&[b'k', b'=', 0xff, b'\n']).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_from_strips_bom_and_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("index.theme");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"[Icon Theme]\nName=Hicolor\n");
        std::fs::write(&input, bytes).unwrap();

        let doc = Document::read_from(&input).unwrap();
        assert_eq!(doc.get_string("Icon Theme", "Name"), Some("Hicolor"));

        let output = dir.path().join("copy.theme");
        doc.write_to(&output).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "[Icon Theme]\nName=Hicolor\n"
        );
    }

    #[test]
    fn test_read_from_decodes_utf16() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("utf16.theme");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "[Icon Theme]\nName[de]=Größe\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::write(&input, bytes).unwrap();

        let doc = Document::read_from(&input).unwrap();
        assert_eq!(doc.get_raw("Icon Theme", "Name", Some("de")), Some("Größe"));
    }

    #[test]
    fn test_read_from_missing_file() {
        let err = Document::read_from("/definitely/not/here.theme").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
