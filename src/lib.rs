#![forbid(unsafe_code)]
//! Parser, writer and locale-aware reader for INI-like theme files.
//!
//! Theme files (`index.theme` and friends) are made of `[Section]` headers,
//! `key[locale]=value` lines, and `#` comments or blank lines that are kept
//! verbatim. A file parses into a [`Document`], which answers typed lookups
//! and writes itself back out in the same format.
//!
//! # Quick Start
//!
//! ```rust
//! use themefile::{LocalePreference, parse};
//!
//! let doc = parse("[Icon Theme]\nName=Hicolor\nName[de]=Hifarbe\nSize=48\n")?
//!     .with_locale(LocalePreference::from_locale_name("de_AT.UTF-8"));
//!
//! assert_eq!(doc.get_string("Icon Theme", "Name"), Some("Hicolor"));
//! assert_eq!(doc.get_locale_string("Icon Theme", "Name"), Some("Hifarbe"));
//! assert_eq!(doc.get_integer("Icon Theme", "Size"), Some(48));
//! assert_eq!(doc.to_string(), "[Icon Theme]\nName=Hicolor\nName[de]=Hifarbe\nSize=48\n");
//! # Ok::<(), themefile::ParseError>(())
//! ```
//!
//! # Features
//!
//! - Strict, line-numbered parse errors; the first bad line aborts the parse
//! - Lossless for structure: comments, order and duplicates are preserved
//! - Localized lookups with `full → primary → untagged` fallback
//! - In-memory [`DocumentBuilder`] that only produces writable documents

pub mod builder;
pub mod document;
pub mod error;
pub mod escape;
pub mod locale;
pub mod parser;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    builder::DocumentBuilder,
    document::Document,
    error::{Error, ParseError, ParseErrorKind},
    locale::LocalePreference,
    parser::parse,
    types::{KeyValue, Line, Section},
};
