//! Locale preference used by localized lookups.
//!
//! A preference is a pair of tags: the full one (`en_US`) and the primary
//! language alone (`en`). Localized lookups try the full tag, then the
//! primary tag, then the untagged key.

use std::env;

use unic_langid::LanguageIdentifier;

/// Environment variables consulted for the messages locale, in priority order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Name of the locale used when nothing else is configured.
const DEFAULT_LOCALE: &str = "C";

/// The (full, primary) locale pair used by [`crate::Document::get_locale_string`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalePreference {
    full: Option<String>,
    primary: Option<String>,
}

impl LocalePreference {
    pub fn new(full: Option<String>, primary: Option<String>) -> Self {
        LocalePreference { full, primary }
    }

    /// A preference with no tags; localized lookups only see untagged keys.
    pub fn none() -> Self {
        LocalePreference::default()
    }

    /// Derives the preference from a POSIX locale name such as `de_AT.UTF-8@euro`.
    ///
    /// The codeset and modifier are dropped. A name with a territory yields
    /// both tags (`de_AT`, `de`); a bare language yields only the full tag.
    pub fn from_locale_name(name: &str) -> Self {
        let tag = name.split('.').next().unwrap_or_default();
        let tag = tag.split('@').next().unwrap_or_default();
        let tag = if tag.is_empty() { DEFAULT_LOCALE } else { tag };

        match tag.split_once('_') {
            Some((primary, _)) => LocalePreference {
                full: Some(tag.to_string()),
                primary: Some(primary.to_string()),
            },
            None => LocalePreference {
                full: Some(tag.to_string()),
                primary: None,
            },
        }
    }

    /// Reads the messages locale from `LC_ALL`, `LC_MESSAGES` or `LANG`,
    /// falling back to `C`.
    pub fn from_env() -> Self {
        let found = LOCALE_ENV_VARS.iter().find_map(|var| {
            env::var(var)
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| (*var, value))
        });

        match found {
            Some((var, value)) => {
                tracing::debug!(variable = var, locale = %value, "Detected messages locale");
                Self::from_locale_name(&value)
            }
            None => {
                tracing::debug!("No locale configured in the environment, using C");
                Self::from_locale_name(DEFAULT_LOCALE)
            }
        }
    }

    pub fn full(&self) -> Option<&str> {
        self.full.as_deref()
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Parses the full tag as a BCP 47 language identifier.
    ///
    /// Returns `None` for `C`/`POSIX` and for tags that are not valid identifiers.
    pub fn language_identifier(&self) -> Option<LanguageIdentifier> {
        match self.full() {
            None | Some("C") | Some("POSIX") => None,
            Some(tag) => tag.replace('_', "-").parse().ok(),
        }
    }

    /// Tags to try, most specific first, ending with the untagged lookup.
    pub(crate) fn candidates(&self) -> impl Iterator<Item = Option<&str>> {
        self.full()
            .map(Some)
            .into_iter()
            .chain(self.primary().map(Some))
            .chain(std::iter::once(None))
    }
}
