use themefile::{Document, LocalePreference};

/// How `get` picks among the localized variants of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleMode {
    /// Only the untagged value.
    Untagged,
    /// Fallback through the given preference.
    Preference(LocalePreference),
    /// Fallback through the locale of the environment.
    Environment,
}

/// Looks up a value the way the `get` command does.
///
/// With `integer` set the value is printed through the permissive integer
/// conversion, which only applies to untagged values.
pub fn lookup(
    doc: &Document,
    section: &str,
    key: &str,
    mode: &LocaleMode,
    integer: bool,
) -> Result<String, String> {
    let not_found = || format!("Key not found: [{}] {}", section, key);

    if integer {
        return doc
            .get_integer(section, key)
            .map(|n| n.to_string())
            .ok_or_else(not_found);
    }

    let value = match mode {
        LocaleMode::Untagged => doc.get_string(section, key),
        LocaleMode::Preference(preference) => doc.get_locale_string_with(section, key, preference),
        LocaleMode::Environment => doc.get_locale_string(section, key),
    };

    value.map(str::to_string).ok_or_else(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        themefile::parse("[Icon Theme]\nName=Hicolor\nName[de]=Hifarbe\nSize=48px\n").unwrap()
    }

    #[test]
    fn test_lookup_untagged_and_localized() {
        let doc = sample();
        assert_eq!(
            lookup(&doc, "Icon Theme", "Name", &LocaleMode::Untagged, false),
            Ok("Hicolor".to_string())
        );
        let de = LocaleMode::Preference(LocalePreference::from_locale_name("de_DE"));
        assert_eq!(
            lookup(&doc, "Icon Theme", "Name", &de, false),
            Ok("Hifarbe".to_string())
        );
    }

    #[test]
    fn test_lookup_integer() {
        let doc = sample();
        assert_eq!(
            lookup(&doc, "Icon Theme", "Size", &LocaleMode::Untagged, true),
            Ok("48".to_string())
        );
    }

    #[test]
    fn test_lookup_missing() {
        let doc = sample();
        let err = lookup(&doc, "Icon Theme", "Nope", &LocaleMode::Untagged, false).unwrap_err();
        assert_eq!(err, "Key not found: [Icon Theme] Nope");
        assert!(lookup(&doc, "Other", "Size", &LocaleMode::Untagged, true).is_err());
    }
}
