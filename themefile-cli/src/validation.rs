use std::path::Path;

use themefile::LocalePreference;

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    if let Some(parent) = path_obj.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create output directory: {}", e))?;
        }
    }

    Ok(())
}

/// Validate a POSIX locale name (`de_AT.UTF-8@euro`, `C`, ...) and turn it
/// into a lookup preference.
///
/// Anything other than `C`/`POSIX` must name a valid BCP 47 language once the
/// codeset and modifier are stripped.
pub fn validate_locale(name: &str) -> Result<LocalePreference, String> {
    if name.trim().is_empty() {
        return Err("Locale cannot be empty".to_string());
    }

    let preference = LocalePreference::from_locale_name(name);
    match preference.full() {
        Some("C") | Some("POSIX") => Ok(preference),
        _ if preference.language_identifier().is_some() => Ok(preference),
        _ => Err(format!(
            "Invalid locale: {}. Expected a locale name such as de_AT.UTF-8, pt_BR or C",
            name
        )),
    }
}
