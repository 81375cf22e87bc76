use heck::AsKebabCase;

/// Output file name for a template type, e.g. `WelcomeLetter` -> `welcome-letter.docx`.
pub fn file_name_from_type_name(type_name: &str) -> String {
    format!("{}.docx", AsKebabCase(type_name))
}
