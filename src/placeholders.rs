use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\s*\}\}")
            .expect("placeholder pattern is valid")
    })
}

/// Wraps a placeholder name in double braces, e.g. `email` -> `{{email}}`.
pub fn token(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Collects the distinct placeholder names found across `corpus`.
///
/// Dotted names such as `debtToIncomeRatio.ratio` are kept whole; resolving
/// the nested path is the filler's job.
pub fn collect_placeholders<S: AsRef<str>>(corpus: &[S]) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for text in corpus {
        for cap in token_pattern().captures_iter(text.as_ref()) {
            found.insert(cap[1].to_string());
        }
    }
    found
}
