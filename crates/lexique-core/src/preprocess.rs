use unicode_normalization::UnicodeNormalization;

/// Normalize a user-typed keyword before matching.
///
/// NFKC folds full-width Latin letters (common when typing through a
/// Chinese IME) onto their ASCII forms so they match the French data.
pub fn normalize_keyword(raw: &str) -> String {
    let text = raw.trim();

    if text.is_empty() {
        return String::new();
    }

    text.nfkc().collect::<String>().trim().to_string()
}
