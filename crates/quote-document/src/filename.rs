//! Output file naming.

/// Used when the project name sanitizes to nothing.
pub const FALLBACK_PROJECT_NAME: &str = "Project";

/// Keeps ASCII word characters, turning each whitespace run into one `_`.
///
/// Every other character is dropped outright, so `"E-commerce"` becomes
/// `"Ecommerce"`.
pub fn sanitize_project_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
            in_space = false;
        }
    }

    out
}

/// `Quote_<sanitized project name>.pdf`.
pub fn quote_file_name(project_name: &str) -> String {
    let sanitized = sanitize_project_name(project_name);
    let stem = if sanitized.is_empty() {
        FALLBACK_PROJECT_NAME
    } else {
        sanitized.as_str()
    };
    format!("Quote_{stem}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_punctuation_and_joins_words() {
        assert_eq!(sanitize_project_name("Sito Web E-commerce"), "Sito_Web_Ecommerce");
        assert_eq!(sanitize_project_name("App  mobile\t2.0"), "App_mobile_20");
        assert_eq!(sanitize_project_name("already_snake"), "already_snake");
    }

    #[test]
    fn test_sanitize_drops_non_ascii_letters() {
        assert_eq!(sanitize_project_name("Caffè Città"), "Caff_Citt");
    }

    #[test]
    fn test_punctuation_removal_can_merge_spaces() {
        // The dash goes first, leaving one whitespace run.
        assert_eq!(sanitize_project_name("a - b"), "a_b");
    }

    #[test]
    fn test_quote_file_name() {
        assert_eq!(quote_file_name("Sito Web E-commerce"), "Quote_Sito_Web_Ecommerce.pdf");
        assert_eq!(quote_file_name("Gestionale"), "Quote_Gestionale.pdf");
    }

    #[test]
    fn test_quote_file_name_falls_back() {
        assert_eq!(quote_file_name(""), "Quote_Project.pdf");
        assert_eq!(quote_file_name("€!?"), "Quote_Project.pdf");
    }
}
