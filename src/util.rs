use crate::error::SummaryError;

pub const DEFAULT_ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";
pub const DEFAULT_WRAP_WIDTH: u16 = 80;
pub const PROGRAM_NAME: &str = "wikitak";

/// Canonical page form: spaces become underscores and the first character is upper-cased.
pub fn normalize_title(raw: &str) -> Result<String, SummaryError> {
    let underscored = raw.trim().replace(' ', "_");
    let mut chars = underscored.chars();
    let Some(first) = chars.next() else {
        return Err(SummaryError::EmptyTitle);
    };

    let mut normalized = String::with_capacity(underscored.len());
    normalized.extend(first.to_uppercase());
    normalized.push_str(chars.as_str());
    Ok(normalized)
}

pub fn display_title(canonical: &str) -> String {
    canonical.replace('_', " ")
}

pub fn article_url(base_url: &str, canonical: &str) -> String {
    format!("{base_url}{canonical}")
}

pub fn invocation_line(canonical: &str) -> String {
    format!("{PROGRAM_NAME} \"{canonical}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_title_underscores_and_capitalizes() {
        assert_eq!(normalize_title("new york city").unwrap(), "New_york_city");
        assert_eq!(normalize_title("George").unwrap(), "George");
        assert_eq!(normalize_title("  ada lovelace ").unwrap(), "Ada_lovelace");
    }

    #[test]
    fn normalize_title_handles_non_ascii_first_character() {
        assert_eq!(normalize_title("éire").unwrap(), "Éire");
    }

    #[test]
    fn normalize_title_rejects_blank_input() {
        assert!(matches!(normalize_title("   "), Err(SummaryError::EmptyTitle)));
    }

    #[test]
    fn display_title_and_url_use_canonical_form() {
        assert_eq!(display_title("New_York_City"), "New York City");
        assert_eq!(
            article_url(DEFAULT_ARTICLE_BASE_URL, "George_(given_name)"),
            "https://en.wikipedia.org/wiki/George_(given_name)"
        );
        assert_eq!(
            invocation_line("George_(given_name)"),
            "wikitak \"George_(given_name)\""
        );
    }
}
