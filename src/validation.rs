/// Input validation for new bookmarks
use crate::bookmark_data::Bookmark;
use crate::error::ValidationError;

/// Validate raw input field values and build a Bookmark from them
///
/// Checks, in order:
/// 1. Trim both values; either one empty → `MissingField`
/// 2. URL must start with `http://` or `https://` → else `InvalidScheme`
///
/// The prefix match is case-sensitive, so `HTTPS://example.com` is rejected.
pub fn validate_bookmark(name: &str, url: &str) -> Result<Bookmark, ValidationError> {
    let name = name.trim();
    let url = url.trim();

    if name.is_empty() || url.is_empty() {
        return Err(ValidationError::MissingField);
    }

    if !has_web_scheme(url) {
        return Err(ValidationError::InvalidScheme);
    }

    Ok(Bookmark::new(name, url))
}

/// Check that an (already trimmed) URL starts with an http or https scheme
pub fn has_web_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_inputs() {
        let bookmark = validate_bookmark("  Example ", "\thttps://example.com  ").unwrap();

        assert_eq!(bookmark, Bookmark::new("Example", "https://example.com"));
    }

    #[test]
    fn test_validate_missing_fields() {
        assert_eq!(validate_bookmark("", "https://a.com"), Err(ValidationError::MissingField));
        assert_eq!(validate_bookmark("A", ""), Err(ValidationError::MissingField));
        assert_eq!(validate_bookmark("   ", "https://a.com"), Err(ValidationError::MissingField));
        assert_eq!(validate_bookmark("A", " \n "), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_missing_field_checked_before_scheme() {
        assert_eq!(validate_bookmark("", "ftp://x.com"), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_validate_invalid_scheme() {
        assert_eq!(validate_bookmark("Bad", "ftp://x.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_bookmark("Bad", "example.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_bookmark("Bad", "http:/example.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_bookmark("Bad", "HTTPS://example.com"), Err(ValidationError::InvalidScheme));
        assert_eq!(validate_bookmark("Bad", "see https://example.com"), Err(ValidationError::InvalidScheme));
    }

    #[test]
    fn test_has_web_scheme() {
        assert!(has_web_scheme("http://example.com"));
        assert!(has_web_scheme("https://example.com/path?q=1"));
        assert!(has_web_scheme("https://"));
        assert!(!has_web_scheme("mailto:someone@example.com"));
        assert!(!has_web_scheme(""));
    }
}
