use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Letters, digits and underscores only
    /// - Valid: "john_doe", "user123", "_admin", "JohnDoe"
    /// - Invalid: "user-name", "user name", "josé"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();

    /// Regex for storage folder labels
    /// Flat path segments of alphanumerics, hyphens and underscores separated by `/`
    /// - Valid: "avatars", "posts/images", "group-covers"
    /// - Invalid: "/avatars", "posts/", "posts//images", "../etc"
    pub static ref FOLDER_REGEX: Regex =
        Regex::new(r"^[a-zA-Z0-9_-]+(?:/[a-zA-Z0-9_-]+)*$").unwrap();

    /// Absolute http(s) URL without whitespace, quotes or angle brackets
    pub static ref HTTP_URL_REGEX: Regex = Regex::new(r#"^https?://[^\s<>"]+$"#).unwrap();

    /// Brazilian mobile/landline in E.164 form
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+55\d{10,11}$").unwrap();

    /// Random PIX key (UUID, lowercase or uppercase hex)
    pub static ref RANDOM_KEY_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

/// Count digits in a document number, rejecting any other character except
/// the usual `.`, `-` and `/` separators
pub fn document_digits(value: &str) -> Option<usize> {
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | '-' | '/' => {}
            _ => return None,
        }
    }
    Some(digits)
}
