//! HTML/script sanitization for user-supplied text
//!
//! Every free-text request field goes through [`clean_text`] before it is
//! validated. All markup is removed; the contents of `<script>` and `<style>`
//! elements are dropped entirely, other elements keep their text. The output
//! is plain text, so length limits apply to what the user typed.

use std::collections::HashSet;
use std::sync::LazyLock;

static TEXT_SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    builder
});

const MAX_CLEAN_PASSES: usize = 4;

/// Undo the escaping ammonia's serializer applies to text nodes
fn decode_text_entities(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Strip markup from a string and trim surrounding whitespace
///
/// The result is plain text, not HTML: `Tom & Jerry` stays as typed. Cleaning
/// repeats until stable so escaped markup cannot decode into live tags.
pub fn clean_text(input: &str) -> String {
    let mut text = input.to_string();
    for _ in 0..MAX_CLEAN_PASSES {
        let cleaned = decode_text_entities(&TEXT_SANITIZER.clean(&text).to_string());
        if cleaned == text {
            return text.trim().to_string();
        }
        text = cleaned;
    }
    // Still changing after the last pass: keep the escaped form
    TEXT_SANITIZER.clean(&text).to_string().trim().to_string()
}

/// Sanitize a required field in place
pub fn clean_field(field: &mut Option<String>) {
    if let Some(value) = field.as_mut() {
        *value = clean_text(value);
    }
}

/// Sanitize an optional field in place; blank values become `None`
pub fn clean_optional_field(field: &mut Option<String>) {
    clean_field(field);
    if field.as_deref().is_some_and(str::is_empty) {
        *field = None;
    }
}

/// Normalize an email address: sanitized, trimmed, lower-cased
pub fn clean_email(field: &mut Option<String>) {
    if let Some(value) = field.as_mut() {
        *value = clean_text(value).to_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tags_are_removed_with_content() {
        assert_eq!(clean_text("<script>alert('x')</script>hello"), "hello");
        assert_eq!(clean_text("hi<style>body{}</style> there"), "hi there");
    }

    #[test]
    fn test_markup_is_stripped_but_text_kept() {
        assert_eq!(clean_text("<b>bold</b> move"), "bold move");
        assert_eq!(clean_text("<a href=\"javascript:x\">link</a>"), "link");
    }

    #[test]
    fn test_ampersands_and_angle_brackets_stay_plain_text() {
        assert_eq!(clean_text("Tom & Jerry <3"), "Tom & Jerry <3");
        assert_eq!(clean_text("a < b > c"), "a < b > c");
    }

    #[test]
    fn test_escaped_markup_is_stripped_too() {
        assert_eq!(
            clean_text("&lt;script&gt;alert(1)&lt;/script&gt;hello"),
            "hello"
        );
    }

    #[test]
    fn test_plain_text_is_trimmed_only() {
        assert_eq!(clean_text("  just text  "), "just text");
    }

    #[test]
    fn test_optional_blank_becomes_none() {
        let mut field = Some("<script>x</script>   ".to_string());
        clean_optional_field(&mut field);
        assert_eq!(field, None);

        let mut kept = Some(" Lisbon ".to_string());
        clean_optional_field(&mut kept);
        assert_eq!(kept.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn test_email_is_lowercased() {
        let mut email = Some(" Ana@Flux.APP ".to_string());
        clean_email(&mut email);
        assert_eq!(email.as_deref(), Some("ana@flux.app"));
    }
}
