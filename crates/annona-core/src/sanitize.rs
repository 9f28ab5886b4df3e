//! Free-text sanitization helpers.
//!
//! Catalog descriptions frequently arrive as HTML fragments with entity
//! escapes and hard line breaks; person fields arrive as unstructured full
//! names. These helpers normalize both into the plain forms the Schema.org
//! output uses.

use scraper::Html;

/// A full name split into its Schema.org components.
///
/// Splitting is whitespace-based and loses no characters: joining `given`
/// and `family` with a single space round-trips to the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    /// First whitespace-separated token.
    pub given: String,
    /// Remaining tokens joined with single spaces; empty for one-token names.
    pub family: String,
}

/// Strips HTML markup from free text and normalizes whitespace.
///
/// The text is parsed as an HTML fragment; tags are dropped, entities are
/// decoded, and every run of whitespace (including `\r`/`\n`) collapses to a
/// single space with the ends trimmed. Blank input yields an empty string.
///
/// Applying the function to its own output is a no-op, so sanitized text can
/// safely pass through again.
///
/// # Examples
///
/// ```
/// use annona_core::sanitize::strip_html;
///
/// assert_eq!(strip_html("<p>Hello<br/>World</p>"), "Hello World");
/// assert_eq!(strip_html("Me &amp; You"), "Me & You");
/// assert_eq!(strip_html(""), "");
/// ```
pub fn strip_html(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    // Tag boundaries become word boundaries: text nodes are joined with a
    // space before the whitespace collapse.
    let fragment = Html::parse_fragment(text);
    let joined = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a full name into given and family components.
///
/// The first whitespace-separated token becomes the given name; everything
/// after it, joined with single spaces, becomes the family name. A
/// single-token name leaves the family empty, and whitespace-only input
/// leaves both components empty.
///
/// # Examples
///
/// ```
/// use annona_core::sanitize::split_name;
///
/// let name = split_name("Jane Q. Public");
/// assert_eq!(name.given, "Jane");
/// assert_eq!(name.family, "Q. Public");
/// ```
pub fn split_name(full_name: &str) -> PersonName {
    let mut parts = full_name.split_whitespace();
    let given = parts.next().unwrap_or_default().to_string();
    let family = parts.collect::<Vec<_>>().join(" ");
    PersonName { given, family }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        let input = "<div class=\"row\">Hello <br> world! <p>This is a test.</p></div>";
        assert_eq!(strip_html(input), "Hello world! This is a test.");
    }

    #[test]
    fn test_strip_html_simple_paragraph() {
        assert_eq!(strip_html("<p>Hello<br/>World</p>"), "Hello World");
    }

    #[test]
    fn test_strip_html_newlines() {
        assert_eq!(strip_html("Line 1\r\nLine 2\nLine 3"), "Line 1 Line 2 Line 3");
    }

    #[test]
    fn test_strip_html_entities() {
        assert_eq!(strip_html("Me &amp; You &quot;Test&quot;"), "Me & You \"Test\"");
    }

    #[test]
    fn test_strip_html_collapses_spaces() {
        assert_eq!(strip_html("  Too    many    spaces   "), "Too many spaces");
    }

    #[test]
    fn test_strip_html_blank_input() {
        assert_eq!(strip_html(""), "");
        assert_eq!(strip_html("   \n\t  "), "");
    }

    #[test]
    fn test_strip_html_plain_text_unchanged() {
        assert_eq!(strip_html("Annual totals"), "Annual totals");
    }

    #[test]
    fn test_strip_html_idempotent() {
        let inputs = [
            "<p>Hello<br/>World</p>",
            "Me &amp; You",
            "Line 1\r\nLine 2",
            "  Too    many    spaces   ",
            "plain text",
            "<ul><li>one</li><li>two</li></ul>",
        ];
        for input in inputs {
            let once = strip_html(input);
            assert_eq!(strip_html(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_split_name_simple() {
        let name = split_name("John Doe");
        assert_eq!(name.given, "John");
        assert_eq!(name.family, "Doe");
    }

    #[test]
    fn test_split_name_middle() {
        let name = split_name("Jane Q. Public");
        assert_eq!(name.given, "Jane");
        assert_eq!(name.family, "Q. Public");
    }

    #[test]
    fn test_split_name_single_token() {
        let name = split_name("John");
        assert_eq!(name.given, "John");
        assert_eq!(name.family, "");
    }

    #[test]
    fn test_split_name_whitespace_only() {
        let name = split_name("   ");
        assert_eq!(name.given, "");
        assert_eq!(name.family, "");
    }

    #[test]
    fn test_split_name_round_trip() {
        for input in ["John Doe", "Jane Q. Public", "A B C D", "Single"] {
            let name = split_name(input);
            let rejoined = if name.family.is_empty() {
                name.given.clone()
            } else {
                format!("{} {}", name.given, name.family)
            };
            assert_eq!(rejoined, input.trim());
        }
    }

    #[test]
    fn test_split_name_trims_surrounding_whitespace() {
        let name = split_name("  John   Doe  ");
        assert_eq!(name.given, "John");
        assert_eq!(name.family, "Doe");
    }
}
