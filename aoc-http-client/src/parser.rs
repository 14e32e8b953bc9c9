//! HTML puzzle page parsing

use scraper::{Html, Selector};
use std::cell::OnceCell;

/// Selector for the example block of a puzzle page
const EXAMPLE_SELECTOR: &str = "pre > code";

/// Parser for puzzle pages with a cached selector
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    example_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with an uninitialized cache
    pub fn new() -> Self {
        Self {
            example_selector: OnceCell::new(),
        }
    }

    /// Get or compile the example selector
    fn example_selector(&self) -> &Selector {
        self.example_selector
            .get_or_init(|| Selector::parse(EXAMPLE_SELECTOR).unwrap())
    }

    /// Extract the text of the first `pre > code` element in document order
    ///
    /// Returns an empty string when the page has no such element.
    pub fn extract_example(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document
            .select(self.example_selector())
            .next()
            .map(|code| code.text().collect::<String>())
            .unwrap_or_default()
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the example input from a puzzle page
///
/// The example is the text content of the first `code` element that is a
/// direct child of a `pre` element. Text of nested inline elements (such as
/// `<em>`) is included and HTML entities are decoded. A page without an
/// example yields an empty string.
///
/// # Example
///
/// ```
/// use aoc_http_client::extract_example;
///
/// let html = "<main><pre><code>1abc2\npqr3stu8vwx\n</code></pre></main>";
/// assert_eq!(extract_example(html), "1abc2\npqr3stu8vwx\n");
/// assert_eq!(extract_example("<p>no example here</p>"), "");
/// ```
pub fn extract_example(html: &str) -> String {
    ResponseParser::new().extract_example(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_example() {
        let html = r#"<html><body><pre><code>EXAMPLE</code></pre></body></html>"#;
        assert_eq!(extract_example(html), "EXAMPLE");
    }

    #[test]
    fn test_missing_example_is_empty() {
        let html = r#"<html><body><main><p>No example today.</p></main></body></html>"#;
        assert_eq!(extract_example(html), "");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_example(""), "");
    }

    #[test]
    fn test_first_match_wins() {
        let html = r#"<article>
            <pre><code>first
</code></pre>
            <p>then</p>
            <pre><code>second
</code></pre>
        </article>"#;
        assert_eq!(extract_example(html), "first\n");
    }

    #[test]
    fn test_code_outside_pre_is_skipped() {
        let html = r#"<p>Inline <code>not this</code> text</p><pre><code>this one</code></pre>"#;
        assert_eq!(extract_example(html), "this one");
    }

    #[test]
    fn test_code_not_direct_child_is_skipped() {
        let html = r#"<pre><span><code>nested</code></span></pre><pre><code>direct</code></pre>"#;
        assert_eq!(extract_example(html), "direct");
    }

    #[test]
    fn test_nested_inline_tags_keep_text() {
        let html = r#"<pre><code>467..<em>114</em>..
...*......
</code></pre>"#;
        assert_eq!(extract_example(html), "467..114..\n...*......\n");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = r#"<pre><code>a -&gt; b &amp;&amp; c &lt; d</code></pre>"#;
        assert_eq!(extract_example(html), "a -> b && c < d");
    }

    #[test]
    fn test_malformed_html() {
        let parser = ResponseParser::new();
        let html = r#"<html><body><pre><code>Unclosed tag"#;
        // scraper is lenient and still builds the element tree
        assert_eq!(parser.extract_example(html), "Unclosed tag");
    }

    #[test]
    fn test_parser_reuses_selector() {
        let parser = ResponseParser::new();
        assert_eq!(parser.extract_example("<pre><code>one</code></pre>"), "one");
        assert_eq!(parser.extract_example("<pre><code>two</code></pre>"), "two");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_example_text_is_extracted_verbatim(
            // Text without HTML special characters so it survives parsing unchanged
            example in "[a-zA-Z0-9 .#*,=\\n]{1,200}",
            prefix in "[a-zA-Z0-9 .,!?]{0,100}",
        ) {
            let html = format!(
                r#"<html><body><main><p>{}</p><pre><code>{}</code></pre></main></body></html>"#,
                prefix, example
            );

            let extracted = extract_example(&html);

            prop_assert_eq!(extracted, example);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_pages_without_pre_code_yield_empty(
            text_content in "[a-zA-Z0-9 .,!?\\n]{1,200}",
        ) {
            let html = format!(
                r#"<html><body><main><p>{}</p><code>{}</code><pre>{}</pre></main></body></html>"#,
                text_content, text_content, text_content
            );

            prop_assert_eq!(extract_example(&html), "");
        }
    }
}
