//! Conversion entry points tying the translator and the builder together.

use std::sync::LazyLock;

use regex::Regex;

use crate::blocks::HtmlBuilder;
use crate::translate::{LineTranslator, trim_line_end};

/// `\r\n`, a lone `\r` and `\n` all end a line.
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("LINE_BREAK_RE is a valid static regex pattern")
});

/// Separator placed between output lines. No trailing separator is added.
pub const LINE_SEPARATOR: &str = "\n";

/// Splits text into lines on any line break. A break at the very end does not
/// start an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK_RE.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Converts an ordered sequence of lines to an ordered sequence of HTML lines.
///
/// Lines are trimmed of trailing whitespace before translation.
pub fn convert_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let translator = LineTranslator;
    let mut builder = HtmlBuilder::new();

    for line in lines {
        builder.push(translator.translate(trim_line_end(line.as_ref())));
    }

    builder.finish()
}

/// Converts a whole Markdown document to HTML, joining output lines with `\n`.
pub fn convert_str(markdown: &str) -> String {
    convert_lines(split_lines(markdown)).join(LINE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn end_to_end_lines() {
        let out = convert_lines(["# Title", "- one", "- two", "Normal **text**.", ""]);
        assert_eq!(
            out,
            vec![
                "<h1>Title</h1>",
                "<ul>",
                "<li>one</li>",
                "<li>two</li>",
                "</ul>",
                "Normal <b>text</b>.",
                "<p>",
            ]
        );
    }

    #[test]
    fn end_to_end_string() {
        let html = convert_str("# Title\n- one\n- two\nNormal **text**.\n\n");
        assert_eq!(
            html,
            "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\nNormal <b>text</b>.\n<p>"
        );
    }

    #[test]
    fn unordered_then_ordered_has_no_gap() {
        let out = convert_lines(["- a", "- b", "* c"]);
        assert_eq!(
            out,
            vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>", "<ol>", "<li>c</li>", "</ol>"]
        );
    }

    #[test]
    fn whitespace_only_line_closes_list() {
        let out = convert_lines(["* a", "   ", "text"]);
        assert_eq!(out, vec!["<ol>", "<li>a</li>", "</ol>", "<p>", "text"]);
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        assert_eq!(convert_lines(["# Title  \r"]), vec!["<h1>Title</h1>"]);
        // "- " loses its space before translation and is no longer an item.
        assert_eq!(convert_lines(["- "]), vec!["-"]);
    }

    #[test]
    fn empty_document() {
        assert_eq!(convert_str(""), "");
    }

    #[test]
    fn split_lines_on_every_break_kind() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\r"), vec!["a", ""]);
        assert_eq!(split_lines(""), Vec::<&str>::new());
    }

    #[test]
    fn cr_only_input() {
        assert_eq!(
            convert_str("# Title\r- one\r- two\r"),
            "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn separator_only_line_is_paragraph() {
        assert_eq!(convert_lines(["- a", "\x1f"]), vec!["<ul>", "<li>a</li>", "</ul>", "<p>"]);
    }

    #[test]
    fn crlf_input() {
        assert_eq!(convert_str("- a\r\n- b\r\n"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    }
}
