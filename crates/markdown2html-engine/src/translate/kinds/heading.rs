use std::sync::LazyLock;

use regex::Regex;

/// ATX heading: one to six `#` followed by exactly one space.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6}) (.*)").expect("HEADING_RE is a valid static regex pattern")
});

/// Heading line with its level and verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    /// 1 through 6.
    pub level: usize,
    pub content: &'a str,
}

impl<'a> Heading<'a> {
    /// Recognises a heading line. Runs of more than six markers, or a marker
    /// run not followed by a space, are not headings.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = HEADING_RE.captures(line)?;
        let level = caps.get(1)?.as_str().len();
        let content = caps.get(2).map_or("", |m| m.as_str());
        Some(Self { level, content })
    }

    pub fn to_html(&self) -> String {
        format!("<h{0}>{1}</h{0}>", self.level, self.content)
    }
}
