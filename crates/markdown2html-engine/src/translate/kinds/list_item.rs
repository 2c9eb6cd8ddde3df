use crate::translate::LineTag;

/// Which list wrapper an item belongs to.
///
/// `-` items go into `<ul>` and `*` items into `<ol>`. This is the inverse of
/// the usual Markdown reading of `*`, and it is kept that way on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// Wrapper element name, `ul` or `ol`.
    pub fn tag_name(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    pub fn open_tag(self) -> String {
        format!("<{}>", self.tag_name())
    }

    pub fn close_tag(self) -> String {
        format!("</{}>", self.tag_name())
    }

    pub fn line_tag(self) -> LineTag {
        match self {
            ListKind::Unordered => LineTag::UnorderedItem,
            ListKind::Ordered => LineTag::OrderedItem,
        }
    }
}

/// A single list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    pub content: &'a str,
}

impl<'a> ListItem<'a> {
    pub const UNORDERED_PREFIX: &'static str = "- ";
    pub const ORDERED_PREFIX: &'static str = "* ";

    pub fn parse(line: &'a str) -> Option<Self> {
        if let Some(content) = line.strip_prefix(Self::UNORDERED_PREFIX) {
            return Some(Self {
                kind: ListKind::Unordered,
                content,
            });
        }
        line.strip_prefix(Self::ORDERED_PREFIX)
            .map(|content| Self {
                kind: ListKind::Ordered,
                content,
            })
    }

    /// Content is emitted verbatim, without inline substitution.
    pub fn to_html(&self) -> String {
        format!("<li>{}</li>", self.content)
    }
}
