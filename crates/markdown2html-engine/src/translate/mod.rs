//! # Line Translation
//!
//! Phase 1 of conversion: each line is translated on its own, with no
//! reference to the lines around it.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. **Heading** (`# ` .. `###### `) → `<hN>…</hN>`
//! 2. **Unordered item** (`- `) → `<li>…</li>`, tagged for a `<ul>` block
//! 3. **Ordered item** (`* `) → `<li>…</li>`, tagged for an `<ol>` block
//! 4. **Inline substitution** (bold, emphasis, digest, strip) on anything else
//!
//! Headings and list items are emitted verbatim. A line that is blank after
//! substitution is tagged [`LineTag::Blank`] with an empty fragment.

pub mod inline;
pub mod kinds;

use kinds::{Heading, ListItem};

/// How the block accumulator should treat a translated line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// Regular output line (paragraph text or heading).
    Plain,
    /// Item belonging in a `<ul>` block.
    UnorderedItem,
    /// Item belonging in an `<ol>` block.
    OrderedItem,
    /// Empty or whitespace-only line.
    Blank,
}

/// HTML fragment for one input line plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub fragment: String,
    pub tag: LineTag,
}

impl Translated {
    pub fn plain(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            tag: LineTag::Plain,
        }
    }

    pub fn blank() -> Self {
        Self {
            fragment: String::new(),
            tag: LineTag::Blank,
        }
    }
}

/// Translates individual lines. Stateless; never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineTranslator;

impl LineTranslator {
    /// Translates one line. Trailing whitespace is expected to be stripped
    /// already.
    pub fn translate(&self, line: &str) -> Translated {
        if let Some(heading) = Heading::parse(line) {
            log::trace!("heading h{}: {line:?}", heading.level);
            return Translated::plain(heading.to_html());
        }

        if let Some(item) = ListItem::parse(line) {
            log::trace!("{} item: {line:?}", item.kind.tag_name());
            return Translated {
                fragment: item.to_html(),
                tag: item.kind.line_tag(),
            };
        }

        let substituted = inline::substitute(line);
        if substituted.chars().all(is_line_space) {
            Translated::blank()
        } else {
            Translated::plain(substituted)
        }
    }
}

/// Whitespace for trimming and blank detection: Unicode whitespace plus the
/// ASCII separators `\x1c`..=`\x1f`.
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strips trailing [`is_line_space`] characters.
pub fn trim_line_end(line: &str) -> &str {
    line.trim_end_matches(is_line_space)
}
