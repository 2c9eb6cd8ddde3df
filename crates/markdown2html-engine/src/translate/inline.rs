//! Inline substitutions for lines that are neither headings nor list items.

use std::borrow::Cow;

use super::kinds::{Bold, Emphasis, HashDigest, StripC};

/// A global, leftmost-first, non-overlapping rewrite of one line.
///
/// Unmatched delimiters are left untouched, so every rule is total.
pub trait InlineRule {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// Rules in application order. Later rules see the output of earlier ones,
/// e.g. `[[**x**]]` hashes `<b>x</b>`.
pub const RULES: [&dyn InlineRule; 4] = [&Bold, &Emphasis, &HashDigest, &StripC];

/// Pattern capturing the shortest span between `open` and `close`.
pub(crate) fn delimited_pattern(open: &str, close: &str) -> String {
    format!("{}(.*?){}", regex::escape(open), regex::escape(close))
}

/// Runs every rule over `line` in order.
pub fn substitute(line: &str) -> String {
    RULES
        .iter()
        .fold(line.to_string(), |text, rule| rule.apply(&text).into_owned())
}
