use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::translate::inline::{InlineRule, delimited_pattern};

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&delimited_pattern(StripC::OPEN, StripC::CLOSE))
        .expect("STRIP_RE is a valid static regex pattern")
});

/// `((text))` replaced by `text` with every `c` and `C` removed.
pub struct StripC;

impl StripC {
    pub const OPEN: &'static str = "((";
    pub const CLOSE: &'static str = "))";
    pub const REMOVED: [char; 2] = ['c', 'C'];
}

impl InlineRule for StripC {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        STRIP_RE.replace_all(text, |caps: &Captures| caps[1].replace(Self::REMOVED, ""))
    }
}
