use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::translate::inline::{InlineRule, delimited_pattern};

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&delimited_pattern(Bold::DELIMITER, Bold::DELIMITER))
        .expect("BOLD_RE is a valid static regex pattern")
});

static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&delimited_pattern(Emphasis::DELIMITER, Emphasis::DELIMITER))
        .expect("EMPHASIS_RE is a valid static regex pattern")
});

/// `**text**` rendered as `<b>text</b>`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

impl InlineRule for Bold {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        BOLD_RE.replace_all(text, "<b>${1}</b>")
    }
}

/// `__text__` rendered as `<em>text</em>`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIMITER: &'static str = "__";
}

impl InlineRule for Emphasis {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        EMPHASIS_RE.replace_all(text, "<em>${1}</em>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("**bold**", "<b>bold</b>")]
    #[case("a **b** c **d**", "a <b>b</b> c <b>d</b>")]
    #[case("****", "<b></b>")]
    #[case("**unclosed", "**unclosed")]
    #[case("***x***", "<b>*x</b>*")]
    fn bold(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Bold.apply(input), expected);
    }

    #[rstest]
    #[case("__em__", "<em>em</em>")]
    #[case("__a__ and __b__", "<em>a</em> and <em>b</em>")]
    #[case("snake_case_name", "snake_case_name")]
    #[case("__", "__")]
    fn emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Emphasis.apply(input), expected);
    }

    #[test]
    fn untouched_text_is_borrowed() {
        assert!(matches!(Bold.apply("plain"), Cow::Borrowed("plain")));
    }
}
