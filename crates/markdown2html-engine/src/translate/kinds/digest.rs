use std::borrow::Cow;
use std::sync::LazyLock;

use md5::{Digest, Md5};
use regex::{Captures, Regex};

use crate::translate::inline::{InlineRule, delimited_pattern};

static DIGEST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&delimited_pattern(HashDigest::OPEN, HashDigest::CLOSE))
        .expect("DIGEST_RE is a valid static regex pattern")
});

/// `[[text]]` replaced by the MD5 digest of `text`, as 32 lowercase hex digits.
pub struct HashDigest;

impl HashDigest {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";

    pub fn md5_hex(text: &str) -> String {
        hex::encode(Md5::digest(text.as_bytes()))
    }
}

impl InlineRule for HashDigest {
    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        DIGEST_RE.replace_all(text, |caps: &Captures| Self::md5_hex(&caps[1]))
    }
}
