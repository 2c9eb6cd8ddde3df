//! Line-level and inline syntax kinds.
//!
//! Each kind owns its delimiters and the pattern that recognises it, so the
//! translator only decides the order in which they are tried.

pub mod digest;
pub mod emphasis;
pub mod heading;
pub mod list_item;
pub mod strip;

pub use digest::HashDigest;
pub use emphasis::{Bold, Emphasis};
pub use heading::Heading;
pub use list_item::{ListItem, ListKind};
pub use strip::StripC;
