pub mod blocks;
pub mod convert;
pub mod io;
pub mod translate;

// Re-export key types for easier usage
pub use blocks::{HtmlBuilder, OpenBlock};
pub use convert::{convert_lines, convert_str};
pub use io::*;
pub use convert::split_lines;
pub use translate::{LineTag, LineTranslator, Translated};
