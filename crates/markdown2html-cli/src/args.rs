use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: ./markdown2html README.md README.html";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("expected 2 positional arguments, got {0}")]
    MissingArguments(usize),
}

/// Positional arguments: the markdown input and the HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Args {
    /// Parses arguments, skipping the program name. Anything after the
    /// second positional argument is ignored.
    pub fn parse_from<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut positional = args
            .into_iter()
            .skip(1)
            .map(Into::<OsString>::into)
            .map(PathBuf::from);
        match (positional.next(), positional.next()) {
            (Some(input), Some(output)) => Ok(Self { input, output }),
            (Some(_), None) => Err(UsageError::MissingArguments(1)),
            _ => Err(UsageError::MissingArguments(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let args = Args::parse_from(["markdown2html", "README.md", "README.html"]).unwrap();
        assert_eq!(args.input, PathBuf::from("README.md"));
        assert_eq!(args.output, PathBuf::from("README.html"));
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let args = Args::parse_from(["markdown2html", "a.md", "b.html", "extra"]).unwrap();
        assert_eq!(args.output, PathBuf::from("b.html"));
    }

    #[test]
    fn test_missing_output() {
        assert_eq!(
            Args::parse_from(["markdown2html", "a.md"]),
            Err(UsageError::MissingArguments(1))
        );
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(
            Args::parse_from(["markdown2html"]),
            Err(UsageError::MissingArguments(0))
        );
        assert_eq!(
            Args::parse_from(Vec::<String>::new()),
            Err(UsageError::MissingArguments(0))
        );
    }
}
