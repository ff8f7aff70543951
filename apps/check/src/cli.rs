//! # CLI Argument Definitions
//!
//! Flags are only recognized before the test name. Everything from the test
//! name on is positional data, even when it starts with `-`.
//!
//! A leading `-v`/`-V` token is only a flag when it cannot be mistaken for a
//! test name: either nothing follows the flags, or a test name and a word
//! follow and no version flag is among them. Otherwise the tokens are data,
//! so `check -V noon` and `check -- x` answer `Huh?` like any other unknown test.

use crate::dispatch::PROGRAM;
use clap::{ArgAction, Parser};
use std::ffi::{OsStr, OsString};
use std::iter;

const ESCAPE: &str = "--";

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "check")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify a word or phrase with a named test")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Raise diagnostic verbosity on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// The test name followed by the word to classify
    #[arg(
        value_name = "TEST WORD",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Verbose,
    Version,
}

impl Flag {
    fn of(arg: &OsStr) -> Option<Self> {
        match arg.to_str()? {
            "--verbose" => Some(Self::Verbose),
            "--version" => Some(Self::Version),
            short => {
                let cluster = short.strip_prefix('-')?;
                if cluster.is_empty() || !cluster.chars().all(|c| matches!(c, 'v' | 'V')) {
                    return None;
                }
                Some(if cluster.contains('V') { Self::Version } else { Self::Verbose })
            },
        }
    }
}

impl Cli {
    /// Parses `args` (program name first), keeping flag-like test names as data.
    ///
    /// # Errors
    /// Returns the [`clap::Error`] for `-V` (`DisplayVersion`) or a rejected argument list.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from(PROGRAM));
        let rest = args.collect::<Vec<_>>();

        let flags = rest.iter().map_while(|arg| Flag::of(arg)).collect::<Vec<_>>();
        let data = rest.len() - flags.len();
        let honored = data == 0 || (data >= 2 && !flags.contains(&Flag::Version));
        let (flags, words) = rest.split_at(if honored { flags.len() } else { 0 });

        Self::try_parse_from(
            iter::once(program)
                .chain(flags.iter().cloned())
                .chain(iter::once(OsString::from(ESCAPE)))
                .chain(words.iter().cloned()),
        )
    }

    /// Positional arguments as text. ASCII is kept as is.
    ///
    /// Every invalid UTF-8 sequence becomes `U+FFFD`, so distinct invalid bytes
    /// compare equal: in strict palindrome mode `b"\xffa\xfe"` matches.
    #[must_use]
    pub fn positional(&self) -> Vec<String> {
        self.args.iter().map(|arg| arg.to_string_lossy().into_owned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_args(iter::once("check").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_flags_before_the_test_name() {
        let cli = parse(&["-vv", "palindrome", "noon"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.positional(), ["palindrome", "noon"]);
    }

    #[test]
    fn test_hyphenated_words_are_data() {
        let cli = parse(&["firstcons", "-v"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.positional(), ["firstcons", "-v"]);

        let cli = parse(&["palindrome", "--version"]);
        assert_eq!(cli.positional(), ["palindrome", "--version"]);
    }

    #[test]
    fn test_help_is_not_a_flag() {
        let cli = parse(&["--help", "noon"]);
        assert_eq!(cli.positional(), ["--help", "noon"]);
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&[]);
        assert!(cli.positional().is_empty());
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_args(["check", "-V"]).expect_err("version short-circuits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let err = Cli::try_parse_args(["check", "-v", "--version"]).expect_err("version");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_flag_like_test_names_are_data() {
        assert_eq!(parse(&["-V", "noon"]).positional(), ["-V", "noon"]);
        assert_eq!(parse(&["-V", "palindrome", "noon"]).positional(), ["-V", "palindrome", "noon"]);
        assert_eq!(parse(&["--", "x"]).positional(), ["--", "x"]);
        assert_eq!(parse(&["-x", "noon"]).positional(), ["-x", "noon"]);

        let cli = parse(&["-v", "noon"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.positional(), ["-v", "noon"]);
    }

    #[test]
    fn test_escape_inside_the_word_is_data() {
        assert_eq!(parse(&["firstcons", "--", "bat"]).positional(), ["firstcons", "--", "bat"]);
    }

    #[test]
    fn test_verbosity_without_positionals() {
        let cli = parse(&["-v"]);
        assert_eq!(cli.verbose, 1);
        assert!(cli.positional().is_empty());
    }
}
