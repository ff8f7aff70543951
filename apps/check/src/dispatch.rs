use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};
use wordcheck::predicates::Registry;

/// Program name shown in the usage line.
pub const PROGRAM: &str = "check";

const NAME_SEPARATOR: &str = "|";

/// The answer printed for a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yes => "yes",
            Self::No => "no",
        })
    }
}

/// Terminal outcomes that are not a verdict. Both exit with status 1.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Fewer than a test name and a word were supplied.
    #[error("{usage}")]
    Usage { usage: String },

    /// The test name is not registered.
    #[error("Huh?")]
    UnknownTest { name: String },
}

impl DispatchError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } | Self::UnknownTest { .. } => 1,
        }
    }
}

/// Renders the usage line, e.g. `check vowelheavy|firstcons|palindrome word`.
#[must_use]
pub fn usage(registry: &Registry) -> String {
    let names = registry.names().collect::<Vec<_>>().join(NAME_SEPARATOR);
    format!("{PROGRAM} {names} word")
}

/// Resolves `args[0]` as a test name and evaluates it on `args[1]`.
///
/// Arguments beyond the second are ignored.
///
/// # Errors
/// Returns [`DispatchError::Usage`] when fewer than two arguments are given and
/// [`DispatchError::UnknownTest`] when the name is not registered.
pub fn dispatch(registry: &Registry, args: &[String]) -> Result<Verdict, DispatchError> {
    let [name, word, ..] = args else {
        return Err(DispatchError::Usage { usage: usage(registry) });
    };

    let predicate =
        registry.get(name).ok_or_else(|| DispatchError::UnknownTest { name: name.clone() })?;

    debug!(test = predicate.name(), word_len = word.len(), "Evaluating");

    Ok(Verdict::from(predicate.matches(word)))
}

/// Dispatches and writes exactly one line to `out`, returning the exit status.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn run<W: Write>(registry: &Registry, args: &[String], out: &mut W) -> io::Result<u8> {
    match dispatch(registry, args) {
        Ok(verdict) => {
            writeln!(out, "{verdict}")?;
            Ok(0)
        },
        Err(err) => {
            match &err {
                DispatchError::Usage { .. } => info!(supplied = args.len(), "Too few arguments"),
                DispatchError::UnknownTest { name } => info!(test = ?name, "Unrecognized test"),
            }
            writeln!(out, "{err}")?;
            Ok(err.exit_code())
        },
    }
}
