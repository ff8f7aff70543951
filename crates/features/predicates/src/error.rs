use std::borrow::Cow;

/// Errors raised while assembling a [`Registry`](crate::Registry).
#[derive(Debug, thiserror::Error)]
pub enum PredicateError {
    /// Two predicates were registered under the same name.
    #[error("Duplicate predicate name{}: {name}", format_context(.context))]
    DuplicateName { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A name is empty or contains characters other than ASCII alphanumerics, `-` and `_`.
    #[error("Invalid predicate name{}: {name:?}", format_context(.context))]
    InvalidName { name: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to registry results.
pub trait PredicateErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PredicateError>;
}

impl<T> PredicateErrorExt<T> for Result<T, PredicateError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PredicateError::DuplicateName { context: c, .. }
                | PredicateError::InvalidName { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
