use std::fmt::Debug;

/// A named test that decides whether a string belongs to some category.
///
/// Implementations must be deterministic and free of side effects: the same
/// input always yields the same answer. Input is opaque text of any length.
pub trait Predicate: Debug + Send + Sync {
    /// Stable lookup name, unique within a [`Registry`](crate::Registry).
    fn name(&self) -> &'static str;

    /// Returns `true` if `text` matches the predicate.
    fn matches(&self, text: &str) -> bool;
}
