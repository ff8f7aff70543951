//! Facade crate for the `wordcheck` workspace.
//! Re-exports domain/kernel/predicate primitives and assembles the registry.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load a [`CheckConfig`] with [`kernel::config::load_config`].
//! - Call [`init`] to build the predicate registry described by that config.

pub use wordcheck_domain as domain;
pub use wordcheck_kernel as kernel;
pub use wordcheck_predicates as predicates;

use tracing::info;
use wordcheck_domain::config::CheckConfig;
use wordcheck_predicates::{PredicateError, PredicateErrorExt, Registry};

/// Builds the standard predicate registry for the given configuration.
///
/// # Errors
/// Returns an error if the registry rejects a predicate name.
pub fn init(config: &CheckConfig) -> Result<Registry, PredicateError> {
    let normalization = config.palindrome.normalization();

    let registry =
        Registry::standard(normalization).context("Failed to build the standard registry")?;

    info!(
        predicates = registry.len(),
        strict_palindrome = config.palindrome.strict,
        "Predicates registered"
    );

    Ok(registry)
}
