//! # Predicates
//!
//! Named, pure boolean classifiers over a word or phrase, and the [`Registry`]
//! that resolves them by name.
//!
//! Every predicate implements [`Predicate`]: a stable name plus a deterministic,
//! side-effect free `matches`. The standard set, in display order, is
//! [`VowelHeavy`], [`FirstConsonant`] and [`Palindrome`].
//!
//! ## Example
//!
//! ```rust
//! use wordcheck_predicates::Registry;
//! use wordcheck_domain::normalization::Normalization;
//!
//! let registry = Registry::standard(Normalization::STANDARD).unwrap();
//! let palindrome = registry.get("palindrome").unwrap();
//!
//! assert!(palindrome.matches("a toyotas a toyota"));
//! assert_eq!(registry.names().collect::<Vec<_>>(), ["vowelheavy", "firstcons", "palindrome"]);
//! ```

mod error;
mod first_consonant;
mod palindrome;
mod predicate;
mod registry;
mod vowel_heavy;

pub use crate::error::{PredicateError, PredicateErrorExt};
pub use crate::first_consonant::FirstConsonant;
pub use crate::palindrome::Palindrome;
pub use crate::predicate::Predicate;
pub use crate::registry::{Registry, RegistryBuilder};
pub use crate::vowel_heavy::VowelHeavy;
