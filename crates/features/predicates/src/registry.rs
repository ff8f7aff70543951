use crate::error::PredicateError;
use crate::first_consonant::FirstConsonant;
use crate::palindrome::Palindrome;
use crate::predicate::Predicate;
use crate::vowel_heavy::VowelHeavy;
use fxhash::FxHashMap;
use tracing::debug;
use wordcheck_domain::normalization::Normalization;

/// The ordered set of predicates known to the program.
///
/// Order only matters for display (usage text); lookup is an exact,
/// case-sensitive name match.
#[derive(Debug)]
pub struct Registry {
    predicates: Vec<Box<dyn Predicate>>,
    index: FxHashMap<&'static str, usize>,
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Builds the standard registry: `vowelheavy`, `firstcons`, `palindrome`.
    ///
    /// # Errors
    /// Never fails for the built-in set; the `Result` comes from [`RegistryBuilder::build`].
    pub fn standard(normalization: Normalization) -> Result<Self, PredicateError> {
        Self::builder()
            .register(VowelHeavy)
            .register(FirstConsonant)
            .register(Palindrome::new(normalization))
            .build()
    }

    /// Looks up a predicate by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Predicate> {
        self.index.get(name).and_then(|&position| self.predicates.get(position)).map(|p| &**p)
    }

    /// Predicate names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates.iter().map(|p| p.name())
    }

    /// Predicates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Predicate> {
        self.predicates.iter().map(|p| &**p)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Collects predicates in order and validates them on [`build`](Self::build).
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl RegistryBuilder {
    pub fn register<P: Predicate + 'static>(mut self, predicate: P) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Validates names and freezes the registry.
    ///
    /// # Errors
    /// Returns [`PredicateError::InvalidName`] for an empty or malformed name and
    /// [`PredicateError::DuplicateName`] when a name is registered twice.
    pub fn build(self) -> Result<Registry, PredicateError> {
        let mut index = FxHashMap::default();

        for (position, predicate) in self.predicates.iter().enumerate() {
            let name = predicate.name();
            if !is_valid_name(name) {
                return Err(PredicateError::InvalidName { name: name.into(), context: None });
            }
            if index.insert(name, position).is_some() {
                return Err(PredicateError::DuplicateName { name: name.into(), context: None });
            }
        }

        debug!(count = self.predicates.len(), "Predicate registry built");

        Ok(Registry { predicates: self.predicates, index })
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
