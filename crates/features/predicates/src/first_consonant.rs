use crate::predicate::Predicate;
use wordcheck_domain::letters::is_consonant;

/// Does a string begin with a consonant?
///
/// The first character must be one of the 21 ASCII consonants. Digits,
/// punctuation and whitespace are not consonants.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstConsonant;

impl FirstConsonant {
    pub const NAME: &'static str = "firstcons";
}

impl Predicate for FirstConsonant {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn matches(&self, text: &str) -> bool {
        text.chars().next().is_some_and(is_consonant)
    }
}
