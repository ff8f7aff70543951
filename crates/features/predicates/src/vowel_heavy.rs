use crate::predicate::Predicate;
use wordcheck_domain::letters::LetterTally;

/// Does a string have more vowels than consonants?
///
/// Non-letters count toward neither side.
#[derive(Debug, Default, Clone, Copy)]
pub struct VowelHeavy;

impl VowelHeavy {
    pub const NAME: &'static str = "vowelheavy";
}

impl Predicate for VowelHeavy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn matches(&self, text: &str) -> bool {
        match LetterTally::of(text) {
            LetterTally { vowels, consonants: 0 } => vowels > 0,
            LetterTally { vowels, consonants } => vowels > consonants,
        }
    }
}
