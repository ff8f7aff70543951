//! ASCII letter classification.
//!
//! Only the 26 ASCII letters are classified. Everything else (digits, spaces,
//! punctuation, non-ASCII characters) is neither a vowel nor a consonant.

/// Lowercase vowels. Matching is case-insensitive.
pub const VOWELS: &str = "aeiou";

/// Lowercase consonants. Matching is case-insensitive.
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// The class of an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Vowel,
    Consonant,
}

/// Classifies a character, returning `None` for anything that is not an ASCII letter.
#[must_use]
pub fn classify(c: char) -> Option<LetterClass> {
    if !c.is_ascii_alphabetic() {
        return None;
    }

    let lower = c.to_ascii_lowercase();
    if VOWELS.contains(lower) {
        Some(LetterClass::Vowel)
    } else if CONSONANTS.contains(lower) {
        Some(LetterClass::Consonant)
    } else {
        None
    }
}

#[must_use]
pub fn is_vowel(c: char) -> bool {
    classify(c) == Some(LetterClass::Vowel)
}

#[must_use]
pub fn is_consonant(c: char) -> bool {
    classify(c) == Some(LetterClass::Consonant)
}

/// Vowel and consonant counts of a piece of text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LetterTally {
    pub vowels: usize,
    pub consonants: usize,
}

impl LetterTally {
    /// Counts the vowels and consonants of `text` in a single pass.
    #[must_use]
    pub fn of(text: &str) -> Self {
        text.chars().filter_map(classify).fold(Self::default(), |mut tally, class| {
            match class {
                LetterClass::Vowel => tally.vowels += 1,
                LetterClass::Consonant => tally.consonants += 1,
            }
            tally
        })
    }

    /// Total number of classified letters.
    #[must_use]
    pub const fn letters(&self) -> usize {
        self.vowels + self.consonants
    }
}
