use bitflags::bitflags;

bitflags! {
    /// Rules applied to text before it is compared character by character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Normalization: u8 {
        /// Compare ASCII letters case-insensitively.
        const FOLD_CASE = 1 << 0;
        /// Drop every character that is not an ASCII letter or digit.
        const ALPHANUMERIC_ONLY = 1 << 1;

        const STANDARD = Self::FOLD_CASE.bits() | Self::ALPHANUMERIC_ONLY.bits();
        const LITERAL = 0;
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for Normalization {
    fn from(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Normalization {
    /// Yields the characters of `text` that survive normalization.
    ///
    /// The stream is double-ended, so callers can walk it from both ends
    /// without collecting it first.
    pub fn normalize(self, text: &str) -> impl DoubleEndedIterator<Item = char> + '_ {
        let keep_all = !self.contains(Self::ALPHANUMERIC_ONLY);
        let fold = self.contains(Self::FOLD_CASE);

        text.chars()
            .filter(move |c| keep_all || c.is_ascii_alphanumeric())
            .map(move |c| if fold { c.to_ascii_lowercase() } else { c })
    }
}
