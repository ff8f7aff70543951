use crate::predicate::Predicate;
use wordcheck_domain::normalization::Normalization;

/// Does a string read the same forward and backward?
///
/// With [`Normalization::STANDARD`] case is folded and everything but ASCII
/// letters and digits is dropped, so `"a toyotas a toyota"` matches. The empty
/// string and single characters always match.
#[derive(Debug, Default, Clone, Copy)]
pub struct Palindrome {
    normalization: Normalization,
}

impl Palindrome {
    pub const NAME: &'static str = "palindrome";

    #[must_use]
    pub const fn new(normalization: Normalization) -> Self {
        Self { normalization }
    }

    #[must_use]
    pub const fn normalization(&self) -> Normalization {
        self.normalization
    }
}

impl Predicate for Palindrome {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn matches(&self, text: &str) -> bool {
        let mut chars = self.normalization.normalize(text);
        while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
            if front != back {
                return false;
            }
        }
        true
    }
}
