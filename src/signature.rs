//! Per-token punctuation and case analysis.

use compact_str::CompactString;

/// What a single raw token looks like: its letters with punctuation removed,
/// and counts of the punctuation marks the rule engine cares about.
///
/// Computed on demand and discarded after the token is classified.
#[derive(Clone, Debug, Default)]
pub struct TokenSignature {
    cleaned: CompactString,
    /// Number of letters (any Unicode letter, not only ASCII).
    pub letters: usize,
    pub commas: usize,
    pub periods: usize,
    pub slashes: usize,
    pub apostrophes: usize,
    pub quotes: usize,
    pub hyphens: usize,
    uppercase: usize,
}

impl TokenSignature {
    /// Analyze one raw token. An empty token yields zero counts and
    /// `all_capitals() == false`; that is not an error.
    pub fn of(token: &str) -> TokenSignature {
        let mut sig = TokenSignature::default();

        for c in token.chars() {
            match c {
                ',' => sig.commas += 1,
                '.' => sig.periods += 1,
                '/' => sig.slashes += 1,
                '\'' => sig.apostrophes += 1,
                '"' => sig.quotes += 1,
                '-' => sig.hyphens += 1,
                _ if c.is_alphabetic() => {
                    if c.is_uppercase() {
                        sig.uppercase += 1;
                    }
                    sig.letters += 1;
                    sig.cleaned.push(c);
                }
                _ => {}
            }
        }

        sig
    }

    /// The token's letters in original order, all punctuation removed.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// True only when the token has at least one letter and every letter is
    /// uppercase.
    pub fn all_capitals(&self) -> bool {
        self.letters > 0 && self.uppercase == self.letters
    }

    pub fn hyphenated(&self) -> bool {
        self.hyphens > 0
    }
}
