//! Whitespace tokenization and the position-aware cursor the rule engine
//! walks.

use compact_str::CompactString;
use smallvec::SmallVec;
use thiserror::Error;

/// Token storage sized so that typical names avoid a heap allocation.
pub type TokenList = SmallVec<[CompactString; 8]>;

/// Cursor movement past a sequence boundary. Always handled internally: the
/// rule engine treats it as "nothing more to classify".
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("cursor out of range")]
    OutOfRange,
}

/// Split raw input on whitespace; tabs and runs of spaces collapse.
pub fn split(text: &str) -> TokenList {
    text.split_whitespace().map(CompactString::from).collect()
}

/// A cursor over a token sequence, owned by exactly one parse invocation.
#[derive(Debug)]
pub struct Scanner<'a> {
    tokens: &'a [CompactString],
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(tokens: &'a [CompactString]) -> Scanner<'a> {
        Scanner {
            tokens,
            position: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// True at the last token of the sequence.
    pub fn at_final(&self) -> bool {
        !self.is_empty() && self.position == self.tokens.len() - 1
    }

    /// True when the cursor is at or past the midpoint; biases the
    /// middle/last-name heuristics toward the tail of the name.
    pub fn in_latter_half(&self) -> bool {
        self.position >= self.tokens.len() / 2
    }

    pub fn current(&self) -> Result<&'a str, ScanError> {
        match self.tokens.get(self.position) {
            Some(token) => Ok(token),
            None => Err(ScanError::OutOfRange),
        }
    }

    /// Move to the next token and return it. At the final token the cursor
    /// stays put and reports `OutOfRange`.
    pub fn advance(&mut self) -> Result<&'a str, ScanError> {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
            self.current()
        } else {
            Err(ScanError::OutOfRange)
        }
    }

    pub fn peek(&self) -> Result<&'a str, ScanError> {
        match self.tokens.get(self.position + 1) {
            Some(token) => Ok(token),
            None => Err(ScanError::OutOfRange),
        }
    }

    pub fn look_behind(&self) -> Result<&'a str, ScanError> {
        if self.position == 0 {
            return Err(ScanError::OutOfRange);
        }
        match self.tokens.get(self.position - 1) {
            Some(token) => Ok(token),
            None => Err(ScanError::OutOfRange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_collapses_whitespace() {
        let tokens = split("John  D.\tRockefeller,   Jr.");
        assert_eq!(4, tokens.len());
        assert_eq!("John", tokens[0].as_str());
        assert_eq!("D.", tokens[1].as_str());
        assert_eq!("Rockefeller,", tokens[2].as_str());
        assert_eq!("Jr.", tokens[3].as_str());
    }

    #[test]
    fn split_empty() {
        assert!(split("").is_empty());
        assert!(split("   \t  ").is_empty());
    }

    #[test]
    fn walk() {
        let tokens = split("John D. Rockefeller");
        let mut scanner = Scanner::new(&tokens);

        assert_eq!(Ok("John"), scanner.current());
        assert_eq!(Ok("D."), scanner.peek());
        assert_eq!(Err(ScanError::OutOfRange), scanner.look_behind());

        assert_eq!(Ok("D."), scanner.advance());
        assert_eq!(Ok("John"), scanner.look_behind());

        assert_eq!(Ok("Rockefeller"), scanner.advance());
        assert_eq!(Err(ScanError::OutOfRange), scanner.peek());
        assert_eq!(Err(ScanError::OutOfRange), scanner.advance());
        // the cursor stays on the final token
        assert_eq!(Ok("Rockefeller"), scanner.current());
    }

    #[test]
    fn empty_sequence() {
        let tokens = TokenList::new();
        let mut scanner = Scanner::new(&tokens);
        assert_eq!(Err(ScanError::OutOfRange), scanner.current());
        assert_eq!(Err(ScanError::OutOfRange), scanner.advance());
        assert_eq!(Err(ScanError::OutOfRange), scanner.peek());
        assert!(!scanner.at_final());
    }

    #[test]
    fn latter_half() {
        let tokens = split("a b c d");
        let mut scanner = Scanner::new(&tokens);
        assert!(!scanner.in_latter_half()); // 0 of 4
        scanner.advance().unwrap();
        assert!(!scanner.in_latter_half()); // 1 of 4
        scanner.advance().unwrap();
        assert!(scanner.in_latter_half()); // 2 of 4

        let tokens = split("only");
        let scanner = Scanner::new(&tokens);
        // a single token counts as the latter half
        assert!(scanner.in_latter_half());
        assert!(scanner.at_final());
    }
}
