//! Pre-processing pipeline run before token classification.
//!
//! Stages run in a fixed order, each on the token list left by the previous
//! one: corporate short-circuit, alias splitting, supplemental-info
//! stripping, quoted-nickname extraction, misplaced-apostrophe repair, and
//! comma-order inversion.

use crate::lookups::Lookups;
use crate::scanner::{self, TokenList};
use compact_str::CompactString;
use smallvec::SmallVec;

/// Output of the normalization pipeline.
#[derive(Debug)]
pub struct NormalizedName {
    pub tokens: TokenList,
    pub nickname: Option<String>,
    pub aliases: Vec<String>,
    pub corporate: bool,
}

pub fn normalize(text: &str, lookups: &Lookups) -> NormalizedName {
    let mut tokens = scanner::split(text);

    // Organization names get no slot guessing at all
    if tokens.iter().any(|t| lookups.is_corporate_marker(t)) {
        return NormalizedName {
            tokens: TokenList::new(),
            nickname: None,
            aliases: Vec::new(),
            corporate: true,
        };
    }

    let aliases = split_aliases(&mut tokens, lookups);
    strip_supplemental(&mut tokens, lookups);
    let nickname = extract_nickname(&mut tokens);
    repair_apostrophes(&mut tokens);
    flip_comma(&mut tokens);

    NormalizedName {
        tokens,
        nickname,
        aliases,
        corporate: false,
    }
}

// Strip commas and periods, keeping everything else (hyphens, apostrophes)
// and the original case.
pub(crate) fn cleaned_token(token: &str) -> CompactString {
    token.chars().filter(|&c| c != ',' && c != '.').collect()
}

/// Cut the token list at each alias-separator marker. Text before the first
/// marker stays as the primary name; each span between markers becomes an
/// alias queued for an independent re-parse.
///
/// A marker that is the final token is not treated as a marker at all, so a
/// trailing "aka" with nothing after it is classified like any other word.
fn split_aliases(tokens: &mut TokenList, lookups: &Lookups) -> Vec<String> {
    let last = tokens.len().saturating_sub(1);
    let marker_at: SmallVec<[usize; 4]> = tokens
        .iter()
        .enumerate()
        .filter(|(i, t)| *i < last && lookups.is_alias_marker(t))
        .map(|(i, _)| i)
        .collect();

    if marker_at.is_empty() {
        return Vec::new();
    }

    let mut aliases = Vec::with_capacity(marker_at.len());
    for (n, &start) in marker_at.iter().enumerate() {
        let end = marker_at.get(n + 1).copied().unwrap_or_else(|| tokens.len());
        let segment = tokens[start + 1..end].join(" ");
        if !segment.is_empty() {
            aliases.push(segment);
        }
    }

    tokens.truncate(marker_at[0]);
    aliases
}

// Everything at and after a supplemental marker ("deceased", "fictitious")
// is biography, not name.
fn strip_supplemental(tokens: &mut TokenList, lookups: &Lookups) {
    if let Some(i) = tokens.iter().position(|t| lookups.is_supplemental_marker(t)) {
        tokens.truncate(i);
    }
}

/// Pull out a quoted nickname run, e.g. `'The Scooter'`, punctuation intact.
///
/// Tokens that begin or end with a quote mark are boundary positions; with an
/// even, non-zero count of boundaries the run from the first to the second
/// (inclusive) is the nickname and is removed from the working sequence.
fn extract_nickname(tokens: &mut TokenList) -> Option<String> {
    let mut boundaries: SmallVec<[usize; 4]> = SmallVec::new();

    for (i, token) in tokens.iter().enumerate() {
        if token.starts_with('\'') || token.starts_with('"') {
            boundaries.push(i);
        }
        if token.ends_with('\'') || token.ends_with('"') {
            boundaries.push(i);
        }
    }

    if boundaries.is_empty() || boundaries.len() % 2 != 0 {
        return None;
    }

    let (start, end) = (boundaries[0], boundaries[1]);
    let nickname = tokens[start..=end].join(" ");
    tokens.drain(start..=end);
    Some(nickname)
}

// A token ending in an apostrophe is either a transcription error splitting a
// name like "O'Hurley" into "O'" + "Hurley", or, at the end of the input,
// stray punctuation.
fn repair_apostrophes(tokens: &mut TokenList) {
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].ends_with('\'') {
            if i + 1 == tokens.len() {
                let stripped = CompactString::from(tokens[i].trim_end_matches('\''));
                tokens[i] = stripped;
            } else {
                let next = tokens.remove(i + 1);
                tokens[i].push_str(&next);
            }
        }
        i += 1;
    }
}

// Swap "Last, First Middle" to "First Middle Last," around the first comma.
// The comma stays attached until the rule engine's letter assembly strips it.
fn flip_comma(tokens: &mut TokenList) {
    if !tokens.iter().any(|t| t.contains(',')) {
        return;
    }

    let text = tokens.join(" ");
    let at = match text.find(',') {
        Some(i) => i,
        None => return,
    };

    let head = text[..=at].trim();
    let tail = text[at + 1..].trim();
    *tokens = scanner::split(&format!("{} {}", tail, head));
}
