//! The ordered heuristic classifier.
//!
//! A single forward pass visits each normalized token once and commits it to
//! a slot at the first predicate that matches. The predicate order is part of
//! the contract: many real names satisfy several predicates at once, and the
//! precedence below is what disambiguates them.

use crate::lookups::Lookups;
use crate::normalize::cleaned_token;
use crate::scanner::Scanner;
use crate::signature::TokenSignature;
use crate::NameParts;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::ops::Range;

/// Walk the normalized tokens and fill the record's slots in place.
pub fn assign_slots(record: &mut NameParts, tokens: &[CompactString], lookups: &Lookups) {
    let mut scanner = Scanner::new(tokens);
    let prefix_run = surname_prefix_run(tokens, lookups);

    for _ in 0..scanner.len() {
        // A surname-prefix run ("von Bismark", "ibn Tariq ibn Khalid
        // al-Fulan") is one contiguous last name; it pre-empts the per-token
        // rules across its whole span.
        if let Some(ref run) = prefix_run {
            if run.contains(&scanner.position()) {
                if scanner.position() == run.start {
                    let words: SmallVec<[CompactString; 4]> =
                        tokens[run.clone()].iter().map(|t| cleaned_token(t)).collect();
                    record.last_name = words.join(" ");
                }
                let _ = scanner.advance();
                continue;
            }
        }

        let token = match scanner.current() {
            Ok(token) => token,
            Err(_) => break,
        };

        let sig = TokenSignature::of(token);
        let latter = scanner.in_latter_half();
        let terminus = scanner.at_final();

        // 1. An honorific at the head, e.g. "President"
        if scanner.position() == 0 && lookups.is_salutation(token) {
            record.salutation = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 2. A courtesy-title abbreviation, e.g. "Mr." "Dr."
        if !latter && sig.letters >= 2 && sig.periods == 1 {
            record.salutation = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 3. First name
        if !latter && sig.letters >= 2 && sig.periods == 0 && record.first_name.is_empty() {
            record.first_name = sig.cleaned().to_string();
            let _ = scanner.advance();
            continue;
        }

        // 4. First initial, e.g. the "J." of "J. Doe"
        if !latter && sig.letters == 1 && sig.periods == 1 && record.first_name.is_empty() {
            record.first_name = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 5. Middle initial, e.g. the "D." in "John D. Rockefeller"
        if sig.letters == 1
            && sig.periods == 1
            && !record.first_name.is_empty()
            && record.middle_name.is_empty()
        {
            record.middle_name = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        let next_is_suffix = match scanner.peek() {
            Ok(next) => lookups.is_generational(next) || lookups.is_suffix(next),
            Err(_) => false,
        };

        // 6. Middle name, possibly multi-word
        if latter
            && !terminus
            && !record.first_name.is_empty()
            && sig.commas == 0
            && sig.apostrophes == 0
            && sig.quotes == 0
            && !next_is_suffix
        {
            if record.middle_name.is_empty() {
                record.middle_name = token.to_string();
            } else {
                record.middle_name.push(' ');
                record.middle_name.push_str(token);
            }
            let _ = scanner.advance();
            continue;
        }

        // 7. A nickname quoted within a single token
        if latter && (sig.apostrophes == 2 || sig.quotes == 2) {
            record.nickname = sig.cleaned().to_string();
            let _ = scanner.advance();
            continue;
        }

        // 8. A mistyped Irish name: "O'" + "Hurley" should be "O'Hurley"
        if latter && sig.letters == 1 && sig.apostrophes == 1 {
            match scanner.peek() {
                Ok(next) => {
                    record.last_name = format!("{}{}", token, next);
                    let _ = scanner.advance();
                    continue;
                }
                Err(_) => break,
            }
        }

        // 9. A multi-word nickname with unpaired marks, e.g. "'The" ... "Kid'"
        if !terminus && (sig.apostrophes == 1 || sig.quotes == 1) {
            let leading = token.starts_with('\'') || token.starts_with('"');
            let trailing = token.ends_with('\'') || token.ends_with('"');

            if leading {
                record.nickname = token.to_string();
                let _ = scanner.advance();
                continue;
            }
            if trailing {
                if record.nickname.is_empty() {
                    record.nickname = token.to_string();
                } else {
                    record.nickname.push(' ');
                    record.nickname.push_str(token);
                }
                let _ = scanner.advance();
                continue;
            }
        }

        // 10. The family name preceding a suffix marker, e.g. "Polera, Esq."
        if latter && !sig.all_capitals() && sig.periods == 0 && next_is_suffix {
            record.last_name = sig.cleaned().to_string();
            let _ = scanner.advance();
            continue;
        }

        // 11. The terminal family name, once a middle name or nickname exists
        if (terminus
            && !record.middle_name.is_empty()
            && !sig.all_capitals()
            && sig.periods == 0
            && record.last_name.is_empty())
            || (terminus
                && !record.nickname.is_empty()
                && !sig.all_capitals()
                && record.last_name.is_empty())
        {
            if sig.hyphenated() {
                // Preserve hyphenated surnames verbatim
                record.last_name = token.to_string();
            } else {
                let mut cleaned = sig.cleaned().to_string();
                // A very short "middle name" is really a stray surname
                // prefix; fold it back in
                if !record.middle_name.is_empty() && record.middle_name.len() <= 3 {
                    cleaned = format!("{} {}", record.middle_name, cleaned);
                    record.middle_name.clear();
                }
                record.last_name = cleaned;
            }
            let _ = scanner.advance();
            continue;
        }

        // 12. A comma-terminated family name inside a reordered string
        if !terminus && latter && sig.commas == 1 && record.last_name.is_empty() {
            record.last_name = sig.cleaned().to_string();
            let _ = scanner.advance();
            continue;
        }

        // 13. An Irish surname at the end, kept with its punctuation intact
        if terminus
            && sig.apostrophes == 1
            && sig.letters > 2
            && token.chars().nth(1) == Some('\'')
        {
            record.last_name = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 14. The family name of a minimal two-token name
        if terminus && scanner.len() == 2 {
            record.last_name = sig.cleaned().to_string();
            let _ = scanner.advance();
            continue;
        }

        // 15. A generational marker, e.g. "III" or "Jr."
        if (latter && sig.all_capitals() && sig.letters > 1)
            || (latter && sig.letters == 2 && sig.periods == 1)
        {
            record.generation = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 16. A professional suffix, e.g. "Esq." "M.D."
        if terminus && sig.periods == 1 {
            record.suffix = token.to_string();
            let _ = scanner.advance();
            continue;
        }

        // 17. Nothing matched; drop the token and move on
        let _ = scanner.advance();
    }
}

// The run starts at the first surname-prefix marker past the head of the
// sequence and extends until a generational or suffix marker, or the end.
fn surname_prefix_run(tokens: &[CompactString], lookups: &Lookups) -> Option<Range<usize>> {
    let start = tokens
        .iter()
        .skip(1)
        .position(|t| lookups.is_surname_prefix(t))?
        + 1;

    let end = tokens[start + 1..]
        .iter()
        .position(|t| lookups.is_generational(t) || lookups.is_suffix(t))
        .map(|i| start + 1 + i)
        .unwrap_or_else(|| tokens.len());

    Some(start..end)
}
