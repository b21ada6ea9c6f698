//! A library for splitting free-text human names into their component parts.
//!
//! Data-ingestion pipelines often receive a name as one opaque string but
//! need the discrete pieces. `nameparts` decomposes such a string into
//! salutation, first, middle and last names, generational marker,
//! professional suffix, quoted nickname, and a list of alternate-identity
//! aliases, along with a canonical full-name rendering:
//!
//! ```
//! use nameparts::NameParts;
//!
//! let parts = NameParts::parse("Mr. James J. Polera Jr. Esq.");
//! assert_eq!("Mr.", parts.salutation);
//! assert_eq!("James", parts.first_name);
//! assert_eq!("J.", parts.middle_name);
//! assert_eq!("Polera", parts.last_name);
//! assert_eq!("Jr.", parts.generation);
//! assert_eq!("Esq.", parts.suffix);
//! ```
//!
//! Parsing is a pure function of the input string and the marker lists: no
//! statistical models, no locale grammar beyond the supplied markers. It
//! never fails; input the heuristics cannot place degrades to a record with
//! most fields empty rather than an error.
//!
//! The marker lists ship with sensible defaults and can be replaced
//! wholesale via [`Lookups`] to support other locales.

pub mod lookups;
mod normalize;
mod rules;
pub mod scanner;
pub mod signature;

pub use crate::lookups::Lookups;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The slotted components of a name. Unfilled fields are empty strings.
///
/// `full_name` is always the space-joined concatenation of the non-empty
/// fields in the fixed order salutation, first, middle, last, generation,
/// suffix.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct NameParts {
    pub provided_name: String,
    pub full_name: String,
    pub salutation: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub generation: String,
    pub suffix: String,
    pub nickname: String,
    pub aliases: Vec<NameParts>,
}

impl NameParts {
    /// Parse a name using the built-in marker lists.
    ///
    /// Never fails and never panics; for input that doesn't look like a
    /// personal name, the result is a record with only `provided_name` set.
    pub fn parse(name: &str) -> NameParts {
        NameParts::parse_with(name, &Lookups::default())
    }

    /// Parse a name against caller-supplied marker lists.
    ///
    /// Each alias segment found during normalization is re-run through the
    /// whole pipeline with the same lookups, in discovery order.
    pub fn parse_with(name: &str, lookups: &Lookups) -> NameParts {
        let mut record = NameParts {
            provided_name: name.to_string(),
            ..NameParts::default()
        };

        let normalized = normalize::normalize(name, lookups);
        if normalized.corporate {
            return record;
        }

        // The nickname is slot state the rule engine observes, so it must be
        // in place before the pass
        if let Some(nickname) = normalized.nickname {
            record.nickname = nickname;
        }

        rules::assign_slots(&mut record, &normalized.tokens, lookups);

        for alias in &normalized.aliases {
            record.aliases.push(NameParts::parse_with(alias, lookups));
        }

        record.full_name = record.render_full_name();
        record
    }

    /// Rebuild the canonical full name from the filled slots: the non-empty
    /// fields in fixed order, joined by single spaces. `parse` stores this in
    /// `full_name`; rendering is exposed so callers can verify or re-derive
    /// it after editing fields.
    pub fn render_full_name(&self) -> String {
        let fields = [
            &self.salutation,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.generation,
            &self.suffix,
        ];

        let mut full = String::new();
        for field in fields.iter().filter(|f| !f.is_empty()) {
            if !full.is_empty() {
                full.push(' ');
            }
            full.push_str(field);
        }
        full
    }
}

/// Shorthand for [`NameParts::parse`].
pub fn parse(name: &str) -> NameParts {
    NameParts::parse(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_rendering() {
        let parts = NameParts::parse("President George Herbert Walker Bush");
        assert_eq!("President George Herbert Walker Bush", parts.full_name);
        assert_eq!(parts.full_name, parts.render_full_name());
    }

    #[test]
    fn full_name_skips_empty_slots() {
        let parts = NameParts::parse("Thurston Howell III");
        assert_eq!("Thurston Howell III", parts.full_name);
    }

    #[test]
    fn nickname_excluded_from_full_name() {
        let parts = NameParts::parse("Philip Francis 'The Scooter' Rizzuto");
        assert_eq!("'The Scooter'", parts.nickname);
        assert_eq!("Philip Francis Rizzuto", parts.full_name);
    }

    #[test]
    fn corporate_names_get_no_slots() {
        let parts = NameParts::parse("Sprockets Inc");
        assert_eq!("Sprockets Inc", parts.provided_name);
        assert_eq!("", parts.full_name);
        assert_eq!("", parts.first_name);
        assert_eq!("", parts.last_name);
    }

    #[test]
    fn aliases_are_parsed_recursively() {
        let parts = NameParts::parse("Tony Stark a/k/a Ironman a/k/a Stark, Anthony");
        assert_eq!("Tony", parts.first_name);
        assert_eq!("Stark", parts.last_name);
        assert_eq!(2, parts.aliases.len());
        assert_eq!("Ironman", parts.aliases[0].provided_name);
        assert_eq!("Stark, Anthony", parts.aliases[1].provided_name);
        assert_eq!("Anthony", parts.aliases[1].first_name);
        assert_eq!("Stark", parts.aliases[1].last_name);
    }

    #[test]
    fn custom_lookups() {
        let lookups = Lookups::default().with_alias_markers(["alias"]);
        let parts = NameParts::parse_with("James Polera alias Batman", &lookups);
        assert_eq!(1, parts.aliases.len());
        assert_eq!("Batman", parts.aliases[0].provided_name);
    }
}
