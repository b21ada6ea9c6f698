//! Marker lists used to recognize the non-name words of an input string.
//!
//! The built-in lists are compiled into `phf` sets by `build.rs` from
//! `build/marker_data.json`; callers can replace any list wholesale to
//! support other locales without touching the engine.

use ahash::AHashSet;
use compact_str::CompactString;

static SALUTATIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/salutations.rs"));

static GENERATIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/generations.rs"));

static SUFFIXES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

static SURNAME_PREFIXES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/surname_prefixes.rs"));

static ALIAS_MARKERS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/alias_markers.rs"));

static CORPORATE_MARKERS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/corporate_markers.rs"));

static SUPPLEMENTAL_MARKERS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/supplemental_markers.rs"));

/// One marker list: the built-in compile-time set, or a caller-supplied
/// replacement.
#[derive(Clone, Debug)]
enum MarkerSet {
    Builtin(&'static phf::Set<&'static str>),
    Custom(AHashSet<String>),
}

impl MarkerSet {
    fn custom<I, S>(markers: I) -> MarkerSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MarkerSet::Custom(
            markers
                .into_iter()
                .map(|m| m.as_ref().to_uppercase())
                .collect(),
        )
    }

    fn contains(&self, key: &str) -> bool {
        match self {
            MarkerSet::Builtin(set) => set.contains(key),
            MarkerSet::Custom(set) => set.contains(key),
        }
    }
}

/// The immutable reference lists consulted during a parse.
///
/// A `Lookups` value is read-only once constructed and safe to share across
/// concurrent parses.
#[derive(Clone, Debug)]
pub struct Lookups {
    salutations: MarkerSet,
    generations: MarkerSet,
    suffixes: MarkerSet,
    surname_prefixes: MarkerSet,
    alias_markers: MarkerSet,
    corporate_markers: MarkerSet,
    supplemental_markers: MarkerSet,
}

impl Default for Lookups {
    fn default() -> Lookups {
        Lookups {
            salutations: MarkerSet::Builtin(&SALUTATIONS),
            generations: MarkerSet::Builtin(&GENERATIONS),
            suffixes: MarkerSet::Builtin(&SUFFIXES),
            surname_prefixes: MarkerSet::Builtin(&SURNAME_PREFIXES),
            alias_markers: MarkerSet::Builtin(&ALIAS_MARKERS),
            corporate_markers: MarkerSet::Builtin(&CORPORATE_MARKERS),
            supplemental_markers: MarkerSet::Builtin(&SUPPLEMENTAL_MARKERS),
        }
    }
}

impl Lookups {
    pub fn new() -> Lookups {
        Lookups::default()
    }

    pub fn with_salutations<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.salutations = MarkerSet::custom(markers);
        self
    }

    pub fn with_generations<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.generations = MarkerSet::custom(markers);
        self
    }

    pub fn with_suffixes<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suffixes = MarkerSet::custom(markers);
        self
    }

    pub fn with_surname_prefixes<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.surname_prefixes = MarkerSet::custom(markers);
        self
    }

    pub fn with_alias_markers<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.alias_markers = MarkerSet::custom(markers);
        self
    }

    pub fn with_corporate_markers<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.corporate_markers = MarkerSet::custom(markers);
        self
    }

    pub fn with_supplemental_markers<I, S>(mut self, markers: I) -> Lookups
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.supplemental_markers = MarkerSet::custom(markers);
        self
    }

    pub fn is_salutation(&self, token: &str) -> bool {
        self.salutations.contains(&marker_key(token))
    }

    pub fn is_generational(&self, token: &str) -> bool {
        self.generations.contains(&marker_key(token))
    }

    pub fn is_suffix(&self, token: &str) -> bool {
        self.suffixes.contains(&marker_key(token))
    }

    pub fn is_surname_prefix(&self, token: &str) -> bool {
        self.surname_prefixes.contains(&marker_key(token))
    }

    pub fn is_alias_marker(&self, token: &str) -> bool {
        self.alias_markers.contains(&marker_key(token))
    }

    pub fn is_corporate_marker(&self, token: &str) -> bool {
        self.corporate_markers.contains(&marker_key(token))
    }

    pub fn is_supplemental_marker(&self, token: &str) -> bool {
        self.supplemental_markers.contains(&marker_key(token))
    }
}

// Markers match against the cleaned token: commas and periods stripped,
// uppercased ("Esq." and "a.k.a" match "ESQ" and "AKA").
fn marker_key(token: &str) -> CompactString {
    token
        .chars()
        .filter(|&c| c != ',' && c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}
