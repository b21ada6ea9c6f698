use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

use nameparts::{Lookups, NameParts};

#[test]
fn parsing() {
    let f = File::open("tests/parseable-names.txt").ok().unwrap();
    let reader = BufReader::new(f);

    for line in reader.lines() {
        let line: String = line.ok().unwrap();

        if line.starts_with('#') || !line.contains('|') {
            continue;
        }

        let fields: Vec<&str> = line.split('|').collect();
        let input = fields[0];

        let parsed = NameParts::parse(input);

        let expectations = [
            ("salutation", fields[1], &parsed.salutation),
            ("first name", fields[2], &parsed.first_name),
            ("middle name", fields[3], &parsed.middle_name),
            ("last name", fields[4], &parsed.last_name),
            ("generation", fields[5], &parsed.generation),
            ("suffix", fields[6], &parsed.suffix),
            ("nickname", fields[7], &parsed.nickname),
        ];

        for (slot, expected, actual) in expectations.iter() {
            assert!(
                *expected == actual.as_str(),
                "[{}] Expected {} {:?}, got {:?}",
                input,
                slot,
                expected,
                actual
            );
        }

        assert_eq!(
            input, parsed.provided_name,
            "[{}] provided_name was altered",
            input
        );
    }
}

#[test]
fn aliases() {
    let parsed = NameParts::parse("Tony Stark a/k/a Ironman a/k/a Stark, Anthony");
    assert_eq!("Tony", parsed.first_name);
    assert_eq!("Stark", parsed.last_name);
    assert_eq!(2, parsed.aliases.len());
    assert_eq!("Ironman", parsed.aliases[0].provided_name);
    assert_eq!("Anthony", parsed.aliases[1].first_name);
    assert_eq!("Stark", parsed.aliases[1].last_name);
}

#[test]
fn corporate_input() {
    for input in ["Sprockets Inc", "Wells Fargo Bank NA", "First Corp LLC"].iter() {
        let parsed = NameParts::parse(input);
        assert_eq!(*input, parsed.provided_name);
        assert_eq!("", parsed.full_name, "[{}] slotted a corporate name", input);
        assert_eq!("", parsed.first_name);
        assert_eq!("", parsed.last_name);
        assert!(parsed.aliases.is_empty());
    }
}

#[test]
fn degenerate_input() {
    // None of these look like names; all must come back as a record rather
    // than a panic, with the original text preserved.
    for input in ["", "   ", "'", "...", "a/k/a", "I am a Popsicle", "James Polera'"].iter() {
        let parsed = NameParts::parse(input);
        assert_eq!(*input, parsed.provided_name);
    }
}

#[test]
fn full_name_reparse_is_stable() {
    for input in ["James Polera", "Mr. James Xavier Polera", "Thurston Howell III"].iter() {
        let first_pass = NameParts::parse(input);
        let second_pass = NameParts::parse(&first_pass.full_name);
        assert_eq!(
            first_pass.full_name, second_pass.full_name,
            "[{}] re-parsing the rendered name changed it",
            input
        );
        assert_eq!(first_pass.last_name, second_pass.last_name);
    }
}

#[test]
fn tabs_collapse_like_spaces() {
    let parsed = NameParts::parse("Dr. James\tPolera\tEsq.");
    assert_eq!("Dr.", parsed.salutation);
    assert_eq!("James", parsed.first_name);
    assert_eq!("Polera", parsed.last_name);
    assert_eq!("Esq.", parsed.suffix);
}

#[test]
fn comma_before_generation() {
    // Inversion moves the trailing generation to the head, where it reads
    // as a courtesy-title abbreviation; the short middle initial folds into
    // the surname.
    let parsed = NameParts::parse("John A. Smith, Jr.");
    assert_eq!("Jr.", parsed.salutation);
    assert_eq!("John", parsed.first_name);
    assert_eq!("", parsed.middle_name);
    assert_eq!("A. Smith", parsed.last_name);
}

#[test]
fn localized_lookups() {
    let lookups = Lookups::default().with_salutations(["Herr", "Frau"]);
    let parsed = NameParts::parse_with("Herr Otto von Bismark", &lookups);
    assert_eq!("Herr", parsed.salutation);
    assert_eq!("Otto", parsed.first_name);
    assert_eq!("von Bismark", parsed.last_name);
}
