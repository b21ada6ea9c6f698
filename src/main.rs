use std::env;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;
use std::process;

use nameparts::NameParts;

const USAGE: &str = "
Usage:
    nameparts parse <name>
    nameparts parse -

If `-` is the argument, nameparts expects newline-separated names on stdin
and prints one JSON record per line. Otherwise it joins the remaining
arguments into a single name and prints the parsed record as JSON.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args);
    } else {
        writeln!(&mut io::stderr(), "{}", USAGE).ok();
        process::exit(64);
    }
}

fn parse_mode(args: &[String]) {
    if args[2] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            match line.ok() {
                Some(input) => {
                    if !print_parsed(&input) {
                        break;
                    }
                }
                None => {
                    break;
                }
            }
        }
    } else {
        let name = args[2..].join(" ");
        if !print_parsed(&name) {
            process::exit(1);
        }
    }
}

fn print_parsed(name: &str) -> bool {
    let parsed = NameParts::parse(name);
    match serde_json::to_string(&parsed) {
        Ok(json) => writeln!(&mut io::stdout(), "{}", json).is_ok(),
        Err(_) => false,
    }
}
