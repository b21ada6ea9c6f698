use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct MarkerData {
    salutations: Vec<String>,
    generations: Vec<String>,
    suffixes: Vec<String>,
    surname_prefixes: Vec<String>,
    alias_markers: Vec<String>,
    corporate_markers: Vec<String>,
    supplemental_markers: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/marker_data.json")?;
    let markers: MarkerData = serde_json::from_str(&json)?;

    write_set(&output.join("salutations.rs"), &markers.salutations)?;
    write_set(&output.join("generations.rs"), &markers.generations)?;
    write_set(&output.join("suffixes.rs"), &markers.suffixes)?;
    write_set(&output.join("surname_prefixes.rs"), &markers.surname_prefixes)?;
    write_set(&output.join("alias_markers.rs"), &markers.alias_markers)?;
    write_set(&output.join("corporate_markers.rs"), &markers.corporate_markers)?;
    write_set(
        &output.join("supplemental_markers.rs"),
        &markers.supplemental_markers,
    )?;

    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    // Membership is case-insensitive, so keys are stored uppercased; the
    // supplied lists may repeat an entry ("TEN" historically appeared twice)
    let mut seen = HashSet::new();
    let deduped: Vec<String> = set
        .iter()
        .map(|v| v.to_uppercase())
        .filter(|v| seen.insert(v.clone()))
        .collect();

    let mut builder = phf_codegen::Set::new();
    for v in &deduped {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
