/// Data Linter — validates the syllable, surname and fortune tables.
///
/// Usage: data_linter <data_dir>

use naeilum::core::reference::ReferenceData;
use std::path::Path;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: data_linter <data_dir>");
        process::exit(0);
    }

    let data_dir = Path::new(&args[1]);
    if !data_dir.is_dir() {
        eprintln!("ERROR: Path '{}' is not a directory", data_dir.display());
        process::exit(1);
    }

    // Strict load first so broken files are reported as errors, not as empty tables.
    let data = match ReferenceData::load_dir(data_dir) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("ERROR: Failed to load reference data: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded {} syllables ({} tags), {} surname keys, {} fortune tags",
        data.syllables.len(),
        data.syllables.tags().len(),
        data.surnames.initials().len(),
        data.fortunes.tags().len()
    );

    let findings = data.lint();

    println!("\n=== Reference Data Lint Report ===\n");

    if findings.is_empty() {
        println!("All checks passed!");
    }

    for finding in &findings {
        println!("WARNING: {}", finding);
    }

    println!("\nSummary: {} warnings", findings.len());

    // Only an unusable syllable pool is fatal.
    if data.syllables.is_empty() {
        process::exit(1);
    }
}
