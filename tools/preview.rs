/// Preview — interactive shell for trying names and fortunes.
///
/// Usage: preview [--config <file.ron>] [--data <dir>] [--seed <n>]
///
/// Commands:
///   name <first> <last> [tag1,tag2]  — suggest three names
///   fortune [tag1,tag2] [date]       — compose a fortune
///   tags                             — list syllable and fortune tags
///   seed <n>                         — set RNG seed
///   bulk <n> <first> <last>          — generate n requests with variety stats
///   help                             — list commands
///   quit                             — exit

use naeilum::core::fortune::parse_tag_list;
use naeilum::schema::candidate::{NameCandidate, NameOptions};
use naeilum::NaeilumEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut config_path = None;
    let mut data_dir = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--data" if i + 1 < args.len() => {
                i += 1;
                data_dir = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = NaeilumEngine::builder();
    if let Some(ref path) = config_path {
        builder = match builder.config_file(Path::new(path)) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        };
    }
    if let Some(ref dir) = data_dir {
        builder = builder.data_dir(dir);
    }
    if let Some(s) = seed {
        builder = builder.seed(s);
    }

    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = engine.rng();
    let mut current_seed = engine.seed();
    match current_seed {
        Some(s) => println!("Seed: {}", s),
        None => println!("Seed: random"),
    }
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
            }
            "name" => {
                if parts.len() < 3 {
                    println!("Usage: name <first> <last> [tag1,tag2]");
                    println!("  Use '-' for an empty name part.");
                    continue;
                }
                let first = blank_dash(parts[1]);
                let last = blank_dash(parts[2]);
                let options = NameOptions {
                    tags: parts.get(3).map(|t| parse_tag_list(t)),
                    ..NameOptions::default()
                };
                match engine.suggest_names(first, last, &options, &mut rng) {
                    Ok(names) => {
                        println!();
                        for (n, candidate) in names.iter().enumerate() {
                            print_candidate(n + 1, candidate);
                        }
                    }
                    Err(e) => println!("ERROR: {}", e),
                }
            }
            "fortune" => {
                let tags = match parts.get(1) {
                    Some(t) => parse_tag_list(t),
                    None => engine.fortune_tags().to_vec(),
                };
                let fortune = engine.fortune(&tags, parts.get(2).copied(), &mut rng);
                println!("\n--- Fortune for {} ---", fortune.date);
                println!("Cosmic cookie: {}", fortune.cosmic_cookie);
                println!("Lucky snack:   {}", fortune.lucky_snack);
                println!("Deeper look:   {}", fortune.deeper_look);
                println!("--- End ---\n");
            }
            "tags" => {
                let reference = engine.reference();
                println!("Syllable tags: {}", reference.syllables.tags().join(", "));
                println!("Fortune tags:  {}", reference.fortunes.tags().join(", "));
                println!("Default tags:  {}", engine.default_tags().join(", "));
            }
            "seed" => {
                if parts.len() < 2 {
                    match current_seed {
                        Some(s) => println!("Current seed: {}", s),
                        None => println!("Current seed: random"),
                    }
                    continue;
                }
                match parts[1].parse::<u64>() {
                    Ok(s) => {
                        rng = StdRng::seed_from_u64(s);
                        current_seed = Some(s);
                        println!("Seed set to {}", s);
                    }
                    Err(_) => {
                        println!("Invalid seed: {}", parts[1]);
                    }
                }
            }
            "bulk" => {
                if parts.len() < 4 {
                    println!("Usage: bulk <n> <first> <last>");
                    continue;
                }
                let count: usize = match parts[1].parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        println!("Invalid count: {}", parts[1]);
                        continue;
                    }
                };
                let first = blank_dash(parts[2]);
                let last = blank_dash(parts[3]);

                let mut surnames: HashMap<String, usize> = HashMap::new();
                let mut names: HashMap<String, usize> = HashMap::new();
                let mut total = 0usize;
                for _ in 0..count {
                    match engine.suggest_names(first, last, &NameOptions::default(), &mut rng) {
                        Ok(candidates) => {
                            for c in candidates {
                                *surnames.entry(c.family.localized.clone()).or_insert(0) += 1;
                                *names.entry(c.name_localized).or_insert(0) += 1;
                                total += 1;
                            }
                        }
                        Err(e) => {
                            println!("ERROR: {}", e);
                            break;
                        }
                    }
                }

                println!("\n=== Bulk Stats ({} requests, {} candidates) ===", count, total);
                println!("Unique names: {}", names.len());
                let mut by_count: Vec<(&String, &usize)> = surnames.iter().collect();
                by_count.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
                for (surname, n) in by_count {
                    println!(
                        "  {} {:>5} ({:.1}%)",
                        surname,
                        n,
                        *n as f64 * 100.0 / total.max(1) as f64
                    );
                }
                println!();
            }
            _ => {
                println!("Unknown command: '{}'. Type 'help' for commands.", cmd);
            }
        }
    }
}

fn blank_dash(s: &str) -> &str {
    if s == "-" {
        ""
    } else {
        s
    }
}

fn print_candidate(n: usize, c: &NameCandidate) {
    println!("{}. {}  ({})  {}", n, c.name_localized, c.name_display, c.script_forms.join(""));
    println!("   {} {}: {}", c.family.localized, c.family.script_form, c.family.meaning);
    for g in &c.given {
        println!("   {} {}: {}", g.syllable, g.script_form, g.meaning);
    }
    println!("   → {}\n", c.summary);
}

fn print_usage() {
    println!("Usage: preview [--config <file.ron>] [--data <dir>] [--seed <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  name <first> <last> [tag1,tag2]  — suggest three names");
    println!("  fortune [tag1,tag2] [date]       — compose a fortune");
    println!("  tags                             — list syllable and fortune tags");
    println!("  seed <n>                         — set RNG seed");
    println!("  bulk <n> <first> <last>          — generate n requests with variety stats");
    println!("  help                             — list commands");
    println!("  quit                             — exit");
}
