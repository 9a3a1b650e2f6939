use chrono::Utc;
use clap::Parser;
use place_ai_rust::{cli, config, error};

use cli::{Cli, Commands};
use config::Config;
use error::{PlaceAiError, Result};
use place_ai_common::{enricher, parser, Gazetteer, GazetteerEntry, PlaceResolver, RecognitionInput};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Identify { response, landmarks, output } => {
            println!("🗻 place-ai - place identification\n");

            let resolver = build_resolver(cli.gazetteer.as_deref(), &config)?;

            // 1. Read and parse the saved model responses
            println!("[1/3] Parsing model responses...");
            let response1 = read_response(&response)?;
            let scan = match &landmarks {
                Some(path) => {
                    let response2 = read_response(path)?;
                    // a broken landmark pass degrades to an empty scan,
                    // it never sinks the identification
                    parser::parse_landmark_scan(&response2).unwrap_or_default()
                }
                None => Default::default(),
            };
            println!("✔ {} landmark(s) detected\n", scan.landmarks.len());

            // 2. Resolve against the gazetteer
            println!("[2/3] Matching against gazetteer...");
            let report = match parser::parse_identification(&response1) {
                Ok(data) => {
                    let input = parser::recognition_input_from(&data, &scan);
                    if cli.verbose {
                        println!("  recognized name: {}", input.recognized_name);
                        println!("  keywords: {}", input.keywords.join(", "));
                    }
                    let matched = resolver.resolve(&input);
                    match (&matched.entry, &matched.strategy) {
                        (Some(entry), Some(strategy)) => println!(
                            "✔ Matched {} ({}, score {:.2})\n",
                            entry.canonical_name, strategy, matched.score
                        ),
                        _ => println!("✔ No database match\n"),
                    }
                    enricher::enrich(data, &matched, &scan.landmarks, &scan.visible_text)
                }
                Err(_) => {
                    println!("✔ Response not parseable, falling back\n");
                    enricher::fallback_report(&response1)
                }
            };

            // 3. Write the report
            println!("[3/3] Writing report...");
            let mut doc = serde_json::to_value(&report)?;
            doc["generated_at"] = serde_json::Value::String(Utc::now().to_rfc3339());
            let json = serde_json::to_string_pretty(&doc)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Report saved: {}", path.display());
                }
                None => println!("{}", json),
            }

            println!("\n✅ Identification complete (confidence: {})", report.confidence);
        }

        Commands::Resolve { name, description, keywords, json } => {
            let resolver = build_resolver(cli.gazetteer.as_deref(), &config)?;

            let input = RecognitionInput {
                recognized_name: name,
                description,
                keywords,
            };
            let result = resolver.resolve(&input);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if let (Some(entry), Some(strategy)) = (&result.entry, &result.strategy) {
                println!(
                    "✔ {} — {} district, {}",
                    entry.canonical_name, entry.district, entry.category
                );
                if let Some(altitude) = entry.altitude_m {
                    println!("  altitude: {} m", altitude);
                }
                println!("  strategy: {}, score: {:.2}", strategy, result.score);
            } else {
                println!("No confident match");
            }
        }

        Commands::Suggest { partial, limit } => {
            let resolver = build_resolver(cli.gazetteer.as_deref(), &config)?;
            let limit = limit.unwrap_or(config.suggestion_limit);

            let suggestions = resolver.gazetteer().suggestions(&partial, limit);
            if suggestions.is_empty() {
                println!("No suggestions for '{}'", partial);
            } else {
                for entry in suggestions {
                    print_entry(entry);
                }
            }
        }

        Commands::Places { category, district, json } => {
            let resolver = build_resolver(cli.gazetteer.as_deref(), &config)?;
            let gazetteer = resolver.gazetteer();

            let entries: Vec<&GazetteerEntry> = match (category, district.as_deref()) {
                (Some(category), _) => gazetteer.entries_by_category(category),
                (None, Some(district)) => gazetteer.entries_by_district(district),
                (None, None) => gazetteer.entries().iter().collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    print_entry(entry);
                }
                println!("\n{} place(s)", entries.len());
            }
        }

        Commands::Config { set_gazetteer, show } => {
            let mut config = config;

            if let Some(path) = set_gazetteer {
                // reject broken files before they become the default
                Gazetteer::from_file(&path)
                    .map_err(|e| PlaceAiError::InvalidGazetteer(e.to_string()))?;
                config.set_gazetteer_path(path)?;
                println!("✔ Gazetteer configured");
            }

            if show {
                println!("Configuration:");
                println!(
                    "  gazetteer: {}",
                    config
                        .gazetteer_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "builtin (Uttarakhand)".into())
                );
                println!("  suggestion limit: {}", config.suggestion_limit);
                println!("  language: {}", config.language);
            }
        }
    }

    Ok(())
}

/// Build the resolver once per invocation: CLI override first, then the
/// configured file, then the builtin dataset.
fn build_resolver(cli_override: Option<&Path>, config: &Config) -> Result<PlaceResolver> {
    let path: Option<PathBuf> = cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.gazetteer_path.clone());

    let gazetteer = match path {
        Some(path) => {
            if !path.exists() {
                return Err(PlaceAiError::FileNotFound(path.display().to_string()));
            }
            Gazetteer::from_file(&path)
                .map_err(|e| PlaceAiError::InvalidGazetteer(e.to_string()))?
        }
        None => Gazetteer::uttarakhand(),
    };

    Ok(PlaceResolver::new(gazetteer))
}

fn read_response(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PlaceAiError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn print_entry(entry: &GazetteerEntry) {
    let altitude = entry
        .altitude_m
        .map(|m| format!(", {} m", m))
        .unwrap_or_default();
    println!(
        "  {} — {} district, {}{}",
        entry.canonical_name, entry.district, entry.category, altitude
    );
}
