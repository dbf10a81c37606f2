//! Command-line interface for minimark
//! This binary is a thin driver around the library: it reads a file and
//! prints the lexed elements, the metadata record, or the raw token stream.
//!
//! Usage:
//!   minimark elements `<path>` [--format `<format>`]  - Print the element sequence
//!   minimark metadata `<path>`                      - Print the metadata record as JSON
//!   minimark tokens `<path>`                        - Dump the base token stream

use clap::{Arg, Command};
use minimark::minimark::document::parse_document;
use minimark::minimark::lexing::tokenize;

fn main() {
    let matches = Command::new("minimark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting minimark files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("elements")
                .about("Lex a file and print its element sequence")
                .arg(
                    Arg::new("path")
                        .help("Path to the minimark file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'debug')")
                        .default_value("json"),
                ),
        )
        .subcommand(
            Command::new("metadata")
                .about("Print the document metadata record as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the minimark file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the base token stream (debugging aid)")
                .arg(
                    Arg::new("path")
                        .help("Path to the minimark file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("elements", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_elements_command(path, format);
        }
        Some(("metadata", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_metadata_command(path);
        }
        Some(("tokens", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            handle_tokens_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the elements command
fn handle_elements_command(path: &str, format: &str) {
    let source = read_source(path);
    let document = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "json" => {
            let output = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        "debug" => {
            for element in &document.elements {
                println!("{:?} {:?}", element.kind, element.text(&source));
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the metadata command
fn handle_metadata_command(path: &str) {
    let source = read_source(path);
    let document = parse_document(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = serde_json::to_string_pretty(&document.metadata).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle the tokens command
fn handle_tokens_command(path: &str) {
    let source = read_source(path);
    for (token, span) in tokenize(&source) {
        println!("{:?} {:?} {:?}", token, span.clone(), &source[span]);
    }
}
