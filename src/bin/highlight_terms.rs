//! Highlight search terms in a text dump of a PDF
//!
//! Reads page text separated by form feeds (the `pdftotext` layout), searches
//! it for the given terms, stores the annotated document and prints the
//! session result as JSON.
//!
//! Usage:
//!   cargo run --release --bin highlight_terms -- pages.txt --terms "42, INV-7"
//!   cargo run --release --bin highlight_terms -- pages.txt --terms 42 --store-dir uploads
//!   cargo run --release --bin highlight_terms -- pages.txt --terms 42 --config highlight.json
//!
//! Set `RUST_LOG=debug` for per-page logging.

use pdf_highlighter::storage::{DirectoryStore, DocumentStore, MemoryStore};
use pdf_highlighter::{HighlightConfig, HighlightScanner, ScanOutcome, SearchTerms, TextDocument};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

struct CliConfig {
    input: Option<PathBuf>,
    terms: String,
    config_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
}

impl CliConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut cli = Self {
            input: None,
            terms: String::new(),
            config_path: None,
            store_dir: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--terms" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        cli.terms = args[i].clone();
                    }
                },
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        cli.config_path = Some(PathBuf::from(&args[i]));
                    }
                },
                "--store-dir" => {
                    i += 1;
                    if i < args.len() {
                        cli.store_dir = Some(PathBuf::from(&args[i]));
                    }
                },
                other => {
                    if cli.input.is_none() {
                        cli.input = Some(PathBuf::from(other));
                    }
                },
            }
            i += 1;
        }

        cli
    }
}

fn run(cli: &CliConfig) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let input = cli.input.as_ref().ok_or("missing input file")?;

    let config = match &cli.config_path {
        Some(path) => HighlightConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => HighlightConfig::default(),
    };

    let store: Box<dyn DocumentStore> = match &cli.store_dir {
        Some(dir) => Box::new(DirectoryStore::open(dir, config.max_document_bytes)?),
        None => Box::new(MemoryStore::new(config.max_document_bytes)),
    };

    let terms = SearchTerms::parse(&cli.terms, config.term_separator)?;

    let upload = store.store(&fs::read(input)?)?;
    let bytes = store.retrieve(&upload)?;
    let mut doc = TextDocument::from_form_feed_text(&String::from_utf8_lossy(&bytes));
    log::info!(
        "pdf_highlighter {}: loaded {} ({} pages)",
        pdf_highlighter::VERSION,
        upload,
        doc.pages().len()
    );

    let scanner = HighlightScanner::new(config);
    let result = scanner.scan(&mut doc, &terms)?;
    let outcome = ScanOutcome::from_result(&result);

    let output = upload.highlighted();
    store.store_as(&output, &doc.to_bytes()?)?;

    Ok(serde_json::json!({
        "message": outcome.to_string(),
        "outcome": outcome,
        "output": output,
        "result": result,
        "version": pdf_highlighter::VERSION,
    }))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = CliConfig::from_args();

    match run(&cli) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: highlight_terms <pages.txt> --terms \"a, b\" [--config file.json] [--store-dir dir]");
            ExitCode::FAILURE
        },
    }
}
