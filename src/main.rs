// src/main.rs
mod extractors;
mod loader;
mod normalize;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use extractors::{SectionExtractor, TableExtractor};
use normalize::normalize;
use storage::StorageManager;
use utils::AppError;

/// Characters of section body shown per printed sample.
const SECTION_SAMPLE_CHARS: usize = 500;

/// Rows shown per printed table sample.
const TABLE_SAMPLE_ROWS: usize = 5;

/// Command Line Interface for the DART audit-report extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the audit report HTML file
    input: PathBuf,

    /// Output directory for extracted content
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Only keep tables with a header-like row among their first two rows
    #[arg(long)]
    strict: bool,

    /// Maximum number of sections to print
    #[arg(long, default_value = "20")]
    max_sections: usize,

    /// Maximum number of tables to print
    #[arg(long, default_value = "5")]
    max_tables: usize,

    /// Save sections, the first table, and run metadata to the output directory
    #[arg(short, long)]
    save: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Load the document, resolving its encoding
    let document = loader::load(&args.input)?;

    // 4. Extract sections and print normalized samples
    let section_extractor = SectionExtractor::new();
    let sections = section_extractor.extract(&document);
    tracing::info!("Extracted {} sections", sections.len());

    println!("==== Sections ====");
    for section in sections.iter().take(args.max_sections) {
        let sample = truncate_chars(&section.body, SECTION_SAMPLE_CHARS);
        println!("\n[{}]\n{}", section.title, normalize(sample));
    }

    // 5. Extract tables under the selected retention policy
    let table_extractor = TableExtractor::new();
    let tables = if args.strict {
        table_extractor.extract_data_tables(&document)
    } else {
        table_extractor.extract(&document)
    };
    tracing::info!("Extracted {} tables (strict: {})", tables.len(), args.strict);

    println!("\n==== Tables ====");
    for (idx, table) in tables.iter().enumerate().take(args.max_tables) {
        println!("\n[table {}] {} rows", idx + 1, table.len());
        for row in table.rows().iter().take(TABLE_SAMPLE_ROWS) {
            println!("  {}", row.join(" | "));
        }
    }

    // 6. Persist outputs when requested
    if args.save {
        let storage = StorageManager::new(&args.output_dir)?;
        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("report");

        storage.save_sections(stem, &sections)?;
        if let Some(first) = tables.first() {
            storage.save_table_csv(stem, 1, first)?;
        }
        storage.save_run_metadata(stem, &args.input, sections.len(), tables.len())?;
    }

    Ok(())
}

/// Char-boundary-safe prefix. Report bodies are Korean text, so byte slicing
/// would panic mid-character.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
