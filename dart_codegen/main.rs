use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wine_text::emit::dart;
use wine_text::mapping::WineId;
use wine_text::pipeline;
use wine_text::reader::SourceFormat;
use wine_text::settings::Settings;
use wine_text::Catalog;

/// Generate Dart `WineDescription` declarations from the `*.txt` tasting notes.
#[derive(Parser)]
#[command(name = "dart_codegen")]
struct Cli {
    /// Wine descriptions directory (overrides WINE_DESCRIPTIONS_DIR)
    dir: Option<PathBuf>,

    /// Where to write the generated Dart snippet
    #[arg(short, long, default_value = "wine_descriptions_output.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    wine_text::init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    info!(settings_loaded = ?settings, msg = "Starting dart generation");

    let root = settings.resolve_root(cli.dir, "dart_codegen")?;
    let wines = pipeline::extract_wines(&root, SourceFormat::Text)?;
    let catalog = pipeline::by_wine_id(wines);

    if catalog.is_empty() {
        println!("No wine data found");
        return Ok(());
    }

    print_report(&catalog);

    fs::write(&cli.output, dart::generate(&catalog))
        .with_context(|| format!("Failed to write {:?}", cli.output))?;

    println!("Dart code saved to {}", cli.output.display());
    println!("Total wines processed: {}", catalog.len());
    Ok(())
}

fn print_report(catalog: &Catalog<WineId>) {
    println!("{}", "=".repeat(80));
    println!("WINE DESCRIPTIONS DATA");
    println!("{}\n", "=".repeat(80));

    for (id, wine) in catalog.iter() {
        println!("Wine ID {}: {}", id, wine.name);
        println!("  {} descriptions found", wine.descriptions.len());
        for desc in &wine.descriptions {
            println!("    - {}: {} chars", desc.source, desc.text.chars().count());
        }
        println!();
    }
}
