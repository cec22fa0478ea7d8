use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use wine_text::emit::json;
use wine_text::pipeline;
use wine_text::reader::SourceFormat;
use wine_text::settings::Settings;

/// Dump the text of every `*.txt` / `*.TXT` tasting note as JSON, keyed by wine directory.
#[derive(Parser)]
#[command(name = "txt_json")]
struct Cli {
    /// Wine descriptions directory (overrides WINE_DESCRIPTIONS_DIR)
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    wine_text::init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    info!(settings_loaded = ?settings, msg = "Starting txt extraction");

    let root = settings.resolve_root(cli.dir, "txt_json")?;
    let wines = pipeline::extract_wines(&root, SourceFormat::Text)?;
    let catalog = pipeline::by_directory_name(wines);

    println!("{}", json::to_json(&catalog)?);
    Ok(())
}
