//! Walker → reader → normalizer, plus the two keying profiles.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Description, Item};
use crate::error::Result;
use crate::mapping::{wine_id, WineId};
use crate::normalize::normalize;
use crate::reader::{candidate_files, source_name, SourceFormat};
use crate::walker::{wine_dirs, WineDir};

/// Every wine directory under `root` that yielded at least one description, in walk order.
/// Per-file and per-directory failures are logged and skipped.
pub fn extract_wines(root: &Path, format: SourceFormat) -> Result<Vec<Item>> {
    let mut wines = Vec::new();
    for dir in wine_dirs(root)? {
        let descriptions = extract_dir(&dir, format);
        if descriptions.is_empty() {
            debug!(wine = %dir.name, "no descriptions");
            continue;
        }
        wines.push(Item {
            name: dir.name,
            descriptions,
        });
    }
    info!(wines = wines.len(), root = %root.display(), "extraction finished");
    Ok(wines)
}

fn extract_dir(dir: &WineDir, format: SourceFormat) -> Vec<Description> {
    let files = match candidate_files(&dir.path, format.extensions()) {
        Ok(files) => files,
        Err(e) => {
            warn!(wine = %dir.name, error = %e, "skipping directory");
            return Vec::new();
        }
    };

    let mut descriptions = Vec::new();
    for path in files {
        let raw = match format.read(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "skipping file");
                continue;
            }
        };
        let source = source_name(&path);
        match normalize(&raw) {
            Some(normalized) => descriptions.push(Description::new(source, normalized)),
            None => debug!(wine = %dir.name, source = %source, "empty after normalization"),
        }
    }
    descriptions
}

/// JSON profile: keyed by raw directory name. Names that collide after
/// lossy UTF-8 conversion keep the first wine and warn about the rest.
pub fn by_directory_name(wines: Vec<Item>) -> Catalog<String> {
    let mut catalog = Catalog::new();
    for wine in wines {
        let key = wine.name.clone();
        if let Err(rejected) = catalog.insert(key, wine) {
            warn!(wine = %rejected.name, "directory name already taken, skipping");
        }
    }
    catalog
}

/// Dart profile: keyed by the fixed wine ID table. Unmapped wines and
/// duplicate IDs are warned about and left out.
pub fn by_wine_id(wines: Vec<Item>) -> Catalog<WineId> {
    let mut catalog = Catalog::new();
    for wine in wines {
        let Some(id) = wine_id(&wine.name) else {
            warn!(wine = %wine.name, "No mapping found");
            continue;
        };
        if let Err(rejected) = catalog.insert(id, wine) {
            warn!(wine = %rejected.name, id = %id, "wine ID already taken, skipping");
        }
    }
    catalog
}
