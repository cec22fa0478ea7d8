use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One wine directory directly under the root.
#[derive(Debug, Clone)]
pub struct WineDir {
    pub name: String,
    pub path: PathBuf,
}

/// Immediate subdirectories of `root`, sorted by name. Files are skipped; no recursion.
pub fn wine_dirs(root: &Path) -> Result<Vec<WineDir>> {
    let entries = fs::read_dir(root).map_err(|e| Error::io(root, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        dirs.push(WineDir { name, path });
    }
    dirs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_directories_only() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("10 Brut rosé Reserve Loimer")).unwrap();
        fs::create_dir(root.path().join("02 Tignanello")).unwrap();
        fs::create_dir(root.path().join("01 Chardonnay Markowitsch")).unwrap();
        fs::write(root.path().join("notes.txt"), "not a wine").unwrap();
        fs::create_dir_all(root.path().join("02 Tignanello/nested")).unwrap();

        let names: Vec<String> = wine_dirs(root.path())
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "01 Chardonnay Markowitsch",
                "02 Tignanello",
                "10 Brut rosé Reserve Loimer",
            ]
        );
    }

    #[test]
    fn empty_root() {
        let root = tempfile::tempdir().unwrap();
        assert!(wine_dirs(root.path()).unwrap().is_empty());
    }
}
