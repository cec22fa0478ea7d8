//! Fixed wine directory → app wine ID table used by the Dart generator.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WineId(pub u32);

impl fmt::Display for WineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered: partial matches take the first hit in this order.
const WINE_IDS: &[(&str, u32)] = &[
    ("01 Chardonnay Markowitsch", 1),
    ("02 Tignanello", 2),
    ("03 Riesling Bürklin", 3),
    ("04 Ducru Beaucaillou", 4),
    ("07 Welschriesling TBA Kracher", 5),
    ("08 Pinot Noir Südfrankreich", 6),
    ("09 Zweigelt Achs", 7),
    ("10 Brut rosé Reserve Loimer", 8),
    ("04 Sauvignon blanc Cloudy Bay", 9),
    ("05 Weissburgunder Gross", 10),
];

/// Exact name first, then the first entry where either name contains the other.
pub fn wine_id(dir_name: &str) -> Option<WineId> {
    WINE_IDS
        .iter()
        .find(|(name, _)| *name == dir_name)
        .or_else(|| {
            WINE_IDS
                .iter()
                .find(|(name, _)| dir_name.contains(name) || name.contains(dir_name))
        })
        .map(|(_, id)| WineId(*id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact() {
        assert_eq!(wine_id("02 Tignanello"), Some(WineId(2)));
        assert_eq!(wine_id("05 Weissburgunder Gross"), Some(WineId(10)));
        assert_eq!(wine_id("04 Sauvignon blanc Cloudy Bay"), Some(WineId(9)));
    }

    #[test]
    fn directory_name_contains_key() {
        assert_eq!(wine_id("02 Tignanello 2019 Antinori"), Some(WineId(2)));
    }

    #[test]
    fn key_contains_directory_name() {
        assert_eq!(wine_id("Zweigelt Achs"), Some(WineId(7)));
        // Ambiguous prefix resolves to the first table entry.
        assert_eq!(wine_id("04 "), Some(WineId(4)));
    }

    #[test]
    fn unmapped() {
        assert_eq!(wine_id("11 Grüner Veltliner Smaragd"), None);
    }

    #[test]
    fn numeric_ordering() {
        assert!(WineId(9) < WineId(10));
        assert_eq!(WineId(10).to_string(), "10");
    }
}
