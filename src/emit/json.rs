use std::collections::BTreeMap;

use crate::catalog::{Catalog, Description};

/// `{ "<wine dir>": [ {source, text, url}, ... ] }`, 2-space indented.
pub fn to_json(catalog: &Catalog<String>) -> serde_json::Result<String> {
    let view: BTreeMap<&str, &[Description]> = catalog
        .iter()
        .map(|(name, item)| (name.as_str(), item.descriptions.as_slice()))
        .collect();
    serde_json::to_string_pretty(&view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    #[test]
    fn empty_catalog() {
        assert_eq!(to_json(&Catalog::new()).unwrap(), "{}");
    }

    #[test]
    fn shape_and_unicode() {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                "08 Pinot Noir Südfrankreich".to_string(),
                Item {
                    name: "08 Pinot Noir Südfrankreich".into(),
                    descriptions: vec![Description {
                        source: "Weinführer".into(),
                        text: "Zarte Frucht,\n\nlanger Abgang.".into(),
                        url: Some("https://example.com/pinot".into()),
                    }],
                },
            )
            .unwrap();

        let out = to_json(&catalog).unwrap();
        assert!(out.contains("Südfrankreich"), "non-ASCII must not be escaped");
        assert!(out.starts_with("{\n  \"08 Pinot Noir"));

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "08 Pinot Noir Südfrankreich": [{
                    "source": "Weinführer",
                    "text": "Zarte Frucht,\n\nlanger Abgang.",
                    "url": "https://example.com/pinot",
                }]
            })
        );
    }
}
