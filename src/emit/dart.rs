use crate::catalog::Catalog;
use crate::mapping::WineId;

/// One `descriptions: [...]` block per wine, ascending wine ID.
/// Each description gets the id `<wine id>-<n>`, n starting at 1.
pub fn generate(catalog: &Catalog<WineId>) -> String {
    let mut out = String::new();
    for (id, wine) in catalog.iter() {
        out.push_str(&format!("    // Wine ID {id}: {}\n", wine.name));
        out.push_str("    descriptions: [\n");
        for (n, desc) in wine.descriptions.iter().enumerate() {
            out.push_str("      WineDescription(\n");
            out.push_str(&format!("        id: '{id}-{}',\n", n + 1));
            out.push_str(&format!("        source: {},\n", literal(&desc.source)));
            if let Some(url) = &desc.url {
                out.push_str(&format!("        url: {},\n", literal(url)));
            }
            out.push_str(&format!("        text: {},\n", literal(&desc.text)));
            out.push_str("      ),\n");
        }
        out.push_str("    ],\n\n");
    }
    out
}

/// Double-quoted Dart string literal.
pub fn literal(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

/// Backslash first so later escapes are not doubled.
pub fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('$', "\\$")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
