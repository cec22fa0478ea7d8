use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    pub url: Option<String>,
}

/// URL extraction, blank-line collapsing and trimming.
/// Returns `None` when nothing but whitespace is left.
pub fn normalize(raw: &str) -> Option<Normalized> {
    let (text, url) = split_url(raw);
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(Normalized {
        text: text.to_string(),
        url,
    })
}

/// The first URL in the text is reported; every occurrence of it is removed,
/// together with the spaces/tabs directly before each one.
fn split_url(raw: &str) -> (String, Option<String>) {
    match URL_RE.find(raw) {
        Some(m) => {
            let url = m.as_str();
            (strip_all(raw, url), Some(url.to_string()))
        }
        None => (raw.to_string(), None),
    }
}

fn strip_all(text: &str, url: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(url) {
        out.push_str(rest[..pos].trim_end_matches([' ', '\t']));
        rest = &rest[pos + url.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_pulled_out() {
        let n = normalize("Good wine. https://example.com/a\n\n\n\nEnd.").unwrap();
        assert_eq!(n.url.as_deref(), Some("https://example.com/a"));
        assert_eq!(n.text, "Good wine.\n\nEnd.");
    }

    #[test]
    fn url_never_survives() {
        for raw in [
            "https://falstaff.com/wine/123 Dense and dark.",
            "Notes\nhttp://vinous.com/x?y=1\nMore notes",
            "Tail link: https://www.decanter.com/reviews/tignanello-2019",
        ] {
            let n = normalize(raw).unwrap();
            let url = n.url.clone().unwrap();
            assert!(!n.text.contains(&url), "{raw:?} -> {n:?}");
        }
    }

    #[test]
    fn repeated_url_is_removed_everywhere() {
        let n = normalize("See https://example.com/a for more.\nSource: https://example.com/a").unwrap();
        assert_eq!(n.url.as_deref(), Some("https://example.com/a"));
        assert_eq!(n.text, "See for more.\nSource:");
    }

    #[test]
    fn other_urls_stay() {
        let n = normalize("a https://one.example b https://two.example").unwrap();
        assert_eq!(n.url.as_deref(), Some("https://one.example"));
        assert_eq!(n.text, "a b https://two.example");
    }

    #[test]
    fn no_url() {
        let n = normalize("  Ripe cherry, firm tannins.  ").unwrap();
        assert_eq!(n.url, None);
        assert_eq!(n.text, "Ripe cherry, firm tannins.");
    }

    #[test]
    fn blank_runs_collapse_to_one_blank_line() {
        let n = normalize("a\n\n\nb\n \n\t\n\nc").unwrap();
        assert_eq!(n.text, "a\n\nb\n\nc");
    }

    #[test]
    fn double_newline_preserved() {
        let n = normalize("first paragraph\n\nsecond paragraph\nsame paragraph").unwrap();
        assert_eq!(n.text, "first paragraph\n\nsecond paragraph\nsame paragraph");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "Good wine. https://example.com/a\n\n\n\nEnd.",
            "a\n\n\n\n\nb\n\nc\n",
            "\n\n  plain  \n\n",
        ] {
            let once = normalize(raw).unwrap();
            let twice = normalize(&once.text).unwrap();
            assert_eq!(once.text, twice.text);
        }
    }

    #[test]
    fn empty_after_normalization() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize(" \n\n\t\n"), None);
        assert_eq!(normalize("https://only.example/link"), None);
    }
}
