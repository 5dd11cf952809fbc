use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

// Their text is never rendered
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Trimmed, non-blank text nodes under `element`, skipping script, style
/// and template content.
fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map_or(false, |e| HIDDEN_ELEMENTS.contains(&e.name()))
            });
            if hidden {
                None
            } else {
                Some(&**text)
            }
        })
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Visible text nodes concatenated without a separator.
pub fn stripped_text(element: &ElementRef<'_>) -> String {
    visible_text(*element).collect()
}

/// Visible text nodes joined by `separator`.
pub fn joined_text(element: &ElementRef<'_>, separator: &str) -> String {
    visible_text(*element).collect::<Vec<_>>().join(separator)
}

/// Replaces every whitespace run with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").into_owned()
}
