use regex::Regex;
use std::sync::LazyLock;

static FENCE_OPENING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\w*\n").expect("valid fence pattern"));

// A lead phrase and its whitespace, optionally followed by a "the review:" style
// introduction. Repeated so a second pass finds nothing left to strip.
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:here is|here's|the review is|review:)\s*(?:(?:(?:the|my)\s+)?(?:code\s+)?review\s*:\s*)?)+",
    )
    .expect("valid preamble pattern")
});

const FENCE: &str = "```";
const SEPARATOR: &str = "---";

/// Strips model artifacts (code fences, preambles, trailing notes) from a review.
pub fn clean(raw: &str) -> String {
    let text = raw.trim();

    let text = FENCE_OPENING.replace_all(text, "");
    let text = text.replace(FENCE, "");

    let mut text = PREAMBLE.replace(&text, "").into_owned();

    if let Some(idx) = text.find(SEPARATOR) {
        text.truncate(idx);
    }

    text.trim().to_string()
}
