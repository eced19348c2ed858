use super::types::ReviewRequest;

/// Wording steers the model's output format; keep it verbatim.
pub const SYSTEM_PROMPT: &str = r#"You are a code reviewer. Analize only bugs and security based on good practices:

BUGS:
- [Line X] description

SECURITY:
- [Line X] description

If a section has no issues, write "None".
DO NOT include explanations, code snippets, or extra text.
BE CONCISE. Maximum 3 items per section.
"#;

pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

const UNKNOWN_LANGUAGE: &str = "unknown";

pub fn build_user_prompt(request: &ReviewRequest, max_code_length: usize) -> String {
    let language = if request.language.trim().is_empty() {
        UNKNOWN_LANGUAGE
    } else {
        request.language.as_str()
    };

    let snippet = truncate_code(&request.code, max_code_length);

    format!("Language: {language}\n\nCode:\n{snippet}\n\nReview:")
}

/// Keeps the first `max_chars` characters, appending a marker when anything was cut.
pub fn truncate_code(code: &str, max_chars: usize) -> String {
    match code.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &code[..cut]),
        None => code.to_string(),
    }
}
