//! Text handling around LaTeX documents returned by the model.

use std::sync::LazyLock;

use regex::Regex;

const DOCUMENT_CLASS: &str = "\\documentclass";
const PLAIN_TEXT_LIMIT: usize = 2000;
const FALLBACK_SUBJECT: &str = "Application for Position";

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z]*[ \t]*\r?\n?").expect("fence pattern must be valid"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?```\s*$").expect("fence pattern must be valid"));
static STRUCTURE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:documentclass|usepackage)(?:\[[^\]]*\])?\{[^}]*\}|\\(?:begin|end)\{[^}]*\}|\\maketitle")
        .expect("structure pattern must be valid")
});
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[^\\])%.*$").expect("comment pattern must be valid"));
static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:sub)*section\*?\{([^}]*)\}").expect("section pattern must be valid")
});
static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\item\s*").expect("item pattern must be valid"));
static COMMAND_WITH_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[A-Za-z]+\*?(?:\[[^\]]*\])?\{([^}]*)\}").expect("command pattern must be valid")
});
static BARE_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[A-Za-z]+\*?").expect("command pattern must be valid"));
static ESCAPED_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([%&$#_])").expect("escape pattern must be valid"));
static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space pattern must be valid"));
static SUBJECT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^subject:[ \t]*(.+)$").expect("subject pattern must be valid"));

/// Strip Markdown fences and any chatter before `\documentclass`.
pub fn clean_generated_latex(raw: &str) -> String {
    let trimmed = raw.trim();
    let unfenced = OPENING_FENCE.replace(trimmed, "");
    let unfenced = CLOSING_FENCE.replace(&unfenced, "");
    let mut content = unfenced.trim().to_string();

    if !content.starts_with(DOCUMENT_CLASS)
        && let Some(start) = content.find(DOCUMENT_CLASS)
    {
        content = content[start..].to_string();
    }

    if content.is_empty() {
        return content;
    }
    content.push('\n');
    content
}

/// Readable text extracted from a LaTeX document, capped at 2000 characters.
pub fn latex_to_plain_text(latex: &str) -> String {
    let text = COMMENT.replace_all(latex, "$1");
    let text = text.replace("\\\\", "\n");
    let text = STRUCTURE_COMMAND.replace_all(&text, "");
    let text = SECTION.replace_all(&text, "\n\n$1:\n");
    let text = ITEM.replace_all(&text, "\n- ");

    // Nested arguments unwrap one level per pass.
    let mut text = text.into_owned();
    loop {
        let next = COMMAND_WITH_ARGUMENT.replace_all(&text, "$1").into_owned();
        if next == text {
            break;
        }
        text = next;
    }
    let text = ESCAPED_SPECIAL.replace_all(&text, "$1");
    let text = BARE_COMMAND.replace_all(&text, "");
    let text = text.replace(['{', '}'], "");

    let lines: Vec<String> = text
        .lines()
        .map(|line| HORIZONTAL_SPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect();
    truncate_chars(&lines.join("\n"), PLAIN_TEXT_LIMIT)
}

/// Subject of a generated email: an explicit `Subject:` line, else the first
/// non-empty line that is not a `From:` header.
pub fn extract_subject(message: &str) -> String {
    if let Some(captures) = SUBJECT_LINE.captures(message) {
        return captures[1].trim().to_string();
    }

    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("From:"))
        .map(String::from)
        .unwrap_or_else(|| FALLBACK_SUBJECT.to_string())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(limit - 3).collect();
    truncated.push_str("...");
    truncated
}
