//! Comment extraction and cleanup.
//!
//! One regular expression finds every comment in a header; a fixed chain of
//! substitutions and filters then flattens each match into zero or one
//! Markdown-ready lines. This is regex-driven text filtering, not a C++
//! lexer: comment markers inside string literals are matched like any other
//! comment, and that is part of the tool's contract.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Matches both comment shapes in one pass:
// - block: /* ... */ or /** ... */, non-greedy to the nearest closing */
// - line:  //, ///, or ///< followed by the rest of the line
static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*?(?P<block>(?s:.*?))\*/|///?<?(?P<line>.*)").unwrap());

// Newline plus decoration (leading whitespace, optional `*`, optional one
// space) inside a block comment. The greedy `\s*` also swallows blank lines,
// so paragraph breaks flatten into a single space.
static BLOCK_DECOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\*? ?").unwrap());

// XML/HTML-shaped tag at the start of the text.
static XML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^</?.*?>").unwrap());

// Include-guard identifier at the start of the text. Anchored at the start
// only, not the end: trailing words after the identifier still count.
static INCLUDE_GUARD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w*_HPP_").unwrap());

// Fenced code example, delimiters included.
static CODE_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```.*?```").unwrap());

// Doxygen tags rendered as Markdown bullets. The param alternative consumes
// the bracketed qualifier and the parameter name along with the tag itself.
static DOXYGEN_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@brief|@t?param(\[(in|out|inout)\])?\s*\w*|@return|@note").unwrap()
});

// Runs of ASCII spaces. Tabs are left alone.
static SPACE_RUNS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(" +").unwrap());

/// Extract every comment from `source` and push it through the cleanup
/// pipeline, preserving match order.
///
/// Comments that the markup filters reject, or that clean down to nothing,
/// produce no line. A surviving line may still contain embedded newlines:
/// each Doxygen tag is rewritten to `"\n- "` so that tags render as
/// Markdown list items.
///
/// # Examples
///
/// ```
/// use docskim::extract::clean_comments;
///
/// assert_eq!(clean_comments("/// @brief Draws."), vec!["- Draws."]);
/// ```
pub fn clean_comments(source: &str) -> Vec<String> {
    COMMENT_REGEX
        .captures_iter(source)
        .map(|caps| comment_text(&caps))
        .filter(|text| !text.starts_with("namespace "))
        .filter(|text| !XML_TAG_REGEX.is_match(text))
        .filter(|text| !INCLUDE_GUARD_REGEX.is_match(text))
        .map(|text| CODE_FENCE_REGEX.replace_all(&text, " ").into_owned())
        .map(|text| DOXYGEN_TAG_REGEX.replace_all(&text, "\n- ").into_owned())
        .map(|text| SPACE_RUNS_REGEX.replace_all(&text, " ").into_owned())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

/// Select the raw text of one match: the line capture when it is non-empty,
/// otherwise the flattened block capture. A bare `//` has an empty line
/// capture and falls through to the (absent, hence empty) block branch,
/// which the final empty filter then discards.
fn comment_text(caps: &Captures) -> String {
    match caps.name("line") {
        Some(line) if !line.as_str().is_empty() => line.as_str().trim().to_string(),
        _ => {
            let block = caps.name("block").map_or("", |m| m.as_str());
            BLOCK_DECOR_REGEX.replace_all(block, " ").trim().to_string()
        }
    }
}
