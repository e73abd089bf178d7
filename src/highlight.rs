//! Per-token highlighting and click markup for matched lines.
//!
//! Works on the raw line text split on whitespace, so punctuation stays
//! visible in the output. Every piece of line text that ends up in markup goes
//! through [`escape_html`].

use crate::normalize::{is_stopword, strip_punctuation};
use crate::stemmer::stem;

// ============================================================================
// ESCAPING
// ============================================================================

/// Escape the five markup-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JavaScript string literal for `word`, escaped for a double-quoted attribute.
fn js_argument(word: &str) -> String {
    let literal = serde_json::Value::String(word.to_string()).to_string();
    escape_html(&literal)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Render options that come from configuration.
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Base URL of the front end, used for the fallback `href` of clickable words.
    pub client_url: String,
}

/// Markup for a single token, clickable unless it is a stopword.
pub fn render_token(token: &str, options: &RenderOptions) -> String {
    let text = escape_html(token);
    if is_stopword(&strip_punctuation(token)) {
        return format!(r#"<span class="non-clickable-word">{}</span>"#, text);
    }
    format!(
        r#"<a href="{}/lyricmatcher?query={}" class="clickable-word" onclick="searchWord({})">{}</a>"#,
        escape_html(&options.client_url),
        urlencoding::encode(token),
        js_argument(token),
        text
    )
}

/// Render a whole line. Tokens for which `is_match` holds on their
/// punctuation-stripped stem get the highlight wrapper. Tokens are rejoined
/// with single spaces.
pub fn render_line(text: &str, is_match: impl Fn(&str) -> bool, options: &RenderOptions) -> String {
    text.split_whitespace()
        .map(|token| {
            let rendered = render_token(token, options);
            if is_match(stem(&strip_punctuation(token)).as_str()) {
                format!(r#"<span class="highlight">{}</span>"#, rendered)
            } else {
                rendered
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================
