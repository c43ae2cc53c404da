//! Response extractor: turns raw free-text provider output into structured
//! news items. Providers are instructed to answer in a fixed
//! `TITLE: / SNIPPET: / URL:` shape but only partially comply, so extraction
//! tolerates reordering noise between fields, repeated URLs, and output with
//! no structure at all. Malformed input degrades to fewer items, never to an
//! error.

use std::collections::HashSet;

use crate::search::types::NewsItem;

/// Fallback snippets are cut to this many characters of the raw content.
const FALLBACK_SNIPPET_CHARS: usize = 200;

/// One `TITLE: ... SNIPPET: ... URL: ...` occurrence. Title and snippet run
/// to line end; `.*?` lets the pattern absorb intervening noise between
/// fields, so the snippet line may sit several lines below its title.
fn primary_pattern() -> &'static regex::Regex {
    static RE: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    RE.get_or_init(|| {
        regex::Regex::new(r"(?is)TITLE:\s*([^\n]+).*?SNIPPET:\s*([^\n]+).*?URL:\s*([^\s\n]+)")
            .unwrap()
    })
}

/// Bare URL token. Closing parens are excluded so markdown-style
/// `(https://...)` links don't drag the paren into the URL.
fn url_pattern() -> &'static regex::Regex {
    static RE: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    RE.get_or_init(|| regex::Regex::new(r"https?://[^\s\)]+").unwrap())
}

/// Extract up to `max_results` news items from `content`.
///
/// Primary path: scan for the structured three-field pattern, trim each
/// captured field, and keep the earliest occurrence of every URL. If that
/// yields nothing, fall back to bare-URL tokens with a synthesized title and
/// a snippet cut from the head of the raw content. An empty result is a
/// valid outcome, not an error.
pub fn extract_news_items(content: &str, topic: &str, max_results: usize) -> Vec<NewsItem> {
    let mut items: Vec<NewsItem> = Vec::new();
    let mut seen_urls: HashSet<String> = HashSet::new();

    for caps in primary_pattern().captures_iter(content) {
        if items.len() >= max_results {
            break;
        }
        let title = caps[1].trim();
        let snippet = caps[2].trim();
        let url = caps[3].trim();
        // NewsItem fields must be non-empty after trimming.
        if title.is_empty() || snippet.is_empty() || url.is_empty() {
            continue;
        }
        if !seen_urls.insert(url.to_string()) {
            continue;
        }
        items.push(NewsItem {
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: url.to_string(),
            topic: topic.to_string(),
        });
    }

    // Fallback: no structured matches at all. Build basic items from any
    // URL-looking tokens in the content.
    if items.is_empty() {
        for m in url_pattern().find_iter(content) {
            if items.len() >= max_results {
                break;
            }
            let url = m.as_str();
            if !seen_urls.insert(url.to_string()) {
                continue;
            }
            items.push(NewsItem {
                title: format!("News about {topic}"),
                snippet: head_chars(content, FALLBACK_SNIPPET_CHARS),
                url: url.to_string(),
                topic: topic.to_string(),
            });
        }
    }

    items
}

/// First `max` characters of `s` (char-boundary safe).
fn head_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
