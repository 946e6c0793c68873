// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal, lossy inline renderer for blog post bodies.
//!
//! Supports exactly three constructs: `#`/`##`/`###` headings at line
//! start, `**bold**`, and line breaks. Everything else (links, lists,
//! code fences) passes through as literal text. Posts are authored
//! against this contract; a full markdown engine would change the
//! documented rendering.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

/// Render markdown-like text to an HTML fragment.
///
/// Input is HTML-escaped first, so raw markup in a post body displays as
/// text instead of executing.
pub fn render_markdown_lite(content: &str) -> String {
    let escaped = escape_html(content);

    let lines: Vec<String> = escaped
        .lines()
        .map(|line| {
            if let Some(rest) = line.strip_prefix("### ") {
                format!("<h3>{rest}</h3>")
            } else if let Some(rest) = line.strip_prefix("## ") {
                format!("<h2>{rest}</h2>")
            } else if let Some(rest) = line.strip_prefix("# ") {
                format!("<h1>{rest}</h1>")
            } else {
                line.to_string()
            }
        })
        .collect();

    let joined = lines.join("<br />");
    BOLD.replace_all(&joined, "<strong>$1</strong>").into_owned()
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
