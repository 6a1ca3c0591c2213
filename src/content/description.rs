// SPDX-License-Identifier: MPL-2.0
//! Renders chart description fragments to plain text.
//!
//! Descriptions are small hand-written HTML fragments. Block elements turn
//! into line breaks, list items get a bullet, and entities are decoded.
//! Anything else is dropped. Fragments the reader cannot make sense of fall
//! back to a tag strip of the raw markup.

use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity};
use quick_xml::events::Event;
use quick_xml::Reader;

const BULLET: &str = "• ";
const NBSP: char = '\u{a0}';

/// Elements whose content is never shown.
const HIDDEN: [&str; 3] = ["script", "style", "head"];

/// Elements that end a paragraph.
const BLOCKS: [&str; 13] = [
    "p", "div", "section", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "table", "blockquote",
];

/// Converts an HTML fragment to displayable text.
#[must_use]
pub fn to_plain_text(html: &str) -> String {
    match render(html) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("description markup not parseable ({e}), stripping tags");
            normalize(&strip_tags(html))
        }
    }
}

fn render(html: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut out = String::new();
    let mut hidden_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = tag_name(e.name().as_ref());
                if HIDDEN.contains(&name.as_str()) {
                    hidden_depth += 1;
                } else {
                    open_element(&mut out, &name);
                }
            }
            Event::Empty(e) => {
                let name = tag_name(e.name().as_ref());
                open_element(&mut out, &name);
                close_element(&mut out, &name);
            }
            Event::End(e) => {
                let name = tag_name(e.name().as_ref());
                if HIDDEN.contains(&name.as_str()) {
                    hidden_depth = hidden_depth.saturating_sub(1);
                } else {
                    close_element(&mut out, &name);
                }
            }
            Event::Text(e) if hidden_depth == 0 => {
                let text = match e.unescape_with(html_entity) {
                    Ok(text) => text.into_owned(),
                    Err(_) => String::from_utf8_lossy(&e).into_owned(),
                };
                push_text(&mut out, &text);
            }
            Event::CData(e) if hidden_depth == 0 => {
                push_text(&mut out, &String::from_utf8_lossy(&e.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(normalize(&out))
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn open_element(out: &mut String, name: &str) {
    match name {
        "br" => out.push('\n'),
        "li" => {
            ensure_line_start(out);
            out.push_str(BULLET);
        }
        "tr" => ensure_line_start(out),
        _ if BLOCKS.contains(&name) => ensure_line_start(out),
        _ => {}
    }
}

fn close_element(out: &mut String, name: &str) {
    match name {
        "li" | "tr" => out.push('\n'),
        "td" | "th" => out.push(' '),
        _ if BLOCKS.contains(&name) => out.push_str("\n\n"),
        _ => {}
    }
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Appends text with whitespace runs collapsed to single spaces.
///
/// No-break spaces are kept as written.
fn push_text(out: &mut String, text: &str) {
    let mut pending_space = false;
    let mut at_gap = out.is_empty() || out.ends_with(is_collapsible);

    for c in text.chars() {
        if is_collapsible(c) {
            pending_space = true;
            continue;
        }
        if pending_space && !at_gap {
            out.push(' ');
        }
        out.push(c);
        pending_space = false;
        at_gap = false;
    }

    if pending_space && !at_gap {
        out.push(' ');
    }
}

fn is_collapsible(c: char) -> bool {
    c.is_whitespace() && c != NBSP
}

/// Resolves XML predefined entities first, then the HTML5 named set.
fn html_entity(name: &str) -> Option<&'static str> {
    resolve_predefined_entity(name).or_else(|| resolve_html5_entity(name))
}

/// Trims each line and keeps at most one blank line between paragraphs.
fn normalize(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() && lines.last().is_none_or(|l| l.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
