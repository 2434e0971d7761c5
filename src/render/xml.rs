use crate::markup::Element;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const INDENT: &str = "  ";

/// Render an element tree as an indented XML document.
///
/// Layout: declaration line, one element per line, two-space indent.
/// Elements without children and without (non-empty) text collapse to `<tag/>`.
pub fn render_xml(root: &Element) -> String {
    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    write_element(&mut out, root, 0);
    out
}

fn write_element(out: &mut String, el: &Element, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }

    out.push('<');
    out.push_str(&el.tag);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(out, value, true);
        out.push('"');
    }

    if el.is_empty() {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    if let Some(text) = el.text() {
        escape_into(out, text, false);
    }

    if !el.children.is_empty() {
        out.push('\n');
        for child in &el.children {
            write_element(out, child, depth + 1);
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push_str(">\n");
}

fn escape_into(out: &mut String, s: &str, attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            '\n' if attr => out.push_str("&#10;"),
            _ => out.push(ch),
        }
    }
}
