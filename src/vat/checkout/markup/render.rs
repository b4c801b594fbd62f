use crate::vat::checkout::markup::{Document, Element, NBSP, Node};

/// Elements written as `<tag/>` without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["meta", "link", "img", "br", "hr", "input"];

const INDENT: &str = " ";

/// Serialises a document with one tag or text run per line, indenting each
/// nesting level by a single space.
pub fn prettify(document: &Document) -> String {
    prettify_element(&document.root)
}

fn prettify_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    push_indent(depth, out);
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }

    if VOID_ELEMENTS.contains(&element.tag) {
        out.push_str("/>\n");
        return;
    }
    out.push_str(">\n");

    for child in &element.children {
        match child {
            Node::Element(inner) => write_element(inner, depth + 1, out),
            Node::Text(text) => {
                let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
                if !text.is_empty() {
                    push_indent(depth + 1, out);
                    out.push_str(&escape_text(text));
                    out.push('\n');
                }
            }
            Node::Comment(comment) => {
                push_indent(depth + 1, out);
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->\n");
            }
        }
    }

    push_indent(depth, out);
    out.push_str("</");
    out.push_str(element.tag);
    out.push_str(">\n");
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Escapes markup characters in text content. Non-breaking spaces are written
/// as `&nbsp;` so blank cells stay visible in the source.
fn escape_text(value: &str) -> String {
    html_escape::encode_text(value).replace(NBSP, "&nbsp;")
}

fn escape_attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}
