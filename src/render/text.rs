// src/render/text.rs
// =============================================================================
// Plain text out of the document tree.
//
// Two users:
// - the code block copy control, which wants the raw text of one node
// - the plain-text export, which wants a whole document without formatting
//
// Tables are the odd one out: their text is a small HTML table string, so a
// copied table keeps its rows and columns.
// =============================================================================

use super::tree::{Document, Node, NodeKind};

/// Concatenated text of a node and everything below it
pub fn plain_text(node: &Node) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::Text(text) => out.push_str(text),
        NodeKind::SoftBreak | NodeKind::HardBreak => out.push('\n'),
        NodeKind::Table => out.push_str(&table_text(node)),
        NodeKind::TaskMarker(_) | NodeKind::Rule => {}
        _ => {
            for child in &node.children {
                push_text(child, out);
            }
        }
    }
}

fn table_text(table: &Node) -> String {
    let mut html = String::from("<table>\n");

    for section in &table.children {
        match section.kind {
            // The head holds its cells directly: one row of <th>
            NodeKind::TableHead => push_row(&section.children, &mut html),
            NodeKind::TableRow => push_row(&section.children, &mut html),
            _ => {}
        }
    }

    html.push_str("</table>");
    html
}

fn push_row(cells: &[Node], html: &mut String) {
    html.push_str("  <tr>\n");
    for cell in cells {
        let tag = match cell.kind {
            NodeKind::TableCell { header: true } => "th",
            NodeKind::TableCell { header: false } => "td",
            _ => continue,
        };
        html.push_str(&format!("    <{tag}>{}</{tag}>\n", plain_text(cell)));
    }
    html.push_str("  </tr>\n");
}

/// Drops a leading YAML front matter block (`---` ... `---`)
pub fn strip_front_matter(source: &str) -> &str {
    let rest = match source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    {
        Some(rest) => rest,
        None => return source,
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }

    // Never closed: it wasn't front matter
    source
}

/// The whole document as unformatted text, one block per paragraph
pub fn document_text(doc: &Document) -> String {
    doc.root
        .children
        .iter()
        .map(block_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block_text(node: &Node) -> String {
    match node.kind {
        NodeKind::List(_) => node
            .children
            .iter()
            .map(|item| plain_text(item).trim().to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        NodeKind::BlockQuote => node
            .children
            .iter()
            .map(block_text)
            .collect::<Vec<_>>()
            .join("\n\n"),
        _ => plain_text(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_of_formatted_paragraph() {
        let doc = Document::parse("Some *emphasis* and `code` and [a link](https://x.dev).");
        assert_eq!(plain_text(&doc.root), "Some emphasis and code and a link.");
    }

    #[test]
    fn test_table_text_is_html_table() {
        let doc = Document::parse("| Name | Value |\n|---|---|\n| a | 1 |\n");
        assert_eq!(
            plain_text(&doc.root),
            "<table>\n  <tr>\n    <th>Name</th>\n    <th>Value</th>\n  </tr>\n  \
             <tr>\n    <td>a</td>\n    <td>1</td>\n  </tr>\n</table>"
        );
    }

    #[test]
    fn test_strip_front_matter() {
        assert_eq!(strip_front_matter("---\ntitle: x\n---\n# Hi\n"), "# Hi\n");
        assert_eq!(strip_front_matter("# Hi\n---\n"), "# Hi\n---\n");
        assert_eq!(strip_front_matter("---\nnever closed\n"), "---\nnever closed\n");
    }

    #[test]
    fn test_document_text_separates_blocks() {
        let doc = Document::parse("# Title\n\nFirst **para**.\n\n- one\n- two\n");
        assert_eq!(document_text(&doc), "Title\n\nFirst para.\n\none\ntwo");
    }
}
