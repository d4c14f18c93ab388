// src/render/html.rs
// =============================================================================
// Document tree -> styled HTML.
//
// Each node kind maps to one element with the gallery's utility classes.
// Code nodes are the only place where the source position matters:
// a code node whose span sits on one line is inline <code>, anything longer
// goes through the CodeBlock sub-renderer.
//
// All text and attribute values are escaped. Link and image targets with a
// scheme outside the allowlist are dropped.
// =============================================================================

use super::code_block::CodeBlock;
use super::escape_html;
use super::text::plain_text;
use super::tree::{Node, NodeKind};

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "xmpp", "irc", "ircs"];

/// Walks the tree, collecting code blocks as they are rendered
pub(super) struct HtmlWriter {
    out: String,
    code_blocks: Vec<CodeBlock>,
}

impl HtmlWriter {
    pub(super) fn new() -> Self {
        Self {
            out: String::new(),
            code_blocks: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> (String, Vec<CodeBlock>) {
        (self.out, self.code_blocks)
    }

    pub(super) fn node(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Document => {
                self.out.push_str("<div class=\"markdown-content\">");
                self.children(node);
                self.out.push_str("</div>");
            }
            NodeKind::Heading(level) => {
                let class = match *level {
                    1 => "text-xl sm:text-[22px] font-semibold mt-5 mb-4 leading-[30px] text-white pb-1 border-b border-gray-500/20",
                    2 => "text-lg sm:text-[20px] font-semibold mt-4 mb-3 leading-[28px] text-blue-300",
                    3 => "text-base sm:text-[18px] font-medium mt-4 mb-3 leading-[26px] text-gray-200",
                    _ => "font-medium mt-3 mb-2 text-gray-200",
                };
                self.wrap(&format!("h{}", level), class, node);
            }
            NodeKind::Paragraph => self.wrap(
                "p",
                "text-sm sm:text-[16px] my-3 leading-[26px] break-words whitespace-pre-wrap text-gray-200",
                node,
            ),
            NodeKind::BlockQuote => self.wrap("blockquote", "border-l-4 pl-4 my-3", node),
            NodeKind::List(None) => self.wrap("ul", "my-3 space-y-1 pl-1", node),
            NodeKind::List(Some(start)) => {
                if *start == 1 {
                    self.out.push_str("<ol class=\"my-3 space-y-1 pl-1\">");
                } else {
                    self.out
                        .push_str(&format!("<ol class=\"my-3 space-y-1 pl-1\" start=\"{}\">", start));
                }
                self.children(node);
                self.out.push_str("</ol>");
            }
            NodeKind::Item => self.wrap(
                "li",
                "text-sm sm:text-[15px] mt-1.5 mb-1.5 leading-[26px] break-words text-gray-200",
                node,
            ),
            NodeKind::TaskMarker(checked) => {
                let checked = if *checked { " checked" } else { "" };
                self.out
                    .push_str(&format!("<input type=\"checkbox\" disabled{} /> ", checked));
            }
            NodeKind::Table => self.table(node),
            NodeKind::TableHead => {
                self.out.push_str("<thead class=\"sticky top-0\"><tr>");
                self.children(node);
                self.out.push_str("</tr></thead>");
            }
            NodeKind::TableRow => {
                self.out.push_str("<tr>");
                self.children(node);
                self.out.push_str("</tr>");
            }
            NodeKind::TableCell { header: true } => {
                self.out.push_str(
                    "<th scope=\"col\" class=\"px-3 py-2.5 text-left text-xs font-medium uppercase tracking-wider sticky top-0 whitespace-nowrap\">",
                );
                self.children(node);
                self.out.push_str("</th>");
            }
            NodeKind::TableCell { header: false } => self.wrap(
                "td",
                "px-3 py-2.5 text-sm align-top whitespace-normal break-words max-w-[250px]",
                node,
            ),
            NodeKind::Emphasis => self.plain("em", node),
            NodeKind::Strong => self.plain("strong", node),
            NodeKind::Strikethrough => self.plain("del", node),
            NodeKind::Link { href, title } => {
                self.out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-400 hover:text-blue-300 hover:underline transition-colors\"",
                    escape_html(&safe_url(href))
                ));
                if !title.is_empty() {
                    self.out.push_str(&format!(" title=\"{}\"", escape_html(title)));
                }
                self.out.push('>');
                self.children(node);
                self.out.push_str("</a>");
            }
            NodeKind::Image { src, title } => {
                // Alt text is the image's own inline content
                self.out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\"",
                    escape_html(&safe_url(src)),
                    escape_html(&plain_text(node))
                ));
                if !title.is_empty() {
                    self.out.push_str(&format!(" title=\"{}\"", escape_html(title)));
                }
                self.out.push_str(" />");
            }
            NodeKind::Code { class } => self.code(node, class.as_deref()),
            NodeKind::Math { display } => {
                let tex = escape_html(&plain_text(node));
                if *display {
                    self.out
                        .push_str(&format!("<div class=\"math math-display\">{}</div>", tex));
                } else {
                    self.out
                        .push_str(&format!("<span class=\"math math-inline\">{}</span>", tex));
                }
            }
            NodeKind::Text(text) => self.out.push_str(&escape_html(text)),
            NodeKind::SoftBreak => self.out.push('\n'),
            NodeKind::HardBreak => self.out.push_str("<br />\n"),
            NodeKind::Rule => self.out.push_str("<hr />"),
            NodeKind::Container => self.children(node),
        }
    }

    fn children(&mut self, node: &Node) {
        for child in &node.children {
            self.node(child);
        }
    }

    fn wrap(&mut self, tag: &str, class: &str, node: &Node) {
        self.out.push_str(&format!("<{} class=\"{}\">", tag, class));
        self.children(node);
        self.out.push_str(&format!("</{}>", tag));
    }

    fn plain(&mut self, tag: &str, node: &Node) {
        self.out.push_str(&format!("<{}>", tag));
        self.children(node);
        self.out.push_str(&format!("</{}>", tag));
    }

    fn table(&mut self, node: &Node) {
        self.out.push_str(
            "<div class=\"table-wrapper max-w-full my-5 text-gray-200\">\
             <div class=\"overflow-x-auto border border-gray-500/20 rounded-lg shadow-md\">\
             <div class=\"inline-block min-w-full align-middle\">\
             <table class=\"min-w-full divide-y divide-gray-500/20 table-auto\">",
        );

        let mut body_open = false;
        for child in &node.children {
            if child.kind == NodeKind::TableRow && !body_open {
                self.out.push_str("<tbody class=\"divide-y divide-gray-500/20\">");
                body_open = true;
            }
            self.node(child);
        }
        if body_open {
            self.out.push_str("</tbody>");
        }

        self.out.push_str("</table></div></div></div>");
    }

    fn code(&mut self, node: &Node, class: Option<&str>) {
        let body = plain_text(node);

        if node.span.is_single_line() {
            match class {
                Some(class) => self
                    .out
                    .push_str(&format!("<code class=\"{}\">", escape_html(class))),
                None => self.out.push_str("<code>"),
            }
            self.out.push_str(&escape_html(&body));
            self.out.push_str("</code>");
            return;
        }

        let block = CodeBlock::new(class, &body);
        self.out.push_str(&block.render_html(self.code_blocks.len()));
        self.code_blocks.push(block);
    }
}

/// Keeps relative URLs and allowlisted schemes, blanks the rest
fn safe_url(url: &str) -> String {
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(index) if url[index..].starts_with(':') => {
            let scheme = url[..index].to_ascii_lowercase();
            if SAFE_SCHEMES.contains(&scheme.as_str()) {
                url.to_string()
            } else {
                String::new()
            }
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url("https://gsap.com/docs"), "https://gsap.com/docs");
        assert_eq!(safe_url("/docs/gsap/animation.md"), "/docs/gsap/animation.md");
        assert_eq!(safe_url("#section"), "#section");
        assert_eq!(safe_url("mailto:team@example.com"), "mailto:team@example.com");
        assert_eq!(safe_url("javascript:alert(1)"), "");
        assert_eq!(safe_url("JavaScript:alert(1)"), "");
        assert_eq!(safe_url("page?next=javascript:x"), "page?next=javascript:x");
    }
}
