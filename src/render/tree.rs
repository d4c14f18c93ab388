// src/render/tree.rs
// =============================================================================
// Parses Markdown into a small document tree.
//
// pulldown-cmark gives us a flat stream of events (Start(tag), Text, End...).
// We fold that stream into nested Nodes with a stack, and record for every
// node which source lines it spans. The renderer needs the spans to decide
// whether a code node is an inline span (one line) or a block (several).
//
// Enabled extensions: tables, strikethrough, task lists, math.
// Autolinks in angle brackets (<https://...>) are core CommonMark. Bare
// URLs (https://..., www...) and email addresses are turned into links
// afterwards by a pass over the finished tree, using linkify.
//
// Rust concepts:
// - Stack-based tree building: push on Start, pop and attach on End
// - into_offset_iter(): Events paired with their byte range in the source
// - std::mem::take: Rebuild a Vec of children in place
// =============================================================================

use linkify::{LinkFinder, LinkKind};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use std::ops::Range;

/// First and last source line (1-based, inclusive) a node covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading(u8),
    Paragraph,
    BlockQuote,
    List(Option<u64>),
    Item,
    TaskMarker(bool),
    Table,
    TableHead,
    TableRow,
    TableCell { header: bool },
    Emphasis,
    Strong,
    Strikethrough,
    Link { href: String, title: String },
    Image { src: String, title: String },
    /// Inline span or block; `class` is "language-xxx" for fenced blocks
    /// with an info string
    Code { class: Option<String> },
    Math { display: bool },
    Text(String),
    SoftBreak,
    HardBreak,
    Rule,
    /// Anything else that just groups children (footnotes, raw HTML blocks)
    Container,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: LineSpan,
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: NodeKind, span: LineSpan) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    fn leaf_text(text: impl Into<String>, span: LineSpan) -> Self {
        Self::new(NodeKind::Text(text.into()), span)
    }
}

/// A parsed Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let lines = LineIndex::new(source);

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_MATH);

        let mut stack = vec![Node::new(NodeKind::Document, lines.span(0..source.len()))];

        for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
            let span = lines.span(range);
            match event {
                Event::Start(tag) => {
                    let in_table_head = stack
                        .last()
                        .map(|parent| parent.kind == NodeKind::TableHead)
                        .unwrap_or(false);
                    stack.push(Node::new(node_kind(tag, in_table_head), span));
                }
                Event::End(_) => {
                    // The document root itself is never popped
                    if stack.len() > 1 {
                        if let Some(node) = stack.pop() {
                            attach(&mut stack, node);
                        }
                    }
                }
                Event::Text(text) => attach_text(&mut stack, text.into_string(), span),
                Event::Code(code) => {
                    let mut node = Node::new(NodeKind::Code { class: None }, span);
                    node.children.push(Node::leaf_text(code.into_string(), span));
                    attach(&mut stack, node);
                }
                Event::InlineMath(tex) => attach(&mut stack, math(tex.into_string(), false, span)),
                Event::DisplayMath(tex) => attach(&mut stack, math(tex.into_string(), true, span)),
                // Raw HTML is shown as text, never injected
                Event::Html(html) | Event::InlineHtml(html) => {
                    attach(&mut stack, Node::leaf_text(html.into_string(), span))
                }
                Event::FootnoteReference(label) => {
                    attach(&mut stack, Node::leaf_text(format!("[^{}]", label), span))
                }
                Event::SoftBreak => attach(&mut stack, Node::new(NodeKind::SoftBreak, span)),
                Event::HardBreak => attach(&mut stack, Node::new(NodeKind::HardBreak, span)),
                Event::TaskListMarker(checked) => {
                    attach(&mut stack, Node::new(NodeKind::TaskMarker(checked), span))
                }
                other => {
                    if matches!(other, Event::Rule) {
                        attach(&mut stack, Node::new(NodeKind::Rule, span));
                    }
                }
            }
        }

        // Unbalanced streams shouldn't happen, but fold anything left open
        while stack.len() > 1 {
            if let Some(node) = stack.pop() {
                attach(&mut stack, node);
            }
        }

        let mut root = stack
            .pop()
            .unwrap_or_else(|| Node::new(NodeKind::Document, LineSpan { start: 1, end: 1 }));

        let mut finder = LinkFinder::new();
        finder.url_must_have_scheme(false);
        autolink(&mut root, &finder);

        Document { root }
    }
}

fn attach(stack: &mut [Node], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

// The parser may split one run of text into several events; keep it whole
// so a URL is never cut in two before autolinking
fn attach_text(stack: &mut [Node], text: String, span: LineSpan) {
    if let Some(parent) = stack.last_mut() {
        if let Some(Node {
            kind: NodeKind::Text(previous),
            span: previous_span,
            ..
        }) = parent.children.last_mut()
        {
            previous.push_str(&text);
            previous_span.start = previous_span.start.min(span.start);
            previous_span.end = previous_span.end.max(span.end);
            return;
        }
        parent.children.push(Node::leaf_text(text, span));
    }
}

/// Replaces bare URLs and email addresses in text with Link nodes.
/// Existing links, images, code and math are left alone.
fn autolink(node: &mut Node, finder: &LinkFinder) {
    if matches!(
        node.kind,
        NodeKind::Link { .. } | NodeKind::Image { .. } | NodeKind::Code { .. } | NodeKind::Math { .. }
    ) {
        return;
    }

    let children = std::mem::take(&mut node.children);
    for mut child in children {
        match &child.kind {
            NodeKind::Text(text) => node.children.extend(split_links(text, child.span, finder)),
            _ => {
                autolink(&mut child, finder);
                node.children.push(child);
            }
        }
    }
}

fn split_links(text: &str, span: LineSpan, finder: &LinkFinder) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut pending = String::new();

    for piece in finder.spans(text) {
        match piece.kind().and_then(|kind| autolink_href(kind, piece.as_str())) {
            Some(href) => {
                if !pending.is_empty() {
                    nodes.push(Node::leaf_text(std::mem::take(&mut pending), span));
                }
                let mut link = Node::new(
                    NodeKind::Link {
                        href,
                        title: String::new(),
                    },
                    span,
                );
                link.children.push(Node::leaf_text(piece.as_str(), span));
                nodes.push(link);
            }
            None => pending.push_str(piece.as_str()),
        }
    }

    if !pending.is_empty() || nodes.is_empty() {
        nodes.push(Node::leaf_text(pending, span));
    }
    nodes
}

/// Link target for a literal, following the GFM autolink rules: http(s)
/// URLs as written, "www." hosts get http://, emails get mailto:
fn autolink_href(kind: &LinkKind, literal: &str) -> Option<String> {
    match kind {
        LinkKind::Email => Some(format!("mailto:{}", literal)),
        LinkKind::Url => {
            let lower = literal.to_ascii_lowercase();
            if lower.starts_with("http://") || lower.starts_with("https://") {
                Some(literal.to_string())
            } else if lower.starts_with("www.") {
                Some(format!("http://{}", literal))
            } else {
                // Bare domains like "animation.md" stay text
                None
            }
        }
        _ => None,
    }
}

fn math(tex: String, display: bool, span: LineSpan) -> Node {
    let mut node = Node::new(NodeKind::Math { display }, span);
    node.children.push(Node::leaf_text(tex, span));
    node
}

fn node_kind(tag: Tag<'_>, in_table_head: bool) -> NodeKind {
    match tag {
        Tag::Paragraph => NodeKind::Paragraph,
        Tag::Heading { level, .. } => NodeKind::Heading(level as u8),
        Tag::BlockQuote { .. } => NodeKind::BlockQuote,
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => NodeKind::Code {
            class: info
                .split_whitespace()
                .next()
                .map(|language| format!("language-{}", language)),
        },
        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::Code { class: None },
        Tag::List(start) => NodeKind::List(start),
        Tag::Item => NodeKind::Item,
        Tag::Table(_) => NodeKind::Table,
        Tag::TableHead => NodeKind::TableHead,
        Tag::TableRow => NodeKind::TableRow,
        Tag::TableCell => NodeKind::TableCell {
            header: in_table_head,
        },
        Tag::Emphasis => NodeKind::Emphasis,
        Tag::Strong => NodeKind::Strong,
        Tag::Strikethrough => NodeKind::Strikethrough,
        Tag::Link {
            dest_url, title, ..
        } => NodeKind::Link {
            href: dest_url.into_string(),
            title: title.into_string(),
        },
        Tag::Image {
            dest_url, title, ..
        } => NodeKind::Image {
            src: dest_url.into_string(),
            title: title.into_string(),
        },
        _ => NodeKind::Container,
    }
}

/// Byte offset -> line number lookup
struct LineIndex {
    // Byte offset at which each line starts
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(source.match_indices('\n').map(|(offset, _)| offset + 1));
        Self { starts }
    }

    fn line_of(&self, offset: usize) -> usize {
        // Number of line starts at or before the offset == 1-based line
        self.starts.partition_point(|&start| start <= offset)
    }

    fn span(&self, range: Range<usize>) -> LineSpan {
        let start = self.line_of(range.start);
        // Ranges are exclusive; a trailing newline belongs to the last line
        let last = if range.end > range.start { range.end - 1 } else { range.start };
        LineSpan {
            start,
            end: self.line_of(last).max(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(node: &'a Node, predicate: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
        if predicate(node) {
            return Some(node);
        }
        node.children.iter().find_map(|child| find(child, predicate))
    }

    #[test]
    fn test_inline_code_spans_one_line() {
        let doc = Document::parse("Use `gsap.to()` here.");
        let code = find(&doc.root, &|n| matches!(n.kind, NodeKind::Code { .. })).unwrap();
        assert!(code.span.is_single_line());
        assert_eq!(code.span.start, 1);
    }

    #[test]
    fn test_fenced_block_spans_several_lines_and_keeps_language() {
        let doc = Document::parse("Intro\n\n```tsx\nconst a = 1;\n```\n");
        let code = find(&doc.root, &|n| matches!(n.kind, NodeKind::Code { .. })).unwrap();
        assert_eq!(
            code.kind,
            NodeKind::Code {
                class: Some("language-tsx".to_string())
            }
        );
        assert_eq!(code.span, LineSpan { start: 3, end: 5 });
    }

    #[test]
    fn test_table_head_cells_are_headers() {
        let doc = Document::parse("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let table = find(&doc.root, &|n| n.kind == NodeKind::Table).unwrap();
        let head = &table.children[0];
        assert_eq!(head.kind, NodeKind::TableHead);
        assert!(head
            .children
            .iter()
            .all(|cell| cell.kind == NodeKind::TableCell { header: true }));
        let row = &table.children[1];
        assert_eq!(row.children[0].kind, NodeKind::TableCell { header: false });
    }

    #[test]
    fn test_math_and_strikethrough_are_parsed() {
        let doc = Document::parse("Energy $E = mc^2$ is ~~wrong~~ right.\n\n$$\\int x$$\n");
        assert!(find(&doc.root, &|n| n.kind == NodeKind::Math { display: false }).is_some());
        assert!(find(&doc.root, &|n| n.kind == NodeKind::Math { display: true }).is_some());
        assert!(find(&doc.root, &|n| n.kind == NodeKind::Strikethrough).is_some());
    }

    fn link_hrefs(node: &Node, out: &mut Vec<String>) {
        if let NodeKind::Link { href, .. } = &node.kind {
            out.push(href.clone());
        }
        for child in &node.children {
            link_hrefs(child, out);
        }
    }

    #[test]
    fn test_bare_urls_become_links() {
        let doc = Document::parse("Visit https://gsap.com today and www.threejs.org too.");
        let mut hrefs = Vec::new();
        link_hrefs(&doc.root, &mut hrefs);
        assert_eq!(hrefs, vec!["https://gsap.com", "http://www.threejs.org"]);

        // Surrounding text survives around the links
        let paragraph = &doc.root.children[0];
        assert_eq!(paragraph.children[0].kind, NodeKind::Text("Visit ".to_string()));
        assert_eq!(paragraph.children.len(), 5);
    }

    #[test]
    fn test_urls_with_underscores_stay_whole() {
        let doc = Document::parse("See https://example.com/a_b_c for details.");
        let mut hrefs = Vec::new();
        link_hrefs(&doc.root, &mut hrefs);
        assert_eq!(hrefs, vec!["https://example.com/a_b_c"]);
    }

    #[test]
    fn test_no_autolink_in_code_links_or_bare_file_names() {
        let doc = Document::parse(
            "Run `curl https://gsap.com` or read [https://threejs.org](https://threejs.org/docs), see animation.md.",
        );
        let mut hrefs = Vec::new();
        link_hrefs(&doc.root, &mut hrefs);
        assert_eq!(hrefs, vec!["https://threejs.org/docs"]);
    }

    #[test]
    fn test_email_becomes_mailto() {
        let doc = Document::parse("Write to team@example.com.");
        let mut hrefs = Vec::new();
        link_hrefs(&doc.root, &mut hrefs);
        assert_eq!(hrefs, vec!["mailto:team@example.com"]);
    }

    #[test]
    fn test_line_index() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.line_of(0), 1);
        assert_eq!(index.line_of(2), 1);
        assert_eq!(index.line_of(3), 2);
        assert_eq!(index.span(0..6), LineSpan { start: 1, end: 2 });
    }
}
