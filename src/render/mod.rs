// src/render/mod.rs
// =============================================================================
// The Markdown renderer.
//
// Pipeline:
//   Markdown text --Document::parse--> tree --HtmlWriter--> RenderedDoc
//
// `render` accepts either raw Markdown or an already parsed Document, so a
// caller that needs the tree for something else (plain text, code blocks)
// only parses once.
//
// Submodules:
// - tree: pulldown-cmark events folded into nodes with line spans
// - html: styled HTML output
// - code_block: labels, line numbers and the copy control for code blocks
// - text: plain text extraction and front matter stripping
//
// Rust concepts:
// - Enum + From impls: One `render` signature for two kinds of input
// - Lifetimes: MarkdownSource borrows; nothing is copied until we render
// =============================================================================

mod code_block;
mod html;
mod text;
mod tree;

pub use code_block::{
    display_name, language_from_class, Clipboard, CodeBlock, CopyButton, MemoryClipboard,
    COPIED_FEEDBACK,
};
pub use text::{document_text, plain_text, strip_front_matter};
pub use tree::{Document, LineSpan, Node, NodeKind};

use html::HtmlWriter;

/// What `render` can work from
#[derive(Debug, Clone, Copy)]
pub enum MarkdownSource<'a> {
    Text(&'a str),
    Parsed(&'a Document),
}

impl<'a> From<&'a str> for MarkdownSource<'a> {
    fn from(text: &'a str) -> Self {
        MarkdownSource::Text(text)
    }
}

impl<'a> From<&'a String> for MarkdownSource<'a> {
    fn from(text: &'a String) -> Self {
        MarkdownSource::Text(text.as_str())
    }
}

impl<'a> From<&'a Document> for MarkdownSource<'a> {
    fn from(doc: &'a Document) -> Self {
        MarkdownSource::Parsed(doc)
    }
}

/// Rendered HTML plus the code blocks found in it, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDoc {
    pub html: String,
    pub code_blocks: Vec<CodeBlock>,
}

/// Renders Markdown (raw or parsed) to styled HTML
pub fn render<'a>(source: impl Into<MarkdownSource<'a>>) -> RenderedDoc {
    let parsed;
    let doc = match source.into() {
        MarkdownSource::Text(text) => {
            parsed = Document::parse(text);
            &parsed
        }
        MarkdownSource::Parsed(doc) => doc,
    };

    let mut writer = HtmlWriter::new();
    writer.node(&doc.root);
    let (html, code_blocks) = writer.finish();

    RenderedDoc { html, code_blocks }
}

/// Plain text export: front matter stripped, formatting removed
pub fn to_plain_text(markdown: &str) -> String {
    let doc = Document::parse(strip_front_matter(markdown));
    document_text(&doc)
}

/// A standalone HTML page around a rendered document.
///
/// The inline script wires up every copy button: it copies the block's
/// `data-copy-text` and shows "Copied!" for COPIED_FEEDBACK.
pub fn render_page(title: &str, doc: &RenderedDoc) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
</head>
<body class="bg-gray-900 text-gray-100">
<header class="docs-header"><h1>{title}</h1></header>
<main class="docs-panel">
{content}
</main>
<script>
document.querySelectorAll(".copy-button").forEach(function (button) {{
  button.addEventListener("click", function () {{
    var code = document.getElementById(button.dataset.copyTarget);
    if (!code) return;
    navigator.clipboard.writeText(code.dataset.copyText).then(function () {{
      button.textContent = "Copied!";
      button.title = "Copied!";
      setTimeout(function () {{
        button.textContent = "Copy code";
        button.title = "Copy code";
      }}, {feedback_ms});
    }});
  }});
}});
</script>
</body>
</html>
"#,
        title = escape_html(title),
        content = doc.html,
        feedback_ms = COPIED_FEEDBACK.as_millis(),
    )
}

/// Escapes text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn select<'a>(html: &'a Html, selector: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(selector).unwrap();
        html.select(&selector).collect()
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let rendered = render("See [GSAP](https://gsap.com).");
        let html = Html::parse_fragment(&rendered.html);
        let links = select(&html, "a");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].value().attr("href"), Some("https://gsap.com"));
        assert_eq!(links[0].value().attr("target"), Some("_blank"));
        assert_eq!(links[0].value().attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn test_autolinks_are_links() {
        let rendered = render("Visit <https://threejs.org>.");
        let html = Html::parse_fragment(&rendered.html);
        assert_eq!(select(&html, "a[href=\"https://threejs.org\"]").len(), 1);
    }

    #[test]
    fn test_bare_urls_are_links() {
        let rendered = render("Visit https://gsap.com today and www.threejs.org too.");
        let html = Html::parse_fragment(&rendered.html);
        let gsap = select(&html, "p a[href=\"https://gsap.com\"]");
        assert_eq!(gsap.len(), 1);
        assert_eq!(gsap[0].text().collect::<String>(), "https://gsap.com");
        assert_eq!(gsap[0].value().attr("target"), Some("_blank"));
        assert_eq!(select(&html, "a[href=\"http://www.threejs.org\"]").len(), 1);

        let rendered = render("Run `open https://gsap.com` first.");
        let html = Html::parse_fragment(&rendered.html);
        assert!(select(&html, "a").is_empty());
    }

    #[test]
    fn test_inline_code_versus_block() {
        let source = "Call `gsap.to()` first.\n\n```js\ngsap.to(box, { x: 100 });\ngsap.to(box, { y: 50 });\n```\n";
        let rendered = render(source);
        let html = Html::parse_fragment(&rendered.html);

        // One inline <code> inside the paragraph, one code block
        assert_eq!(select(&html, "p code").len(), 1);
        assert_eq!(select(&html, "div.code-block").len(), 1);
        assert_eq!(rendered.code_blocks.len(), 1);
        assert_eq!(rendered.code_blocks[0].label, "JavaScript");
        assert_eq!(
            rendered.code_blocks[0].copy_text(),
            "gsap.to(box, { x: 100 });\ngsap.to(box, { y: 50 });"
        );
    }

    #[test]
    fn test_table_has_sticky_header() {
        let rendered = render("| Prop | Type |\n|---|---|\n| x | number |\n");
        let html = Html::parse_fragment(&rendered.html);
        assert_eq!(select(&html, "div.table-wrapper table").len(), 1);
        assert_eq!(select(&html, "thead.sticky th[scope=\"col\"]").len(), 2);
        assert_eq!(select(&html, "tbody td").len(), 2);
    }

    #[test]
    fn test_math_spans() {
        let rendered = render("Inline $a^2$ here.\n\n$$b^2$$\n");
        let html = Html::parse_fragment(&rendered.html);
        assert_eq!(select(&html, "span.math.math-inline").len(), 1);
        assert_eq!(select(&html, "div.math.math-display").len(), 1);
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let rendered = render("<script>alert(1)</script>\n");
        assert!(!rendered.html.contains("<script>"));
        assert!(rendered.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_accepts_parsed_document() {
        let doc = Document::parse("# Title\n");
        assert_eq!(render(&doc), render("# Title\n"));
    }

    #[test]
    fn test_to_plain_text_strips_front_matter() {
        let text = to_plain_text("---\ntitle: Scroll\n---\n# Scroll\n\nUse **ScrollTrigger**.\n");
        assert_eq!(text, "Scroll\n\nUse ScrollTrigger.");
    }

    #[test]
    fn test_page_wraps_content_and_script() {
        let rendered = render("# Hi\n");
        let page = render_page("Gsap Example: Animation", &rendered);
        assert!(page.contains("<title>Gsap Example: Animation</title>"));
        assert!(page.contains(&rendered.html));
        assert!(page.contains("}, 2000);"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
