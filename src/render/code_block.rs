// src/render/code_block.rs
// =============================================================================
// Multi-line code blocks: language label, line numbers and the copy control.
//
// The renderer hands us the `language-xxx` class (if any) and the raw body of
// the block. We never colour tokens here; the class is left on the <pre> so a
// client-side highlighter can pick it up.
//
// Rust concepts:
// - Traits: Clipboard lets the copy control write anywhere (memory, stdout)
// - Instant arithmetic: The "Copied!" indicator is a 2 second window
// =============================================================================

use std::io;
use std::time::{Duration, Instant};

use super::escape_html;

/// How long the copy control shows "Copied!" after a successful copy
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// Extracts the language code from a class list ("language-tsx" -> "tsx")
pub fn language_from_class(class: &str) -> Option<&str> {
    class.split_whitespace().find_map(|token| {
        let language = token.strip_prefix("language-")?;
        // Only the leading ASCII word characters count
        let end = language
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(language.len());
        (end > 0).then(|| &language[..end])
    })
}

/// Human-readable label for a language code
pub fn display_name(language: &str) -> String {
    if language.is_empty() {
        return "Code".to_string();
    }

    let known = match language.to_lowercase().as_str() {
        "js" => "JavaScript",
        "ts" => "TypeScript",
        "jsx" => "React JSX",
        "tsx" => "React TSX",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "py" => "Python",
        "rb" => "Ruby",
        "java" => "Java",
        "go" => "Go",
        "rs" => "Rust",
        "cs" => "C#",
        "cpp" => "C++",
        "c" => "C",
        "php" => "PHP",
        "sh" => "Shell",
        "bash" => "Bash",
        "sql" => "SQL",
        "yaml" | "yml" => "YAML",
        "json" => "JSON",
        "md" => "Markdown",
        "dockerfile" => "Dockerfile",
        _ => "",
    };

    if !known.is_empty() {
        return known.to_string();
    }

    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One multi-line code block, ready to render or copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language code, empty when the block has none
    pub language: String,
    pub label: String,
    pub code: String,
    pub line_numbers: bool,
}

impl CodeBlock {
    /// Builds a block from its class attribute (if any) and raw body
    pub fn new(class: Option<&str>, body: &str) -> Self {
        let language = class
            .and_then(language_from_class)
            .unwrap_or_default()
            .to_string();

        // Blocks without a language class at all (indented code) are "Text"
        let label = match class {
            Some(class) if class.contains("language-") => display_name(&language),
            _ => "Text".to_string(),
        };

        let line_numbers =
            !language.is_empty() && language != "text" && language != "markdown";

        // The parser keeps the newline before the closing fence
        let code = body.strip_suffix('\n').unwrap_or(body).to_string();

        Self {
            language,
            label,
            code,
            line_numbers,
        }
    }

    /// Exactly what the copy control puts on the clipboard
    pub fn copy_text(&self) -> &str {
        &self.code
    }

    /// `index` makes the element ids unique within one document
    pub fn render_html(&self, index: usize) -> String {
        let id = format!("code-block-{}", index);
        let mut html = String::new();

        html.push_str("<div class=\"code-block relative max-w-full py-2 group\">");
        html.push_str("<div class=\"code-block-header px-4 py-3 flex justify-between items-center\">");
        html.push_str("<span class=\"code-block-label text-sm font-medium\">");
        if !self.language.is_empty() {
            html.push_str("<span class=\"language-dot w-2 h-2 rounded-full bg-blue-400 mr-2.5\"></span>");
        }
        html.push_str(&escape_html(&self.label));
        html.push_str("</span>");
        html.push_str(&format!(
            "<button class=\"copy-button\" type=\"button\" title=\"Copy code\" data-copy-target=\"{}\">Copy code</button>",
            id
        ));
        html.push_str("</div>");

        let language = if self.language.is_empty() {
            "text"
        } else {
            &self.language
        };
        html.push_str(&format!(
            "<pre class=\"language-{}\"><code id=\"{}\" class=\"language-{}\" data-copy-text=\"{}\">",
            escape_html(language),
            id,
            escape_html(language),
            escape_html(&self.code)
        ));

        for (number, line) in self.code.split('\n').enumerate() {
            html.push_str("<span class=\"code-line\">");
            if self.line_numbers {
                html.push_str(&format!("<span class=\"line-number\">{}</span>", number + 1));
            }
            html.push_str(&escape_html(line));
            html.push_str("</span>\n");
        }

        html.push_str("</code></pre></div>");
        html
    }
}

/// Somewhere copied code can go
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard that keeps the last copied text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// State of one block's copy control
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyButton {
    copied_at: Option<Instant>,
}

impl CopyButton {
    /// Copies the block. The indicator only turns on once the write succeeded.
    pub fn activate(
        &mut self,
        block: &CodeBlock,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> io::Result<()> {
        clipboard.write_text(block.copy_text())?;
        self.copied_at = Some(now);
        Ok(())
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) => now.saturating_duration_since(at) < COPIED_FEEDBACK,
            None => false,
        }
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied!"
        } else {
            "Copy code"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn write_text(&mut self, _text: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_language_from_class() {
        assert_eq!(language_from_class("language-tsx"), Some("tsx"));
        assert_eq!(language_from_class("hljs language-js"), Some("js"));
        assert_eq!(language_from_class("language-c++"), Some("c"));
        assert_eq!(language_from_class("hljs"), None);
        assert_eq!(language_from_class("language-pythé"), Some("pyth"));
        assert_eq!(language_from_class("language-ελ"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("tsx"), "React TSX");
        assert_eq!(display_name("yml"), "YAML");
        assert_eq!(display_name("cs"), "C#");
        assert_eq!(display_name("JS"), "JavaScript");
        assert_eq!(display_name("glsl"), "Glsl");
        assert_eq!(display_name(""), "Code");
    }

    #[test]
    fn test_block_labels_and_line_numbers() {
        let tsx = CodeBlock::new(Some("language-tsx"), "const a = 1;\n");
        assert_eq!(tsx.label, "React TSX");
        assert!(tsx.line_numbers);

        let markdown = CodeBlock::new(Some("language-markdown"), "# hi\n");
        assert!(!markdown.line_numbers);

        let indented = CodeBlock::new(None, "plain\n");
        assert_eq!(indented.label, "Text");
        assert!(!indented.line_numbers);
    }

    #[test]
    fn test_copy_text_is_the_body() {
        let body = "function a() {\n  return 1;\n}\n";
        let block = CodeBlock::new(Some("language-js"), body);
        assert_eq!(block.copy_text(), "function a() {\n  return 1;\n}");
    }

    #[test]
    fn test_copied_indicator_lasts_two_seconds() {
        let block = CodeBlock::new(Some("language-js"), "let x = 1;\n");
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::default();
        let start = Instant::now();

        assert_eq!(button.label(start), "Copy code");
        button.activate(&block, &mut clipboard, start).unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("let x = 1;"));
        assert_eq!(button.label(start + Duration::from_millis(1999)), "Copied!");
        assert_eq!(button.label(start + COPIED_FEEDBACK), "Copy code");
    }

    #[test]
    fn test_failed_copy_shows_no_indicator() {
        let block = CodeBlock::new(Some("language-js"), "let x = 1;\n");
        let mut button = CopyButton::default();
        let now = Instant::now();

        assert!(button.activate(&block, &mut BrokenClipboard, now).is_err());
        assert!(!button.is_copied(now));
    }

    #[test]
    fn test_render_html_escapes_and_numbers_lines() {
        let block = CodeBlock::new(Some("language-html"), "<div>\n</div>\n");
        let html = block.render_html(0);
        assert!(html.contains("&lt;div&gt;"));
        assert!(html.contains("<span class=\"line-number\">2</span>"));
        assert!(html.contains("data-copy-target=\"code-block-0\""));
        assert!(!html.contains("<div>\n"));
    }
}
