//! Text extraction from in-memory document bytes

use crate::error::{Result, ResumeRankerError};
use pulldown_cmark::{html, Parser};

/// Converts a document's raw bytes into plain text.
pub trait TextExtractor {
    fn extract(&self, name: &str, bytes: &[u8]) -> Result<String>;
}

/// PDF extraction: page texts concatenated in page order. A page with
/// no extractable text contributes nothing, so an image-only document
/// yields an empty string rather than an error.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, name: &str, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeRankerError::Extraction(format!(
                "Failed to extract text from PDF '{}': {}",
                name, e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, _name: &str, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, _name: &str, bytes: &[u8]) -> Result<String> {
        let markdown_content = String::from_utf8_lossy(bytes);

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor
            .extract("resume.txt", b"Software Engineer with Rust experience")
            .unwrap();
        assert_eq!(text, "Software Engineer with Rust experience");
    }

    #[test]
    fn test_markdown_extraction_strips_formatting() {
        let md = b"# John Doe\n\n**Software Engineer** with *Rust* experience";
        let text = MarkdownExtractor.extract("resume.md", md).unwrap();

        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_pdf_extraction_rejects_malformed_bytes() {
        let result = PdfExtractor.extract("bad.pdf", b"this is not a pdf");
        assert!(matches!(result, Err(ResumeRankerError::Extraction(_))));
    }
}
