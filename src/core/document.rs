use crate::utils::error::{F1Error, Result};
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// 解析 HTML 字串；html5ever 對破損的標記很寬容，所以這裡不會失敗
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Parses a raw response body fetched from `url`.
    ///
    /// The body must be UTF-8 text and must not be blank; anything else is reported as a
    /// `MarkupParseError` carrying the URL.
    pub fn from_bytes(url: &str, bytes: &[u8]) -> Result<Self> {
        let body = std::str::from_utf8(bytes).map_err(|e| F1Error::MarkupParseError {
            url: url.to_string(),
            reason: format!("response body is not valid UTF-8: {}", e),
        })?;

        if body.trim().is_empty() {
            return Err(F1Error::MarkupParseError {
                url: url.to_string(),
                reason: "response body is empty".to_string(),
            });
        }

        Ok(Self::parse(body))
    }

    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }
}

/// Concatenated, trimmed text of an element and its descendants, leaving out any
/// table nested inside it.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_text(element, &mut text);
    text.trim().to_string()
}

/// Concatenated, trimmed text of every descendant of `element` matching `selector`.
/// Matches inside a nested table are skipped.
pub fn selection_text(element: ElementRef<'_>, selector: &Selector) -> String {
    let mut text = String::new();
    for found in element
        .select(selector)
        .filter(|found| !nested_in_table(element, *found))
    {
        push_text(found, &mut text);
    }
    text.trim().to_string()
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            if child.value().name() != "table" {
                push_text(child, out);
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Whether a `table` sits between `root` and `element`.
fn nested_in_table(root: ElementRef<'_>, element: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != root.id())
        .any(|node| node.value().as_element().is_some_and(|e| e.name() == "table"))
}

pub(crate) fn compile(css: &str) -> Selector {
    // 只用於程式內固定的選擇器字串
    Selector::parse(css).expect("invalid built-in selector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = Document::from_bytes("https://example.com", &[0xff, 0xfe, 0xfd]).err();
        assert!(matches!(err, Some(F1Error::MarkupParseError { .. })));
    }

    #[test]
    fn test_from_bytes_rejects_blank_body() {
        let err = Document::from_bytes("https://example.com", b"  \n ").err();
        match err {
            Some(F1Error::MarkupParseError { url, reason }) => {
                assert_eq!(url, "https://example.com");
                assert!(reason.contains("empty"));
            }
            other => panic!("expected MarkupParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_text_concatenates_matches() {
        let doc = Document::parse("<div><p> a</p><span>x</span><p>b </p></div>");
        let div_sel = compile("div");
        let p_sel = compile("p");
        let div = doc.select(&div_sel).next().unwrap();
        assert_eq!(selection_text(div, &p_sel), "ab");
        assert_eq!(element_text(div), "axb");
    }

    #[test]
    fn test_text_skips_nested_tables() {
        let doc = Document::parse(
            "<table><tbody><tr><td id=\"outer\"><a>Ferrari</a> SF-24\
             <table><tbody><tr><td><a>inner</a></td></tr></tbody></table></td></tr></tbody></table>",
        );
        let cell_sel = compile("td#outer");
        let a_sel = compile("a");
        let cell = doc.select(&cell_sel).next().unwrap();
        assert_eq!(element_text(cell), "Ferrari SF-24");
        assert_eq!(selection_text(cell, &a_sel), "Ferrari");
    }
}
