// ABOUTME: Search bar widget rendering a framed query box.

use crate::registry::{Visual, Widget};

const PLACEHOLDER: &str = "Search Google...";

pub struct SearchBar;

impl SearchBar {
    pub fn new() -> Self {
        Self
    }

    /// URL a submitted query would navigate to.
    pub fn query_url(query: &str) -> Option<String> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(format!(
            "https://www.google.com/search?q={}",
            urlencode(trimmed)
        ))
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SearchBar {
    fn render(&self) -> Visual {
        let inner = format!("  {PLACEHOLDER}  [o]");
        let border: String = "-".repeat(inner.len() + 2);
        Visual {
            title: "Search".to_string(),
            lines: vec![
                format!("+{border}+"),
                format!("| {inner} |"),
                format!("+{border}+"),
            ],
        }
    }
}

fn urlencode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
