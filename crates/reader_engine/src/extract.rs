use scraper::{Html, Selector};

/// Text of the first `<style>` element, trimmed. Documents without an
/// inline stylesheet yield an empty string; that is not an error.
pub fn extract_stylesheet(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Ok(style_sel) = Selector::parse("style") else {
        return String::new();
    };

    doc.select(&style_sel)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// The first `:root { ... }` block of a stylesheet, brace-matched.
/// Returns `None` when the stylesheet declares no theme variables.
pub fn extract_root_block(css: &str) -> Option<String> {
    let start = css.find(":root")?;
    let open = css[start..].find('{')? + start;

    let mut depth = 0usize;
    for (offset, ch) in css[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(css[start..=open + offset].to_string());
                }
            }
            _ => {}
        }
    }
    None
}
