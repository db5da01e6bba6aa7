//! Text utilities: HTML escaping for exported markup and cover-URL
//! extraction from sheet cell values.

/// Escape text for embedding as HTML content or attribute values.
/// Every user-sourced string must pass through here before landing in
/// generated markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Pull a plain image URL out of a sheet cell. Cells hold either a raw URL
/// (possibly quoted) or an `=IMAGE(...)` formula; in the latter case the
/// first argument is extracted textually. Nothing is ever evaluated.
pub fn extract_image_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(args) = image_formula_args(trimmed) {
        let first = args.split(',').next().unwrap_or("").trim();
        return strip_quotes(first).trim().to_string();
    }

    strip_quotes(trimmed).to_string()
}

/// Inner argument list of `=IMAGE(<args>)`, matched case-insensitively
/// against the whole trimmed cell.
fn image_formula_args(cell: &str) -> Option<&str> {
    let rest = cell.strip_prefix('=')?;
    let head = rest.get(..5)?;
    if !head.eq_ignore_ascii_case("image") {
        return None;
    }
    rest[5..].strip_prefix('(')?.strip_suffix(')')
}

/// Remove a single layer of surrounding single or double quotes.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['\'', '"']).unwrap_or(text);
    text.strip_suffix(['\'', '"']).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_significant_characters() {
        let escaped = escape_html("<b>Title</b> & \"quote\"");
        assert_eq!(escaped, "&lt;b&gt;Title&lt;/b&gt; &amp; &quot;quote&quot;");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape_html("전지적 독자 시점"), "전지적 독자 시점");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn extracts_double_quoted_formula_argument() {
        assert_eq!(
            extract_image_url("=IMAGE(\"http://x/y.png\")"),
            "http://x/y.png"
        );
    }

    #[test]
    fn extracts_first_argument_and_strips_single_quotes() {
        assert_eq!(extract_image_url("=IMAGE('a.png', 200, 300)"), "a.png");
    }

    #[test]
    fn formula_match_is_case_insensitive() {
        assert_eq!(extract_image_url("=image(\"cover.jpg\")"), "cover.jpg");
    }

    #[test]
    fn plain_urls_pass_through() {
        assert_eq!(extract_image_url("http://x/y.png"), "http://x/y.png");
        assert_eq!(extract_image_url("  'http://x/y.png'  "), "http://x/y.png");
    }

    #[test]
    fn empty_and_blank_cells_yield_empty() {
        assert_eq!(extract_image_url(""), "");
        assert_eq!(extract_image_url("   "), "");
    }

    #[test]
    fn malformed_formula_falls_back_to_text() {
        // Missing closing paren: treated as plain text, one quote layer off.
        assert_eq!(extract_image_url("=IMAGE(\"a.png\""), "=IMAGE(\"a.png");
    }
}
