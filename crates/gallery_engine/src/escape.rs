/// HTML-escapes a string using the fixed table for `& < > " ' / ` =`.
/// Safe for attribute values and text content alike.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_the_full_reserved_table() {
        assert_eq!(
            escape_html(r#"&<>"'/`="#),
            "&amp;&lt;&gt;&quot;&#39;&#x2F;&#x60;&#x3D;"
        );
    }

    #[test]
    fn passes_ordinary_text_through() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn attribute_breakout_attempt_is_neutralized() {
        let escaped = escape_html(r#""><script>"#);
        assert_eq!(escaped, "&quot;&gt;&lt;script&gt;");
        assert!(!escaped.contains('<'));
    }

    #[test]
    fn already_escaped_input_is_escaped_again() {
        // The table is applied unconditionally; `&amp;` yields `&amp;amp;`.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
