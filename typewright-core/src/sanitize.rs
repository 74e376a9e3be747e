//! Cleanup passes applied to schema-supplied names and literals.

/// Reduce a raw schema name to word characters and underscores.
///
/// Bracket pairs vanish ("input[]" -> "input"), opening brackets and
/// parentheses turn into underscores ("input[a][b]" -> "input_a_b"),
/// dots, hyphens and spaces turn into underscores, and anything else
/// outside `[A-Za-z0-9_]` is dropped ("$name" -> "name").
pub fn sanitize_name(name: &str) -> String {
    let name = name.replace("[]", "");
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '[' | '(' => out.push('_'),
            ']' | ')' => {}
            '.' | '-' | ' ' => out.push('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            _ => {}
        }
    }
    out
}

/// Escape a schema-supplied literal for embedding in generated source.
///
/// Tabs and line breaks become spaces; backslashes and both quote
/// styles are escaped so the result can sit inside a quoted string.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' | '\n' | '\r' => out.push(' '),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("name"), "name");
        assert_eq!(sanitize_name("input[]"), "input");
        assert_eq!(sanitize_name("input[a][b]"), "input_a_b");
        assert_eq!(sanitize_name("input(a)(b)"), "input_a_b");
        assert_eq!(sanitize_name("first.second"), "first_second");
        assert_eq!(sanitize_name("created-at"), "created_at");
        assert_eq!(sanitize_name("display name"), "display_name");
        assert_eq!(sanitize_name("$variable"), "variable");
        assert_eq!(sanitize_name("200Response"), "200Response");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("line1\nline2"), "line1 line2");
        assert_eq!(escape_text("tab\there"), "tab here");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("it's"), "it\\'s");
        assert_eq!(escape_text("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_text(""), "");
    }
}
