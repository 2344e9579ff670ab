//! Pure markup helpers shared by the layout services.

/// HTML-escape a field value for template output.
/// Escapes the five characters with markup meaning, quotes included.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join messages into a single block, each line terminated by a break tag.
/// An empty slice yields an empty string.
pub fn format_messages<S: AsRef<str>>(messages: &[S]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(message.as_ref());
        out.push_str("<br />\n");
    }
    out
}

/// Substitute `{token}` placeholders in a single pass.
///
/// At each `{`, the first table entry matching the input is substituted
/// and scanning continues after it; substituted values are never
/// rescanned. Anything that matches no table entry, `{zzz}` included,
/// is emitted literally.
pub fn expand_tokens(template: &str, table: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match table.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn format_messages_empty_is_empty() {
        let none: [&str; 0] = [];
        assert_eq!(format_messages(&none), "");
    }

    #[test]
    fn format_messages_appends_break_per_line() {
        assert_eq!(format_messages(&["a", "b"]), "a<br />\nb<br />\n");
    }

    #[test]
    fn expand_tokens_substitutes_known_tokens() {
        let table = vec![
            ("{uid}", "7".to_string()),
            ("{domain_name}", "example.com".to_string()),
        ];
        assert_eq!(expand_tokens("{uid}-{domain_name}", &table), "7-example.com");
    }

    #[test]
    fn expand_tokens_leaves_unknown_tokens_literal() {
        let table = vec![("{uid}", "7".to_string())];
        assert_eq!(expand_tokens("{uid} {zzz}", &table), "7 {zzz}");
    }

    #[test]
    fn expand_tokens_does_not_rescan_substituted_values() {
        let table = vec![
            ("{a}", "{b}".to_string()),
            ("{b}", "boom".to_string()),
        ];
        assert_eq!(expand_tokens("{a}", &table), "{b}");
    }

    #[test]
    fn expand_tokens_handles_stray_braces() {
        let table = vec![("{uid}", "7".to_string())];
        assert_eq!(expand_tokens("{ {uid} {", &table), "{ 7 {");
        assert_eq!(expand_tokens("no tokens", &table), "no tokens");
    }
}
