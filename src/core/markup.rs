//! String helpers shared by the chart builders and backends.

/// Converts arbitrary text into a CSS class token.
///
/// Lowercases, turns whitespace runs into `-`, drops anything that is not an
/// ASCII word character or `-`, collapses repeated `-` and trims them from
/// both ends. `"Liberal / National"` becomes `"liberal-national"`.
#[must_use]
pub fn classify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
        }
    }

    let mut collapsed = String::with_capacity(out.len());
    for c in out.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed.trim_matches('-').to_owned()
}

/// Serializes properties into an inline style string, `"k: v; "` per entry.
#[must_use]
pub fn format_style<K, V>(props: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: std::fmt::Display,
{
    props
        .iter()
        .map(|(key, value)| format!("{}: {}; ", key.as_ref(), value))
        .collect()
}

/// SVG transform translating by `(x, y)`.
#[must_use]
pub fn make_translate(x: f64, y: f64) -> String {
    format!("translate({},{})", format_number(x), format_number(y))
}

/// Shortest round-trip text of a number; integral values print without a
/// fraction and negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    value.to_string()
}

/// Escapes text for use inside XML character data and attribute values.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{classify, escape_xml, format_number, format_style, make_translate};

    #[test]
    fn classify_produces_css_tokens() {
        assert_eq!(classify("Liberal / National"), "liberal-national");
        assert_eq!(classify("  Greens  "), "greens");
        assert_eq!(classify("A--B__c"), "a-b__c");
        assert_eq!(classify("100% renewable!"), "100-renewable");
        assert_eq!(classify("Ünited"), "nited");
    }

    #[test]
    fn style_and_transform_strings() {
        assert_eq!(
            format_style(&[("fill", "#fff"), ("opacity", "0.5")]),
            "fill: #fff; opacity: 0.5; "
        );
        assert_eq!(format_style(&[("width", 12.5)]), "width: 12.5; ");
        assert_eq!(make_translate(15.0, -2.5), "translate(15,-2.5)");
    }

    #[test]
    fn numbers_print_like_copy_text() {
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(3.25), "3.25");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
