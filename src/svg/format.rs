/// Formats a coordinate or length with exactly four fractional digits in
/// fixed notation.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:.4}")
}

/// Escapes a string for use inside a double-quoted XML attribute.
///
/// `&` is replaced first so the other entities are not double-escaped.
#[must_use]
pub fn escape_xml_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_fractional_digits() {
        assert_eq!(format_number(0.0), "0.0000");
        assert_eq!(format_number(20.0), "20.0000");
        assert_eq!(format_number(1.23456), "1.2346");
        assert_eq!(format_number(-3.5), "-3.5000");
    }

    #[test]
    fn large_values_stay_fixed() {
        assert_eq!(format_number(1e7), "10000000.0000");
        assert_eq!(format_number(1e-6), "0.0000");
    }

    #[test]
    fn escapes_attribute_specials() {
        assert_eq!(
            escape_xml_attr(r#"a & "b" <c>"#),
            "a &amp; &quot;b&quot; &lt;c&gt;"
        );
        assert_eq!(escape_xml_attr("it's"), "it's");
        assert_eq!(escape_xml_attr("&amp;"), "&amp;amp;");
    }
}
