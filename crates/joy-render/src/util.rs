// Escaping helpers shared by the SVG writer.

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#x27;",
            // Attribute-value normalization would turn these into spaces.
            b'\n' => "&#10;",
            b'\r' => "&#13;",
            b'\t' => "&#9;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

/// SVG attribute names use hyphens; `stroke_width` is written as `stroke-width`.
pub(crate) fn attr_name_into(out: &mut String, name: &str) {
    for ch in name.chars() {
        out.push(if ch == '_' { '-' } else { ch });
    }
}
