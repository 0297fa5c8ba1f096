/// Percent-decode a URL-encoded string.
///
/// Invalid escape sequences are kept verbatim rather than rejected; `+`
/// decodes to a space. Decoded bytes that do not form valid UTF-8 are
/// replaced with U+FFFD.
#[must_use]
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    out.push(hi * 16 + lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Reduce a string to the identifier-safe subset slugs are stored in:
/// lowercase, keeping only `a-z0-9_-`.
#[must_use]
pub fn sanitize_key(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Append a query parameter to a URL that may or may not already carry a
/// query string.
#[must_use]
pub fn append_query_arg(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{key}={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_decode_handles_escapes_and_plus() {
        assert_eq!(percent_decode("my%2Dplugin"), "my-plugin");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn percent_decode_keeps_invalid_escapes_verbatim() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%4"), "%4");
    }

    #[test]
    fn sanitize_key_strips_everything_unsafe() {
        assert_eq!(sanitize_key("My Plugin"), "myplugin");
        assert_eq!(sanitize_key("my-plugin_2"), "my-plugin_2");
        assert_eq!(sanitize_key("<script>"), "script");
    }

    #[test]
    fn append_query_arg_picks_the_right_separator() {
        assert_eq!(
            append_query_arg("https://example.com/p", "changelog", "1"),
            "https://example.com/p?changelog=1"
        );
        assert_eq!(
            append_query_arg("https://example.com/?p=12", "changelog", "1"),
            "https://example.com/?p=12&changelog=1"
        );
    }
}
