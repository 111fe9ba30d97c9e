//! RFC 3986 percent-encoding.
//!
//! Used for Cloud Storage V4 canonical requests and `mailto:` links, both of
//! which require every byte outside the unreserved set to be escaped
//! (spaces as `%20`, never `+`).

/// Percent-encodes everything except `A-Z a-z 0-9 - . _ ~`.
pub fn encode(input: &str) -> String {
    encode_with(input, false)
}

/// Like [`encode`] but keeps `/` so object paths stay readable.
pub fn encode_path(input: &str) -> String {
    encode_with(input, true)
}

fn encode_with(input: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            b'/' if keep_slash => out.push('/'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_untouched() {
        assert_eq!(encode("Ca_00001-x.y~z"), "Ca_00001-x.y~z");
    }

    #[test]
    fn test_reserved_escaped() {
        assert_eq!(encode("a b/c"), "a%20b%2Fc");
        assert_eq!(encode("key=value&x"), "key%3Dvalue%26x");
    }

    #[test]
    fn test_path_keeps_slash() {
        assert_eq!(encode_path("Videos/contact us.mp4"), "Videos/contact%20us.mp4");
    }

    #[test]
    fn test_multibyte_utf8() {
        assert_eq!(encode("é"), "%C3%A9");
    }
}
