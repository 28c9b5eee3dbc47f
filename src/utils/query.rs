//! URL query-string building for inline alias definitions.

/// Percent-encode a single query component.
/// Unreserved characters (`A-Z a-z 0-9 - _ .`) pass through, space becomes
/// `+`, everything else becomes uppercase `%XX` per byte.
pub fn form_urlencode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Build a query string from key/value pairs, both sides encoded.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", form_urlencode(key), form_urlencode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(form_urlencode("abc-DEF_1.2"), "abc-DEF_1.2");
    }

    #[test]
    fn space_becomes_plus() {
        assert_eq!(form_urlencode("a b c"), "a+b+c");
    }

    #[test]
    fn reserved_characters_percent_encoded() {
        assert_eq!(form_urlencode("u@h/"), "u%40h%2F");
        assert_eq!(form_urlencode("\"quoted\""), "%22quoted%22");
    }

    #[test]
    fn build_query_joins_pairs_with_ampersand() {
        let query = build_query(&[("ssh-options", "-p 2222"), ("db-url", "mysql://u:p@h/db")]);
        assert_eq!(
            query,
            "ssh-options=-p+2222&db-url=mysql%3A%2F%2Fu%3Ap%40h%2Fdb"
        );
    }
}
