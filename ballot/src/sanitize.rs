const REPLACEMENT: u8 = b'_';
const MAX_LEN: usize = 256;

/// Turns an election identifier into a name usable as a file or directory
/// component.
///
/// The first byte must be an ASCII letter and every later byte an ASCII
/// letter, digit or `_`; anything else becomes `_`. A one byte identifier
/// gets a trailing `_`. The result is cut at 256 characters.
///
/// Spaces are replaced too, so `"Election 2024!"` becomes `"Election_2024_"`
/// where the older mixing scripts kept the space.
pub fn sanitize(election: &str) -> String {
    sanitize_bytes(election.as_bytes())
}

/// Same as [`sanitize`] for identifiers taken straight from DER content.
pub fn sanitize_bytes(election: &[u8]) -> String {
    let Some((first, rest)) = election.split_first() else {
        return String::new();
    };

    let mut out = Vec::with_capacity(election.len().clamp(2, MAX_LEN));
    out.push(if first.is_ascii_alphabetic() {
        *first
    } else {
        REPLACEMENT
    });
    if rest.is_empty() {
        out.push(REPLACEMENT);
    }
    out.extend(rest.iter().take(MAX_LEN - 1).map(|b| {
        if b.is_ascii_alphanumeric() || *b == b'_' {
            *b
        } else {
            REPLACEMENT
        }
    }));

    // only ASCII bytes were kept
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{sanitize, sanitize_bytes};

    #[rstest(
        input,
        expected,
        case("", ""),
        case("1abc", "_abc"),
        case("a", "a_"),
        case("1", "__"),
        case("Election 2024!", "Election_2024_"),
        case("TEST_2024", "TEST_2024"),
        case("zZ09", "zZ09"),
        case("_lead", "_lead"),
        case("a.b-c/", "a_b_c_"),
        case("valimised\u{00f5}", "valimised__"),
    )]
    fn test_sanitize(input: &str, expected: &str) {
        assert_eq!(expected, sanitize(input));
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "a".repeat(300);
        let sanitized = sanitize(&long);
        assert_eq!(256, sanitized.len());
        assert!(sanitized.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn test_sanitize_bytes_non_utf8() {
        assert_eq!("E_x", sanitize_bytes(&[b'E', 0xff, b'x']));
    }
}
