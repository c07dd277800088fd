use regex::Regex;
use std::sync::LazyLock;

static UNSIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid unsigned integer pattern"));

/// True if `text` consists of ASCII digits only (no sign, no whitespace).
pub fn is_unsigned_integer(text: &str) -> bool {
    UNSIGNED_INTEGER.is_match(text)
}

/// Parse a strictly positive base-10 count.
///
/// # Examples
///
/// ```
/// use flashdeck::util::text::parse_positive_count;
///
/// assert_eq!(parse_positive_count("3"), Some(3));
/// assert_eq!(parse_positive_count("0"), None);
/// assert_eq!(parse_positive_count("-1"), None);
/// ```
pub fn parse_positive_count(text: &str) -> Option<u32> {
    if !is_unsigned_integer(text) {
        return None;
    }
    text.parse::<u32>().ok().filter(|count| *count > 0)
}

/// Strip a trailing `\n` or `\r\n` from a line read from the console.
pub fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_digits_when_checking_integer_then_matches() {
        assert!(is_unsigned_integer("0"));
        assert!(is_unsigned_integer("0042"));
    }

    #[test]
    fn given_signed_or_padded_text_when_checking_integer_then_rejects() {
        assert!(!is_unsigned_integer(""));
        assert!(!is_unsigned_integer("-1"));
        assert!(!is_unsigned_integer("+1"));
        assert!(!is_unsigned_integer(" 1"));
        assert!(!is_unsigned_integer("1.5"));
    }

    #[test]
    fn given_zero_when_parsing_count_then_returns_none() {
        assert_eq!(parse_positive_count("0"), None);
    }

    #[test]
    fn given_overflowing_number_when_parsing_count_then_returns_none() {
        assert_eq!(parse_positive_count("99999999999999999999"), None);
    }

    #[test]
    fn given_word_when_parsing_count_then_returns_none() {
        assert_eq!(parse_positive_count("three"), None);
    }

    #[test]
    fn given_line_endings_when_trimming_then_removes_only_newline() {
        assert_eq!(trim_line_ending("answer\n"), "answer");
        assert_eq!(trim_line_ending("answer\r\n"), "answer");
        assert_eq!(trim_line_ending(" answer "), " answer ");
    }
}
