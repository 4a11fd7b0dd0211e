// ---------------------------------------------------------------------------
// Best-effort numeric argument parsing
// ---------------------------------------------------------------------------

/// Parse raw command-line tokens into an ordered sample set.
///
/// Parsing is deliberately permissive, mirroring C-stream extraction:
/// * A token that is entirely numeric yields its value.
/// * A token with a valid numeric prefix followed by junk yields the prefix
///   (`"5x"` → `5.0`).
/// * A token with no valid numeric prefix is dropped without error.
///
/// Relative order of surviving values matches the input; dropped tokens are
/// simply absent.
pub fn parse_tokens(tokens: &[String]) -> Vec<f64> {
    let mut samples = Vec::with_capacity(tokens.len());
    for tok in tokens {
        match parse_numeric_prefix(tok) {
            Some(v) => samples.push(v),
            None => log::debug!("dropping non-numeric token: {tok:?}"),
        }
    }
    samples
}

/// Parse the longest numeric prefix of `tok`, if any.
fn parse_numeric_prefix(tok: &str) -> Option<f64> {
    let len = numeric_prefix_len(tok);
    if len == 0 {
        return None;
    }
    tok[..len].parse::<f64>().ok()
}

/// Length in bytes of the longest prefix matching standard decimal float
/// syntax: optional sign, digits with optional fractional part, optional
/// exponent. `inf`, `infinity`, and `nan` (any case) are also accepted, as
/// both stream extraction and `f64::from_str` understand them.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    if let Some(n) = special_prefix_len(&s[i..]) {
        return i + n;
    }

    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        // No mantissa digits at all ("", "-", ".", "+x"): not a number.
        return 0;
    }

    // An exponent only counts when at least one digit follows it; otherwise
    // the mantissa alone is the numeric prefix ("1e" → "1").
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            i = j;
        }
    }

    i
}

/// Match `infinity`, `inf`, or `nan` case-insensitively at the start of `s`.
/// Compared byte-wise so multibyte tokens cannot split a char boundary.
fn special_prefix_len(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if b.len() >= word.len() && b[..word.len()].eq_ignore_ascii_case(word) {
            return Some(word.len());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{parse_numeric_prefix, parse_tokens};

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_order_and_drops_junk() {
        let parsed = parse_tokens(&toks(&["1", "x", "2"]));
        assert_eq!(parsed, vec![1.0, 2.0]);
    }

    #[test]
    fn all_junk_yields_empty() {
        assert!(parse_tokens(&toks(&["abc", "def"])).is_empty());
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_numeric_prefix("42"), Some(42.0));
        assert_eq!(parse_numeric_prefix("-5"), Some(-5.0));
        assert_eq!(parse_numeric_prefix("+3.25"), Some(3.25));
        assert_eq!(parse_numeric_prefix(".5"), Some(0.5));
        assert_eq!(parse_numeric_prefix("7."), Some(7.0));
    }

    #[test]
    fn exponents() {
        assert_eq!(parse_numeric_prefix("1.5e3"), Some(1500.0));
        assert_eq!(parse_numeric_prefix("2E-2"), Some(0.02));
        // Dangling exponent marker: the mantissa is still a valid prefix.
        assert_eq!(parse_numeric_prefix("1e"), Some(1.0));
        assert_eq!(parse_numeric_prefix("1e+"), Some(1.0));
    }

    #[test]
    fn numeric_prefix_with_trailing_junk() {
        assert_eq!(parse_numeric_prefix("5x"), Some(5.0));
        assert_eq!(parse_numeric_prefix("-2.5abc"), Some(-2.5));
        assert_eq!(parse_numeric_prefix("1e5x"), Some(100000.0));
    }

    #[test]
    fn no_numeric_prefix() {
        assert_eq!(parse_numeric_prefix(""), None);
        assert_eq!(parse_numeric_prefix("abc"), None);
        assert_eq!(parse_numeric_prefix("-"), None);
        assert_eq!(parse_numeric_prefix("."), None);
        assert_eq!(parse_numeric_prefix("--5"), None);
        assert_eq!(parse_numeric_prefix("e5"), None);
        assert_eq!(parse_numeric_prefix("éé"), None);
    }

    #[test]
    fn special_values() {
        assert_eq!(parse_numeric_prefix("inf"), Some(f64::INFINITY));
        assert_eq!(parse_numeric_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_numeric_prefix("NaN").unwrap().is_nan());
    }
}
