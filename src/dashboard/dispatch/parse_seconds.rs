/// Seconds from a usage payload.
///
/// Reads the first space-delimited token and takes its longest numeric
/// prefix, so `"12.5"` and `"12.5s"` both yield 12.5. Returns `None` when no
/// prefix parses or the value is not finite.
pub fn parse_seconds(payload: &str) -> Option<f64> {
    let token = payload.split(' ').next().unwrap_or_default();
    let end = numeric_prefix_len(token.as_bytes())?;

    let value = token[..end].parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Byte length of `[+-]digits[.digits][(e|E)[+-]digits]` at the start of
/// `bytes`, or `None` without a mantissa digit. Spellings like "inf" never match.
fn numeric_prefix_len(bytes: &[u8]) -> Option<usize> {
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }

    if whole + fraction == 0 {
        return None;
    }

    // The exponent only counts when it has digits: "1e" reads as 1.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    Some(end)
}
