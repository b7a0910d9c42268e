//! Lenient parsing of form input.

/// Parse a dollar amount typed as free text such as "$5,000" or "5000.50".
/// An empty field means zero.
pub fn parse_currency(s: &str) -> Result<f64, String> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(_) => Err(format!("amount must be a non-negative number, got {:?}", s)),
        Err(_) => Err(format!("invalid amount {:?}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$5,000"), Ok(5000.0));
        assert_eq!(parse_currency(" 1234.5 "), Ok(1234.5));
        assert_eq!(parse_currency(""), Ok(0.0));
        assert!(parse_currency("-3").is_err());
        assert!(parse_currency("five").is_err());
    }
}
