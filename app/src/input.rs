use aura_core::Series;

/// Parse a comma-separated list of non-negative activity samples.
pub fn parse_activity(raw: &str) -> Result<Series, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Series::default());
    }

    trimmed
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            let value: f64 = entry
                .parse()
                .map_err(|_| format!("invalid activity sample: {entry:?}"))?;
            if !value.is_finite() || value < 0.0 {
                return Err(format!("activity samples must be non-negative: {entry}"));
            }
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_whitespace() {
        let series = parse_activity(" 3, 5 ,0,1.5 ").unwrap();
        assert_eq!(series.samples(), &[3.0, 5.0, 0.0, 1.5]);
    }

    #[test]
    fn blank_input_is_empty_series() {
        assert!(parse_activity("  ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_entry() {
        let err = parse_activity("1,two,3").unwrap_err();
        assert!(err.contains("\"two\""), "{err}");
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(parse_activity("1,-2").is_err());
        assert!(parse_activity("inf").is_err());
        assert!(parse_activity("1,,2").is_err());
    }
}
