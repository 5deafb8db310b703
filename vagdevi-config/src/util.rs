use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Trimmed value, or `None` when blank.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|raw| non_empty(&raw))
}

/// Parse a numeric setting, naming the offending key on failure.
pub fn parse_number<T: FromStr>(
    key: &'static str,
    raw: &str,
) -> Result<T, ConfigLoadError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigLoadError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

/// Parse an optional raw value, passing `None` through.
pub fn parse_optional<T: FromStr>(
    key: &'static str,
    raw: Option<&str>,
) -> Result<Option<T>, ConfigLoadError> {
    raw.map(|raw| parse_number(key, raw)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" abc "), Some("abc".to_string()));
    }

    #[test]
    fn numbers_report_their_key() {
        assert_eq!(parse_number::<u64>("KEY", " 12 ").unwrap(), 12);
        let err = parse_number::<u64>("KEY", "twelve").unwrap_err();
        assert!(err.to_string().contains("KEY"));
        assert_eq!(parse_optional::<u64>("KEY", None).unwrap(), None);
    }
}
