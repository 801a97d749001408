//! Request payloads for the "add" actions and the helpers shared by them.
//!
//! Text fields are kept verbatim so that echoed values match the input;
//! only blankness is checked. Numeric fields are parsed from their string form.

use thiserror::Error;

pub mod areas;
pub mod menu_items;
pub mod menus;
pub mod tables;

/// Maximum length accepted for names and labels.
pub(crate) const NAME_MAX_LEN: u64 = 255;

/// Maximum length accepted for free-form descriptions.
pub(crate) const DESCRIPTION_MAX_LEN: u64 = 2048;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `None` for a missing or blank value.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// A submitted field that could not be read as the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldParseError {
    #[error("`{0}` is not a whole number")]
    Integer(String),
    #[error("`{0}` is not a finite number")]
    Number(String),
    #[error("`{0}` is not a boolean")]
    Flag(String),
}

/// Parses an optional integer field; missing or blank values yield `None`.
pub(crate) fn parse_optional_i32(value: Option<&str>) -> Result<Option<i32>, FieldParseError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| FieldParseError::Integer(raw.to_string())),
    }
}

/// Parses an optional decimal field; missing or blank values yield `None`.
pub(crate) fn parse_optional_f64(value: Option<&str>) -> Result<Option<f64>, FieldParseError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => match raw.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(Some(parsed)),
            _ => Err(FieldParseError::Number(raw.to_string())),
        },
    }
}

/// Parses a checkbox-style flag such as `1`, `on` or `false`.
pub(crate) fn parse_optional_flag(value: Option<&str>) -> Result<Option<bool>, FieldParseError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(Some(true)),
            "0" | "false" | "off" | "no" => Ok(Some(false)),
            _ => Err(FieldParseError::Flag(raw.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_parse_as_missing() {
        assert_eq!(parse_optional_i32(Some("  ")), Ok(None));
        assert_eq!(parse_optional_f64(None), Ok(None));
        assert_eq!(parse_optional_flag(Some("")), Ok(None));
    }

    #[test]
    fn numbers_are_trimmed_before_parsing() {
        assert_eq!(parse_optional_i32(Some(" 12 ")), Ok(Some(12)));
        assert_eq!(parse_optional_f64(Some("9.50")), Ok(Some(9.5)));
        assert_eq!(
            parse_optional_i32(Some("4.5")),
            Err(FieldParseError::Integer("4.5".to_string()))
        );
        assert_eq!(
            parse_optional_f64(Some("NaN")),
            Err(FieldParseError::Number("NaN".to_string()))
        );
    }

    #[test]
    fn flags_accept_checkbox_spellings() {
        assert_eq!(parse_optional_flag(Some("on")), Ok(Some(true)));
        assert_eq!(parse_optional_flag(Some("TRUE")), Ok(Some(true)));
        assert_eq!(parse_optional_flag(Some("0")), Ok(Some(false)));
        assert_eq!(
            parse_optional_flag(Some("maybe")),
            Err(FieldParseError::Flag("maybe".to_string()))
        );
    }

    #[test]
    fn parse_errors_name_the_rejected_value() {
        let err = parse_optional_flag(Some(" maybe ")).unwrap_err();
        assert_eq!(err.to_string(), "`maybe` is not a boolean");
    }
}
