use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored text column into one of the closed enums from `model::enums`.
///
/// # Arguments
/// - `column` - Table and column name, used in the error message
/// - `value` - The stored text
/// - `parse` - The enum's `parse` function
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - The stored value is outside the
///   enum's set
pub fn parse_stored<T>(
    column: &'static str,
    value: String,
    parse: fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    match parse(&value) {
        Some(parsed) => Ok(parsed),
        None => Err(InternalError::UnknownEnumValue { column, value }.into()),
    }
}

/// Decodes a JSON text column holding a list of strings.
///
/// Empty columns decode to an empty list.
///
/// # Returns
/// - `Ok(Vec<String>)` - Decoded list
/// - `Err(AppError::InternalErr(InvalidStoredList))` - Column is not a JSON string array
pub fn parse_string_list(column: &'static str, value: &str) -> Result<Vec<String>, AppError> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }

    let list = serde_json::from_str(value)
        .map_err(|source| InternalError::InvalidStoredList { column, source })?;

    Ok(list)
}

/// Encodes a list of strings for storage in a JSON text column.
///
/// Entries are trimmed and blanks dropped.
pub fn encode_string_list(values: &[String]) -> String {
    let cleaned: Vec<&str> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();

    serde_json::to_string(&cleaned).unwrap_or_else(|_| "[]".to_string())
}

/// Trims an optional form field, mapping blank input to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::enums::Role;

    #[test]
    fn parses_known_enum_value() {
        let role = parse_stored("profile.role", "investor".to_string(), Role::parse).unwrap();
        assert_eq!(role, Role::Investor);
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let result = parse_stored("profile.role", "wizard".to_string(), Role::parse);
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::UnknownEnumValue { .. }))
        ));
    }

    #[test]
    fn round_trips_string_list() {
        let encoded = encode_string_list(&[" ai ".to_string(), "".to_string(), "fintech".to_string()]);
        assert_eq!(encoded, r#"["ai","fintech"]"#);
        assert_eq!(
            parse_string_list("profile.interests", &encoded).unwrap(),
            vec!["ai".to_string(), "fintech".to_string()]
        );
    }

    #[test]
    fn empty_column_is_empty_list() {
        assert!(parse_string_list("job.skills", "").unwrap().is_empty());
    }

    #[test]
    fn blank_optional_is_none() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(normalize_optional(Some(" Pune ".to_string())), Some("Pune".to_string()));
    }
}
