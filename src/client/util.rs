//! Small formatting helpers shared by the route pages.

use chrono::{DateTime, Utc};

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Splits a comma-separated form value into trimmed, non-empty entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Maps a blank form value to `None`.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses an optional integer form value, ignoring anything unparseable.
pub fn parse_number(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Navigates the browser away from the app, used for Stripe-hosted pages.
#[cfg(feature = "web")]
pub fn redirect_external(url: &str) {
    use dioxus::prelude::document;

    match serde_json::to_string(url) {
        Ok(literal) => {
            let _ = document::eval(&format!("window.location.href = {};", literal));
        }
        Err(err) => dioxus_logger::tracing::error!("Invalid redirect url: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Tests splitting of a comma-separated tag field.
    ///
    /// Expected: Ok with blanks and whitespace removed
    #[test]
    fn splits_comma_separated_values() {
        assert_eq!(
            split_list(" llm, agents ,, infra "),
            vec!["llm".to_string(), "agents".to_string(), "infra".to_string()]
        );
        assert!(split_list("  ").is_empty());
    }

    /// Tests that blank form values become `None`.
    ///
    /// Expected: None for whitespace, trimmed value otherwise
    #[test]
    fn blank_values_are_none() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty(" Bengaluru ".to_string()), Some("Bengaluru".to_string()));
    }

    /// Tests date formatting used on event and job cards.
    ///
    /// Expected: Ok with short month and no zero padding
    #[test]
    fn formats_dates() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 18, 30, 0).unwrap();

        assert_eq!(format_date(&date), "Mar 7, 2026");
    }
}
