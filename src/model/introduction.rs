use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::IntroductionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IntroductionDto {
    pub id: i32,
    pub requester_id: i32,
    pub target_id: i32,
    pub connector_id: Option<i32>,
    pub status: IntroductionStatus,
    pub message: Option<String>,
    pub outcome: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateIntroductionDto {
    #[serde(default)]
    pub target_id: Option<i32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Status change requested by the introduction's target.
///
/// `status` is kept as optional free text so missing, null, non-string and
/// unknown values are all reported as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UpdateIntroductionDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

/// Reads a string field, treating any other JSON value as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Value(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Value(value) => Some(value),
        Text::Other(_) => None,
    })
}

/// The other member on an introduction, as seen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IntroductionPartyDto {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IntroductionListItemDto {
    pub id: i32,
    pub status: IntroductionStatus,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub counterpart: IntroductionPartyDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct IntroductionListDto {
    pub received: Vec<IntroductionListItemDto>,
    pub sent: Vec<IntroductionListItemDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests reading a status update body with a missing, null or non-string status.
    ///
    /// Verifies that the body still deserializes with no status so the handler can
    /// reject it as a validation error.
    ///
    /// Expected: Ok with `status: None` for each malformed body
    #[test]
    fn reads_malformed_status_as_absent() {
        for body in ["{}", r#"{"status":null}"#, r#"{"status":5}"#, r#"{"status":{}}"#] {
            let dto: UpdateIntroductionDto = serde_json::from_str(body).unwrap();
            assert_eq!(dto.status, None, "body: {}", body);
        }
    }

    /// Tests reading a well-formed status update body.
    ///
    /// Expected: Ok with the status text preserved
    #[test]
    fn reads_status_text() {
        let dto: UpdateIntroductionDto = serde_json::from_str(r#"{"status":"accepted"}"#).unwrap();
        assert_eq!(dto.status.as_deref(), Some("accepted"));
    }
}
