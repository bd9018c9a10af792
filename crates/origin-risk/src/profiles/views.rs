use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::guard::ValidationErrors;

pub const VALIDATION_FAILED_TITLE: &str = "Validation failed";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Envelope returned for every rejected request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<StandardError>,
}

/// One client-facing error entry.
#[derive(Debug, Clone, Serialize)]
pub struct StandardError {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub title: String,
    pub detail: String,
    pub path: String,
}

impl ErrorResponse {
    /// One entry per field violation, all sharing the same timestamp.
    pub fn from_violations(
        errors: &ValidationErrors,
        path: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let status = StatusCode::BAD_REQUEST;
        let errors = errors
            .violations()
            .iter()
            .map(|violation| StandardError {
                timestamp,
                status: status.as_u16(),
                title: VALIDATION_FAILED_TITLE.to_string(),
                detail: violation.detail(),
                path: path.to_string(),
            })
            .collect();

        Self { errors }
    }

    pub fn single(
        status: StatusCode,
        detail: impl Into<String>,
        path: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            errors: vec![StandardError {
                timestamp,
                status: status.as_u16(),
                title: VALIDATION_FAILED_TITLE.to_string(),
                detail: detail.into(),
                path: path.to_string(),
            }],
        }
    }
}

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
