use std::error::Error as _;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use super::clock::CalendarClock;
use super::domain::ApplicantSubmission;
use super::service::{RiskProfileService, RiskProfileServiceError};
use super::views::ErrorResponse;

pub const RISK_PROFILES_PATH: &str = "/api/v1/risk-profiles";

/// Router builder exposing the risk profile endpoint.
pub fn risk_profile_router<C>(service: Arc<RiskProfileService<C>>) -> Router
where
    C: CalendarClock + ?Sized + 'static,
{
    Router::new()
        .route(RISK_PROFILES_PATH, post(create_handler::<C>))
        .with_state(service)
}

pub(crate) async fn create_handler<C>(
    State(service): State<Arc<RiskProfileService<C>>>,
    uri: Uri,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    C: CalendarClock + ?Sized + 'static,
{
    let path = uri.path();

    let Json(document) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection, path),
    };
    let submission = match ApplicantSubmission::from_json(document) {
        Ok(submission) => submission,
        Err(document) => {
            let detail = format!("Invalid value: {document}");
            return unreadable_response(StatusCode::BAD_REQUEST, detail, path);
        }
    };

    match service.evaluate(submission) {
        Ok(profile) => {
            info!(
                auto = %profile.auto,
                disability = %profile.disability,
                home = %profile.home,
                life = %profile.life,
                "risk profile scored"
            );
            (StatusCode::OK, Json(profile)).into_response()
        }
        Err(RiskProfileServiceError::Validation(errors)) => {
            warn!(violations = errors.len(), %path, "applicant submission rejected");
            let body = ErrorResponse::from_violations(&errors, path, Utc::now());
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
    }
}

fn rejection_response(rejection: JsonRejection, path: &str) -> Response {
    match &rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            let reason = match rejection.source() {
                Some(source) => source.to_string(),
                None => rejection.body_text(),
            };
            let detail = format!("Invalid value: {reason}");
            unreadable_response(StatusCode::BAD_REQUEST, detail, path)
        }
        _ => unreadable_response(rejection.status(), rejection.body_text(), path),
    }
}

fn unreadable_response(status: StatusCode, detail: String, path: &str) -> Response {
    warn!(%status, %path, "unreadable applicant payload");
    let body = ErrorResponse::single(status, detail, path, Utc::now());
    (status, Json(body)).into_response()
}
