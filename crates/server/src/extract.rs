//! Request extractors shared by the contact routes.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};

use service::contact::domain::{ContactInput, FieldErrors};

use crate::errors::JsonApiError;

/// `X-Requested-With: XMLHttpRequest` marks a script-driven request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ajax(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for Ajax
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Ajax(is_ajax(&parts.headers)))
    }
}

fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "XMLHttpRequest")
}

/// Key for errors that belong to the whole form rather than one field.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// An unreadable body, answered in the caller's flavor: the AJAX error map or a
/// plain JSON error.
fn body_rejection(ajax: bool, detail: String) -> Response {
    if ajax {
        let errors = FieldErrors::from([(NON_FIELD_ERRORS.to_string(), vec![format!("Invalid request body: {detail}")])]);
        return (StatusCode::BAD_REQUEST, Json(serde_json::json!({"success": false, "errors": errors}))).into_response();
    }
    JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Body", Some(detail)).into_response()
}

/// Contact form body, urlencoded or JSON depending on `Content-Type`.
pub struct ContactSubmission(pub ContactInput);

#[async_trait]
impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ajax = is_ajax(req.headers());
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let input = if is_json {
            Json::<ContactInput>::from_request(req, state)
                .await
                .map(|Json(v)| v)
                .map_err(|e| body_rejection(ajax, e.body_text()))?
        } else {
            Form::<ContactInput>::from_request(req, state)
                .await
                .map(|Form(v)| v)
                .map_err(|e| body_rejection(ajax, e.body_text()))?
        };
        Ok(ContactSubmission(input))
    }
}
