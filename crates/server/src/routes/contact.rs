//! Contact form, mounted at both `/contact/` and `/contact_new/`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::error;

use service::contact::{
    domain::{prefill_message, ContactInput, FieldErrors, SUCCESS_MESSAGE},
    errors::ContactError,
};

use crate::{
    errors::JsonApiError,
    extract::{Ajax, ContactSubmission},
    flash::{self, Flash},
    routes::pages::render,
    state::AppState,
};

pub const TEMPLATE: &str = "website/contact.html";

#[derive(Debug, Default, Deserialize)]
pub struct PrefillQuery {
    pub message: Option<String>,
    pub item: Option<String>,
    pub subject: Option<String>,
}

/// Bound form: current values plus per-field errors.
#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub form: ContactForm,
}

#[derive(Debug, Serialize)]
pub struct ContactForm {
    pub values: ContactInput,
    pub errors: FieldErrors,
}

pub async fn form(State(state): State<AppState>, jar: CookieJar, Query(q): Query<PrefillQuery>) -> Result<Response, JsonApiError> {
    let message = prefill_message(q.message.as_deref(), q.item.as_deref(), q.subject.as_deref());
    let page = ContactPage {
        form: ContactForm { values: ContactInput { message, ..Default::default() }, errors: FieldErrors::new() },
    };
    Ok(render(&state, jar, TEMPLATE, page).await?.into_response())
}

#[utoipa::path(
    post, path = "/contact/", tag = "contact",
    request_body(content = crate::openapi::ContactRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "AJAX success, or form re-rendered with errors", body = crate::openapi::ContactAjaxResponse),
        (status = 303, description = "Saved; redirect home with a flash message"),
        (status = 400, description = "AJAX validation failure", body = crate::openapi::ContactAjaxResponse)
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    Ajax(ajax): Ajax,
    jar: CookieJar,
    ContactSubmission(input): ContactSubmission,
) -> Result<Response, JsonApiError> {
    match state.contact.submit(input.clone()).await {
        Ok(_) if ajax => Ok(Json(serde_json::json!({"success": true, "message": SUCCESS_MESSAGE})).into_response()),
        Ok(_) => Ok((flash::push(jar, Flash::ContactReceived), Redirect::to("/")).into_response()),
        Err(ContactError::Invalid(errors)) if ajax => {
            Ok((StatusCode::BAD_REQUEST, Json(serde_json::json!({"success": false, "errors": errors}))).into_response())
        }
        Err(ContactError::Invalid(errors)) => {
            let page = ContactPage { form: ContactForm { values: input, errors } };
            Ok(render(&state, jar, TEMPLATE, page).await?.into_response())
        }
        Err(e) => {
            error!(err = %e, "contact submission failed");
            Err(JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Submission Failed", None))
        }
    }
}
