//! Admin JSON surface, guarded by a shared key.

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use models::{
    contact, hero_section, service as service_entity,
    site_settings::{self, SiteSettingsInput},
    testimonial, training, trusted_company,
};
use service::{
    admin::{self as admin_service, ContactUpdate},
    catalog::{self, ContentFilter, ListingEdit},
    pagination::{Page, PageRequest, ADMIN_PAGE_SIZE},
};

use crate::{errors::JsonApiError, state::AppState};

#[derive(Debug, Default, Deserialize)]
struct AdminKeyQuery {
    admin_key: Option<String>,
}

/// Key from `X-Admin-Key`, else the percent-decoded `admin_key` query parameter.
fn provided_key(req: &Request) -> Option<String> {
    if let Some(v) = req.headers().get("X-Admin-Key").and_then(|v| v.to_str().ok()) {
        return Some(v.to_string());
    }
    Query::<AdminKeyQuery>::try_from_uri(req.uri()).ok().and_then(|Query(q)| q.admin_key)
}

fn key_matches(provided: &str, expected: &str) -> bool {
    bool::from(provided.as_bytes().ct_eq(expected.as_bytes()))
}

pub async fn require_admin_key(State(state): State<AppState>, req: Request, next: Next) -> Result<Response, JsonApiError> {
    let Some(expected) = state.admin_key.as_deref() else {
        return Err(JsonApiError::not_found("admin surface disabled"));
    };
    if !provided_key(&req).is_some_and(|k| key_matches(&k, expected)) {
        warn!(path = %req.uri().path(), "admin key rejected");
        return Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some("missing or invalid admin key".into())));
    }
    Ok(next.run(req).await)
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ContactListQuery {
    /// `new`, `in_progress` or `completed`.
    pub status: Option<String>,
    pub page: Option<String>,
}

#[utoipa::path(
    get, path = "/admin/contacts", tag = "admin",
    params(ContactListQuery),
    responses((status = 200, description = "Contacts, newest first"), (status = 400, description = "Unknown status"), (status = 401, description = "Unauthorized"))
)]
pub async fn list_contacts(State(state): State<AppState>, Query(q): Query<ContactListQuery>) -> Result<Json<Page<contact::Model>>, JsonApiError> {
    let status = match q.status.as_deref().filter(|s| !s.is_empty()) {
        None => None,
        Some(s) => Some(contact::Status::parse(s).ok_or_else(|| {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(format!("unknown status {s:?}")))
        })?),
    };
    let req = PageRequest::parse(q.page.as_deref(), ADMIN_PAGE_SIZE);
    let page = admin_service::list_contacts(&state.db, status, req).await?;
    info!(count = page.items.len(), total = page.total, "list contacts");
    Ok(Json(page))
}

#[utoipa::path(
    patch, path = "/admin/contacts/{id}", tag = "admin",
    params(("id" = i32, Path, description = "Contact id")),
    request_body = crate::openapi::ContactUpdateDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found"))
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(update): Json<ContactUpdate>,
) -> Result<Json<contact::Model>, JsonApiError> {
    Ok(Json(admin_service::update_contact(&state.db, id, update).await?))
}

#[utoipa::path(
    get, path = "/admin/site-settings", tag = "admin",
    responses((status = 200, description = "Current settings"), (status = 404, description = "Not created yet"))
)]
pub async fn get_site_settings(State(state): State<AppState>) -> Result<Json<site_settings::Model>, JsonApiError> {
    service::site_settings::get(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("site settings not created yet"))
}

#[utoipa::path(
    post, path = "/admin/site-settings", tag = "admin",
    request_body = crate::openapi::SiteSettingsDoc,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Already exists"))
)]
pub async fn create_site_settings(
    State(state): State<AppState>,
    Json(input): Json<SiteSettingsInput>,
) -> Result<(StatusCode, Json<site_settings::Model>), JsonApiError> {
    let created = service::site_settings::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/admin/site-settings", tag = "admin",
    request_body = crate::openapi::SiteSettingsDoc,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not created yet"))
)]
pub async fn update_site_settings(
    State(state): State<AppState>,
    Json(input): Json<SiteSettingsInput>,
) -> Result<Json<site_settings::Model>, JsonApiError> {
    Ok(Json(service::site_settings::update(&state.db, input).await?))
}

/// `?page=&q=&is_featured=&is_active=&level=&rating=` for the content listings.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ContentListQuery {
    pub page: Option<String>,
    /// Substring of the entity's search fields.
    pub q: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    /// `beginner`, `intermediate` or `advanced` (trainings only).
    #[param(value_type = Option<String>)]
    pub level: Option<training::Level>,
    pub rating: Option<i32>,
}

impl ContentListQuery {
    fn split(self) -> (ContentFilter, PageRequest) {
        let req = PageRequest::parse(self.page.as_deref(), ADMIN_PAGE_SIZE);
        let filter = ContentFilter {
            q: self.q,
            is_featured: self.is_featured,
            is_active: self.is_active,
            level: self.level,
            rating: self.rating,
        };
        (filter, req)
    }
}

#[utoipa::path(get, path = "/admin/hero-sections", tag = "admin", params(ContentListQuery), responses((status = 200, description = "Hero sections by id")))]
pub async fn list_hero_sections(State(state): State<AppState>, Query(q): Query<ContentListQuery>) -> Result<Json<Page<hero_section::Model>>, JsonApiError> {
    let (filter, req) = q.split();
    Ok(Json(catalog::list_hero_sections(&state.db, &filter, req).await?))
}

#[utoipa::path(post, path = "/admin/hero-sections", tag = "admin", responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_hero_section(
    State(state): State<AppState>,
    Json(input): Json<hero_section::NewHeroSection>,
) -> Result<(StatusCode, Json<hero_section::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(catalog::create_hero_section(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/admin/hero-sections/{id}", tag = "admin", params(("id" = i32, Path, description = "Hero section id")), responses((status = 200, description = "Replaced"), (status = 404, description = "Not Found")))]
pub async fn update_hero_section(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<hero_section::NewHeroSection>,
) -> Result<Json<hero_section::Model>, JsonApiError> {
    Ok(Json(catalog::update_hero_section(&state.db, id, input).await?))
}

#[utoipa::path(delete, path = "/admin/hero-sections/{id}", tag = "admin", params(("id" = i32, Path, description = "Hero section id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_hero_section(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    catalog::delete_hero_section(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/admin/services", tag = "admin", params(ContentListQuery), responses((status = 200, description = "Services in listing order")))]
pub async fn list_services(State(state): State<AppState>, Query(q): Query<ContentListQuery>) -> Result<Json<Page<service_entity::Model>>, JsonApiError> {
    let (filter, req) = q.split();
    Ok(Json(catalog::list_services(&state.db, &filter, req).await?))
}

#[utoipa::path(post, path = "/admin/services", tag = "admin", responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_service(
    State(state): State<AppState>,
    Json(input): Json<service_entity::NewService>,
) -> Result<(StatusCode, Json<service_entity::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(catalog::create_service(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/admin/services/{id}", tag = "admin", params(("id" = i32, Path, description = "Service id")), responses((status = 200, description = "Replaced"), (status = 404, description = "Not Found")))]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<service_entity::NewService>,
) -> Result<Json<service_entity::Model>, JsonApiError> {
    Ok(Json(catalog::update_service(&state.db, id, input).await?))
}

#[utoipa::path(patch, path = "/admin/services/{id}", tag = "admin", params(("id" = i32, Path, description = "Service id")), request_body = crate::openapi::ListingEditDoc, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn edit_service_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<ListingEdit>,
) -> Result<Json<service_entity::Model>, JsonApiError> {
    Ok(Json(catalog::edit_service_listing(&state.db, id, edit).await?))
}

#[utoipa::path(delete, path = "/admin/services/{id}", tag = "admin", params(("id" = i32, Path, description = "Service id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_service(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    catalog::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/admin/trainings", tag = "admin", params(ContentListQuery), responses((status = 200, description = "Trainings in listing order")))]
pub async fn list_trainings(State(state): State<AppState>, Query(q): Query<ContentListQuery>) -> Result<Json<Page<training::Model>>, JsonApiError> {
    let (filter, req) = q.split();
    Ok(Json(catalog::list_trainings(&state.db, &filter, req).await?))
}

#[utoipa::path(post, path = "/admin/trainings", tag = "admin", responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_training(
    State(state): State<AppState>,
    Json(input): Json<training::NewTraining>,
) -> Result<(StatusCode, Json<training::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(catalog::create_training(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/admin/trainings/{id}", tag = "admin", params(("id" = i32, Path, description = "Training id")), responses((status = 200, description = "Replaced"), (status = 404, description = "Not Found")))]
pub async fn update_training(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<training::NewTraining>,
) -> Result<Json<training::Model>, JsonApiError> {
    Ok(Json(catalog::update_training(&state.db, id, input).await?))
}

#[utoipa::path(patch, path = "/admin/trainings/{id}", tag = "admin", params(("id" = i32, Path, description = "Training id")), request_body = crate::openapi::ListingEditDoc, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn edit_training_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<ListingEdit>,
) -> Result<Json<training::Model>, JsonApiError> {
    Ok(Json(catalog::edit_training_listing(&state.db, id, edit).await?))
}

#[utoipa::path(delete, path = "/admin/trainings/{id}", tag = "admin", params(("id" = i32, Path, description = "Training id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_training(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    catalog::delete_training(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/admin/trusted-companies", tag = "admin", params(ContentListQuery), responses((status = 200, description = "Companies in listing order")))]
pub async fn list_trusted_companies(State(state): State<AppState>, Query(q): Query<ContentListQuery>) -> Result<Json<Page<trusted_company::Model>>, JsonApiError> {
    let (filter, req) = q.split();
    Ok(Json(catalog::list_trusted_companies(&state.db, &filter, req).await?))
}

#[utoipa::path(post, path = "/admin/trusted-companies", tag = "admin", responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_trusted_company(
    State(state): State<AppState>,
    Json(input): Json<trusted_company::NewTrustedCompany>,
) -> Result<(StatusCode, Json<trusted_company::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(catalog::create_trusted_company(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/admin/trusted-companies/{id}", tag = "admin", params(("id" = i32, Path, description = "Company id")), responses((status = 200, description = "Replaced"), (status = 404, description = "Not Found")))]
pub async fn update_trusted_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<trusted_company::NewTrustedCompany>,
) -> Result<Json<trusted_company::Model>, JsonApiError> {
    Ok(Json(catalog::update_trusted_company(&state.db, id, input).await?))
}

#[utoipa::path(patch, path = "/admin/trusted-companies/{id}", tag = "admin", params(("id" = i32, Path, description = "Company id")), request_body = crate::openapi::ListingEditDoc, responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn edit_trusted_company_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<ListingEdit>,
) -> Result<Json<trusted_company::Model>, JsonApiError> {
    Ok(Json(catalog::edit_trusted_company_listing(&state.db, id, edit).await?))
}

#[utoipa::path(delete, path = "/admin/trusted-companies/{id}", tag = "admin", params(("id" = i32, Path, description = "Company id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_trusted_company(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    catalog::delete_trusted_company(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/admin/testimonials", tag = "admin", params(ContentListQuery), responses((status = 200, description = "Testimonials in listing order")))]
pub async fn list_testimonials(State(state): State<AppState>, Query(q): Query<ContentListQuery>) -> Result<Json<Page<testimonial::Model>>, JsonApiError> {
    let (filter, req) = q.split();
    Ok(Json(catalog::list_testimonials(&state.db, &filter, req).await?))
}

#[utoipa::path(post, path = "/admin/testimonials", tag = "admin", responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(input): Json<testimonial::NewTestimonial>,
) -> Result<(StatusCode, Json<testimonial::Model>), JsonApiError> {
    Ok((StatusCode::CREATED, Json(catalog::create_testimonial(&state.db, input).await?)))
}

#[utoipa::path(put, path = "/admin/testimonials/{id}", tag = "admin", params(("id" = i32, Path, description = "Testimonial id")), responses((status = 200, description = "Replaced"), (status = 404, description = "Not Found")))]
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<testimonial::NewTestimonial>,
) -> Result<Json<testimonial::Model>, JsonApiError> {
    Ok(Json(catalog::update_testimonial(&state.db, id, input).await?))
}

#[utoipa::path(patch, path = "/admin/testimonials/{id}", tag = "admin", params(("id" = i32, Path, description = "Testimonial id")), request_body = crate::openapi::ListingEditDoc, responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn edit_testimonial_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(edit): Json<ListingEdit>,
) -> Result<Json<testimonial::Model>, JsonApiError> {
    Ok(Json(catalog::edit_testimonial_listing(&state.db, id, edit).await?))
}

#[utoipa::path(delete, path = "/admin/testimonials/{id}", tag = "admin", params(("id" = i32, Path, description = "Testimonial id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete_testimonial(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    catalog::delete_testimonial(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
