pub mod admin;
pub mod contact;
pub mod pages;
pub mod search;

use axum::{
    middleware,
    routing::{get, patch, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{errors, openapi::ApiDoc, state::AppState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public pages, search, contact, and (when a key
/// is configured) the admin JSON surface.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(pages::home))
        .route("/services/", get(pages::services_list))
        .route("/service/:id/", get(pages::service_detail))
        .route("/trainings/", get(pages::trainings_list))
        .route("/training/:id/", get(pages::training_detail))
        .route("/contact/", get(contact::form).post(contact::submit))
        .route("/contact_new/", get(contact::form).post(contact::submit))
        .route("/api/search/", get(search::live_search))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let mut app = public;
    if state.admin_key.is_some() {
        let admin_routes = Router::new()
            .route("/admin/contacts", get(admin::list_contacts))
            .route("/admin/contacts/:id", patch(admin::update_contact))
            .route(
                "/admin/site-settings",
                get(admin::get_site_settings)
                    .post(admin::create_site_settings)
                    .put(admin::update_site_settings),
            )
            .route("/admin/hero-sections", get(admin::list_hero_sections).post(admin::create_hero_section))
            .route("/admin/hero-sections/:id", put(admin::update_hero_section).delete(admin::delete_hero_section))
            .route("/admin/services", get(admin::list_services).post(admin::create_service))
            .route(
                "/admin/services/:id",
                put(admin::update_service).patch(admin::edit_service_listing).delete(admin::delete_service),
            )
            .route("/admin/trainings", get(admin::list_trainings).post(admin::create_training))
            .route(
                "/admin/trainings/:id",
                put(admin::update_training).patch(admin::edit_training_listing).delete(admin::delete_training),
            )
            .route("/admin/trusted-companies", get(admin::list_trusted_companies).post(admin::create_trusted_company))
            .route(
                "/admin/trusted-companies/:id",
                put(admin::update_trusted_company)
                    .patch(admin::edit_trusted_company_listing)
                    .delete(admin::delete_trusted_company),
            )
            .route("/admin/testimonials", get(admin::list_testimonials).post(admin::create_testimonial))
            .route(
                "/admin/testimonials/:id",
                put(admin::update_testimonial).patch(admin::edit_testimonial_listing).delete(admin::delete_testimonial),
            )
            .route_layer(middleware::from_fn_with_state(state.clone(), admin::require_admin_key));
        app = app.merge(admin_routes);
    }

    app.nest_service("/static", ServeDir::new(&state.site.static_dir))
        .nest_service("/media", ServeDir::new(&state.site.media_dir))
        .fallback(errors::not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
