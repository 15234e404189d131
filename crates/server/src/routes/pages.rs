//! Page contexts for the template renderer.
//!
//! Every page carries the site settings block, the media URL prefix and any flash
//! messages next to its own data, flattened into one JSON object.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use models::{service as service_entity, site_settings, training};
use service::{
    content,
    pagination::{Page, PageRequest, PAGE_SIZE},
};

use crate::{
    errors::JsonApiError,
    flash::{self, FlashMessage},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct PageContext<T> {
    pub template: &'static str,
    pub site_settings: Option<site_settings::PublicSiteSettings>,
    pub media_url: String,
    pub messages: Vec<FlashMessage>,
    #[serde(flatten)]
    pub page: T,
}

pub type PageResponse<T> = Result<(CookieJar, Json<PageContext<T>>), JsonApiError>;

/// Wrap page data with the shared blocks and consume pending flash messages.
pub async fn render<T: Serialize>(state: &AppState, jar: CookieJar, template: &'static str, page: T) -> PageResponse<T> {
    let site_settings = service::site_settings::get(&state.db).await?.map(Into::into);
    let (jar, messages) = flash::take(jar);
    let ctx = PageContext { template, site_settings, media_url: state.site.media_url.clone(), messages, page };
    Ok((jar, Json(ctx)))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServicesPage {
    pub page_obj: Page<service_entity::Model>,
}

#[derive(Debug, Serialize)]
pub struct TrainingsPage {
    pub page_obj: Page<training::Model>,
}

/// Detail routes only match integer ids; anything else is a missing page.
fn parse_id(raw: &str) -> Result<i32, JsonApiError> {
    raw.parse::<i32>().map_err(|_| JsonApiError::not_found(format!("no record with id {raw:?}")))
}

pub async fn home(State(state): State<AppState>, jar: CookieJar) -> PageResponse<content::HomeContent> {
    let home = content::home(&state.db).await?;
    render(&state, jar, "website/index.html", home).await
}

pub async fn services_list(State(state): State<AppState>, jar: CookieJar, Query(q): Query<ListQuery>) -> PageResponse<ServicesPage> {
    let req = PageRequest::parse(q.page.as_deref(), PAGE_SIZE);
    let page_obj = content::list_services(&state.db, req).await?;
    render(&state, jar, "website/services.html", ServicesPage { page_obj }).await
}

pub async fn service_detail(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> PageResponse<content::ServiceDetail> {
    let detail = content::service_detail(&state.db, parse_id(&id)?).await?;
    render(&state, jar, "website/service_detail.html", detail).await
}

pub async fn trainings_list(State(state): State<AppState>, jar: CookieJar, Query(q): Query<ListQuery>) -> PageResponse<TrainingsPage> {
    let req = PageRequest::parse(q.page.as_deref(), PAGE_SIZE);
    let page_obj = content::list_trainings(&state.db, req).await?;
    render(&state, jar, "website/trainings.html", TrainingsPage { page_obj }).await
}

pub async fn training_detail(State(state): State<AppState>, jar: CookieJar, Path(id): Path<String>) -> PageResponse<content::TrainingDetail> {
    let detail = content::training_detail(&state.db, parse_id(&id)?).await?;
    render(&state, jar, "website/training_detail.html", detail).await
}
