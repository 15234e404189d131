use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct SearchResultDoc {
    /// `service` or `training`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i32,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
}

#[derive(ToSchema)]
pub struct SearchResponseDoc { pub results: Vec<SearchResultDoc> }

#[derive(ToSchema)]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct ContactAjaxResponse {
    pub success: bool,
    pub message: Option<String>,
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(ToSchema)]
pub struct ContactUpdateDoc {
    /// `new`, `in_progress` or `completed`.
    pub status: Option<String>,
    pub admin_notes: Option<String>,
}

/// Inline listing edit; trusted companies accept only `order`.
#[derive(ToSchema)]
pub struct ListingEditDoc {
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}

#[derive(ToSchema)]
pub struct SiteSettingsDoc {
    pub site_name: Option<String>,
    pub site_logo: Option<String>,
    pub favicon: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub phone_number: Option<String>,
    pub phone_number_2: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub whatsapp_number: Option<String>,
    pub whatsapp_message: Option<String>,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<i32>,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_use_tls: Option<bool>,
    pub map_embed_code: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::search::live_search,
        crate::routes::contact::submit,
        crate::routes::admin::list_contacts,
        crate::routes::admin::update_contact,
        crate::routes::admin::get_site_settings,
        crate::routes::admin::create_site_settings,
        crate::routes::admin::update_site_settings,
        crate::routes::admin::list_hero_sections,
        crate::routes::admin::create_hero_section,
        crate::routes::admin::update_hero_section,
        crate::routes::admin::delete_hero_section,
        crate::routes::admin::list_services,
        crate::routes::admin::create_service,
        crate::routes::admin::update_service,
        crate::routes::admin::edit_service_listing,
        crate::routes::admin::delete_service,
        crate::routes::admin::list_trainings,
        crate::routes::admin::create_training,
        crate::routes::admin::update_training,
        crate::routes::admin::edit_training_listing,
        crate::routes::admin::delete_training,
        crate::routes::admin::list_trusted_companies,
        crate::routes::admin::create_trusted_company,
        crate::routes::admin::update_trusted_company,
        crate::routes::admin::edit_trusted_company_listing,
        crate::routes::admin::delete_trusted_company,
        crate::routes::admin::list_testimonials,
        crate::routes::admin::create_testimonial,
        crate::routes::admin::update_testimonial,
        crate::routes::admin::edit_testimonial_listing,
        crate::routes::admin::delete_testimonial,
    ),
    components(
        schemas(
            HealthResponse,
            SearchResultDoc,
            SearchResponseDoc,
            ContactRequest,
            ContactAjaxResponse,
            ContactUpdateDoc,
            SiteSettingsDoc,
            ListingEditDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "search"),
        (name = "contact"),
        (name = "admin")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/api/search/".to_string()));
        assert!(paths.contains(&"/contact/".to_string()));
        assert!(paths.contains(&"/admin/site-settings".to_string()));
        assert!(paths.contains(&"/admin/services/{id}".to_string()));
        assert!(paths.contains(&"/admin/testimonials".to_string()));
    }
}
