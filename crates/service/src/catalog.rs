//! Admin-side management of the content the public pages show: heroes, services,
//! trainings, trusted companies and testimonials.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, QueryFilter};
use serde::Deserialize;
use tracing::{info, instrument};

use models::{hero_section, service, testimonial, training, trusted_company};

use crate::errors::ServiceError;
use crate::pagination::{self, Page, PageRequest};
use crate::search::{contains_pattern, icontains};

/// Listing filters; each entity reads the ones it has columns for.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContentFilter {
    /// Substring match on the entity's search fields.
    pub q: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub level: Option<training::Level>,
    pub rating: Option<i32>,
}

impl ContentFilter {
    fn search_pattern(&self) -> Option<String> {
        self.q.as_deref().filter(|q| !q.is_empty()).map(contains_pattern)
    }
}

/// Inline edits from a listing row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListingEdit {
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}

impl ListingEdit {
    fn ensure_not_empty(&self) -> Result<(), ServiceError> {
        if self.is_featured.is_none() && self.order.is_none() {
            return Err(ServiceError::Validation("nothing to update".into()));
        }
        Ok(())
    }
}

fn found<T>(row: Option<T>, entity: &str) -> Result<T, ServiceError> {
    row.ok_or_else(|| ServiceError::not_found(entity))
}

fn deleted(removed: bool, entity: &str) -> Result<(), ServiceError> {
    if removed { Ok(()) } else { Err(ServiceError::not_found(entity)) }
}

// hero sections

pub async fn list_hero_sections(db: &DatabaseConnection, filter: &ContentFilter, req: PageRequest) -> Result<Page<hero_section::Model>, ServiceError> {
    let mut select = hero_section::ordered();
    if let Some(active) = filter.is_active {
        select = select.filter(hero_section::Column::IsActive.eq(active));
    }
    if let Some(p) = filter.search_pattern() {
        select = select.filter(
            Condition::any()
                .add(icontains(hero_section::Column::Title, &p))
                .add(icontains(hero_section::Column::Subtitle, &p)),
        );
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, input))]
pub async fn create_hero_section(db: &DatabaseConnection, input: hero_section::NewHeroSection) -> Result<hero_section::Model, ServiceError> {
    let created = hero_section::create(db, input).await?;
    info!(hero_id = created.id, event = "hero_section_created", "hero section created");
    Ok(created)
}

pub async fn update_hero_section(db: &DatabaseConnection, id: i32, input: hero_section::NewHeroSection) -> Result<hero_section::Model, ServiceError> {
    found(hero_section::update(db, id, input).await?, "hero section")
}

#[instrument(skip(db))]
pub async fn delete_hero_section(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    deleted(hero_section::delete(db, id).await?, "hero section")
}

// services

pub async fn list_services(db: &DatabaseConnection, filter: &ContentFilter, req: PageRequest) -> Result<Page<service::Model>, ServiceError> {
    let mut select = service::ordered();
    if let Some(featured) = filter.is_featured {
        select = select.filter(service::Column::IsFeatured.eq(featured));
    }
    if let Some(p) = filter.search_pattern() {
        select = select.filter(
            Condition::any()
                .add(icontains(service::Column::Name, &p))
                .add(icontains(service::Column::ShortDescription, &p)),
        );
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, input))]
pub async fn create_service(db: &DatabaseConnection, input: service::NewService) -> Result<service::Model, ServiceError> {
    let created = service::create(db, input).await?;
    info!(service_id = created.id, event = "service_created", "service created");
    Ok(created)
}

pub async fn update_service(db: &DatabaseConnection, id: i32, input: service::NewService) -> Result<service::Model, ServiceError> {
    found(service::update(db, id, input).await?, "service")
}

pub async fn edit_service_listing(db: &DatabaseConnection, id: i32, edit: ListingEdit) -> Result<service::Model, ServiceError> {
    edit.ensure_not_empty()?;
    found(service::set_listing(db, id, edit.is_featured, edit.order).await?, "service")
}

#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    deleted(service::delete(db, id).await?, "service")
}

// trainings

pub async fn list_trainings(db: &DatabaseConnection, filter: &ContentFilter, req: PageRequest) -> Result<Page<training::Model>, ServiceError> {
    let mut select = training::ordered();
    if let Some(featured) = filter.is_featured {
        select = select.filter(training::Column::IsFeatured.eq(featured));
    }
    if let Some(level) = filter.level {
        select = select.filter(training::Column::Level.eq(level));
    }
    if let Some(p) = filter.search_pattern() {
        select = select.filter(
            Condition::any()
                .add(icontains(training::Column::Name, &p))
                .add(icontains(training::Column::ShortDescription, &p)),
        );
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, input))]
pub async fn create_training(db: &DatabaseConnection, input: training::NewTraining) -> Result<training::Model, ServiceError> {
    let created = training::create(db, input).await?;
    info!(training_id = created.id, event = "training_created", "training created");
    Ok(created)
}

pub async fn update_training(db: &DatabaseConnection, id: i32, input: training::NewTraining) -> Result<training::Model, ServiceError> {
    found(training::update(db, id, input).await?, "training")
}

pub async fn edit_training_listing(db: &DatabaseConnection, id: i32, edit: ListingEdit) -> Result<training::Model, ServiceError> {
    edit.ensure_not_empty()?;
    found(training::set_listing(db, id, edit.is_featured, edit.order).await?, "training")
}

#[instrument(skip(db))]
pub async fn delete_training(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    deleted(training::delete(db, id).await?, "training")
}

// trusted companies

pub async fn list_trusted_companies(db: &DatabaseConnection, filter: &ContentFilter, req: PageRequest) -> Result<Page<trusted_company::Model>, ServiceError> {
    let mut select = trusted_company::ordered();
    if let Some(p) = filter.search_pattern() {
        select = select.filter(icontains(trusted_company::Column::Name, &p));
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, input))]
pub async fn create_trusted_company(db: &DatabaseConnection, input: trusted_company::NewTrustedCompany) -> Result<trusted_company::Model, ServiceError> {
    let created = trusted_company::create(db, input).await?;
    info!(company_id = created.id, event = "trusted_company_created", "trusted company created");
    Ok(created)
}

pub async fn update_trusted_company(db: &DatabaseConnection, id: i32, input: trusted_company::NewTrustedCompany) -> Result<trusted_company::Model, ServiceError> {
    found(trusted_company::update(db, id, input).await?, "trusted company")
}

/// Companies only carry a position; a featured flag is rejected.
pub async fn edit_trusted_company_listing(db: &DatabaseConnection, id: i32, edit: ListingEdit) -> Result<trusted_company::Model, ServiceError> {
    if edit.is_featured.is_some() {
        return Err(ServiceError::Validation("trusted companies have no featured flag".into()));
    }
    let order = edit.order.ok_or_else(|| ServiceError::Validation("nothing to update".into()))?;
    found(trusted_company::set_order(db, id, order).await?, "trusted company")
}

#[instrument(skip(db))]
pub async fn delete_trusted_company(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    deleted(trusted_company::delete(db, id).await?, "trusted company")
}

// testimonials

pub async fn list_testimonials(db: &DatabaseConnection, filter: &ContentFilter, req: PageRequest) -> Result<Page<testimonial::Model>, ServiceError> {
    let mut select = testimonial::ordered();
    if let Some(featured) = filter.is_featured {
        select = select.filter(testimonial::Column::IsFeatured.eq(featured));
    }
    if let Some(rating) = filter.rating {
        select = select.filter(testimonial::Column::Rating.eq(rating));
    }
    if let Some(p) = filter.search_pattern() {
        select = select.filter(
            Condition::any()
                .add(icontains(testimonial::Column::Name, &p))
                .add(icontains(testimonial::Column::Company, &p))
                .add(icontains(testimonial::Column::Review, &p)),
        );
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, input))]
pub async fn create_testimonial(db: &DatabaseConnection, input: testimonial::NewTestimonial) -> Result<testimonial::Model, ServiceError> {
    let created = testimonial::create(db, input).await?;
    info!(testimonial_id = created.id, event = "testimonial_created", "testimonial created");
    Ok(created)
}

pub async fn update_testimonial(db: &DatabaseConnection, id: i32, input: testimonial::NewTestimonial) -> Result<testimonial::Model, ServiceError> {
    found(testimonial::update(db, id, input).await?, "testimonial")
}

pub async fn edit_testimonial_listing(db: &DatabaseConnection, id: i32, edit: ListingEdit) -> Result<testimonial::Model, ServiceError> {
    edit.ensure_not_empty()?;
    found(testimonial::set_listing(db, id, edit.is_featured, edit.order).await?, "testimonial")
}

#[instrument(skip(db))]
pub async fn delete_testimonial(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    deleted(testimonial::delete(db, id).await?, "testimonial")
}
