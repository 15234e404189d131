//! Which content rows appear on which page.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use serde::Serialize;
use tracing::{debug, instrument};

use models::{hero_section, service, testimonial, training, trusted_company};

use crate::errors::ServiceError;
use crate::pagination::{self, Page, PageRequest};

/// Cap on each featured list on the home page.
pub const FEATURED_LIMIT: u64 = 6;
/// Cap on "related" rows on a detail page.
pub const RELATED_LIMIT: u64 = 3;

#[derive(Clone, Debug, Serialize)]
pub struct HomeContent {
    pub hero_section: Option<hero_section::Model>,
    pub services: Vec<service::Model>,
    pub trainings: Vec<training::Model>,
    pub trusted_companies: Vec<trusted_company::Model>,
    pub testimonials: Vec<testimonial::Model>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ServiceDetail {
    pub service: service::Model,
    pub related_services: Vec<service::Model>,
}

#[derive(Clone, Debug, Serialize)]
pub struct TrainingDetail {
    pub training: training::Model,
    pub related_trainings: Vec<training::Model>,
    pub whatsapp_message: String,
}

#[instrument(skip(db))]
pub async fn home(db: &DatabaseConnection) -> Result<HomeContent, ServiceError> {
    let hero_section = hero_section::find_active(db).await?;
    let services = service::ordered()
        .filter(service::Column::IsFeatured.eq(true))
        .limit(FEATURED_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    let trainings = training::ordered()
        .filter(training::Column::IsFeatured.eq(true))
        .limit(FEATURED_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    let trusted_companies = trusted_company::ordered().all(db).await.map_err(ServiceError::db)?;
    let testimonials = testimonial::ordered()
        .filter(testimonial::Column::IsFeatured.eq(true))
        .limit(FEATURED_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    debug!(
        services = services.len(),
        trainings = trainings.len(),
        companies = trusted_companies.len(),
        testimonials = testimonials.len(),
        "home content loaded"
    );
    Ok(HomeContent { hero_section, services, trainings, trusted_companies, testimonials })
}

pub async fn list_services(db: &DatabaseConnection, req: PageRequest) -> Result<Page<service::Model>, ServiceError> {
    pagination::paginate(db, service::ordered(), req).await
}

pub async fn list_trainings(db: &DatabaseConnection, req: PageRequest) -> Result<Page<training::Model>, ServiceError> {
    pagination::paginate(db, training::ordered(), req).await
}

#[instrument(skip(db))]
pub async fn service_detail(db: &DatabaseConnection, id: i32) -> Result<ServiceDetail, ServiceError> {
    let service = service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("service"))?;
    let related_services = service::ordered()
        .filter(service::Column::Id.ne(id))
        .limit(RELATED_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    Ok(ServiceDetail { service, related_services })
}

#[instrument(skip(db))]
pub async fn training_detail(db: &DatabaseConnection, id: i32) -> Result<TrainingDetail, ServiceError> {
    let training = training::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(ServiceError::db)?
        .ok_or_else(|| ServiceError::not_found("training"))?;
    let related_trainings = training::ordered()
        .filter(training::Column::Id.ne(id))
        .limit(RELATED_LIMIT)
        .all(db)
        .await
        .map_err(ServiceError::db)?;
    let whatsapp_message = training.whatsapp_message();
    Ok(TrainingDetail { training, related_trainings, whatsapp_message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_service, seed_testimonial, seed_training};

    #[tokio::test]
    async fn home_caps_featured_lists_at_six() -> anyhow::Result<()> {
        let db = get_db().await?;
        for i in 0..8 {
            seed_service(&db, &format!("Service {i}"), true, i).await?;
            seed_training(&db, &format!("Training {i}"), true, i).await?;
            seed_testimonial(&db, &format!("Client {i}"), true).await?;
        }
        seed_service(&db, "Not featured", false, 0).await?;
        for (name, order) in [("Later", 2), ("Sooner", 1)] {
            let company = trusted_company::NewTrustedCompany {
                name: name.into(),
                logo: format!("companies/{}.png", name.to_lowercase()),
                order,
                ..Default::default()
            };
            trusted_company::create(&db, company).await?;
        }

        let home = home(&db).await?;
        assert_eq!(home.services.len(), 6);
        assert_eq!(home.trainings.len(), 6);
        assert_eq!(home.testimonials.len(), 6);
        assert!(home.services.iter().all(|s| s.is_featured));
        assert_eq!(home.services[0].name, "Service 0");
        assert!(home.hero_section.is_none());
        let names: Vec<_> = home.trusted_companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Sooner", "Later"]);
        Ok(())
    }

    #[tokio::test]
    async fn home_picks_first_active_hero() -> anyhow::Result<()> {
        let db = get_db().await?;
        let inactive = models::hero_section::NewHeroSection {
            title: "Old".into(),
            subtitle: "s".into(),
            description: "d".into(),
            is_active: false,
            ..Default::default()
        };
        models::hero_section::create(&db, inactive).await?;
        for title in ["First", "Second"] {
            let hero = models::hero_section::NewHeroSection {
                title: title.into(),
                subtitle: "s".into(),
                description: "d".into(),
                ..Default::default()
            };
            models::hero_section::create(&db, hero).await?;
        }
        let home = home(&db).await?;
        assert_eq!(home.hero_section.map(|h| h.title), Some("First".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn list_clamps_page_past_the_end() -> anyhow::Result<()> {
        let db = get_db().await?;
        for i in 0..20 {
            seed_service(&db, &format!("S{i:02}"), false, 0).await?;
        }
        let page = list_services(&db, PageRequest::new(50, pagination::PAGE_SIZE)).await?;
        assert_eq!(page.number, 3);
        assert_eq!(page.num_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_next);
        assert!(page.has_previous);
        Ok(())
    }

    #[tokio::test]
    async fn list_on_empty_table_is_one_empty_page() -> anyhow::Result<()> {
        let db = get_db().await?;
        let page = list_trainings(&db, PageRequest::new(4, pagination::PAGE_SIZE)).await?;
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(page.items.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn related_excludes_current_and_caps_at_three() -> anyhow::Result<()> {
        let db = get_db().await?;
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(seed_training(&db, &format!("T{i}"), false, i).await?.id);
        }
        let detail = training_detail(&db, ids[0]).await?;
        assert_eq!(detail.related_trainings.len(), 3);
        assert!(detail.related_trainings.iter().all(|t| t.id != ids[0]));
        assert_eq!(
            detail.whatsapp_message,
            "Hi, I'm interested in T0 training. Please provide more details about enrollment."
        );
        Ok(())
    }

    #[tokio::test]
    async fn detail_missing_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        assert!(matches!(service_detail(&db, 404).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
