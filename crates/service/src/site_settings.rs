//! SiteSettings singleton access for pages and the admin surface.

use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::site_settings::{self, SiteSettingsInput};

use crate::errors::ServiceError;

pub async fn get(db: &DatabaseConnection) -> Result<Option<site_settings::Model>, ServiceError> {
    Ok(site_settings::get(db).await?)
}

/// Fails with [`ServiceError::Conflict`] when a row already exists.
#[instrument(skip(db, input))]
pub async fn create(db: &DatabaseConnection, input: SiteSettingsInput) -> Result<site_settings::Model, ServiceError> {
    let created = site_settings::create(db, input).await?;
    info!(id = created.id, event = "site_settings_created", "site settings created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update(db: &DatabaseConnection, input: SiteSettingsInput) -> Result<site_settings::Model, ServiceError> {
    let updated = site_settings::update(db, input)
        .await?
        .ok_or_else(|| ServiceError::not_found("site settings"))?;
    info!(id = updated.id, event = "site_settings_updated", "site settings updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn second_create_is_a_conflict() -> anyhow::Result<()> {
        let db = get_db().await?;
        create(&db, SiteSettingsInput::default()).await?;
        let again = create(&db, SiteSettingsInput { site_name: Some("Other".into()), ..Default::default() }).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));
        assert_eq!(get(&db).await?.map(|s| s.site_name), Some("Zynder Tech".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn update_without_row_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let res = update(&db, SiteSettingsInput::default()).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_validation_error() -> anyhow::Result<()> {
        let db = get_db().await?;
        let res = create(&db, SiteSettingsInput { smtp_port: Some(0), ..Default::default() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
