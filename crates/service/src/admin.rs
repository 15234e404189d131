//! Admin-side contact triage.

use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};
use serde::Deserialize;
use tracing::{info, instrument};

use models::contact;

use crate::errors::ServiceError;
use crate::pagination::{self, Page, PageRequest};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactUpdate {
    pub status: Option<contact::Status>,
    pub admin_notes: Option<String>,
}

/// Newest first, optionally only one status.
pub async fn list_contacts(
    db: &DatabaseConnection,
    status: Option<contact::Status>,
    req: PageRequest,
) -> Result<Page<contact::Model>, ServiceError> {
    let mut select = contact::ordered();
    if let Some(s) = status {
        select = select.filter(contact::Column::Status.eq(s));
    }
    pagination::paginate(db, select, req).await
}

#[instrument(skip(db, update))]
pub async fn update_contact(db: &DatabaseConnection, id: i32, update: ContactUpdate) -> Result<contact::Model, ServiceError> {
    if update.status.is_none() && update.admin_notes.is_none() {
        return Err(ServiceError::Validation("nothing to update".into()));
    }
    let updated = contact::update_status(db, id, update.status, update.admin_notes)
        .await?
        .ok_or_else(|| ServiceError::not_found("contact"))?;
    info!(contact_id = id, status = updated.status.label(), event = "contact_updated", "contact updated");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    async fn seed(db: &DatabaseConnection, name: &str) -> anyhow::Result<contact::Model> {
        Ok(contact::create(db, contact::NewContact {
            full_name: name.into(),
            email: "x@example.com".into(),
            phone_number: "1".into(),
            message: "m".into(),
        })
        .await?)
    }

    #[tokio::test]
    async fn filters_by_status_newest_first() -> anyhow::Result<()> {
        let db = get_db().await?;
        let a = seed(&db, "A").await?;
        let b = seed(&db, "B").await?;
        seed(&db, "C").await?;
        update_contact(&db, a.id, ContactUpdate { status: Some(contact::Status::Completed), admin_notes: None }).await?;

        let all = list_contacts(&db, None, PageRequest::new(1, pagination::ADMIN_PAGE_SIZE)).await?;
        assert_eq!(all.total, 3);
        assert_eq!(all.items[0].full_name, "C");

        let new_only = list_contacts(&db, Some(contact::Status::New), PageRequest::new(1, pagination::ADMIN_PAGE_SIZE)).await?;
        let names: Vec<_> = new_only.items.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, vec!["C", "B"]);
        assert!(new_only.items.iter().all(|c| c.id != a.id));
        assert_eq!(b.status, contact::Status::New);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_contact_is_not_found() -> anyhow::Result<()> {
        let db = get_db().await?;
        let res = update_contact(&db, 99, ContactUpdate { status: Some(contact::Status::InProgress), admin_notes: None }).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn empty_update_is_rejected() -> anyhow::Result<()> {
        let db = get_db().await?;
        let c = seed(&db, "A").await?;
        let res = update_contact(&db, c.id, ContactUpdate::default()).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
