pub mod errors;
pub mod validate;
pub mod db;
pub mod site_settings;
pub mod hero_section;
pub mod service;
pub mod training;
pub mod trusted_company;
pub mod testimonial;
pub mod contact;

use errors::ModelError;

/// Fold "no row matched the primary key" into `None`.
pub(crate) fn update_existing<M>(res: Result<M, sea_orm::DbErr>) -> Result<Option<M>, ModelError> {
    match res {
        Ok(m) => Ok(Some(m)),
        Err(sea_orm::DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(ModelError::db(e)),
    }
}

#[cfg(test)]
mod tests;
