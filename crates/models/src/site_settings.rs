//! Site-wide settings. A single row at most.
//!
//! The singleton rule lives in [`ActiveModelBehavior::before_save`] so every insert
//! path (admin API, fixtures, seeders) hits it, not just [`create`].

use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

pub const SINGLETON_VIOLATION: &str = "Only one SiteSettings instance is allowed";
pub const DEFAULT_SITE_NAME: &str = "Zynder Tech";
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hello! I'm interested in your services.";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub site_name: String,
    pub site_logo: Option<String>,
    pub favicon: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub phone_number: String,
    #[sea_orm(column_name = "phone_number_2")]
    pub phone_number_2: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub whatsapp_number: String,
    #[sea_orm(column_type = "Text")]
    pub whatsapp_message: String,
    pub smtp_host: String,
    pub smtp_port: i32,
    pub smtp_username: String,
    #[serde(skip_serializing)]
    pub smtp_password: String,
    pub smtp_use_tls: bool,
    #[sea_orm(column_type = "Text")]
    pub map_embed_code: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && Entity::find().count(db).await? > 0 {
            return Err(DbErr::Custom(SINGLETON_VIOLATION.to_string()));
        }
        Ok(self)
    }
}

impl Model {
    /// Address notifications go to; falls back to the SMTP login when `email` is blank.
    pub fn notification_recipient(&self) -> &str {
        if self.email.trim().is_empty() { &self.smtp_username } else { &self.email }
    }

    pub fn smtp_configured(&self) -> bool { !self.smtp_username.trim().is_empty() }
}

/// The part of the settings public pages render. Mail relay settings stay server-side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicSiteSettings {
    pub site_name: String,
    pub site_logo: Option<String>,
    pub favicon: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub phone_number: String,
    pub phone_number_2: String,
    pub email: String,
    pub address: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub linkedin_url: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub map_embed_code: String,
}

impl From<Model> for PublicSiteSettings {
    fn from(m: Model) -> Self {
        Self {
            site_name: m.site_name,
            site_logo: m.site_logo,
            favicon: m.favicon,
            primary_color: m.primary_color,
            secondary_color: m.secondary_color,
            phone_number: m.phone_number,
            phone_number_2: m.phone_number_2,
            email: m.email,
            address: m.address,
            facebook_url: m.facebook_url,
            twitter_url: m.twitter_url,
            instagram_url: m.instagram_url,
            linkedin_url: m.linkedin_url,
            whatsapp_number: m.whatsapp_number,
            whatsapp_message: m.whatsapp_message,
            map_embed_code: m.map_embed_code,
        }
    }
}

/// Partial settings payload. Absent fields keep their current (or default) value.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SiteSettingsInput {
    pub site_name: Option<String>,
    pub site_logo: Option<Option<String>>,
    pub favicon: Option<Option<String>>,
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

impl SiteSettingsInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(v) = &self.site_name { validate::required_max("site_name", v, 100)?; }
        if let Some(v) = &self.phone_number { validate::max_len("phone_number", v, 20)?; }
        if let Some(v) = &self.phone_number_2 { validate::max_len("phone_number_2", v, 20)?; }
        if let Some(v) = &self.whatsapp_number { validate::max_len("whatsapp_number", v, 20)?; }
        if let Some(v) = &self.email {
            if !v.trim().is_empty() { validate::email("email", v.trim())?; }
        }
        if let Some(p) = self.smtp_port {
            if !(1..=65535).contains(&p) {
                return Err(ModelError::Validation("smtp_port must be between 1 and 65535".into()));
            }
        }
        Ok(())
    }

    fn apply(self, am: &mut ActiveModel) {
        if let Some(v) = self.site_name { am.site_name = Set(v); }
        if let Some(v) = self.site_logo { am.site_logo = Set(v); }
        if let Some(v) = self.favicon { am.favicon = Set(v); }
        if let Some(v) = self.primary_color { am.primary_color = Set(v); }
        if let Some(v) = self.secondary_color { am.secondary_color = Set(v); }
        if let Some(v) = self.phone_number { am.phone_number = Set(v); }
        if let Some(v) = self.phone_number_2 { am.phone_number_2 = Set(v); }
        if let Some(v) = self.email { am.email = Set(v.trim().to_string()); }
        if let Some(v) = self.address { am.address = Set(v); }
        if let Some(v) = self.facebook_url { am.facebook_url = Set(v); }
        if let Some(v) = self.twitter_url { am.twitter_url = Set(v); }
        if let Some(v) = self.instagram_url { am.instagram_url = Set(v); }
        if let Some(v) = self.linkedin_url { am.linkedin_url = Set(v); }
        if let Some(v) = self.whatsapp_number { am.whatsapp_number = Set(v); }
        if let Some(v) = self.whatsapp_message { am.whatsapp_message = Set(v); }
        if let Some(v) = self.smtp_host { am.smtp_host = Set(v); }
        if let Some(v) = self.smtp_port { am.smtp_port = Set(v); }
        if let Some(v) = self.smtp_username { am.smtp_username = Set(v); }
        if let Some(v) = self.smtp_password { am.smtp_password = Set(v); }
        if let Some(v) = self.smtp_use_tls { am.smtp_use_tls = Set(v); }
        if let Some(v) = self.map_embed_code { am.map_embed_code = Set(v); }
    }
}

fn defaults() -> ActiveModel {
    let now = Utc::now().into();
    ActiveModel {
        site_name: Set(DEFAULT_SITE_NAME.to_string()),
        site_logo: Set(None),
        favicon: Set(None),
        primary_color: Set("#007bff".into()),
        secondary_color: Set("#6c757d".into()),
        phone_number: Set(String::new()),
        phone_number_2: Set(String::new()),
        email: Set(String::new()),
        address: Set(String::new()),
        facebook_url: Set(String::new()),
        twitter_url: Set(String::new()),
        instagram_url: Set(String::new()),
        linkedin_url: Set(String::new()),
        whatsapp_number: Set(String::new()),
        whatsapp_message: Set(DEFAULT_WHATSAPP_MESSAGE.to_string()),
        smtp_host: Set(String::new()),
        smtp_port: Set(587),
        smtp_username: Set(String::new()),
        smtp_password: Set(String::new()),
        smtp_use_tls: Set(true),
        map_embed_code: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

/// The settings row, if one has been created.
pub async fn get(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    Entity::find().order_by_asc(Column::Id).one(db).await.map_err(ModelError::db)
}

pub async fn create(db: &DatabaseConnection, input: SiteSettingsInput) -> Result<Model, ModelError> {
    input.validate()?;
    let mut am = defaults();
    input.apply(&mut am);
    am.insert(db).await.map_err(map_save_err)
}

pub async fn update(db: &DatabaseConnection, input: SiteSettingsInput) -> Result<Option<Model>, ModelError> {
    input.validate()?;
    let Some(current) = get(db).await? else { return Ok(None) };
    let mut am: ActiveModel = current.into();
    input.apply(&mut am);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map(Some).map_err(map_save_err)
}

fn map_save_err(e: DbErr) -> ModelError {
    match e {
        DbErr::Custom(msg) if msg == SINGLETON_VIOLATION => ModelError::Conflict(msg),
        other => ModelError::db(other),
    }
}
