use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hero_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub background_image: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn ordered() -> Select<Entity> {
    Entity::find().order_by_asc(Column::Id)
}

/// First active hero by id, if any.
pub async fn find_active(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    ordered()
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(ModelError::db)
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewHeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default = "default_cta_text")]
    pub cta_text: String,
    #[serde(default = "default_cta_link")]
    pub cta_link: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_cta_text() -> String { "Get Started".into() }
fn default_cta_link() -> String { "#services".into() }
fn default_active() -> bool { true }

impl Default for NewHeroSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            background_image: None,
            cta_text: default_cta_text(),
            cta_link: default_cta_link(),
            is_active: default_active(),
        }
    }
}

pub fn validate_new(input: &NewHeroSection) -> Result<(), ModelError> {
    validate::required_max("title", &input.title, 200)?;
    validate::required_max("subtitle", &input.subtitle, 300)?;
    validate::required("description", &input.description)?;
    validate::max_len("cta_text", &input.cta_text, 50)?;
    validate::max_len("cta_link", &input.cta_link, 200)
}

fn fields(input: NewHeroSection) -> ActiveModel {
    ActiveModel {
        title: Set(input.title),
        subtitle: Set(input.subtitle),
        description: Set(input.description),
        background_image: Set(input.background_image),
        cta_text: Set(input.cta_text),
        cta_link: Set(input.cta_link),
        is_active: Set(input.is_active),
        ..Default::default()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewHeroSection) -> Result<Model, ModelError> {
    validate_new(&input)?;
    let now = Utc::now().into();
    let mut am = fields(input);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: NewHeroSection) -> Result<Option<Model>, ModelError> {
    validate_new(&input)?;
    let mut am = fields(input);
    am.id = Set(id);
    am.updated_at = Set(Utc::now().into());
    crate::update_existing(am.update(db).await)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected > 0)
}
