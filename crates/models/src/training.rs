use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    #[sea_orm(string_value = "beginner")]
    Beginner,
    #[sea_orm(string_value = "intermediate")]
    Intermediate,
    #[sea_orm(string_value = "advanced")]
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "training")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub full_description: String,
    pub image: String,
    pub duration: String,
    pub level: Level,
    #[sea_orm(column_type = "Text")]
    pub features: String,
    #[sea_orm(column_type = "Text")]
    pub curriculum: String,
    pub pdf_file: Option<String>,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn detail_path(&self) -> String { format!("/training/{}/", self.id) }

    /// Prefilled WhatsApp text offered on the training detail page.
    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hi, I'm interested in {} training. Please provide more details about enrollment.",
            self.name
        )
    }
}

/// All trainings in listing order: `order`, then `name`.
pub fn ordered() -> Select<Entity> {
    Entity::find()
        .order_by_asc(Column::Order)
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewTraining {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub image: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub curriculum: String,
    #[serde(default)]
    pub pdf_file: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i32,
}

pub fn validate_new(input: &NewTraining) -> Result<(), ModelError> {
    validate::required_max("name", &input.name, 200)?;
    validate::required_max("short_description", &input.short_description, 300)?;
    validate::required("full_description", &input.full_description)?;
    validate::required("image", &input.image)?;
    validate::max_len("duration", &input.duration, 100)
}

fn fields(input: NewTraining) -> ActiveModel {
    ActiveModel {
        name: Set(input.name),
        short_description: Set(input.short_description),
        full_description: Set(input.full_description),
        image: Set(input.image),
        duration: Set(input.duration),
        level: Set(input.level),
        features: Set(input.features),
        curriculum: Set(input.curriculum),
        pdf_file: Set(input.pdf_file),
        is_featured: Set(input.is_featured),
        order: Set(input.order),
        ..Default::default()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewTraining) -> Result<Model, ModelError> {
    validate_new(&input)?;
    let now = Utc::now().into();
    let mut am = fields(input);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: NewTraining) -> Result<Option<Model>, ModelError> {
    validate_new(&input)?;
    let mut am = fields(input);
    am.id = Set(id);
    am.updated_at = Set(Utc::now().into());
    crate::update_existing(am.update(db).await)
}

pub async fn set_listing(db: &DatabaseConnection, id: i32, is_featured: Option<bool>, order: Option<i32>) -> Result<Option<Model>, ModelError> {
    let mut am = ActiveModel { id: Set(id), updated_at: Set(Utc::now().into()), ..Default::default() };
    if let Some(v) = is_featured { am.is_featured = Set(v); }
    if let Some(v) = order { am.order = Set(v); }
    crate::update_existing(am.update(db).await)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected > 0)
}
