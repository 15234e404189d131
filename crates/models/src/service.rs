use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub full_description: String,
    pub image: String,
    #[sea_orm(column_type = "Text")]
    pub features: String,
    #[sea_orm(column_type = "Text")]
    pub specialties: String,
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
    pub fn detail_path(&self) -> String { format!("/service/{}/", self.id) }
}

/// All services in listing order: `order`, then `name`.
pub fn ordered() -> Select<Entity> {
    Entity::find()
        .order_by_asc(Column::Order)
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewService {
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub image: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub specialties: String,
    #[serde(default)]
    pub pdf_file: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i32,
}

pub fn validate_new(input: &NewService) -> Result<(), ModelError> {
    validate::required_max("name", &input.name, 200)?;
    validate::required_max("short_description", &input.short_description, 300)?;
    validate::required("full_description", &input.full_description)?;
    validate::required("image", &input.image)
}

fn fields(input: NewService) -> ActiveModel {
    ActiveModel {
        name: Set(input.name),
        short_description: Set(input.short_description),
        full_description: Set(input.full_description),
        image: Set(input.image),
        features: Set(input.features),
        specialties: Set(input.specialties),
        pdf_file: Set(input.pdf_file),
        is_featured: Set(input.is_featured),
        order: Set(input.order),
        ..Default::default()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewService) -> Result<Model, ModelError> {
    validate_new(&input)?;
    let now = Utc::now().into();
    let mut am = fields(input);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(ModelError::db)
}

/// Replace every editable field; `None` when the row is gone.
pub async fn update(db: &DatabaseConnection, id: i32, input: NewService) -> Result<Option<Model>, ModelError> {
    validate_new(&input)?;
    let mut am = fields(input);
    am.id = Set(id);
    am.updated_at = Set(Utc::now().into());
    crate::update_existing(am.update(db).await)
}

/// Inline listing edits: featured flag and position.
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
