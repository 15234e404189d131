use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonial")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub designation: String,
    pub company: String,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub review: String,
    pub rating: i32,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

/// Listing order: `order`, then newest first.
pub fn ordered() -> Select<Entity> {
    Entity::find()
        .order_by_asc(Column::Order)
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

pub fn validate_rating(rating: i32) -> Result<(), ModelError> {
    if !RATING_RANGE.contains(&rating) {
        return Err(ModelError::Validation("rating must be between 1 and 5".into()));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTestimonial {
    pub name: String,
    pub designation: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub image: Option<String>,
    pub review: String,
    #[serde(default = "default_rating")]
    pub rating: i32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub order: i32,
}

fn default_rating() -> i32 { 5 }

impl Default for NewTestimonial {
    fn default() -> Self {
        Self {
            name: String::new(),
            designation: String::new(),
            company: String::new(),
            image: None,
            review: String::new(),
            rating: default_rating(),
            is_featured: false,
            order: 0,
        }
    }
}

pub fn validate_new(input: &NewTestimonial) -> Result<(), ModelError> {
    validate::required_max("name", &input.name, 100)?;
    validate::required_max("designation", &input.designation, 100)?;
    validate::max_len("company", &input.company, 100)?;
    validate::required("review", &input.review)?;
    validate_rating(input.rating)
}

fn fields(input: NewTestimonial) -> ActiveModel {
    ActiveModel {
        name: Set(input.name),
        designation: Set(input.designation),
        company: Set(input.company),
        image: Set(input.image),
        review: Set(input.review),
        rating: Set(input.rating),
        is_featured: Set(input.is_featured),
        order: Set(input.order),
        ..Default::default()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewTestimonial) -> Result<Model, ModelError> {
    validate_new(&input)?;
    let now = Utc::now().into();
    let mut am = fields(input);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: NewTestimonial) -> Result<Option<Model>, ModelError> {
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
