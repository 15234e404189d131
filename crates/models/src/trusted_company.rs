use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trusted_company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub logo: String,
    pub website_url: String,
    pub order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}

pub fn ordered() -> Select<Entity> {
    Entity::find()
        .order_by_asc(Column::Order)
        .order_by_asc(Column::Name)
        .order_by_asc(Column::Id)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewTrustedCompany {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub order: i32,
}

pub fn validate_new(input: &NewTrustedCompany) -> Result<(), ModelError> {
    validate::required_max("name", &input.name, 200)?;
    validate::required("logo", &input.logo)?;
    validate::max_len("website_url", &input.website_url, 200)
}

fn fields(input: NewTrustedCompany) -> ActiveModel {
    ActiveModel {
        name: Set(input.name),
        logo: Set(input.logo),
        website_url: Set(input.website_url),
        order: Set(input.order),
        ..Default::default()
    }
}

pub async fn create(db: &DatabaseConnection, input: NewTrustedCompany) -> Result<Model, ModelError> {
    validate_new(&input)?;
    let now = Utc::now().into();
    let mut am = fields(input);
    am.created_at = Set(now);
    am.updated_at = Set(now);
    am.insert(db).await.map_err(ModelError::db)
}

pub async fn update(db: &DatabaseConnection, id: i32, input: NewTrustedCompany) -> Result<Option<Model>, ModelError> {
    validate_new(&input)?;
    let mut am = fields(input);
    am.id = Set(id);
    am.updated_at = Set(Utc::now().into());
    crate::update_existing(am.update(db).await)
}

/// Only the position is editable from the listing.
pub async fn set_order(db: &DatabaseConnection, id: i32, order: i32) -> Result<Option<Model>, ModelError> {
    let am = ActiveModel { id: Set(id), order: Set(order), updated_at: Set(Utc::now().into()), ..Default::default() };
    crate::update_existing(am.update(db).await)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(ModelError::db)?;
    Ok(res.rows_affected > 0)
}
