use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::New => "New",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Status::New),
            "in_progress" => Some(Status::InProgress),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: Status,
    #[sea_orm(column_type = "Text")]
    pub admin_notes: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Newest first.
pub fn ordered() -> Select<Entity> {
    Entity::find().order_by_desc(Column::CreatedAt).order_by_desc(Column::Id)
}

/// Already-validated submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewContact {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

pub async fn create(db: &DatabaseConnection, input: NewContact) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        full_name: Set(input.full_name),
        email: Set(input.email),
        phone_number: Set(input.phone_number),
        message: Set(input.message),
        status: Set(Status::New),
        admin_notes: Set(String::new()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(ModelError::db)
}

/// Admin-side triage. `None` means leave as is; returns `None` when the id is unknown.
pub async fn update_status(
    db: &DatabaseConnection,
    id: i32,
    status: Option<Status>,
    admin_notes: Option<String>,
) -> Result<Option<Model>, ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await.map_err(ModelError::db)? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    if let Some(s) = status { am.status = Set(s); }
    if let Some(n) = admin_notes { am.admin_notes = Set(n); }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map(Some).map_err(ModelError::db)
}
