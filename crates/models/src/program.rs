use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewProgram {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProgramPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn create(db: &DatabaseConnection, input: NewProgram) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(validate::required("title", &input.title)?),
        description: Set(validate::required("description", &input.description)?),
        category: Set(validate::optional(input.category)),
        duration: Set(validate::optional(input.duration)),
        image_url: Set(validate::optional(input.image_url)),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl ProgramPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.title {
            am.title = Set(validate::required("title", &v)?);
        }
        if let Some(v) = self.description {
            am.description = Set(validate::required("description", &v)?);
        }
        if self.category.is_some() {
            am.category = Set(validate::optional(self.category));
        }
        if self.duration.is_some() {
            am.duration = Set(validate::optional(self.duration));
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        if let Some(v) = self.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
