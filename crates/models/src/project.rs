use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

pub const STATUSES: [&str; 3] = ["planned", "ongoing", "completed"];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub gallery: Json,
    pub status: String,
    pub is_featured: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub gallery: Vec<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub gallery: Option<Vec<String>>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
}

fn status(value: &str) -> Result<String, ModelError> {
    validate::one_of("status", value, &STATUSES)
}

pub async fn create(db: &DatabaseConnection, input: NewProject) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(validate::required("title", &input.title)?),
        description: Set(validate::required("description", &input.description)?),
        category: Set(validate::optional(input.category)),
        location: Set(validate::optional(input.location)),
        image_url: Set(validate::optional(input.image_url)),
        gallery: Set(validate::string_list(input.gallery)),
        status: Set(status(input.status.as_deref().unwrap_or("planned"))?),
        is_featured: Set(input.is_featured),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl ProjectPatch {
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
        if self.location.is_some() {
            am.location = Set(validate::optional(self.location));
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        if let Some(v) = self.gallery {
            am.gallery = Set(validate::string_list(v));
        }
        if let Some(v) = self.status {
            am.status = Set(status(&v)?);
        }
        if let Some(v) = self.is_featured {
            am.is_featured = Set(v);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
