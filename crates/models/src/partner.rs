use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "partner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub sort_order: i32,
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
pub struct NewPartner {
    #[serde(default)]
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PartnerPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn create(db: &DatabaseConnection, input: NewPartner) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(validate::required("name", &input.name)?),
        category: Set(validate::optional(input.category)),
        description: Set(validate::optional(input.description)),
        logo_url: Set(validate::optional(input.logo_url)),
        website_url: Set(validate::optional(input.website_url)),
        sort_order: Set(input.sort_order),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl PartnerPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.name {
            am.name = Set(validate::required("name", &v)?);
        }
        if self.category.is_some() {
            am.category = Set(validate::optional(self.category));
        }
        if self.description.is_some() {
            am.description = Set(validate::optional(self.description));
        }
        if self.logo_url.is_some() {
            am.logo_url = Set(validate::optional(self.logo_url));
        }
        if self.website_url.is_some() {
            am.website_url = Set(validate::optional(self.website_url));
        }
        if let Some(v) = self.sort_order {
            am.sort_order = Set(v);
        }
        if let Some(v) = self.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
