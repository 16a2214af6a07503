use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

pub const PAGES: [&str; 2] = ["contact", "about"];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page: String,
    pub section: String,
    pub title: Option<String>,
    pub content: Json,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `PUT /pages/:page/:section`. `content` is free-form JSON.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PageSectionInput {
    pub title: Option<String>,
    #[serde(default)]
    pub content: Json,
    pub sort_order: Option<i32>,
}

pub fn page(value: &str) -> Result<String, ModelError> {
    validate::one_of("page", value, &PAGES)
}

pub fn section(value: &str) -> Result<String, ModelError> {
    let v = validate::required("section", value)?;
    if !v.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ModelError::Validation(format!("invalid section: {v}")));
    }
    Ok(v)
}

fn content(value: Json) -> Result<Json, ModelError> {
    if value.is_null() {
        return Err(ModelError::Validation("content is required".into()));
    }
    Ok(value)
}

pub async fn create(db: &DatabaseConnection, page_name: &str, section_name: &str, input: PageSectionInput) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        page: Set(page(page_name)?),
        section: Set(section(section_name)?),
        title: Set(validate::optional(input.title)),
        content: Set(content(input.content)?),
        sort_order: Set(input.sort_order.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl PageSectionInput {
    /// Overwrite an existing section; `sort_order` is kept when omitted.
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        am.title = Set(validate::optional(self.title));
        am.content = Set(content(self.content)?);
        if let Some(order) = self.sort_order {
            am.sort_order = Set(order);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
