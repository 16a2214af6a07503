use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewTourCategory {
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TourCategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

pub async fn create(db: &DatabaseConnection, input: NewTourCategory) -> Result<Model, ModelError> {
    let name = validate::required("name", &input.name)?;
    let slug = validate::slug_or_derive(input.slug, &name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name),
        slug: Set(slug),
        description: Set(validate::optional(input.description)),
        image_url: Set(validate::optional(input.image_url)),
        sort_order: Set(input.sort_order),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl TourCategoryPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(name) = self.name {
            am.name = Set(validate::required("name", &name)?);
        }
        if let Some(slug) = self.slug {
            am.slug = Set(validate::slug(&slug)?);
        }
        if self.description.is_some() {
            am.description = Set(validate::optional(self.description));
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        if let Some(order) = self.sort_order {
            am.sort_order = Set(order);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
