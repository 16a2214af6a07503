use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub category: String,
    pub short_description: Option<String>,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub location: Option<String>,
    pub max_group_size: Option<i32>,
    pub difficulty: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    pub gallery: Json,
    pub highlights: Json,
    pub included: Json,
    pub excluded: Json,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    TourProgram,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::TourProgram => Entity::has_many(super::tour_program::Entity).into(),
        }
    }
}

impl Related<super::tour_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TourProgram.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewTour {
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub category: String,
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: String,
    pub price: Option<f64>,
    #[serde(default)]
    pub duration: String,
    pub location: Option<String>,
    pub max_group_size: Option<i32>,
    pub difficulty: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub included: Vec<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update of the basic info step. Media has its own payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TourPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub max_group_size: Option<i32>,
    pub difficulty: Option<String>,
    pub rating: Option<f64>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub included: Option<Vec<String>>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub excluded: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

/// Media step: cover image and gallery are replaced together.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TourMedia {
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub gallery: Vec<String>,
}

fn group_size(value: Option<i32>) -> Result<Option<i32>, ModelError> {
    value.map(|v| validate::at_least_one("max_group_size", v)).transpose()
}

pub async fn create(db: &DatabaseConnection, input: NewTour) -> Result<Model, ModelError> {
    let title = validate::required("title", &input.title)?;
    let slug = validate::slug_or_derive(input.slug, &title)?;
    let price = input
        .price
        .ok_or_else(|| ModelError::Validation("price is required".into()))
        .and_then(|p| validate::non_negative("price", p))?;
    let now = Utc::now().into();
    let am = ActiveModel {
        title: Set(title),
        slug: Set(slug),
        category: Set(validate::required("category", &input.category)?),
        short_description: Set(validate::optional(input.short_description)),
        description: Set(validate::required("description", &input.description)?),
        price: Set(price),
        duration: Set(validate::required("duration", &input.duration)?),
        location: Set(validate::optional(input.location)),
        max_group_size: Set(group_size(input.max_group_size)?),
        difficulty: Set(validate::optional(input.difficulty)),
        rating: Set(validate::rating(input.rating)?),
        image_url: Set(validate::optional(input.image_url)),
        gallery: Set(validate::string_list(input.gallery)),
        highlights: Set(validate::string_list(input.highlights)),
        included: Set(validate::string_list(input.included)),
        excluded: Set(validate::string_list(input.excluded)),
        is_featured: Set(input.is_featured),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl TourPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.title {
            am.title = Set(validate::required("title", &v)?);
        }
        if let Some(v) = self.slug {
            am.slug = Set(validate::slug(&v)?);
        }
        if let Some(v) = self.category {
            am.category = Set(validate::required("category", &v)?);
        }
        if self.short_description.is_some() {
            am.short_description = Set(validate::optional(self.short_description));
        }
        if let Some(v) = self.description {
            am.description = Set(validate::required("description", &v)?);
        }
        if let Some(v) = self.price {
            am.price = Set(validate::non_negative("price", v)?);
        }
        if let Some(v) = self.duration {
            am.duration = Set(validate::required("duration", &v)?);
        }
        if self.location.is_some() {
            am.location = Set(validate::optional(self.location));
        }
        if self.max_group_size.is_some() {
            am.max_group_size = Set(group_size(self.max_group_size)?);
        }
        if self.difficulty.is_some() {
            am.difficulty = Set(validate::optional(self.difficulty));
        }
        if self.rating.is_some() {
            am.rating = Set(validate::rating(self.rating)?);
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        if let Some(v) = self.gallery {
            am.gallery = Set(validate::string_list(v));
        }
        if let Some(v) = self.highlights {
            am.highlights = Set(validate::string_list(v));
        }
        if let Some(v) = self.included {
            am.included = Set(validate::string_list(v));
        }
        if let Some(v) = self.excluded {
            am.excluded = Set(validate::string_list(v));
        }
        if let Some(v) = self.is_featured {
            am.is_featured = Set(v);
        }
        if let Some(v) = self.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}

impl TourMedia {
    pub fn apply(self, am: &mut ActiveModel) {
        am.image_url = Set(validate::optional(self.image_url));
        am.gallery = Set(validate::string_list(self.gallery));
        am.updated_at = Set(Utc::now().into());
    }
}
