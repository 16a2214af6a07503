use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Json,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewBlogPost {
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub tags: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}

pub async fn create(db: &DatabaseConnection, input: NewBlogPost) -> Result<Model, ModelError> {
    let title = validate::required("title", &input.title)?;
    let slug = validate::slug_or_derive(input.slug, &title)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    let am = ActiveModel {
        title: Set(title),
        slug: Set(slug),
        excerpt: Set(validate::optional(input.excerpt)),
        content: Set(validate::required("content", &input.content)?),
        author: Set(validate::optional(input.author)),
        category: Set(validate::optional(input.category)),
        tags: Set(validate::string_list(input.tags)),
        image_url: Set(validate::optional(input.image_url)),
        is_published: Set(input.is_published),
        published_at: Set(input.is_published.then_some(now)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl BlogPostPatch {
    /// Publishing stamps `published_at` the first time only; unpublishing keeps it.
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.title {
            am.title = Set(validate::required("title", &v)?);
        }
        if let Some(v) = self.slug {
            am.slug = Set(validate::slug(&v)?);
        }
        if self.excerpt.is_some() {
            am.excerpt = Set(validate::optional(self.excerpt));
        }
        if let Some(v) = self.content {
            am.content = Set(validate::required("content", &v)?);
        }
        if self.author.is_some() {
            am.author = Set(validate::optional(self.author));
        }
        if self.category.is_some() {
            am.category = Set(validate::optional(self.category));
        }
        if let Some(v) = self.tags {
            am.tags = Set(validate::string_list(v));
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        let now: DateTimeWithTimeZone = Utc::now().into();
        if let Some(publish) = self.is_published {
            am.is_published = Set(publish);
            let unstamped = matches!(&am.published_at, ActiveValue::Unchanged(None) | ActiveValue::Set(None) | ActiveValue::NotSet);
            if publish && unstamped {
                am.published_at = Set(Some(now));
            }
        }
        am.updated_at = Set(now);
        Ok(())
    }
}
