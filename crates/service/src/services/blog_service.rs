use sea_orm::sea_query::NullOrdering;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder};

use models::blog_post::{self, BlogPostPatch, NewBlogPost};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct BlogFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Public listings only show published posts.
    #[serde(skip)]
    pub include_drafts: bool,
}

/// Published (or all) posts, newest publication first; drafts trail on every backend.
pub async fn list_posts(db: &DatabaseConnection, filter: BlogFilter) -> Result<Vec<blog_post::Model>, ServiceError> {
    let mut q = blog_post::Entity::find();
    if !filter.include_drafts {
        q = q.filter(blog_post::Column::IsPublished.eq(true));
    }
    if let Some(cat) = filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        q = q.filter(blog_post::Column::Category.eq(cat));
    }
    let mut posts = q
        .order_by_with_nulls(blog_post::Column::PublishedAt, Order::Desc, NullOrdering::Last)
        .order_by_desc(blog_post::Column::CreatedAt)
        .order_by_desc(blog_post::Column::Id)
        .all(db)
        .await
        .map_err(db_err)?;
    // tags live in a JSON column; filter in memory
    if let Some(tag) = filter.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        posts.retain(|p| models::validate::read_list(&p.tags).iter().any(|t| t.eq_ignore_ascii_case(tag)));
    }
    Ok(posts)
}

/// `published_only` hides drafts from public callers.
pub async fn get_post(db: &DatabaseConnection, id: i32, published_only: bool) -> Result<blog_post::Model, ServiceError> {
    let post = find_or_404::<blog_post::Entity, _>(db, id, "blog post").await?;
    if published_only && !post.is_published {
        return Err(ServiceError::not_found("blog post"));
    }
    Ok(post)
}

pub async fn get_post_by_slug(db: &DatabaseConnection, slug: &str, published_only: bool) -> Result<blog_post::Model, ServiceError> {
    let mut q = blog_post::Entity::find().filter(blog_post::Column::Slug.eq(slug));
    if published_only {
        q = q.filter(blog_post::Column::IsPublished.eq(true));
    }
    q.one(db).await.map_err(db_err)?.ok_or_else(|| ServiceError::not_found("blog post"))
}

pub async fn create_post(db: &DatabaseConnection, input: NewBlogPost) -> Result<blog_post::Model, ServiceError> {
    Ok(blog_post::create(db, input).await?)
}

pub async fn update_post(db: &DatabaseConnection, id: i32, patch: BlogPostPatch) -> Result<blog_post::Model, ServiceError> {
    let mut am: blog_post::ActiveModel = get_post(db, id, false).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_post(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<blog_post::Entity, _>(db, id, "blog post").await
}
