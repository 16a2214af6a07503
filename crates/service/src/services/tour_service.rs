use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;
use tracing::{info, instrument};

use models::tour::{self, NewTour, TourMedia, TourPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

/// Query-string filters for tour listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TourFilter {
    pub category: Option<String>,
    pub featured: Option<bool>,
    /// Admin listings see inactive tours too.
    #[serde(skip)]
    pub include_inactive: bool,
}

pub async fn list_tours(db: &DatabaseConnection, filter: TourFilter) -> Result<Vec<tour::Model>, ServiceError> {
    let mut q = tour::Entity::find();
    if !filter.include_inactive {
        q = q.filter(tour::Column::IsActive.eq(true));
    }
    if let Some(cat) = filter.category.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        q = q.filter(tour::Column::Category.eq(cat));
    }
    if let Some(featured) = filter.featured {
        q = q.filter(tour::Column::IsFeatured.eq(featured));
    }
    q.order_by_desc(tour::Column::IsFeatured)
        .order_by_desc(tour::Column::CreatedAt)
        .order_by_desc(tour::Column::Id)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_tour(db: &DatabaseConnection, id: i32) -> Result<tour::Model, ServiceError> {
    find_or_404::<tour::Entity, _>(db, id, "tour").await
}

pub async fn get_tour_by_slug(db: &DatabaseConnection, slug: &str) -> Result<tour::Model, ServiceError> {
    tour::Entity::find()
        .filter(tour::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("tour"))
}

pub async fn create_tour(db: &DatabaseConnection, input: NewTour) -> Result<tour::Model, ServiceError> {
    let created = tour::create(db, input).await?;
    info!(tour_id = created.id, slug = %created.slug, "tour_created");
    Ok(created)
}

/// Basic-info step of the editing workflow.
#[instrument(skip(db, patch))]
pub async fn update_tour(db: &DatabaseConnection, id: i32, patch: TourPatch) -> Result<tour::Model, ServiceError> {
    let mut am: tour::ActiveModel = get_tour(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

/// Media step: replaces cover image and gallery.
#[instrument(skip(db, media))]
pub async fn update_tour_media(db: &DatabaseConnection, id: i32, media: TourMedia) -> Result<tour::Model, ServiceError> {
    let mut am: tour::ActiveModel = get_tour(db, id).await?.into();
    media.apply(&mut am);
    am.update(db).await.map_err(db_err)
}

/// Deleting a tour cascades to its day programs; bookings keep a null tour.
#[instrument(skip(db))]
pub async fn delete_tour(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<tour::Entity, _>(db, id, "tour").await?;
    info!(tour_id = id, "tour_deleted");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::validate::read_list;
    use serde_json::json;

    pub(crate) fn new_tour(title: &str, category: &str) -> NewTour {
        serde_json::from_value(json!({
            "title": title,
            "category": category,
            "description": "A fine trip",
            "price": 500,
            "duration": "3 days",
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn filters_by_category_featured_and_active() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_tour(&db, new_tour("Serengeti", "safari")).await?;
        let mut featured = new_tour("Tarangire", "safari");
        featured.is_featured = true;
        create_tour(&db, featured).await?;
        create_tour(&db, new_tour("Zanzibar", "beach")).await?;
        let mut hidden = new_tour("Retired", "safari");
        hidden.is_active = false;
        create_tour(&db, hidden).await?;

        let safari = list_tours(&db, TourFilter { category: Some("safari".into()), ..Default::default() }).await?;
        assert_eq!(safari.len(), 2);
        assert!(safari.iter().all(|t| t.category == "safari" && t.is_active));
        assert_eq!(safari[0].title, "Tarangire");

        let feat = list_tours(&db, TourFilter { featured: Some(true), ..Default::default() }).await?;
        assert_eq!(feat.len(), 1);

        let all = list_tours(&db, TourFilter { include_inactive: true, ..Default::default() }).await?;
        assert_eq!(all.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn editing_steps_persist_independently() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = create_tour(&db, new_tour("Mount Meru", "trekking")).await?;

        let patched = update_tour(&db, t.id, TourPatch { duration: Some("4 days".into()), ..Default::default() }).await?;
        assert_eq!(patched.duration, "4 days");

        let media = TourMedia { image_url: Some("/uploads/tours/meru.jpg".into()), gallery: vec!["/uploads/tours/1.jpg".into(), "/uploads/tours/2.jpg".into()] };
        let with_media = update_tour_media(&db, t.id, media).await?;
        assert_eq!(with_media.duration, "4 days");
        assert_eq!(read_list(&with_media.gallery).len(), 2);

        assert_eq!(get_tour_by_slug(&db, "mount-meru").await?.id, t.id);
        assert!(matches!(update_tour(&db, 999, TourPatch::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(get_tour_by_slug(&db, "nope").await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
