use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::tour_category::{self, NewTourCategory, TourCategoryPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

/// All categories by `sort_order`, then name.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<tour_category::Model>, ServiceError> {
    tour_category::Entity::find()
        .order_by_asc(tour_category::Column::SortOrder)
        .order_by_asc(tour_category::Column::Name)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_category(db: &DatabaseConnection, id: i32) -> Result<tour_category::Model, ServiceError> {
    find_or_404::<tour_category::Entity, _>(db, id, "tour category").await
}

pub async fn get_category_by_slug(db: &DatabaseConnection, slug: &str) -> Result<tour_category::Model, ServiceError> {
    tour_category::Entity::find()
        .filter(tour_category::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("tour category"))
}

pub async fn create_category(db: &DatabaseConnection, input: NewTourCategory) -> Result<tour_category::Model, ServiceError> {
    Ok(tour_category::create(db, input).await?)
}

pub async fn update_category(db: &DatabaseConnection, id: i32, patch: TourCategoryPatch) -> Result<tour_category::Model, ServiceError> {
    let mut am: tour_category::ActiveModel = get_category(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<tour_category::Entity, _>(db, id, "tour category").await
}
