use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::partner::{self, NewPartner, PartnerPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

pub async fn list_partners(db: &DatabaseConnection, category: Option<&str>, include_inactive: bool) -> Result<Vec<partner::Model>, ServiceError> {
    let mut q = partner::Entity::find();
    if !include_inactive {
        q = q.filter(partner::Column::IsActive.eq(true));
    }
    if let Some(cat) = category.map(str::trim).filter(|c| !c.is_empty()) {
        q = q.filter(partner::Column::Category.eq(cat));
    }
    q.order_by_asc(partner::Column::SortOrder)
        .order_by_asc(partner::Column::Name)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_partner(db: &DatabaseConnection, id: i32) -> Result<partner::Model, ServiceError> {
    find_or_404::<partner::Entity, _>(db, id, "partner").await
}

pub async fn create_partner(db: &DatabaseConnection, input: NewPartner) -> Result<partner::Model, ServiceError> {
    Ok(partner::create(db, input).await?)
}

pub async fn update_partner(db: &DatabaseConnection, id: i32, patch: PartnerPatch) -> Result<partner::Model, ServiceError> {
    let mut am: partner::ActiveModel = get_partner(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_partner(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<partner::Entity, _>(db, id, "partner").await
}
