use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::project::{self, NewProject, ProjectPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

/// Featured first, then newest.
pub async fn list_projects(db: &DatabaseConnection, category: Option<&str>) -> Result<Vec<project::Model>, ServiceError> {
    let mut q = project::Entity::find();
    if let Some(cat) = category.map(str::trim).filter(|c| !c.is_empty()) {
        q = q.filter(project::Column::Category.eq(cat));
    }
    q.order_by_desc(project::Column::IsFeatured)
        .order_by_desc(project::Column::CreatedAt)
        .order_by_desc(project::Column::Id)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_project(db: &DatabaseConnection, id: i32) -> Result<project::Model, ServiceError> {
    find_or_404::<project::Entity, _>(db, id, "project").await
}

pub async fn create_project(db: &DatabaseConnection, input: NewProject) -> Result<project::Model, ServiceError> {
    Ok(project::create(db, input).await?)
}

pub async fn update_project(db: &DatabaseConnection, id: i32, patch: ProjectPatch) -> Result<project::Model, ServiceError> {
    let mut am: project::ActiveModel = get_project(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_project(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<project::Entity, _>(db, id, "project").await
}
