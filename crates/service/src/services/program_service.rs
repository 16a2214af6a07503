use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::program::{self, NewProgram, ProgramPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

pub async fn list_programs(db: &DatabaseConnection, category: Option<&str>, include_inactive: bool) -> Result<Vec<program::Model>, ServiceError> {
    let mut q = program::Entity::find();
    if !include_inactive {
        q = q.filter(program::Column::IsActive.eq(true));
    }
    if let Some(cat) = category.map(str::trim).filter(|c| !c.is_empty()) {
        q = q.filter(program::Column::Category.eq(cat));
    }
    q.order_by_asc(program::Column::Title).all(db).await.map_err(db_err)
}

pub async fn get_program(db: &DatabaseConnection, id: i32) -> Result<program::Model, ServiceError> {
    find_or_404::<program::Entity, _>(db, id, "program").await
}

pub async fn create_program(db: &DatabaseConnection, input: NewProgram) -> Result<program::Model, ServiceError> {
    Ok(program::create(db, input).await?)
}

pub async fn update_program(db: &DatabaseConnection, id: i32, patch: ProgramPatch) -> Result<program::Model, ServiceError> {
    let mut am: program::ActiveModel = get_program(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_program(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<program::Entity, _>(db, id, "program").await
}
