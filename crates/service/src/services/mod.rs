//! Per-resource data access. Every function takes the connection pool and
//! returns models directly; HTTP concerns stay in the server crate.

pub mod tour_category_service;
pub mod tour_service;
pub mod tour_program_service;
pub mod booking_service;
pub mod contact_service;
pub mod blog_service;
pub mod project_service;
pub mod program_service;
pub mod partner_service;
pub mod team_service;
pub mod page_service;

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::errors::{db_err, ServiceError};

/// Fetch by integer id or fail with `NotFound`.
pub(crate) async fn find_or_404<E, C>(db: &C, id: i32, entity: &str) -> Result<E::Model, ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id).one(db).await.map_err(db_err)?.ok_or_else(|| ServiceError::not_found(entity))
}

/// Delete by integer id; `NotFound` when nothing was removed.
pub(crate) async fn delete_or_404<E, C>(db: &C, id: i32, entity: &str) -> Result<(), ServiceError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let res = E::delete_by_id(id).exec(db).await.map_err(db_err)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found(entity));
    }
    Ok(())
}
