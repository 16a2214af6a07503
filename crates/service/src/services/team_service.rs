use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::team_member::{self, NewTeamMember, TeamMemberPatch};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

pub async fn list_members(db: &DatabaseConnection, include_inactive: bool) -> Result<Vec<team_member::Model>, ServiceError> {
    let mut q = team_member::Entity::find();
    if !include_inactive {
        q = q.filter(team_member::Column::IsActive.eq(true));
    }
    q.order_by_asc(team_member::Column::SortOrder)
        .order_by_asc(team_member::Column::Name)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_member(db: &DatabaseConnection, id: i32) -> Result<team_member::Model, ServiceError> {
    find_or_404::<team_member::Entity, _>(db, id, "team member").await
}

pub async fn create_member(db: &DatabaseConnection, input: NewTeamMember) -> Result<team_member::Model, ServiceError> {
    Ok(team_member::create(db, input).await?)
}

pub async fn update_member(db: &DatabaseConnection, id: i32, patch: TeamMemberPatch) -> Result<team_member::Model, ServiceError> {
    let mut am: team_member::ActiveModel = get_member(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_member(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<team_member::Entity, _>(db, id, "team member").await
}
