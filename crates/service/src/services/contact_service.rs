use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use models::contact_message::{self, NewContactMessage};

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

pub async fn create_message(db: &DatabaseConnection, input: NewContactMessage) -> Result<contact_message::Model, ServiceError> {
    let created = contact_message::create(db, input).await?;
    common::metrics::CONTACT_MESSAGES_TOTAL.inc();
    info!(message_id = created.id, "contact_message_received");
    Ok(created)
}

/// Newest first; `unread_only` hides messages already read.
pub async fn list_messages(db: &DatabaseConnection, unread_only: bool) -> Result<Vec<contact_message::Model>, ServiceError> {
    let mut q = contact_message::Entity::find();
    if unread_only {
        q = q.filter(contact_message::Column::IsRead.eq(false));
    }
    q.order_by_desc(contact_message::Column::CreatedAt)
        .order_by_desc(contact_message::Column::Id)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_message(db: &DatabaseConnection, id: i32) -> Result<contact_message::Model, ServiceError> {
    find_or_404::<contact_message::Entity, _>(db, id, "contact message").await
}

pub async fn mark_read(db: &DatabaseConnection, id: i32) -> Result<contact_message::Model, ServiceError> {
    let found = get_message(db, id).await?;
    if found.is_read {
        return Ok(found);
    }
    let mut am: contact_message::ActiveModel = found.into();
    am.is_read = Set(true);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(db_err)
}

pub async fn delete_message(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<contact_message::Entity, _>(db, id, "contact message").await
}
