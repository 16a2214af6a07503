use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::{admin_session, admin_user};

use crate::auth::domain::{AdminUser, Credentials, NewUserRecord, Session};
use crate::auth::errors::AuthError;
use crate::auth::repository::AdminRepository;

/// Authoritative repository over the `admin_user` / `admin_session` tables.
pub struct SeaOrmAdminRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAdminRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn repo_err(e: sea_orm::DbErr) -> AuthError {
    AuthError::Repository(e.to_string())
}

fn to_session(m: admin_session::Model) -> Session {
    Session { token: m.token, user_id: m.user_id, expires_at: m.expires_at.with_timezone(&Utc) }
}

#[async_trait::async_trait]
impl AdminRepository for SeaOrmAdminRepository {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<AdminUser>, AuthError> {
        let res = admin_user::Entity::find()
            .filter(admin_user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(res.map(AdminUser::from))
    }

    async fn find_user(&self, id: i32) -> Result<Option<AdminUser>, AuthError> {
        let res = admin_user::Entity::find_by_id(id).one(&self.db).await.map_err(repo_err)?;
        Ok(res.map(AdminUser::from))
    }

    async fn list_users(&self) -> Result<Vec<AdminUser>, AuthError> {
        let rows = admin_user::Entity::find()
            .order_by_asc(admin_user::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(rows.into_iter().map(AdminUser::from).collect())
    }

    async fn create_user(&self, record: NewUserRecord) -> Result<AdminUser, AuthError> {
        let created = admin_user::create(&self.db, &record.username, record.password_hash, record.email, record.full_name, &record.role).await?;
        Ok(created.into())
    }

    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
        let res = admin_user::Entity::find_by_id(user_id).one(&self.db).await.map_err(repo_err)?;
        Ok(res.map(|u| Credentials { user_id: u.id, password_hash: u.password_hash }))
    }

    async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), AuthError> {
        let mut am: admin_user::ActiveModel = admin_user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(repo_err)?
            .ok_or(AuthError::NotFound)?
            .into();
        am.password_hash = Set(password_hash);
        am.updated_at = Set(Utc::now().into());
        am.update(&self.db).await.map_err(repo_err)?;
        Ok(())
    }

    async fn record_login(&self, user_id: i32, at: DateTime<Utc>) -> Result<(), AuthError> {
        let am = admin_user::ActiveModel {
            id: Set(user_id),
            last_login_at: Set(Some(at.into())),
            ..Default::default()
        };
        am.update(&self.db).await.map_err(repo_err)?;
        Ok(())
    }

    async fn create_session(&self, session: Session) -> Result<Session, AuthError> {
        let created = admin_session::create(&self.db, &session.token, session.user_id, session.expires_at.into())
            .await
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(to_session(created))
    }

    async fn find_session(&self, token: &str) -> Result<Option<Session>, AuthError> {
        let res = admin_session::Entity::find()
            .filter(admin_session::Column::Token.eq(token))
            .one(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(res.map(to_session))
    }

    async fn delete_session(&self, token: &str) -> Result<bool, AuthError> {
        let res = admin_session::Entity::delete_many()
            .filter(admin_session::Column::Token.eq(token))
            .exec(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_user_sessions(&self, user_id: i32) -> Result<u64, AuthError> {
        let res = admin_session::Entity::delete_many()
            .filter(admin_session::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(res.rows_affected)
    }

    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
        let cutoff: sea_orm::prelude::DateTimeWithTimeZone = now.into();
        let res = admin_session::Entity::delete_many()
            .filter(admin_session::Column::ExpiresAt.lte(cutoff))
            .exec(&self.db)
            .await
            .map_err(repo_err)?;
        Ok(res.rows_affected)
    }
}
