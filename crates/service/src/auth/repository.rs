use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::domain::{AdminUser, Credentials, NewUserRecord, Session};
use super::errors::AuthError;

/// Persistence for admin users and their sessions.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<AdminUser>, AuthError>;
    async fn find_user(&self, id: i32) -> Result<Option<AdminUser>, AuthError>;
    async fn list_users(&self) -> Result<Vec<AdminUser>, AuthError>;
    /// Fails with `AuthError::Conflict` when the username is taken.
    async fn create_user(&self, record: NewUserRecord) -> Result<AdminUser, AuthError>;
    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError>;
    async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), AuthError>;
    async fn record_login(&self, user_id: i32, at: DateTime<Utc>) -> Result<(), AuthError>;

    async fn create_session(&self, session: Session) -> Result<Session, AuthError>;
    async fn find_session(&self, token: &str) -> Result<Option<Session>, AuthError>;
    /// Returns whether a session with that token existed.
    async fn delete_session(&self, token: &str) -> Result<bool, AuthError>;
    async fn delete_user_sessions(&self, user_id: i32) -> Result<u64, AuthError>;
    /// Removes every session with `expires_at <= now`.
    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AuthError>;
}

/// Process-local repository for tests, doc examples and single-node dev runs.
pub mod memory {
    use super::*;
    use dashmap::{mapref::entry::Entry, DashMap};
    use std::sync::atomic::{AtomicI32, Ordering};

    struct StoredUser {
        user: AdminUser,
        password_hash: String,
    }

    #[derive(Default)]
    pub struct InMemoryAdminRepository {
        next_id: AtomicI32,
        users: DashMap<i32, StoredUser>,
        usernames: DashMap<String, i32>,
        sessions: DashMap<String, Session>,
    }

    impl InMemoryAdminRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn session_count(&self) -> usize {
            self.sessions.len()
        }
    }

    #[async_trait]
    impl AdminRepository for InMemoryAdminRepository {
        async fn find_user_by_username(&self, username: &str) -> Result<Option<AdminUser>, AuthError> {
            let Some(id) = self.usernames.get(username).map(|r| *r) else { return Ok(None) };
            Ok(self.users.get(&id).map(|u| u.user.clone()))
        }

        async fn find_user(&self, id: i32) -> Result<Option<AdminUser>, AuthError> {
            Ok(self.users.get(&id).map(|u| u.user.clone()))
        }

        async fn list_users(&self) -> Result<Vec<AdminUser>, AuthError> {
            let mut all: Vec<AdminUser> = self.users.iter().map(|u| u.user.clone()).collect();
            all.sort_by_key(|u| u.id);
            Ok(all)
        }

        async fn create_user(&self, record: NewUserRecord) -> Result<AdminUser, AuthError> {
            let id = match self.usernames.entry(record.username.clone()) {
                Entry::Occupied(_) => return Err(AuthError::Conflict),
                Entry::Vacant(slot) => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                    slot.insert(id);
                    id
                }
            };
            let user = AdminUser {
                id,
                username: record.username,
                email: record.email,
                full_name: record.full_name,
                role: record.role,
                is_active: true,
                last_login_at: None,
            };
            self.users.insert(id, StoredUser { user: user.clone(), password_hash: record.password_hash });
            Ok(user)
        }

        async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
            Ok(self
                .users
                .get(&user_id)
                .map(|u| Credentials { user_id, password_hash: u.password_hash.clone() }))
        }

        async fn update_password(&self, user_id: i32, password_hash: String) -> Result<(), AuthError> {
            let mut entry = self.users.get_mut(&user_id).ok_or(AuthError::NotFound)?;
            entry.password_hash = password_hash;
            Ok(())
        }

        async fn record_login(&self, user_id: i32, at: DateTime<Utc>) -> Result<(), AuthError> {
            if let Some(mut entry) = self.users.get_mut(&user_id) {
                entry.user.last_login_at = Some(at);
            }
            Ok(())
        }

        async fn create_session(&self, session: Session) -> Result<Session, AuthError> {
            match self.sessions.entry(session.token.clone()) {
                Entry::Occupied(_) => Err(AuthError::TokenError("token collision".into())),
                Entry::Vacant(slot) => {
                    slot.insert(session.clone());
                    Ok(session)
                }
            }
        }

        async fn find_session(&self, token: &str) -> Result<Option<Session>, AuthError> {
            Ok(self.sessions.get(token).map(|s| s.clone()))
        }

        async fn delete_session(&self, token: &str) -> Result<bool, AuthError> {
            Ok(self.sessions.remove(token).is_some())
        }

        async fn delete_user_sessions(&self, user_id: i32) -> Result<u64, AuthError> {
            let before = self.sessions.len();
            self.sessions.retain(|_, s| s.user_id != user_id);
            Ok(before.saturating_sub(self.sessions.len()) as u64)
        }

        async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AuthError> {
            let before = self.sessions.len();
            self.sessions.retain(|_, s| !s.is_expired(now));
            Ok(before.saturating_sub(self.sessions.len()) as u64)
        }
    }
}
