use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use base64::Engine;
use chrono::{Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use tracing::{debug, info, instrument, warn};

use super::domain::{AdminUser, AuthSession, ChangePasswordInput, LoginInput, NewAdminUser, NewUserRecord, Session, ROLE_ADMIN, ROLE_EDITOR};
use super::errors::AuthError;
use super::repository::AdminRepository;

const MIN_PASSWORD_LEN: usize = 8;

/// Session service configuration
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl: Duration::hours(24) }
    }
}

impl SessionConfig {
    /// Clamped to `1..=MAX_SESSION_TTL_HOURS`.
    pub fn from_hours(hours: i64) -> Self {
        Self { ttl: Duration::hours(hours.clamp(1, configs::MAX_SESSION_TTL_HOURS)) }
    }
}

/// Admin login/session service independent of web framework.
///
/// Works over any [`AdminRepository`], including `dyn AdminRepository`.
pub struct AdminSessionService<R: AdminRepository + ?Sized> {
    repo: Arc<R>,
    cfg: SessionConfig,
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// 32 random bytes, base64url without padding (43 chars).
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn check_password_strength(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
    }
    Ok(())
}

impl<R: AdminRepository + ?Sized> AdminSessionService<R> {
    pub fn new(repo: Arc<R>, cfg: SessionConfig) -> Self {
        Self { repo, cfg }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Check username/password and open a session.
    ///
    /// Unknown user, inactive user and wrong password all surface as the
    /// same `Unauthorized` error.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AdminSessionService, InMemoryAdminRepository, SessionConfig};
    /// use service::auth::domain::{LoginInput, NewAdminUser};
    /// use std::sync::Arc;
    /// let svc = AdminSessionService::new(Arc::new(InMemoryAdminRepository::new()), SessionConfig::default());
    /// tokio_test::block_on(svc.create_user(NewAdminUser { username: "root".into(), password: "Passw0rd!".into(), ..Default::default() })).unwrap();
    /// let session = tokio_test::block_on(svc.authenticate(LoginInput { username: "root".into(), password: "Passw0rd!".into() })).unwrap();
    /// assert_eq!(session.user.username, "root");
    /// assert_eq!(session.token.len(), 43);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn authenticate(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation("username and password are required".into()));
        }
        let user = self.repo.find_user_by_username(username).await?.ok_or(AuthError::Unauthorized)?;
        if !user.is_active {
            debug!(user_id = user.id, "login for inactive user");
            return Err(AuthError::Unauthorized);
        }
        let cred = self.repo.get_credentials(user.id).await?.ok_or(AuthError::Unauthorized)?;
        if !verify_password(&input.password, &cred.password_hash)? {
            return Err(AuthError::Unauthorized);
        }

        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(self.cfg.ttl)
            .ok_or_else(|| AuthError::TokenError("session expiry out of range".into()))?;
        let session = self
            .repo
            .create_session(Session { token: generate_token(), user_id: user.id, expires_at })
            .await?;
        self.repo.record_login(user.id, now).await?;
        info!(user_id = user.id, expires_at = %session.expires_at, "admin_login");
        Ok(AuthSession {
            token: session.token,
            expires_at: session.expires_at,
            user: AdminUser { last_login_at: Some(now), ..user },
        })
    }

    /// Resolve a bearer token to its user. Expired sessions are deleted on
    /// sight and reported as `None`, as are sessions of inactive users.
    #[instrument(skip_all)]
    pub async fn verify_token(&self, token: &str) -> Result<Option<AdminUser>, AuthError> {
        if token.is_empty() {
            return Ok(None);
        }
        let Some(session) = self.repo.find_session(token).await? else { return Ok(None) };
        if session.is_expired(Utc::now()) {
            self.repo.delete_session(token).await?;
            debug!(user_id = session.user_id, "expired session removed");
            return Ok(None);
        }
        match self.repo.find_user(session.user_id).await? {
            Some(user) if user.is_active => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Revoke a session. Returns whether it existed.
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> Result<bool, AuthError> {
        let existed = self.repo.delete_session(token).await?;
        if existed {
            info!("admin_logout");
        }
        Ok(existed)
    }

    /// Purge every expired session; returns the number removed.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AdminSessionService, InMemoryAdminRepository, SessionConfig};
    /// use std::sync::Arc;
    /// let svc = AdminSessionService::new(Arc::new(InMemoryAdminRepository::new()), SessionConfig::default());
    /// assert_eq!(tokio_test::block_on(svc.cleanup_expired()).unwrap(), 0);
    /// ```
    #[instrument(skip(self))]
    pub async fn cleanup_expired(&self) -> Result<u64, AuthError> {
        let removed = self.repo.delete_expired_sessions(Utc::now()).await?;
        info!(removed, "expired sessions purged");
        Ok(removed)
    }

    /// Create the first admin if that username does not exist yet.
    /// Returns `true` when a user was created.
    #[instrument(skip(self, password))]
    pub async fn ensure_bootstrap_admin(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        if self.repo.find_user_by_username(username).await?.is_some() {
            return Ok(false);
        }
        let input = NewAdminUser {
            username: username.to_string(),
            password: password.to_string(),
            role: Some(ROLE_ADMIN.to_string()),
            ..Default::default()
        };
        match self.create_user(input).await {
            Ok(user) => {
                warn!(user_id = user.id, username = %user.username, "bootstrap admin created; change its password");
                Ok(true)
            }
            // another process got there first
            Err(AuthError::Conflict) => Ok(false),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: NewAdminUser) -> Result<AdminUser, AuthError> {
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(AuthError::Validation("username is required".into()));
        }
        check_password_strength(&input.password)?;
        let role = input.role.unwrap_or_else(|| ROLE_EDITOR.to_string()).trim().to_ascii_lowercase();
        if role != ROLE_ADMIN && role != ROLE_EDITOR {
            return Err(AuthError::Validation("role must be admin or editor".into()));
        }
        if self.repo.find_user_by_username(&username).await?.is_some() {
            return Err(AuthError::Conflict);
        }
        let record = NewUserRecord {
            username,
            password_hash: hash_password(&input.password)?,
            email: input.email,
            full_name: input.full_name,
            role,
        };
        let user = self.repo.create_user(record).await?;
        info!(user_id = user.id, role = %user.role, "admin_user_created");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>, AuthError> {
        self.repo.list_users().await
    }

    /// Verify the current password, store the new hash and revoke every
    /// session of the user (including the caller's).
    #[instrument(skip(self, input))]
    pub async fn change_password(&self, user_id: i32, input: ChangePasswordInput) -> Result<u64, AuthError> {
        check_password_strength(&input.new_password)?;
        let cred = self.repo.get_credentials(user_id).await?.ok_or(AuthError::NotFound)?;
        if !verify_password(&input.current_password, &cred.password_hash)? {
            return Err(AuthError::Unauthorized);
        }
        self.repo.update_password(user_id, hash_password(&input.new_password)?).await?;
        let revoked = self.repo.delete_user_sessions(user_id).await?;
        info!(user_id, revoked, "admin_password_changed");
        Ok(revoked)
    }
}
