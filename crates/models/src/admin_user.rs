use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
pub const ROLES: [&str; 2] = [ROLE_ADMIN, ROLE_EDITOR];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    AdminSession,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AdminSession => Entity::has_many(super::admin_session::Entity).into(),
        }
    }
}

impl Related<super::admin_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn role(value: &str) -> Result<String, ModelError> {
    validate::one_of("role", value, &ROLES)
}

pub fn username(value: &str) -> Result<String, ModelError> {
    let v = validate::required("username", value)?;
    if v.len() > 64 || !v.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')) {
        return Err(ModelError::Validation("username may only contain letters, digits, '.', '_' and '-'".into()));
    }
    Ok(v)
}

/// Inserts a user whose password has already been hashed.
pub async fn create(
    db: &DatabaseConnection,
    username_value: &str,
    password_hash: String,
    email: Option<String>,
    full_name: Option<String>,
    role_value: &str,
) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        username: Set(username(username_value)?),
        password_hash: Set(password_hash),
        email: Set(validate::optional_email("email", email)?),
        full_name: Set(validate::optional(full_name)),
        role: Set(role(role_value)?),
        is_active: Set(true),
        last_login_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
