use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewTeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

pub async fn create(db: &DatabaseConnection, input: NewTeamMember) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(validate::required("name", &input.name)?),
        position: Set(validate::required("position", &input.position)?),
        bio: Set(validate::optional(input.bio)),
        image_url: Set(validate::optional(input.image_url)),
        email: Set(validate::optional_email("email", input.email)?),
        sort_order: Set(input.sort_order),
        is_active: Set(input.is_active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl TeamMemberPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if let Some(v) = self.name {
            am.name = Set(validate::required("name", &v)?);
        }
        if let Some(v) = self.position {
            am.position = Set(validate::required("position", &v)?);
        }
        if self.bio.is_some() {
            am.bio = Set(validate::optional(self.bio));
        }
        if self.image_url.is_some() {
            am.image_url = Set(validate::optional(self.image_url));
        }
        if self.email.is_some() {
            am.email = Set(validate::optional_email("email", self.email)?);
        }
        if let Some(v) = self.sort_order {
            am.sort_order = Set(v);
        }
        if let Some(v) = self.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
