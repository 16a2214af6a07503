use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{tour, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tour_program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tour_id: i32,
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub activities: Json,
    pub meals: Json,
    pub accommodation: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Tour,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Tour => Entity::belongs_to(tour::Entity).from(Column::TourId).to(tour::Column::Id).into(),
        }
    }
}

impl Related<tour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One itinerary day. `tour_id` is ignored when the day is part of a
/// whole-itinerary replacement.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewTourProgram {
    pub tour_id: Option<i32>,
    pub day_number: Option<i32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "validate::list_field")]
    pub meals: Vec<String>,
    pub accommodation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TourProgramPatch {
    pub day_number: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub activities: Option<Vec<String>>,
    #[serde(default, deserialize_with = "validate::opt_list_field")]
    pub meals: Option<Vec<String>>,
    pub accommodation: Option<String>,
}

fn day(value: Option<i32>) -> Result<i32, ModelError> {
    let v = value.ok_or_else(|| ModelError::Validation("day_number is required".into()))?;
    validate::at_least_one("day_number", v)
}

/// Rejects a replacement itinerary that repeats a day number.
pub fn check_unique_days(days: &[NewTourProgram]) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for d in days {
        let n = day(d.day_number)?;
        if !seen.insert(n) {
            return Err(ModelError::Validation(format!("duplicate day_number {n}")));
        }
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, tour_id: i32, input: NewTourProgram) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        tour_id: Set(tour_id),
        day_number: Set(day(input.day_number)?),
        title: Set(validate::required("title", &input.title)?),
        description: Set(validate::required("description", &input.description)?),
        activities: Set(validate::string_list(input.activities)),
        meals: Set(validate::string_list(input.meals)),
        accommodation: Set(validate::optional(input.accommodation)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

impl TourProgramPatch {
    pub fn apply(self, am: &mut ActiveModel) -> Result<(), ModelError> {
        if self.day_number.is_some() {
            am.day_number = Set(day(self.day_number)?);
        }
        if let Some(v) = self.title {
            am.title = Set(validate::required("title", &v)?);
        }
        if let Some(v) = self.description {
            am.description = Set(validate::required("description", &v)?);
        }
        if let Some(v) = self.activities {
            am.activities = Set(validate::string_list(v));
        }
        if let Some(v) = self.meals {
            am.meals = Set(validate::string_list(v));
        }
        if self.accommodation.is_some() {
            am.accommodation = Set(validate::optional(self.accommodation));
        }
        am.updated_at = Set(Utc::now().into());
        Ok(())
    }
}
