use chrono::{NaiveDate, Utc};
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{tour, validate};

pub const STATUS_PENDING: &str = "pending";
pub const STATUSES: [&str; 4] = [STATUS_PENDING, "confirmed", "cancelled", "completed"];

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tour_id: Option<i32>,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub travel_date: Option<Date>,
    pub number_of_people: i32,
    pub special_requests: Option<String>,
    pub status: String,
    pub total_price: Option<f64>,
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

fn one_person() -> i32 {
    1
}

/// Public booking request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewBooking {
    pub tour_id: Option<i32>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub travel_date: Option<NaiveDate>,
    #[serde(default = "one_person")]
    pub number_of_people: i32,
    pub special_requests: Option<String>,
}

pub fn status(value: &str) -> Result<String, ModelError> {
    validate::one_of("status", value, &STATUSES)
}

/// Inserts a pending booking. `total_price` is worked out by the caller from
/// the tour price, since the tour may be gone or absent.
pub async fn create(db: &DatabaseConnection, input: NewBooking, total_price: Option<f64>) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        tour_id: Set(input.tour_id),
        customer_name: Set(validate::required("customer_name", &input.customer_name)?),
        email: Set(validate::email("email", &input.email)?),
        phone: Set(validate::optional(input.phone)),
        travel_date: Set(input.travel_date),
        number_of_people: Set(validate::at_least_one("number_of_people", input.number_of_people)?),
        special_requests: Set(validate::optional(input.special_requests)),
        status: Set(STATUS_PENDING.to_string()),
        total_price: Set(total_price),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
