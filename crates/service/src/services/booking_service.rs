use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument};

use models::booking::{self, NewBooking};
use models::tour;

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

/// Public booking intake. When the booking names a tour, the tour must exist
/// and be active; the total is that tour's price times the party size.
#[instrument(skip_all, fields(tour_id = ?input.tour_id))]
pub async fn create_booking(db: &DatabaseConnection, input: NewBooking) -> Result<booking::Model, ServiceError> {
    let total = match input.tour_id {
        Some(tour_id) => {
            let t = find_or_404::<tour::Entity, _>(db, tour_id, "tour").await?;
            if !t.is_active {
                return Err(ServiceError::Validation("tour is not bookable".into()));
            }
            Some(t.price * f64::from(input.number_of_people.max(1)))
        }
        None => None,
    };
    let created = booking::create(db, input, total).await?;
    common::metrics::BOOKINGS_CREATED_TOTAL.inc();
    info!(booking_id = created.id, tour_id = ?created.tour_id, people = created.number_of_people, "booking_created");
    Ok(created)
}

/// Newest first, optionally only one status.
pub async fn list_bookings(db: &DatabaseConnection, status: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
    let mut q = booking::Entity::find();
    if let Some(s) = status.map(str::trim).filter(|s| !s.is_empty()) {
        q = q.filter(booking::Column::Status.eq(booking::status(s)?));
    }
    q.order_by_desc(booking::Column::CreatedAt)
        .order_by_desc(booking::Column::Id)
        .all(db)
        .await
        .map_err(db_err)
}

pub async fn get_booking(db: &DatabaseConnection, id: i32) -> Result<booking::Model, ServiceError> {
    find_or_404::<booking::Entity, _>(db, id, "booking").await
}

#[instrument(skip(db))]
pub async fn update_booking_status(db: &DatabaseConnection, id: i32, status: &str) -> Result<booking::Model, ServiceError> {
    let status = booking::status(status)?;
    let mut am: booking::ActiveModel = get_booking(db, id).await?.into();
    am.status = Set(status);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(db_err)?;
    info!(booking_id = id, status = %updated.status, "booking_status_changed");
    Ok(updated)
}

pub async fn delete_booking(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<booking::Entity, _>(db, id, "booking").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tour_service::{create_tour, tests::new_tour};
    use crate::test_support::get_db;
    use serde_json::json;

    fn request(tour_id: Option<i32>, people: i32) -> NewBooking {
        serde_json::from_value(json!({
            "tour_id": tour_id,
            "customer_name": "Amani",
            "email": "amani@example.com",
            "number_of_people": people,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn total_is_price_times_people() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = create_tour(&db, new_tour("Selous", "safari")).await?;
        let b = create_booking(&db, request(Some(t.id), 3)).await?;
        assert_eq!(b.total_price, Some(1500.0));
        assert_eq!(b.status, "pending");

        let general = create_booking(&db, request(None, 2)).await?;
        assert_eq!(general.total_price, None);

        assert!(matches!(create_booking(&db, request(Some(999), 1)).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn status_changes_and_filter() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_booking(&db, request(None, 1)).await?;
        create_booking(&db, request(None, 1)).await?;

        let confirmed = update_booking_status(&db, a.id, "confirmed").await?;
        assert_eq!(confirmed.status, "confirmed");
        assert!(matches!(update_booking_status(&db, a.id, "teleported").await, Err(ServiceError::Model(_))));

        assert_eq!(list_bookings(&db, Some("confirmed")).await?.len(), 1);
        assert_eq!(list_bookings(&db, Some("pending")).await?.len(), 1);
        assert_eq!(list_bookings(&db, None).await?.len(), 2);

        delete_booking(&db, a.id).await?;
        assert!(matches!(get_booking(&db, a.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
