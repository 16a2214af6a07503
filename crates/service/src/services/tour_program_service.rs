use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use tracing::info;

use models::tour_program::{self, NewTourProgram, TourProgramPatch};
use models::tour;

use super::{delete_or_404, find_or_404};
use crate::errors::{db_err, ServiceError};

/// Day programs, optionally for one tour, ordered by tour then day.
pub async fn list_programs(db: &DatabaseConnection, tour_id: Option<i32>) -> Result<Vec<tour_program::Model>, ServiceError> {
    let mut q = tour_program::Entity::find();
    if let Some(id) = tour_id {
        q = q.filter(tour_program::Column::TourId.eq(id));
    }
    q.order_by_asc(tour_program::Column::TourId)
        .order_by_asc(tour_program::Column::DayNumber)
        .all(db)
        .await
        .map_err(db_err)
}

/// Itinerary of an existing tour; unknown tour is `NotFound`.
pub async fn programs_for_tour(db: &DatabaseConnection, tour_id: i32) -> Result<Vec<tour_program::Model>, ServiceError> {
    find_or_404::<tour::Entity, _>(db, tour_id, "tour").await?;
    list_programs(db, Some(tour_id)).await
}

pub async fn get_program(db: &DatabaseConnection, id: i32) -> Result<tour_program::Model, ServiceError> {
    find_or_404::<tour_program::Entity, _>(db, id, "tour program").await
}

pub async fn create_program(db: &DatabaseConnection, input: NewTourProgram) -> Result<tour_program::Model, ServiceError> {
    let tour_id = input.tour_id.ok_or_else(|| ServiceError::Validation("tour_id is required".into()))?;
    find_or_404::<tour::Entity, _>(db, tour_id, "tour").await?;
    Ok(tour_program::create(db, tour_id, input).await?)
}

pub async fn update_program(db: &DatabaseConnection, id: i32, patch: TourProgramPatch) -> Result<tour_program::Model, ServiceError> {
    let mut am: tour_program::ActiveModel = get_program(db, id).await?.into();
    patch.apply(&mut am)?;
    am.update(db).await.map_err(db_err)
}

pub async fn delete_program(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    delete_or_404::<tour_program::Entity, _>(db, id, "tour program").await
}

/// Day-programs step: drop the whole itinerary and insert `days` in one
/// transaction. Day numbers must be unique and >= 1. Returns the new days
/// ordered by day number.
pub async fn replace_programs(db: &DatabaseConnection, tour_id: i32, days: Vec<NewTourProgram>) -> Result<Vec<tour_program::Model>, ServiceError> {
    tour_program::check_unique_days(&days)?;
    let txn = db.begin().await.map_err(db_err)?;
    find_or_404::<tour::Entity, _>(&txn, tour_id, "tour").await?;
    tour_program::Entity::delete_many()
        .filter(tour_program::Column::TourId.eq(tour_id))
        .exec(&txn)
        .await
        .map_err(db_err)?;
    let mut created = Vec::with_capacity(days.len());
    for day in days {
        // dropping `txn` on error rolls back
        created.push(tour_program::create(&txn, tour_id, day).await?);
    }
    txn.commit().await.map_err(db_err)?;
    created.sort_by_key(|d| d.day_number);
    info!(tour_id, days = created.len(), "tour_programs_replaced");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tour_service::{create_tour, tests::new_tour};
    use crate::test_support::get_db;

    fn day(n: i32, title: &str) -> NewTourProgram {
        NewTourProgram { day_number: Some(n), title: title.into(), description: "…".into(), ..Default::default() }
    }

    #[tokio::test]
    async fn replace_orders_days_and_drops_old_ones() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = create_tour(&db, new_tour("Ngorongoro", "safari")).await?;
        replace_programs(&db, t.id, vec![day(1, "old")]).await?;

        let days = replace_programs(&db, t.id, vec![day(3, "Crater"), day(1, "Arrival"), day(2, "Lake")]).await?;
        let order: Vec<i32> = days.iter().map(|d| d.day_number).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(days[0].title, "Arrival");

        let stored = programs_for_tour(&db, t.id).await?;
        assert_eq!(stored.len(), 3);
        assert!(stored.iter().all(|d| d.title != "old"));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_days_rejected_and_itinerary_untouched() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let t = create_tour(&db, new_tour("Usambara", "trekking")).await?;
        replace_programs(&db, t.id, vec![day(1, "Keep")]).await?;

        let dup = replace_programs(&db, t.id, vec![day(1, "A"), day(1, "B")]).await;
        assert!(matches!(dup, Err(ServiceError::Model(_))));
        let zero = replace_programs(&db, t.id, vec![day(0, "A")]).await;
        assert!(zero.is_err());
        let blank = replace_programs(&db, t.id, vec![day(1, "A"), day(2, "  ")]).await;
        assert!(blank.is_err());

        let stored = programs_for_tour(&db, t.id).await?;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Keep");
        Ok(())
    }

    #[tokio::test]
    async fn single_program_crud_checks_tour() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let missing = create_program(&db, NewTourProgram { tour_id: Some(42), ..day(1, "x") }).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        assert!(matches!(programs_for_tour(&db, 42).await, Err(ServiceError::NotFound(_))));

        let t = create_tour(&db, new_tour("Pemba", "beach")).await?;
        let p = create_program(&db, NewTourProgram { tour_id: Some(t.id), ..day(1, "Dive") }).await?;
        let p = update_program(&db, p.id, TourProgramPatch { accommodation: Some("Lodge".into()), ..Default::default() }).await?;
        assert_eq!(p.accommodation.as_deref(), Some("Lodge"));
        assert_eq!(list_programs(&db, Some(t.id)).await?.len(), 1);
        assert_eq!(list_programs(&db, None).await?.len(), 1);
        delete_program(&db, p.id).await?;
        assert!(list_programs(&db, Some(t.id)).await?.is_empty());
        Ok(())
    }
}
