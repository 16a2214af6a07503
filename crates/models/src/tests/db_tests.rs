use crate::db::{connect_in_memory, ping};
use anyhow::Result;
use sea_orm::{ConnectionTrait, Statement};

#[tokio::test]
async fn test_in_memory_database_is_migrated() -> Result<()> {
    let db = connect_in_memory().await?;
    assert!(ping(&db).await);

    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_string(
            backend,
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name IN ('tour', 'tour_program', 'booking', 'admin_user', 'admin_session', 'page_content')".to_string(),
        ))
        .await?
        .expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 6);
    Ok(())
}

#[tokio::test]
async fn test_each_in_memory_database_is_isolated() -> Result<()> {
    let a = connect_in_memory().await?;
    let b = connect_in_memory().await?;
    crate::tour_category::create(&a, crate::tour_category::NewTourCategory { name: "Safari".into(), ..Default::default() }).await?;

    use sea_orm::EntityTrait;
    assert_eq!(crate::tour_category::Entity::find().all(&a).await?.len(), 1);
    assert!(crate::tour_category::Entity::find().all(&b).await?.is_empty());
    Ok(())
}
