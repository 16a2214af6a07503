use crate::db::connect_in_memory;
use crate::errors::ModelError;
use crate::validate::read_list;
use crate::{admin_user, blog_post, booking, contact_message, page_content, project, team_member, tour, tour_category};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait};
use serde_json::json;

fn sample_tour(title: &str) -> tour::NewTour {
    serde_json::from_value(json!({
        "title": title,
        "category": "safari",
        "description": "Five days across the plains",
        "price": 1250.0,
        "duration": "5 days",
        "highlights": ["Big five", "Sunrise balloon"],
        "included": "Park fees\nMeals",
    }))
    .expect("valid tour payload")
}

#[tokio::test]
async fn test_tour_create_round_trips_fields() -> Result<()> {
    let db = connect_in_memory().await?;
    let t = tour::create(&db, sample_tour("Serengeti Migration")).await?;

    assert_eq!(t.slug, "serengeti-migration");
    assert_eq!(t.category, "safari");
    assert_eq!(t.price, 1250.0);
    assert!(t.is_active);
    assert!(!t.is_featured);
    assert_eq!(read_list(&t.highlights), vec!["Big five", "Sunrise balloon"]);
    assert_eq!(read_list(&t.included), vec!["Park fees", "Meals"]);
    assert!(read_list(&t.gallery).is_empty());

    let found = tour::Entity::find_by_id(t.id).one(&db).await?.expect("tour exists");
    assert_eq!(found.slug, t.slug);
    assert_eq!(found.highlights, t.highlights);
    Ok(())
}

#[tokio::test]
async fn test_tour_requires_title_and_price() -> Result<()> {
    let db = connect_in_memory().await?;

    let mut missing_title = sample_tour("x");
    missing_title.title = "   ".into();
    assert!(matches!(tour::create(&db, missing_title).await, Err(ModelError::Validation(_))));

    let mut missing_price = sample_tour("Priceless");
    missing_price.price = None;
    assert!(matches!(tour::create(&db, missing_price).await, Err(ModelError::Validation(_))));

    let mut negative = sample_tour("Negative");
    negative.price = Some(-1.0);
    assert!(matches!(tour::create(&db, negative).await, Err(ModelError::Validation(_))));

    let mut bad_rating = sample_tour("Rated");
    bad_rating.rating = Some(7.0);
    assert!(matches!(tour::create(&db, bad_rating).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_slug_is_conflict() -> Result<()> {
    let db = connect_in_memory().await?;
    tour::create(&db, sample_tour("Zanzibar Beach")).await?;
    let again = tour::create(&db, sample_tour("Zanzibar Beach")).await;
    assert!(matches!(again, Err(ModelError::Conflict(_))), "got {again:?}");
    Ok(())
}

#[tokio::test]
async fn test_tour_patch_and_media() -> Result<()> {
    let db = connect_in_memory().await?;
    let t = tour::create(&db, sample_tour("Ngorongoro Crater")).await?;

    let patch: tour::TourPatch = serde_json::from_value(json!({ "price": 900.0, "excluded": ["Flights"], "is_featured": true }))?;
    let mut am: tour::ActiveModel = t.clone().into();
    patch.apply(&mut am)?;
    let updated = am.update(&db).await?;
    assert_eq!(updated.price, 900.0);
    assert!(updated.is_featured);
    assert_eq!(read_list(&updated.excluded), vec!["Flights"]);
    assert_eq!(updated.title, t.title);

    let media: tour::TourMedia = serde_json::from_value(json!({ "image_url": "/uploads/tours/a.jpg", "gallery": ["/uploads/tours/b.jpg"] }))?;
    let mut am: tour::ActiveModel = updated.into();
    media.apply(&mut am);
    let with_media = am.update(&db).await?;
    assert_eq!(with_media.image_url.as_deref(), Some("/uploads/tours/a.jpg"));
    assert_eq!(read_list(&with_media.gallery), vec!["/uploads/tours/b.jpg"]);
    Ok(())
}

#[tokio::test]
async fn test_category_slug_derived_and_validated() -> Result<()> {
    let db = connect_in_memory().await?;
    let c = tour_category::create(&db, tour_category::NewTourCategory { name: "Mountain Treks".into(), sort_order: 2, ..Default::default() }).await?;
    assert_eq!(c.slug, "mountain-treks");
    assert_eq!(c.sort_order, 2);

    let bad = tour_category::create(
        &db,
        tour_category::NewTourCategory { name: "Other".into(), slug: Some("Not A Slug".into()), ..Default::default() },
    )
    .await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_booking_defaults_to_pending() -> Result<()> {
    let db = connect_in_memory().await?;
    let input: booking::NewBooking = serde_json::from_value(json!({
        "customer_name": "Asha",
        "email": "asha@example.com",
        "travel_date": "2025-07-01",
        "number_of_people": 3,
    }))?;
    let b = booking::create(&db, input, None).await?;
    assert_eq!(b.status, "pending");
    assert_eq!(b.number_of_people, 3);
    assert_eq!(b.travel_date.map(|d| d.to_string()).as_deref(), Some("2025-07-01"));

    let zero: booking::NewBooking = serde_json::from_value(json!({ "customer_name": "A", "email": "a@b.co", "number_of_people": 0 }))?;
    assert!(matches!(booking::create(&db, zero, None).await, Err(ModelError::Validation(_))));

    assert_eq!(booking::status("Confirmed")?, "confirmed");
    assert!(booking::status("lost").is_err());
    Ok(())
}

#[tokio::test]
async fn test_contact_message_requires_email() -> Result<()> {
    let db = connect_in_memory().await?;
    let ok = contact_message::create(
        &db,
        contact_message::NewContactMessage { name: "Ben".into(), email: "ben@example.org".into(), message: "Hello".into(), ..Default::default() },
    )
    .await?;
    assert!(!ok.is_read);

    let bad = contact_message::create(
        &db,
        contact_message::NewContactMessage { name: "Ben".into(), email: "nope".into(), message: "Hello".into(), ..Default::default() },
    )
    .await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_blog_publish_stamps_once() -> Result<()> {
    let db = connect_in_memory().await?;
    let draft = blog_post::create(
        &db,
        blog_post::NewBlogPost { title: "Packing List".into(), content: "Boots".into(), tags: vec!["gear".into()], ..Default::default() },
    )
    .await?;
    assert!(draft.published_at.is_none());

    let mut am: blog_post::ActiveModel = draft.into();
    blog_post::BlogPostPatch { is_published: Some(true), ..Default::default() }.apply(&mut am)?;
    let published = am.update(&db).await?;
    let stamp = published.published_at.expect("stamped on publish");

    let mut am: blog_post::ActiveModel = published.into();
    blog_post::BlogPostPatch { is_published: Some(true), excerpt: Some("Short".into()), ..Default::default() }.apply(&mut am)?;
    let again = am.update(&db).await?;
    assert_eq!(again.published_at, Some(stamp));
    Ok(())
}

#[tokio::test]
async fn test_project_status_is_checked() -> Result<()> {
    let db = connect_in_memory().await?;
    let p = project::create(&db, project::NewProject { title: "Water well".into(), description: "Village well".into(), ..Default::default() }).await?;
    assert_eq!(p.status, "planned");

    let bad = project::create(
        &db,
        project::NewProject { title: "X".into(), description: "Y".into(), status: Some("someday".into()), ..Default::default() },
    )
    .await;
    assert!(matches!(bad, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_team_member_optional_email_validated() -> Result<()> {
    let db = connect_in_memory().await?;
    let input: team_member::NewTeamMember = serde_json::from_value(json!({ "name": "Neema", "position": "Guide", "email": "" }))?;
    let m = team_member::create(&db, input).await?;
    assert!(m.email.is_none());
    assert!(m.is_active);

    let input: team_member::NewTeamMember = serde_json::from_value(json!({ "name": "Neema", "position": "Guide", "email": "bad" }))?;
    assert!(team_member::create(&db, input).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_page_section_unique_per_page() -> Result<()> {
    let db = connect_in_memory().await?;
    let input = page_content::PageSectionInput { title: Some("Hours".into()), content: json!({"weekdays": "9-17"}), sort_order: None };
    page_content::create(&db, "contact", "hours", input.clone()).await?;
    assert!(matches!(page_content::create(&db, "contact", "hours", input.clone()).await, Err(ModelError::Conflict(_))));
    assert!(matches!(page_content::create(&db, "pricing", "hours", input).await, Err(ModelError::Validation(_))));
    Ok(())
}

#[tokio::test]
async fn test_admin_user_hides_hash_and_checks_role() -> Result<()> {
    let db = connect_in_memory().await?;
    let u = admin_user::create(&db, "root", "$argon2id$stub".into(), None, None, "admin").await?;
    let body = serde_json::to_value(&u)?;
    assert!(body.get("password_hash").is_none());
    assert_eq!(body["role"], "admin");

    assert!(matches!(admin_user::create(&db, "x", "h".into(), None, None, "owner").await, Err(ModelError::Validation(_))));
    assert!(matches!(admin_user::create(&db, "root", "h".into(), None, None, "editor").await, Err(ModelError::Conflict(_))));
    Ok(())
}
