mod support;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};

use support::*;

fn tour_body(title: &str, category: &str) -> Value {
    json!({
        "title": title,
        "category": category,
        "description": "Guided days in the bush",
        "price": 450.0,
        "duration": "3 days",
        "highlights": ["Big five", "Sunset drive"],
        "included": "Park fees\nMeals",
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"].as_array().map(|a| a.iter().filter_map(|v| v["id"].as_i64()).collect()).unwrap_or_default()
}

#[tokio::test]
async fn health_reports_database() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let resp = send(&app, "GET", "/api/health", None, None).await?;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["status"], "ok");
    assert_eq!(resp.body["data"]["database"], "up");
    Ok(())
}

#[tokio::test]
async fn tour_create_round_trips_and_validates() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let created = send(&app, "POST", "/api/tours", Some(&token), Some(tour_body("Serengeti Safari", "safari"))).await?;
    assert_eq!(created.status, StatusCode::CREATED);
    let tour = &created.body["data"];
    assert_eq!(tour["title"], "Serengeti Safari");
    assert_eq!(tour["slug"], "serengeti-safari");
    assert_eq!(tour["price"], 450.0);
    assert_eq!(tour["highlights"], json!(["Big five", "Sunset drive"]));
    assert_eq!(tour["included"], json!(["Park fees", "Meals"]));
    assert_eq!(tour["is_active"], true);
    let id = tour["id"].as_i64().unwrap_or_default();

    let fetched = send(&app, "GET", &format!("/api/tours/{id}"), None, None).await?;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["slug"], "serengeti-safari");
    let by_slug = send(&app, "GET", "/api/tours/slug/serengeti-safari", None, None).await?;
    assert_eq!(by_slug.body["data"]["id"], id);

    let dup = send(&app, "POST", "/api/tours", Some(&token), Some(tour_body("Serengeti Safari", "safari"))).await?;
    assert_eq!(dup.status, StatusCode::CONFLICT);

    let missing = send(&app, "POST", "/api/tours", Some(&token), Some(json!({"title": "No price", "category": "x"}))).await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["success"], false);

    let bad_list = send(&app, "POST", "/api/tours", Some(&token), Some(json!({"title": "T", "highlights": [1, 2]}))).await?;
    assert_eq!(bad_list.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_404() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;
    for uri in ["/api/tours/999", "/api/tour-categories/999", "/api/projects/999", "/api/programs/999", "/api/partners/999", "/api/team/999", "/api/blog/999", "/api/tours/slug/nope"] {
        let resp = send(&app, "GET", uri, None, None).await?;
        assert_eq!(resp.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(resp.body["error"], "Not Found");
    }
    for uri in ["/api/bookings/999", "/api/contact/999"] {
        assert_eq!(send(&app, "GET", uri, Some(&token), None).await?.status, StatusCode::NOT_FOUND, "{uri}");
    }
    let del = send(&app, "DELETE", "/api/tours/999", Some(&token), None).await?;
    assert_eq!(del.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn malformed_json_and_bad_paths_use_the_error_envelope() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;
    let req = Request::builder()
        .method("POST")
        .uri("/api/tour-categories")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))?;
    let resp = send_raw(&app, req).await?;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["success"], false);
    assert_eq!(resp.body["error"], "Invalid JSON");

    let bad_id = send(&app, "GET", "/api/tours/abc", None, None).await?;
    assert_eq!(bad_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_id.body["success"], false);
    Ok(())
}

#[tokio::test]
async fn unknown_verb_is_405() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;
    // paths mixing public reads and session-protected writes
    for uri in ["/api/tours", "/api/tours/1", "/api/blog/1", "/api/bookings", "/api/contact", "/api/admin/verify", "/api/admin/users"] {
        let anon = send(&app, "PATCH", uri, None, None).await?;
        assert_eq!(anon.status, StatusCode::METHOD_NOT_ALLOWED, "PATCH {uri}");
        let authed = send(&app, "PATCH", uri, Some(&token), None).await?;
        assert_eq!(authed.status, StatusCode::METHOD_NOT_ALLOWED, "PATCH {uri} with token");
    }

    // known verbs keep their guard
    assert_eq!(send(&app, "PUT", "/api/tours/1", None, Some(json!({}))).await?.status, StatusCode::UNAUTHORIZED);
    assert_eq!(send(&app, "GET", "/api/bookings", None, None).await?.status, StatusCode::UNAUTHORIZED);
    assert_eq!(send(&app, "GET", "/api/tours", None, None).await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn public_tour_list_filters_and_hides_inactive() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let safari = send(&app, "POST", "/api/tours", Some(&token), Some(tour_body("Ngorongoro Crater", "safari"))).await?.body["data"]["id"].as_i64();
    let mut trek = tour_body("Kilimanjaro Machame", "trekking");
    trek["is_featured"] = json!(true);
    let trek = send(&app, "POST", "/api/tours", Some(&token), Some(trek)).await?.body["data"]["id"].as_i64();
    let mut hidden = tour_body("Old Route", "trekking");
    hidden["is_active"] = json!(false);
    let hidden = send(&app, "POST", "/api/tours", Some(&token), Some(hidden)).await?.body["data"]["id"].as_i64();

    let all = send(&app, "GET", "/api/tours", None, None).await?;
    assert_eq!(ids(&all.body).len(), 2);
    assert!(!ids(&all.body).contains(&hidden.unwrap_or_default()));

    let trekking = send(&app, "GET", "/api/tours?category=trekking", None, None).await?;
    assert_eq!(ids(&trekking.body), vec![trek.unwrap_or_default()]);

    let featured = send(&app, "GET", "/api/tours?featured=true", None, None).await?;
    assert_eq!(ids(&featured.body), vec![trek.unwrap_or_default()]);

    let admin_all = send(&app, "GET", "/api/admin/tours", Some(&token), None).await?;
    assert_eq!(ids(&admin_all.body).len(), 3);
    assert!(ids(&admin_all.body).contains(&safari.unwrap_or_default()));
    Ok(())
}

#[tokio::test]
async fn tour_editing_workflow() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;
    let id = send(&app, "POST", "/api/tours", Some(&token), Some(tour_body("Zanzibar Escape", "beach"))).await?.body["data"]["id"]
        .as_i64()
        .unwrap_or_default();

    // 1. basic info
    let basic = send(&app, "PUT", &format!("/api/tours/{id}"), Some(&token), Some(json!({"price": 600.0, "location": "Stone Town"}))).await?;
    assert_eq!(basic.status, StatusCode::OK);
    assert_eq!(basic.body["data"]["price"], 600.0);
    assert_eq!(basic.body["data"]["title"], "Zanzibar Escape");

    // 2. media
    let media = send(
        &app,
        "PUT",
        &format!("/api/tours/{id}/media"),
        Some(&token),
        Some(json!({"image_url": "/uploads/tours/cover.jpg", "gallery": ["/uploads/tours/a.jpg", "/uploads/tours/b.jpg"]})),
    )
    .await?;
    assert_eq!(media.status, StatusCode::OK);
    assert_eq!(media.body["data"]["image_url"], "/uploads/tours/cover.jpg");
    assert_eq!(media.body["data"]["gallery"].as_array().map(Vec::len), Some(2));

    // 3. day programs
    let dup = send(
        &app,
        "PUT",
        &format!("/api/tours/{id}/programs"),
        Some(&token),
        Some(json!([{"day_number": 1, "title": "Arrive"}, {"day_number": 1, "title": "Again"}])),
    )
    .await?;
    assert_eq!(dup.status, StatusCode::BAD_REQUEST);

    let days = send(
        &app,
        "PUT",
        &format!("/api/tours/{id}/programs"),
        Some(&token),
        Some(json!({"programs": [
            {"day_number": 2, "title": "Spice farm", "description": "Tour", "activities": ["Tasting"]},
            {"day_number": 1, "title": "Arrive", "description": "Transfer", "meals": "Dinner"}
        ]})),
    )
    .await?;
    assert_eq!(days.status, StatusCode::OK);
    let numbers: Vec<i64> = days.body["data"].as_array().map(|a| a.iter().filter_map(|d| d["day_number"].as_i64()).collect()).unwrap_or_default();
    assert_eq!(numbers, vec![1, 2]);

    let listed = send(&app, "GET", &format!("/api/tours/{id}/programs"), None, None).await?;
    assert_eq!(listed.body["data"][0]["title"], "Arrive");
    assert_eq!(listed.body["data"][0]["meals"], json!(["Dinner"]));

    let filtered = send(&app, "GET", &format!("/api/tour-programs?tour_id={id}"), None, None).await?;
    assert_eq!(filtered.body["data"].as_array().map(Vec::len), Some(2));

    // deleting the tour takes its days with it
    assert_eq!(send(&app, "DELETE", &format!("/api/tours/{id}"), Some(&token), None).await?.status, StatusCode::OK);
    let after = send(&app, "GET", &format!("/api/tour-programs?tour_id={id}"), None, None).await?;
    assert_eq!(after.body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn category_filters_on_projects_programs_partners() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    for (title, cat) in [("School roof", "education"), ("Well", "water"), ("Library", "education")] {
        let r = send(&app, "POST", "/api/projects", Some(&token), Some(json!({"title": title, "description": "d", "category": cat}))).await?;
        assert_eq!(r.status, StatusCode::CREATED);
        assert_eq!(r.body["data"]["status"], "planned");
    }
    let edu = send(&app, "GET", "/api/projects?category=education", None, None).await?;
    assert_eq!(edu.body["data"].as_array().map(Vec::len), Some(2));

    send(&app, "POST", "/api/programs", Some(&token), Some(json!({"title": "Volunteer", "description": "d", "category": "community"}))).await?;
    send(&app, "POST", "/api/programs", Some(&token), Some(json!({"title": "Hidden", "description": "d", "category": "community", "is_active": false}))).await?;
    let community = send(&app, "GET", "/api/programs?category=community", None, None).await?;
    assert_eq!(community.body["data"].as_array().map(Vec::len), Some(1));
    let admin_view = send(&app, "GET", "/api/admin/programs?category=community", Some(&token), None).await?;
    assert_eq!(admin_view.body["data"].as_array().map(Vec::len), Some(2));

    send(&app, "POST", "/api/partners", Some(&token), Some(json!({"name": "Lodge Co", "category": "hotel"}))).await?;
    send(&app, "POST", "/api/partners", Some(&token), Some(json!({"name": "Air Co", "category": "airline"}))).await?;
    let hotels = send(&app, "GET", "/api/partners?category=hotel", None, None).await?;
    assert_eq!(hotels.body["data"][0]["name"], "Lodge Co");
    assert_eq!(hotels.body["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn team_and_categories_crud() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let member = send(&app, "POST", "/api/team", Some(&token), Some(json!({"name": "Amani", "position": "Lead guide", "sort_order": 2}))).await?;
    assert_eq!(member.status, StatusCode::CREATED);
    let mid = member.body["data"]["id"].as_i64().unwrap_or_default();
    let missing = send(&app, "POST", "/api/team", Some(&token), Some(json!({"name": "No position"}))).await?;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);

    let updated = send(&app, "PUT", &format!("/api/team/{mid}"), Some(&token), Some(json!({"bio": "Ten years on the mountain"}))).await?;
    assert_eq!(updated.body["data"]["bio"], "Ten years on the mountain");
    assert_eq!(send(&app, "DELETE", &format!("/api/team/{mid}"), Some(&token), None).await?.status, StatusCode::OK);
    assert_eq!(send(&app, "GET", &format!("/api/team/{mid}"), None, None).await?.status, StatusCode::NOT_FOUND);

    let cat = send(&app, "POST", "/api/tour-categories", Some(&token), Some(json!({"name": "Cultural Tours"}))).await?;
    assert_eq!(cat.body["data"]["slug"], "cultural-tours");
    let dup = send(&app, "POST", "/api/tour-categories", Some(&token), Some(json!({"name": "Cultural Tours"}))).await?;
    assert_eq!(dup.status, StatusCode::CONFLICT);
    let blank = send(&app, "POST", "/api/tour-categories", Some(&token), Some(json!({"name": "  "}))).await?;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn bookings_price_from_tour_and_admin_manage_status() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;
    let tour_id = send(&app, "POST", "/api/tours", Some(&token), Some(tour_body("Tarangire Day Trip", "safari"))).await?.body["data"]["id"]
        .as_i64()
        .unwrap_or_default();

    let booking = send(
        &app,
        "POST",
        "/api/bookings",
        None,
        Some(json!({"tour_id": tour_id, "customer_name": "Jane Doe", "email": "jane@example.com", "number_of_people": 3, "travel_date": "2026-12-01"})),
    )
    .await?;
    assert_eq!(booking.status, StatusCode::CREATED);
    assert_eq!(booking.body["data"]["status"], "pending");
    assert_eq!(booking.body["data"]["total_price"], 1350.0);
    let bid = booking.body["data"]["id"].as_i64().unwrap_or_default();

    let bad_email = send(&app, "POST", "/api/bookings", None, Some(json!({"customer_name": "X", "email": "nope"}))).await?;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);

    let status = send(&app, "PUT", &format!("/api/bookings/{bid}/status"), Some(&token), Some(json!({"status": "confirmed"}))).await?;
    assert_eq!(status.status, StatusCode::OK);
    assert_eq!(status.body["data"]["status"], "confirmed");
    let invalid = send(&app, "PUT", &format!("/api/bookings/{bid}/status"), Some(&token), Some(json!({"status": "teleported"}))).await?;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let confirmed = send(&app, "GET", "/api/bookings?status=confirmed", Some(&token), None).await?;
    assert_eq!(ids(&confirmed.body), vec![bid]);
    let pending = send(&app, "GET", "/api/bookings?status=pending", Some(&token), None).await?;
    assert!(ids(&pending.body).is_empty());

    assert_eq!(send(&app, "DELETE", &format!("/api/bookings/{bid}"), Some(&token), None).await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn contact_messages_flow() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let msg = send(&app, "POST", "/api/contact", None, Some(json!({"name": "Sam", "email": "sam@example.com", "message": "Do you run trips in April?"}))).await?;
    assert_eq!(msg.status, StatusCode::CREATED);
    assert_eq!(msg.body["data"]["is_read"], false);
    let id = msg.body["data"]["id"].as_i64().unwrap_or_default();

    let empty = send(&app, "POST", "/api/contact", None, Some(json!({"name": "Sam", "email": "sam@example.com"}))).await?;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);

    let read = send(&app, "PUT", &format!("/api/contact/{id}/read"), Some(&token), None).await?;
    assert_eq!(read.body["data"]["is_read"], true);
    let unread = send(&app, "GET", "/api/contact?unread_only=true", Some(&token), None).await?;
    assert_eq!(unread.body["data"], json!([]));
    let all = send(&app, "GET", "/api/contact", Some(&token), None).await?;
    assert_eq!(ids(&all.body), vec![id]);
    Ok(())
}

#[tokio::test]
async fn blog_drafts_stay_private() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let draft = send(&app, "POST", "/api/blog", Some(&token), Some(json!({"title": "Packing list", "content": "…", "tags": ["tips"]}))).await?;
    assert_eq!(draft.status, StatusCode::CREATED);
    let did = draft.body["data"]["id"].as_i64().unwrap_or_default();
    let published = send(
        &app,
        "POST",
        "/api/blog",
        Some(&token),
        Some(json!({"title": "Migration season", "content": "…", "category": "wildlife", "tags": ["safari", "tips"], "is_published": true})),
    )
    .await?;
    let pid = published.body["data"]["id"].as_i64().unwrap_or_default();
    assert!(published.body["data"]["published_at"].is_string());

    assert_eq!(ids(&send(&app, "GET", "/api/blog", None, None).await?.body), vec![pid]);
    assert_eq!(send(&app, "GET", &format!("/api/blog/{did}"), None, None).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, "GET", "/api/blog/slug/packing-list", None, None).await?.status, StatusCode::NOT_FOUND);
    assert_eq!(send(&app, "GET", &format!("/api/admin/blog/{did}"), Some(&token), None).await?.status, StatusCode::OK);
    assert_eq!(ids(&send(&app, "GET", "/api/admin/blog?tag=tips", Some(&token), None).await?.body).len(), 2);
    assert_eq!(ids(&send(&app, "GET", "/api/blog?category=wildlife", None, None).await?.body), vec![pid]);

    let publish = send(&app, "PUT", &format!("/api/blog/{did}"), Some(&token), Some(json!({"is_published": true}))).await?;
    assert!(publish.body["data"]["published_at"].is_string());
    assert_eq!(send(&app, "GET", "/api/blog/slug/packing-list", None, None).await?.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn page_sections_upsert_and_delete() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let body = json!({"title": "Office", "content": {"address": "Arusha", "phone": "+255 000"}, "sort_order": 1});
    let first = send(&app, "PUT", "/api/pages/contact/office", Some(&token), Some(body.clone())).await?;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = send(&app, "PUT", "/api/pages/contact/office", Some(&token), Some(json!({"content": {"address": "Moshi"}}))).await?;
    assert_eq!(second.status, StatusCode::OK);

    let page = send(&app, "GET", "/api/pages/contact", None, None).await?;
    assert_eq!(page.body["data"][0]["content"]["address"], "Moshi");
    assert_eq!(send(&app, "GET", "/api/pages/about", None, None).await?.body["data"], json!([]));
    assert_eq!(send(&app, "GET", "/api/pages/pricing", None, None).await?.status, StatusCode::BAD_REQUEST);

    assert_eq!(send(&app, "DELETE", "/api/pages/contact/office", Some(&token), None).await?.status, StatusCode::OK);
    assert_eq!(send(&app, "DELETE", "/api/pages/contact/office", Some(&token), None).await?.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn base64_uploads_list_and_delete() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    // "hello png" as a data URL
    let stored = send(
        &app,
        "POST",
        "/api/upload/base64",
        Some(&token),
        Some(json!({"filename": "Cover Photo.png", "data": "data:image/png;base64,aGVsbG8gcG5n", "folder": "tours"})),
    )
    .await?;
    assert_eq!(stored.status, StatusCode::CREATED);
    let key = stored.body["data"]["key"].as_str().unwrap_or_default().to_string();
    assert!(key.starts_with("tours/"));
    assert_eq!(stored.body["data"]["content_type"], "image/png");
    assert_eq!(stored.body["data"]["size"], 9);
    assert_eq!(stored.body["data"]["url"], format!("/uploads/{key}"));

    let exe = send(
        &app,
        "POST",
        "/api/upload/base64",
        Some(&token),
        Some(json!({"filename": "run.exe", "content_type": "application/x-msdownload", "data": "aGVsbG8="})),
    )
    .await?;
    assert_eq!(exe.status, StatusCode::BAD_REQUEST);

    let listed = send(&app, "GET", "/api/upload?prefix=tours", Some(&token), None).await?;
    assert_eq!(listed.body["data"][0]["key"], key.as_str());

    let del = send(&app, "DELETE", &format!("/api/upload?key={key}"), Some(&token), None).await?;
    assert_eq!(del.status, StatusCode::OK);
    let listed = send(&app, "GET", "/api/upload", Some(&token), None).await?;
    assert_eq!(listed.body["data"], json!([]));

    let traversal = send(&app, "DELETE", "/api/upload?key=../etc/passwd", Some(&token), None).await?;
    assert_eq!(traversal.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn multipart_upload_and_size_limit() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    let token = admin_token(&app).await?;

    let boundary = "XBOUNDARYX";
    let multipart = |payload: &[u8]| {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\nContent-Disposition: form-data; name=\"folder\"\r\n\r\nteam\r\n").as_bytes());
        body.extend_from_slice(
            format!("--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"amani.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        body
    };
    let request = |body: Vec<u8>| {
        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
            .body(Body::from(body))
    };

    let ok = send_raw(&app, request(multipart(b"\xff\xd8\xff fake jpeg"))?).await?;
    assert_eq!(ok.status, StatusCode::CREATED);
    assert!(ok.body["data"]["key"].as_str().unwrap_or_default().starts_with("team/"));
    assert!(ok.body["data"]["key"].as_str().unwrap_or_default().ends_with("-amani.jpg"));

    // just over the store limit but under the body limit: rejected by the store
    let too_big = send_raw(&app, request(multipart(&vec![b'a'; MAX_UPLOAD + 1][..]))?).await?;
    assert_eq!(too_big.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn metrics_and_openapi_are_public() -> anyhow::Result<()> {
    let (app, _) = test_app().await?;
    send(&app, "GET", "/api/health", None, None).await?;

    let req = Request::builder().uri("/metrics").body(Body::empty())?;
    let metrics = send_raw(&app, req).await?;
    assert_eq!(metrics.status, StatusCode::OK);
    assert!(metrics.body.as_str().unwrap_or_default().contains("tour_site_http_requests_total"));

    let doc = send(&app, "GET", "/api/openapi.json", None, None).await?;
    assert_eq!(doc.status, StatusCode::OK);
    assert!(doc.body["paths"].get("/api/bookings").is_some());
    Ok(())
}
