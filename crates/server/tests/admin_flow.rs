mod support;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

use support::{json_body, spawn_app};

const KEY: &str = "test-admin-key";

fn admin(method: &str, uri: &str, body: Option<&str>) -> anyhow::Result<Request<Body>> {
    let builder = Request::builder().method(method).uri(uri).header("X-Admin-Key", KEY);
    Ok(match body {
        Some(b) => builder.header(header::CONTENT_TYPE, "application/json").body(Body::from(b.to_string()))?,
        None => builder.body(Body::empty())?,
    })
}

#[tokio::test]
async fn admin_routes_absent_without_key() -> anyhow::Result<()> {
    let app = spawn_app(None).await?;
    assert_eq!(app.send(admin("GET", "/admin/contacts", None)?).await?.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn admin_requires_matching_key() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    assert_eq!(app.get("/admin/contacts").await?.status(), StatusCode::UNAUTHORIZED);
    let wrong = Request::builder().uri("/admin/contacts").header("X-Admin-Key", "nope").body(Body::empty())?;
    assert_eq!(app.send(wrong).await?.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.get(&format!("/admin/contacts?admin_key={KEY}")).await?.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn site_settings_singleton_over_http() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    assert_eq!(app.send(admin("GET", "/admin/site-settings", None)?).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        app.send(admin("PUT", "/admin/site-settings", Some(r#"{"site_name":"X"}"#))?).await?.status(),
        StatusCode::NOT_FOUND
    );

    let res = app.send(admin("POST", "/admin/site-settings", Some(r#"{"site_name":"Acme"}"#))?).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(json_body(res).await?["site_name"], "Acme");

    let res = app.send(admin("POST", "/admin/site-settings", Some(r#"{"site_name":"Again"}"#))?).await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.send(admin("PUT", "/admin/site-settings", Some(r#"{"phone_number":"555-0100"}"#))?).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await?;
    assert_eq!(body["site_name"], "Acme");
    assert_eq!(body["phone_number"], "555-0100");
    Ok(())
}

#[tokio::test]
async fn contact_triage() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    let c = models::contact::create(&app.db, models::contact::NewContact {
        full_name: "Jane".into(),
        email: "jane@example.com".into(),
        phone_number: "555".into(),
        message: "Hi".into(),
    })
    .await?;

    let res = app
        .send(admin("PATCH", &format!("/admin/contacts/{}", c.id), Some(r#"{"status":"completed","admin_notes":"done"}"#))?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await?["status"], "completed");

    let body = json_body(app.send(admin("GET", "/admin/contacts?status=new", None)?).await?).await?;
    assert_eq!(body["total"], 0);
    let body = json_body(app.send(admin("GET", "/admin/contacts?status=completed", None)?).await?).await?;
    assert_eq!(body["items"][0]["admin_notes"], "done");

    assert_eq!(
        app.send(admin("GET", "/admin/contacts?status=bogus", None)?).await?.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.send(admin("PATCH", "/admin/contacts/999", Some(r#"{"status":"new"}"#))?).await?.status(),
        StatusCode::NOT_FOUND
    );
    Ok(())
}

#[tokio::test]
async fn percent_encoded_query_key_is_accepted() -> anyhow::Result<()> {
    let app = spawn_app(Some("a b+c")).await?;
    assert_eq!(app.get("/admin/contacts?admin_key=a%20b%2Bc").await?.status(), StatusCode::OK);
    assert_eq!(app.get("/admin/contacts?admin_key=a%20b%2Bd").await?.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn service_lifecycle_feeds_public_pages() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    let res = app
        .send(admin(
            "POST",
            "/admin/services",
            Some(r#"{"name":"Cloud Hosting","short_description":"Managed","full_description":"Long","image":"services/cloud.png"}"#),
        )?)
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = json_body(res).await?["id"].as_i64().unwrap_or_default();

    let res = app.send(admin("PATCH", &format!("/admin/services/{id}"), Some(r#"{"is_featured":true,"order":2}"#))?).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let home = json_body(app.get("/").await?).await?;
    assert_eq!(home["services"][0]["name"], "Cloud Hosting");

    let res = app
        .send(admin(
            "PUT",
            &format!("/admin/services/{id}"),
            Some(r#"{"name":"Cloud Plus","short_description":"Managed","full_description":"Long","image":"services/cloud.png"}"#),
        )?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json_body(res).await?;
    assert_eq!(body["name"], "Cloud Plus");
    assert_eq!(body["is_featured"], false);

    let listed = json_body(app.send(admin("GET", "/admin/services?q=plus&is_featured=false", None)?).await?).await?;
    assert_eq!(listed["total"], 1);

    assert_eq!(app.send(admin("DELETE", &format!("/admin/services/{id}"), None)?).await?.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.get(&format!("/service/{id}/")).await?.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.send(admin("DELETE", &format!("/admin/services/{id}"), None)?).await?.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn content_writes_require_the_key() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    let req = Request::builder()
        .method("POST")
        .uri("/admin/trainings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Rust","short_description":"s","full_description":"l","image":"t.png"}"#))?;
    assert_eq!(app.send(req).await?.status(), StatusCode::UNAUTHORIZED);
    let listed = json_body(app.send(admin("GET", "/admin/trainings", None)?).await?).await?;
    assert_eq!(listed["total"], 0);
    Ok(())
}

#[tokio::test]
async fn content_validation_and_filters() -> anyhow::Result<()> {
    let app = spawn_app(Some(KEY)).await?;
    let res = app
        .send(admin("POST", "/admin/testimonials", Some(r#"{"name":"Ada","designation":"CTO","review":"Great","rating":9}"#))?)
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    for (name, level) in [("Intro", "beginner"), ("Deep Dive", "advanced")] {
        let body = format!(r#"{{"name":"{name}","short_description":"s","full_description":"l","image":"t.png","level":"{level}"}}"#);
        assert_eq!(app.send(admin("POST", "/admin/trainings", Some(&body))?).await?.status(), StatusCode::CREATED);
    }
    let advanced = json_body(app.send(admin("GET", "/admin/trainings?level=advanced", None)?).await?).await?;
    assert_eq!(advanced["total"], 1);
    assert_eq!(advanced["items"][0]["name"], "Deep Dive");

    let res = app
        .send(admin("POST", "/admin/hero-sections", Some(r#"{"title":"Welcome","subtitle":"s","description":"d"}"#))?)
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let home = json_body(app.get("/").await?).await?;
    assert_eq!(home["hero_section"]["title"], "Welcome");

    let res = app
        .send(admin("POST", "/admin/trusted-companies", Some(r#"{"name":"Acme","logo":"companies/acme.png"}"#))?)
        .await?;
    let id = json_body(res).await?["id"].as_i64().unwrap_or_default();
    let res = app.send(admin("PATCH", &format!("/admin/trusted-companies/{id}"), Some(r#"{"is_featured":true}"#))?).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
