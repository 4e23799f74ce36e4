use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use configs::RegistryConfig;
use serde_json::{json, Value};
use tower::Service;

use server::routes;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    let state = server::build_state(&RegistryConfig::default());
    routes::build_router(state, cors())
}

fn get(uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method("GET").uri(uri).body(Body::empty())?)
}

fn post_json(uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

async fn send(app: &mut Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

#[tokio::test]
async fn seeded_store_is_returned_by_name() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(&mut app, get("/stores/My%20Store")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"store": {"name": "My Store", "items": [
            {"name": "Chair", "price": 15.99},
            {"name": "Bed", "price": 120.23}
        ]}})
    );
    Ok(())
}

#[tokio::test]
async fn create_store_then_list() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(&mut app, post_json("/stores", &json!({"name": "New Store"}))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "New Store", "items": []}));

    let (status, body) = send(&mut app, get("/stores")?).await?;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["stores"]
        .as_array()
        .expect("stores array")
        .iter()
        .map(|s| s["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["My Store", "New Store"]);
    assert_eq!(body["stores"][1]["items"], json!([]));
    Ok(())
}

#[tokio::test]
async fn item_for_missing_store_is_not_found() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(
        &mut app,
        post_json("/stores/Nonexistent/item", &json!({"name": "Lamp", "price": 9.99}))?,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Store not found"}));

    // Registry untouched
    let (_, body) = send(&mut app, get("/stores")?).await?;
    assert_eq!(body["stores"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["stores"][0]["items"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn created_item_appears_last() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(
        &mut app,
        post_json("/stores/My%20Store/item", &json!({"name": "Lamp", "price": 9.99}))?,
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "Lamp", "price": 9.99}));

    let (status, body) = send(&mut app, get("/stores/My%20Store/item")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][2], json!({"name": "Lamp", "price": 9.99}));

    let (_, body) = send(&mut app, get("/stores/My%20Store")?).await?;
    assert_eq!(body["store"]["items"].as_array().and_then(|a| a.last()), Some(&json!({"name": "Lamp", "price": 9.99})));
    Ok(())
}

#[tokio::test]
async fn lookups_on_missing_store_are_not_found() -> anyhow::Result<()> {
    let mut app = build_app();
    for uri in ["/stores/Nowhere", "/stores/Nowhere/item", "/stores/my%20store"] {
        let (status, body) = send(&mut app, get(uri)?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"message": "Store not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn duplicate_store_names_resolve_to_first() -> anyhow::Result<()> {
    let mut app = build_app();
    for _ in 0..2 {
        let (status, _) = send(&mut app, post_json("/stores", &json!({"name": "Twin"}))?).await?;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(&mut app, post_json("/stores/Twin/item", &json!({"name": "Sock", "price": 2.5}))?).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&mut app, get("/stores")?).await?;
    assert_eq!(body["stores"][1], json!({"name": "Twin", "items": [{"name": "Sock", "price": 2.5}]}));
    assert_eq!(body["stores"][2], json!({"name": "Twin", "items": []}));

    let (_, body) = send(&mut app, get("/stores/Twin/item")?).await?;
    assert_eq!(body, json!({"items": [{"name": "Sock", "price": 2.5}]}));
    Ok(())
}

#[tokio::test]
async fn malformed_bodies_are_client_errors() -> anyhow::Result<()> {
    let mut app = build_app();
    let cases = [
        ("/stores", json!({})),
        ("/stores", json!({"name": 7})),
        ("/stores/My%20Store/item", json!({"name": "Lamp"})),
        ("/stores/My%20Store/item", json!({"price": 1.0})),
        ("/stores/My%20Store/item", json!({"name": "Lamp", "price": "cheap"})),
    ];
    for (uri, body) in cases {
        let (status, resp) = send(&mut app, post_json(uri, &body)?).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {body}");
        assert!(resp["message"].is_string(), "{uri} {body}");
    }

    let req = Request::builder()
        .method("POST")
        .uri("/stores")
        .body(Body::from(r#"{"name": "No Header"}"#))?;
    let (status, _) = send(&mut app, req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&mut app, get("/stores")?).await?;
    assert_eq!(body["stores"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["stores"][0]["items"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn missing_store_is_not_found_whatever_the_body() -> anyhow::Result<()> {
    let mut app = build_app();
    for body in [
        json!({"name": "Lamp"}),
        json!({"price": 1.0}),
        json!({"name": "Lamp", "price": "cheap"}),
        json!({"name": "Lamp", "price": -1.0}),
    ] {
        let (status, resp) = send(&mut app, post_json("/stores/Nonexistent/item", &body)?).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{body}");
        assert_eq!(resp, json!({"message": "Store not found"}));
    }
    Ok(())
}

#[tokio::test]
async fn blank_names_and_negative_prices_are_accepted() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(&mut app, post_json("/stores", &json!({"name": ""}))?).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "", "items": []}));

    let (status, body) = send(
        &mut app,
        post_json("/stores/My%20Store/item", &json!({"name": "Refund", "price": -5.0}))?,
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"name": "Refund", "price": -5.0}));

    let (_, body) = send(&mut app, get("/stores/My%20Store/item")?).await?;
    assert_eq!(body["items"][2], json!({"name": "Refund", "price": -5.0}));
    Ok(())
}

#[tokio::test]
async fn unseeded_registry_starts_empty() -> anyhow::Result<()> {
    let state = server::build_state(&RegistryConfig { seed_example: false });
    let mut app = routes::build_router(state, cors());
    let (status, body) = send(&mut app, get("/stores")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"stores": []}));
    Ok(())
}

#[tokio::test]
async fn health_and_api_document() -> anyhow::Result<()> {
    let mut app = build_app();
    let (status, body) = send(&mut app, get("/health")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&mut app, get("/api-docs/openapi.json")?).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/stores/{name}/item"].is_object());
    Ok(())
}
