use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use route_finder::storage::{GraphStore, JsonFileStore, MemoryStore};
use route_finder::web::build_app;
use route_finder::RouteSession;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(RouteSession::open(Box::new(MemoryStore::new())), false)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "DELETE", uri, Some(body)).await
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_graph_and_nodes() {
    let app = app();
    let (status, graph) = send(&app, "GET", "/api/graph", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 6);
    assert_eq!(graph["links"].as_array().unwrap().len(), 9);

    let (_, nodes) = send(&app, "GET", "/api/nodes", None).await;
    assert_eq!(nodes, json!(["A", "B", "C", "D", "E", "F"]));

    let (status, neighbors) = send(&app, "GET", "/api/nodes/f/neighbors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(neighbors, json!({"D": 6.0, "E": 2.0}));

    let (status, err) = send(&app, "GET", "/api/nodes/Q/neighbors", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "node_not_found");
}

#[tokio::test]
async fn test_find_route_highlights_path() {
    let (status, body) = post(&app(), "/api/routes", json!({"start": "a", "end": "f"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "found");
    assert_eq!(body["distance"], json!(12.0));
    assert_eq!(body["path"], json!(["A", "C", "B", "D", "E", "F"]));
    assert_eq!(body["legs"].as_array().unwrap().len(), 5);
    assert_eq!(body["legs"][4]["running_total"], json!(12.0));

    let highlighted = body["graph"]["links"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|l| l["is_path"] == json!(true))
        .count();
    assert_eq!(highlighted, 5);
}

#[tokio::test]
async fn test_route_statuses() {
    let app = app();
    let (_, unknown) = post(&app, "/api/routes", json!({"start": "A", "end": "Z"})).await;
    assert_eq!(unknown["status"], "unknown_node");
    assert_eq!(unknown["distance"], Value::Null);

    post(&app, "/api/edges", json!({"a": "x", "b": "y", "weight": 1})).await;
    let (_, no_path) = post(&app, "/api/routes", json!({"start": "A", "end": "X"})).await;
    assert_eq!(no_path["status"], "no_path");
    assert_eq!(no_path["path"], json!([]));

    let (status, err) = post(&app, "/api/routes", json!({"start": " ", "end": "X"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "empty_node_name");
}

#[tokio::test]
async fn test_edit_edges() {
    let app = app();
    let edge = json!({"a": "a", "b": "f", "weight": "1.5"});
    let (status, body) = post(&app, "/api/edges", edge).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Added edge A-F with weight 1.5");

    let (_, route) = post(&app, "/api/routes", json!({"start": "A", "end": "F"})).await;
    assert_eq!(route["distance"], json!(1.5));

    let (status, body) = delete(&app, "/api/edges", json!({"a": "F", "b": "A"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Removed edge F-A");

    let (status, err) = delete(&app, "/api/edges", json!({"a": "F", "b": "A"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"], "edge_not_found");
}

#[tokio::test]
async fn test_edit_validation() {
    let app = app();
    for (weight, code) in [
        (json!("abc"), "invalid_weight"),
        (json!(0), "invalid_weight"),
        (json!(-3.5), "invalid_weight"),
    ] {
        let body = json!({"a": "A", "b": "B", "weight": weight});
        let (status, err) = post(&app, "/api/edges", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], code);
    }

    let (status, err) = post(&app, "/api/edges", json!({"a": "c", "b": "C", "weight": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "self_loop");
}

#[tokio::test]
async fn test_save_writes_graph_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph_data.json");
    let app = build_app(RouteSession::open(Box::new(JsonFileStore::new(&path))), true);

    post(&app, "/api/edges", json!({"a": "G", "b": "A", "weight": 7})).await;
    let (status, body) = send(&app, "POST", "/api/graph/save", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nodes"], 7);
    assert_eq!(body["edges"], 10);

    let saved = JsonFileStore::new(&path).load().unwrap();
    assert!(saved.adjacency().contains_key("G"));
}

#[tokio::test]
async fn test_lower_case_saved_graph_is_routable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph_data.json");
    std::fs::write(&path, r#"{"home": {"work": 3}, "work": {"home": 3}}"#).unwrap();
    let app = build_app(RouteSession::open(Box::new(JsonFileStore::new(&path))), false);

    let (status, body) = post(&app, "/api/routes", json!({"start": "home", "end": "work"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "found");
    assert_eq!(body["path"], json!(["home", "work"]));

    let (status, neighbors) = send(&app, "GET", "/api/nodes/work/neighbors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(neighbors, json!({"home": 3.0}));
}
