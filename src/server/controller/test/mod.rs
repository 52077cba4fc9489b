
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use entity::prelude::User;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

/// Router backed by a fresh in-memory database holding the user table.
async fn app() -> Router {
    app_with_db().await.0
}

/// Like `app`, also returning a handle to the database the router uses.
async fn app_with_db() -> (Router, DatabaseConnection) {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.unwrap();

    (router().with_state(AppState::new(db.clone())), db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
