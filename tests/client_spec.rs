use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use kanban_board::api::{create_router, AppState};
use kanban_board::board::BoardEngine;
use kanban_board::client::{BoardClient, FetchError};
use kanban_board::models::{Snapshot, Task};
use kanban_board::state::{BoardState, SnapshotStore};
use kanban_board::view::BoardView;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload() -> serde_json::Value {
    serde_json::json!({
        "tickets": [
            {"id": "CAM-1", "title": "Update user profile page", "tag": ["Feature request"],
             "userId": "usr-1", "status": "Todo", "priority": 4},
            {"id": "CAM-2", "title": "Add multi-language support", "tag": [],
             "userId": "usr-2", "status": "In progress", "priority": 3}
        ],
        "users": [
            {"id": "usr-1", "name": "Anoop Sharma", "available": false},
            {"id": "usr-2", "name": "Yogesh", "available": true}
        ]
    })
}

async fn mock_feed(response: ResponseTemplate) -> (MockServer, BoardClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(response)
        .mount(&server)
        .await;
    let client = BoardClient::new(format!("{}/feed", server.uri()));
    (server, client)
}

mod fetch_snapshot {
    use super::*;

    #[tokio::test]
    async fn parses_tickets_and_users() {
        let (_server, client) =
            mock_feed(ResponseTemplate::new(200).set_body_json(payload())).await;

        let snapshot = client.fetch_snapshot().await.expect("fetch failed");

        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.tasks[0].tags, vec!["Feature request".to_string()]);
        assert_eq!(snapshot.users[1].name, "Yogesh");
    }

    #[tokio::test]
    async fn reports_non_success_status() {
        let (_server, client) = mock_feed(ResponseTemplate::new(500)).await;

        let err = client.fetch_snapshot().await.unwrap_err();

        assert!(matches!(err, FetchError::Status(_)));
        assert_eq!(
            err.to_string(),
            "Failed to fetch data: server returned 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn reports_malformed_payload() {
        let (_server, client) = mock_feed(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "tickets": "nope" })),
        )
        .await;

        let err = client.fetch_snapshot().await.unwrap_err();

        assert!(matches!(err, FetchError::Payload(_)));
    }
}

mod snapshot_store {
    use super::*;

    #[tokio::test]
    async fn records_failure_without_retrying() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;
        let client = BoardClient::new(format!("{}/feed", server.uri()));
        let store = SnapshotStore::new();

        assert!(store.load(&client).await.is_err());

        assert!(matches!(store.state(), BoardState::Failed(_)));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let (_server, client) = mock_feed(ResponseTemplate::new(500)).await;
        let store = SnapshotStore::with_snapshot(Snapshot::new(
            vec![Task::new("CAM-1", "Update user profile page", "usr-1", "Todo", 4)],
            vec![],
        ));

        assert!(store.load(&client).await.is_err());

        let current = store.current().expect("snapshot kept after failed refresh");
        assert_eq!(current.tasks[0].id, "CAM-1");
    }

    #[tokio::test]
    async fn replaces_snapshot_on_load() {
        let (_server, client) =
            mock_feed(ResponseTemplate::new(200).set_body_json(payload())).await;
        let store = SnapshotStore::new();

        let loaded = store.load(&client).await.expect("load failed");

        assert!(Arc::ptr_eq(&loaded, &store.current().unwrap()));
    }
}

mod refresh_endpoint {
    use super::*;

    #[tokio::test]
    async fn failed_refresh_keeps_serving_board() {
        let (_server, client) = mock_feed(ResponseTemplate::new(500)).await;
        let engine = BoardEngine::new().expect("Failed to create engine");
        let store = SnapshotStore::with_snapshot(Snapshot::new(
            vec![Task::new("CAM-1", "Update user profile page", "usr-1", "Todo", 4)],
            vec![],
        ));
        let app = create_router(AppState::new(store, engine, Some(client)));
        let server = TestServer::new(app).expect("Failed to create test server");

        server
            .post("/api/v1/refresh")
            .await
            .assert_status(StatusCode::BAD_GATEWAY);

        let board = server.get("/api/v1/board").await;
        board.assert_status_ok();
        let view: BoardView = board.json();
        assert_eq!(view.column("Todo").unwrap().count, 1);
    }

    #[tokio::test]
    async fn fetches_and_serves_new_snapshot() {
        let (_server, client) =
            mock_feed(ResponseTemplate::new(200).set_body_json(payload())).await;
        let engine = BoardEngine::new().expect("Failed to create engine");
        let app = create_router(AppState::new(SnapshotStore::new(), engine, Some(client)));
        let server = TestServer::new(app).expect("Failed to create test server");

        server
            .get("/api/v1/board")
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let refreshed = server.post("/api/v1/refresh").await;
        refreshed.assert_status_ok();
        let body: serde_json::Value = refreshed.json();
        assert_eq!(body["tasks"], 2);

        let view: BoardView = server.get("/api/v1/board").await.json();
        assert_eq!(view.columns.len(), 2);
    }
}
