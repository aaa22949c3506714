use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        health::livez,
        playlist::create_master_playlist,
        users::{get_user, put_user, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// The playlist route is left outside the request timeout; the script runner
/// enforces its own, longer limit.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for user endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    let user_routes = Router::new()
        .route("/users", post(put_user))
        .route("/users/{id}", get(get_user).put(update_user))
        .layer(cors)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ));

    Router::new()
        .route("/create-master-playlist", get(create_master_playlist))
        .route("/livez", get(livez))
        .merge(user_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use masterlist_core::{
        storage::{RepositoryError, Result, UserRepository},
        user::User,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{script::PlaylistScript, storage::inmemory::InMemoryRepository};

    /// Repository whose backend drops out until `recover` is called.
    struct FlakyRepository {
        inner: InMemoryRepository,
        down: AtomicBool,
    }

    impl FlakyRepository {
        fn new(inner: InMemoryRepository) -> Self {
            Self {
                inner,
                down: AtomicBool::new(true),
            }
        }

        fn recover(&self) {
            self.down.store(false, Ordering::SeqCst);
        }

        fn check(&self) -> Result<()> {
            if self.down.load(Ordering::SeqCst) {
                return Err(RepositoryError::BackendUnavailable(
                    "GetItem could not reach DynamoDB".to_string(),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for FlakyRepository {
        async fn get_user(&self, user_id: &str) -> Result<User> {
            self.check()?;
            self.inner.get_user(user_id).await
        }

        async fn put_user(&self, user: &User) -> Result<()> {
            self.check()?;
            self.inner.put_user(user).await
        }
    }

    fn test_config() -> Config {
        Config::from_lookup(|_| None)
    }

    fn app_with(repo: Arc<dyn UserRepository>) -> Router {
        let config = test_config();
        let state = AppState::new(repo, PlaylistScript::from_config(&config));
        create_app(state, &config)
    }

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "userId": "2132",
            "name": "Test",
            "masterPlayListId": "1293129",
            "masterPlayListName": "Master",
        })
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = app_with(Arc::new(InMemoryRepository::new()));

        let response = app.oneshot(get("/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_put_and_get_user() {
        let app = app_with(Arc::new(InMemoryRepository::new()));

        let response = app
            .clone()
            .oneshot(json_request("POST", "/users", &sample_json()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get("/users/2132")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, sample_json());
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let app = app_with(Arc::new(InMemoryRepository::new()));

        let response = app.oneshot(get("/users/9999")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_put_user_with_empty_id_is_rejected() {
        let repo = InMemoryRepository::new();
        let app = app_with(Arc::new(repo.clone()));

        let mut body = sample_json();
        body["userId"] = serde_json::json!("");

        let response = app
            .oneshot(json_request("POST", "/users", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_update_user_is_last_write_wins() {
        let app = app_with(Arc::new(InMemoryRepository::new()));

        let first = serde_json::json!({
            "name": "Test",
            "masterPlayListId": "1293129",
            "masterPlayListName": "Master",
        });
        let second = serde_json::json!({
            "name": "Renamed",
            "masterPlayListId": "555",
            "masterPlayListName": "Everything",
        });

        for body in [&first, &second] {
            let response = app
                .clone()
                .oneshot(json_request("PUT", "/users/2132", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/users/2132")).await.unwrap();
        let user = body_json(response).await;

        assert_eq!(user["userId"], "2132");
        assert_eq!(user["name"], "Renamed");
        assert_eq!(user["masterPlayListId"], "555");
        assert_eq!(user["masterPlayListName"], "Everything");
    }

    #[tokio::test]
    async fn test_update_user_with_missing_field_is_rejected() {
        let app = app_with(Arc::new(InMemoryRepository::new()));

        let body = serde_json::json!({ "name": "Test" });
        let response = app
            .oneshot(json_request("PUT", "/users/2132", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_record_is_server_error() {
        let repo = InMemoryRepository::new();
        repo.insert_raw("2132", "not json").await;
        let app = app_with(Arc::new(repo));

        let response = app.oneshot(get("/users/2132")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_backend_outage_is_503_and_service_keeps_running() {
        let inner = InMemoryRepository::new();
        inner
            .put_user(&User::new("2132", "Test").with_master_playlist("1293129", "Master"))
            .await
            .unwrap();
        let repo = Arc::new(FlakyRepository::new(inner));
        let app = app_with(repo.clone());

        let response = app.clone().oneshot(get("/users/2132")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app.clone().oneshot(get("/livez")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        repo.recover();

        let response = app.oneshot(get("/users/2132")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, sample_json());
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = std::env::temp_dir().join(format!("masterlist-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>masterlist</h1>").unwrap();

        let mut config = test_config();
        config.static_dir = dir.clone();
        let state = AppState::new(
            Arc::new(InMemoryRepository::new()),
            PlaylistScript::from_config(&config),
        );
        let app = create_app(state, &config);

        let response = app.clone().oneshot(get("/index.html")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<h1>masterlist</h1>");

        let response = app.oneshot(get("/missing.html")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_create_master_playlist() {
        let config = test_config();
        let state = AppState::new(
            Arc::new(InMemoryRepository::new()),
            PlaylistScript::new("echo", vec!["done".to_string()], Duration::from_secs(5)),
        );
        let app = create_app(state, &config);

        let response = app.oneshot(get("/create-master-playlist")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Master playlist updated");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_create_master_playlist_failure_is_bad_gateway() {
        let config = test_config();
        let state = AppState::new(
            Arc::new(InMemoryRepository::new()),
            PlaylistScript::new("false", Vec::new(), Duration::from_secs(5)),
        );
        let app = create_app(state, &config);

        let response = app.oneshot(get("/create-master-playlist")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
