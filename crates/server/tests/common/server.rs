//! Server test utilities.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use treeurls_server::{AppState, create_router};
use treeurls_store::{MemoryStore, SqliteStore, TreeUrlStore};

/// A test server wrapper with all dependencies.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    _temp_dir: Option<TempDir>,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server over an empty in-memory store.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a test server over the given store.
    pub fn with_store(store: Arc<dyn TreeUrlStore>) -> Self {
        let state = AppState::new(store);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: None,
        }
    }

    /// Create a test server over a SQLite database in a temporary directory.
    pub async fn sqlite() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("tree-urls.db");
        let store: Arc<dyn TreeUrlStore> = Arc::new(
            SqliteStore::new(&db_path)
                .await
                .expect("Failed to create SQLite store"),
        );

        let state = AppState::new(store);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: Some(temp_dir),
        }
    }

    /// Get access to the underlying store.
    pub fn store(&self) -> Arc<dyn TreeUrlStore> {
        self.state.store.clone()
    }

    /// Send a request and return the status and body text.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, String) {
        let body = match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }
}
