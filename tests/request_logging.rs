use std::{
    io,
    sync::{Arc, Mutex},
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use product_catalog::{AppConfig, AppState, app, database::MemoryProductStore};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn requests_are_logged_at_info() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let state = AppState::new(Arc::new(MemoryProductStore::new()));
    let router = app::router(state, &AppConfig::default()).unwrap();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/products/search?name=x")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let output = logs.contents();
    assert!(output.contains("GET"), "method missing from log: {}", output);
    assert!(
        output.contains("/api/products/search?name=x"),
        "request uri missing from log: {}",
        output
    );
    assert!(output.contains("status=404"), "status missing from log: {}", output);
}
