//! Web router using Axum

use axum::{response::Html, routing::get, Json, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the web router serving the SPA from `dist_dir`
///
/// Unknown paths fall back to `index.html` so client-side routes
/// (`/validations`, `/users`, ...) load the app on refresh.
pub fn create_router(dist_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/api/health", get(health_handler));

    let index = dist_dir.join("index.html");
    let router = if index.exists() {
        let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(index));
        router.fallback_service(spa)
    } else {
        warn!(dist = %dist_dir.display(), "frontend build not found, serving setup page");
        router.fallback(setup_handler)
    };

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn setup_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>NitroSubs - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f5f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 1.75rem; margin-bottom: 1rem; color: #1a1a1a; }
        p { margin-bottom: 1rem; color: #333; line-height: 1.6; }
        code { background: #f0f0f0; padding: 0.25rem 0.5rem; border-radius: 4px; font-family: monospace; }
        .step { margin: 1.5rem 0; padding: 1rem; background: #f8f8f8; border-left: 3px solid #333; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>NitroSubs Web UI - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the shell can be displayed.</p>
        <div class="step">
            <strong>Setup Instructions:</strong>
            <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
                <li>Install Trunk: <code>cargo install trunk</code></li>
                <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
                <li>Build frontend: <code>cd crates/nitrosubs-web && trunk build --release</code></li>
                <li>Restart server: <code>cargo run -p nitrosubs -- serve</code></li>
            </ol>
        </div>
        <p>Health check: <a href="/api/health">/api/health</a></p>
    </div>
</body>
</html>"#,
    )
}
