//! nitrosubs-web - Web frontend for NitroSubs using Leptos + Axum
//!
//! The Leptos side renders the application shell (header, sidebar, routes).
//! With the `ssr` feature the crate also provides the Axum server that
//! serves the compiled SPA.

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod context;
pub mod pages;
pub mod storage;
pub mod viewport;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;

#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use anyhow::{Context, Result};
#[cfg(feature = "ssr")]
use std::net::SocketAddr;
#[cfg(feature = "ssr")]
use std::path::PathBuf;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the web server until Ctrl-C
#[cfg(feature = "ssr")]
pub async fn run(dist_dir: PathBuf, addr: SocketAddr) -> Result<()> {
    let router = create_router(&dist_dir);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, dist = %dist_dir.display(), "web server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested");
        })
        .await
        .context("Web server terminated unexpectedly")?;

    Ok(())
}
