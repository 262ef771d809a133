use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use surveymap_core::DataContext;
use surveymap_http::{create_router, AppState};

pub(crate) async fn run(
    port: u16,
    host: String,
    boundaries: PathBuf,
    comments: PathBuf,
    static_dir: PathBuf,
) -> Result<()> {
    // Explicit startup-time load: either file failing to load is fatal.
    let context = DataContext::load(&boundaries, &comments)?;
    let state = Arc::new(AppState::new(context, static_dir));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting dashboard server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
