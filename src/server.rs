//! HTTP surface: the rendered page at `/` and static assets under `/static`.

use crate::config::SiteConfig;
use crate::core::render::render_page;
use crate::domain::model::PageData;
use crate::utils::error::Result;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Builds the router. `page` is shared read-only by every request.
///
/// Any GET outside `/static` renders the page; missing static files stay 404.
pub fn build_router(page: Arc<PageData>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(get(index))
        .layer(TraceLayer::new_for_http())
        .with_state(page)
}

async fn index(State(page): State<Arc<PageData>>) -> Html<String> {
    Html(render_page(&page))
}

pub async fn serve(config: &SiteConfig, page: Arc<PageData>) -> Result<()> {
    let static_dir = Path::new(&config.server.static_dir);
    if !static_dir.is_dir() {
        tracing::warn!(
            "Static directory '{}' not found; /static requests will 404",
            static_dir.display()
        );
    }

    let app = build_router(page, static_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
