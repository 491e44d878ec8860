mod config;
mod db;
mod media;
mod repo;
mod routes;
mod services;
mod state;
mod store;

use std::fmt::Display;
use std::sync::Arc;

use config::{AppConfig, StoreBackend};
use store::DocumentStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().unwrap_or_else(|e| abort("configuration invalid", e));

    let store = open_store(&config).await;
    let media = media::CloudinaryUploader::new(config.media.clone(), config.timeouts)
        .unwrap_or_else(|e| abort("media client init failed", e));
    let contact = services::contact::sink_from_config(&config.contact);

    let state = state::AppState::new(store, Arc::new(media), contact);

    // Initial load, then reload on every change announcement.
    let _projects_sync = state.projects.spawn_sync();
    let _blogs_sync = state.blogs.spawn_sync();

    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .unwrap_or_else(|e| abort("failed to bind", e));

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "folio listening");
    if let Err(e) = axum::serve(listener, app).await {
        abort("server failed", e);
    }
}

/// Build the configured backend and start its change feed.
async fn open_store(config: &AppConfig) -> Arc<dyn DocumentStore> {
    match &config.store {
        StoreBackend::Firestore(firestore) => {
            let store = store::firestore::FirestoreStore::new(firestore.clone(), config.timeouts)
                .unwrap_or_else(|e| abort("firestore client init failed", e));
            let store = Arc::new(store);
            let _refresh = store::firestore::spawn_refresh_task(store.clone());
            tracing::info!(project = %firestore.project_id, "using firestore document store");
            store
        }
        StoreBackend::Postgres(postgres) => {
            let pool = db::init_pool(postgres)
                .await
                .unwrap_or_else(|e| abort("database init failed", e));
            let store = Arc::new(store::postgres::PostgresStore::new(pool));
            let _listener = store::postgres::spawn_listener(store.clone());
            tracing::info!("using postgres document store");
            store
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory document store; content is lost on restart");
            Arc::new(store::memory::MemoryStore::new())
        }
    }
}

fn abort(context: &str, error: impl Display) -> ! {
    tracing::error!(error = %error, "{context}");
    std::process::exit(1);
}
