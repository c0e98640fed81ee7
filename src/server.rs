//! HTTP API server.
//!
//! Routes the thesaurus endpoints to a shared [`ThesaurusService`], adds the
//! request-id/timing middleware and CORS, serves the static front-end unless
//! running in API mode, and runs a periodic health probe until shutdown.

pub mod handlers;
pub mod middleware;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use log::{debug, info, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::Result;
use crate::service::ThesaurusService;

/// CORS layer for the configured origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE, middleware::REQUEST_ID])
        .expose_headers([middleware::REQUEST_ID, middleware::PROCESS_TIME])
}

/// Build the application router.
pub fn build_router(service: Arc<ThesaurusService>) -> Router {
    let config = service.config().clone();
    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route("/health-wordnet", get(handlers::health_wordnet))
        .route("/words-frequency", post(handlers::words_frequency))
        .route("/split-text", post(handlers::split_text))
        .route("/thesaurus-inflated", post(handlers::thesaurus_inflated))
        .route("/thesaurus-inflated-phrase", post(handlers::thesaurus_inflated_phrase))
        .route("/thesaurus-custom", post(handlers::add_custom_synonyms))
        .route(
            "/thesaurus-custom/:word",
            get(handlers::get_custom_synonyms).delete(handlers::delete_custom_synonyms),
        )
        .with_state(service);

    if let Some(folder) = config.served_static_folder() {
        info!("Serving static files from {}", folder.display());
        router = router
            .nest_service("/static", ServeDir::new(folder))
            .route_service("/", ServeFile::new(folder.join("index.html")));
    }

    router
        .layer(axum::middleware::from_fn(middleware::request_context))
        .layer(cors_layer(&config.effective_origins()))
}

/// Spawn the periodic health probe; it stops when `shutdown` fires.
pub fn spawn_health_probe(
    service: Arc<ThesaurusService>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            tokio::select! {
                _ = interval.tick() => match service.database_info() {
                    Ok(info) => debug!(
                        "Health probe: '{}' {} answers, {} senses, up {}s",
                        info.name,
                        info.version,
                        info.senses,
                        service.uptime().num_seconds()
                    ),
                    Err(e) => warn!("Health probe: {e}"),
                },
                _ = shutdown.recv() => {
                    debug!("Health probe received shutdown signal");
                    break;
                }
            }
        }
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Cannot listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

/// The HTTP server.
pub struct Server {
    service: Arc<ThesaurusService>,
    shutdown_tx: broadcast::Sender<()>,
    health_handle: Option<JoinHandle<()>>,
}

impl Server {
    pub fn new(service: Arc<ThesaurusService>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Server {
            service,
            shutdown_tx,
            health_handle: None,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.service.clone())
    }

    /// Bind the configured address and serve until interrupted.
    pub async fn serve(mut self) -> Result<()> {
        let config = self.service.config();
        let address = config.bind_address();
        let router = self.router();

        self.health_handle = Some(spawn_health_probe(
            self.service.clone(),
            config.healthcheck_interval(),
            self.shutdown_tx.subscribe(),
        ));

        let listener = tokio::net::TcpListener::bind(&address).await?;
        info!(
            "Ghostwriter listening on http://{address} (nlp: {}, lexicon: {})",
            self.service.is_nlp_available(),
            self.service.is_lexicon_available()
        );
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.health_handle.take() {
            handle.abort();
            debug!("Server dropped, health probe stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn test_health_probe_stops_on_shutdown() {
        let service = Arc::new(ThesaurusService::from_config(&AppConfig::default()));
        let (tx, rx) = broadcast::channel(1);
        let handle = spawn_health_probe(service, Duration::from_millis(10), rx);
        tokio::time::sleep(Duration::from_millis(30)).await;
        tx.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        let _layer = cors_layer(&["http://localhost:7860".to_string(), "bad\norigin".to_string()]);
    }
}
