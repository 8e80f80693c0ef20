use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::session::RouteSession;
use crate::storage::{JsonFileStore, DEFAULT_GRAPH_FILE};
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub graph_file: PathBuf,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            graph_file: PathBuf::from(DEFAULT_GRAPH_FILE),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads `[port] [graph_file]`; a port that does not parse is ignored
    /// with a warning.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(port) = args.next() {
            let port = port.as_ref();
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => warn!("ignoring port {:?} ({}), using {}", port, e, config.port),
            }
        }
        if let Some(file) = args.next() {
            config.graph_file = PathBuf::from(file.as_ref());
        }
        config
    }
}

/// Builds the application around an already opened session
pub fn build_app(session: RouteSession, enable_cors: bool) -> Router {
    let app = create_router().with_state(AppState::new(session));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = RouteSession::open(Box::new(JsonFileStore::new(&config.graph_file)));
    let app = build_app(session, config.enable_cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("route finder listening on http://{}", addr);
    info!("graph file: {}", config.graph_file.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
