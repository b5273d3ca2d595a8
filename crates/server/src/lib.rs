use crate::{
    config::Config, doc::ApiDoc, error::StartupError, state::AppState,
    utils::shutdown::shutdown_signal,
};
use axum::Router;
use database::db::create_connection;
use log::{info, warn};
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod state;
pub mod utils;

/// Builds the application router.
///
/// When `auth` is given every route except `/health` and the documentation
/// requires a valid bearer token.
pub fn app(state: AppState, auth: Option<OAuth2ResourceServer>) -> Router {
    let api = OpenApiRouter::with_openapi(ApiDoc::openapi()).merge(routes::api());
    let api = match auth {
        Some(auth) => api.layer(ServiceBuilder::new().layer(auth.into_layer())),
        None => api,
    };

    let (router, openapi) = api.merge(routes::health::router()).split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Connects to the database, applies migrations and serves until a shutdown
/// signal arrives
pub async fn run(config: Config) -> Result<(), StartupError> {
    let db = create_connection(&config.database_url).await?;

    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    let auth = match &config.oidc_issuer_url {
        Some(issuer_url) => Some(
            <OAuth2ResourceServer>::builder()
                .issuer_url(issuer_url.as_str())
                .build()
                .await
                .map_err(|e| StartupError::Auth(format!("{e:?}")))?,
        ),
        None => {
            warn!("OIDC_ISSUER_URL is not set, serving without authentication");
            None
        }
    };

    let state = AppState {
        db,
        auth_enabled: auth.is_some(),
    };
    let app = app(state, auth);

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
