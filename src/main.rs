//! Verdure Lead-Capture Backend Server
//!
//! REST API server that validates lead-capture submissions and persists them
//! to a document store.

use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use verdure_leads_backend::api::create_router;
use verdure_leads_backend::config::Config;
use verdure_leads_backend::db::DocumentStore;
use verdure_leads_backend::state::AppState;

use verdure_leads_backend::error::{ErrorResponse, ValidationErrorResponse};
use verdure_leads_backend::models::{
    ApiInfoResponse, AutoReplyResponse, CompanySize, ContactEmailPayload, DiagnosticsResponse,
    LeadResponse, QuoteRequest, TradeAccountRequest,
};
use verdure_leads_backend::validation::Violation;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        verdure_leads_backend::api::handlers::root,
        verdure_leads_backend::api::handlers::diagnostics,
        verdure_leads_backend::api::handlers::create_trade_account,
        verdure_leads_backend::api::handlers::create_quote,
        verdure_leads_backend::api::handlers::email_auto_reply,
    ),
    components(
        schemas(
            ApiInfoResponse,
            DiagnosticsResponse,
            TradeAccountRequest,
            QuoteRequest,
            ContactEmailPayload,
            CompanySize,
            LeadResponse,
            AutoReplyResponse,
            ErrorResponse,
            ValidationErrorResponse,
            Violation,
        )
    ),
    tags(
        (name = "Diagnostics", description = "Banner and store connectivity checks"),
        (name = "Leads", description = "Lead-capture submissions"),
        (name = "Email", description = "Contact email acknowledgement"),
    ),
    info(
        title = "Verdure Mulch Glue API",
        version = "1.0.0",
        description = "Lead-capture backend for Verdure trade accounts and quotes",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Read configuration once at startup
    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Initialize the document store; its absence degrades the process rather
    // than crashing it.
    let store = match &config.store.url {
        Some(url) => match DocumentStore::connect(url, &config.store.database_name).await {
            Ok(store) => Some(store),
            Err(err) => {
                warn!("Document store unavailable: {err}");
                None
            }
        },
        None => {
            warn!("DATABASE_URL not set, running without a document store");
            None
        }
    };

    let state = Arc::new(match store {
        Some(store) => AppState::with_store(config, store),
        None => AppState::new(config),
    });

    info!("Starting Verdure Lead-Capture Backend on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui/", addr);

    // Configure CORS: every origin, method and header is permitted with
    // credentials, so origins are mirrored rather than wildcarded.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
