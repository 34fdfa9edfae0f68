//! API request handlers.

use crate::db::{QUOTE_REQUEST_COLLECTION, TRADE_ACCOUNT_COLLECTION};
use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse, truncate_message};
use crate::models::{
    ApiInfoResponse, AutoReplyResponse, ContactEmailPayload, DiagnosticsResponse, LeadResponse,
    QuoteRequest, TradeAccountRequest,
};
use crate::state::AppState;
use crate::validation;
use axum::Json;
use axum::extract::State;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;


/// Characters of a probe error surfaced in the diagnostic snapshot.
const PROBE_ERROR_LEN: usize = 50;
/// Collections reported by the diagnostic snapshot.
const PROBE_COLLECTION_LIMIT: usize = 10;

// ============================================================================
// Banner
// ============================================================================

/// API banner.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = ApiInfoResponse)
    ),
    tag = "Diagnostics"
)]
pub async fn root() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "Verdure Mulch Glue API running".to_string(),
    })
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Store connectivity diagnostics.
///
/// Every probe is independently guarded: the endpoint reports failures inside
/// the snapshot and never returns an error status, even with the store
/// completely unreachable.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Diagnostic snapshot", body = DiagnosticsResponse)
    ),
    tag = "Diagnostics"
)]
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let database_url = if state.config.store.url.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let mut snapshot = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: database_url.to_string(),
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(store) = &state.store {
        snapshot.database_name = Some(store.name().to_string());
        snapshot.connection_status = "Connected".to_string();

        match store.collection_names().await {
            Ok(names) => {
                snapshot.collections = names.into_iter().take(PROBE_COLLECTION_LIMIT).collect();
                snapshot.database = "✅ Connected & Working".to_string();
            }
            Err(err) => {
                snapshot.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate_message(&err.to_string(), PROBE_ERROR_LEN)
                );
            }
        }
    }

    Json(snapshot)
}

// ============================================================================
// Lead Capture
// ============================================================================

/// Submit a trade-account request.
#[utoipa::path(
    post,
    path = "/api/trade-account",
    request_body = TradeAccountRequest,
    responses(
        (status = 200, description = "Submission stored", body = LeadResponse),
        (status = 422, description = "Validation failure", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Leads"
)]
pub async fn create_trade_account(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<LeadResponse>, ApiError> {
    let record: TradeAccountRequest = validation::TRADE_ACCOUNT.decode(body)?;
    let id = state
        .store()?
        .insert(TRADE_ACCOUNT_COLLECTION, &record)
        .await?;

    info!(collection = TRADE_ACCOUNT_COLLECTION, %id, "stored trade account request");

    Ok(Json(LeadResponse {
        id,
        status: "ok".to_string(),
        message: "Trade account request received".to_string(),
    }))
}

/// Submit a quote request.
#[utoipa::path(
    post,
    path = "/api/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Submission stored", body = LeadResponse),
        (status = 422, description = "Validation failure", body = ValidationErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "Leads"
)]
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<LeadResponse>, ApiError> {
    let record: QuoteRequest = validation::QUOTE_REQUEST.decode(body)?;
    let id = state
        .store()?
        .insert(QUOTE_REQUEST_COLLECTION, &record)
        .await?;

    info!(collection = QUOTE_REQUEST_COLLECTION, %id, "stored quote request");

    Ok(Json(LeadResponse {
        id,
        status: "ok".to_string(),
        message: "Quote request received".to_string(),
    }))
}

// ============================================================================
// Contact Email Acknowledgement
// ============================================================================

/// Acknowledge a contact email.
///
/// Validates the payload shape only; nothing is stored or delivered.
#[utoipa::path(
    post,
    path = "/api/email/auto-reply",
    request_body = ContactEmailPayload,
    responses(
        (status = 200, description = "Acknowledged", body = AutoReplyResponse),
        (status = 422, description = "Validation failure", body = ValidationErrorResponse)
    ),
    tag = "Email"
)]
pub async fn email_auto_reply(
    Json(body): Json<Value>,
) -> Result<Json<AutoReplyResponse>, ApiError> {
    let payload: ContactEmailPayload = validation::CONTACT_EMAIL.decode(body)?;

    Ok(Json(AutoReplyResponse {
        status: "queued".to_string(),
        to: payload.to,
    }))
}
