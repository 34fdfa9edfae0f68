//! # Verdure Lead-Capture Backend - REST API Server
//!
//! A small REST API backend that accepts lead-capture form submissions for
//! Verdure (trade-account requests, quote requests, and a contact-email
//! acknowledgement), validates them field by field, and persists accepted
//! submissions to a MongoDB document store. Built with
//! [Axum](https://crates.io/crates/axum) for async HTTP handling and provides
//! OpenAPI/Swagger documentation via [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Exhaustive Validation**: Declarative per-field rule sets that report
//!   every violation at once instead of failing on the first one.
//!
//! - **Document Storage**: Each accepted submission becomes one document in a
//!   collection named after its record kind (`tradeaccount`, `quoterequest`).
//!
//! - **OpenAPI Documentation**: Auto-generated Swagger UI for API exploration
//!   and testing at `/swagger-ui/`.
//!
//! - **CORS Support**: Fully open cross-origin policy (credentials included)
//!   for the public lead-capture form.
//!
//! - **Structured Logging**: Request tracing with `tower-http` for debugging
//!   and monitoring.
//!
//! - **Degraded Mode**: Missing store configuration leaves the process
//!   serving; only the storage-backed endpoints report failures.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | Environment-driven configuration |
//! | [`db`] | Document store gateway |
//! | [`error`] | API error types with `IntoResponse` implementation |
//! | [`models`] | Request records and response DTOs with OpenAPI schemas |
//! | [`state`] | Application state management |
//! | [`validation`] | Declarative field-rule schemas and the checker |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | API banner |
//! | GET | `/test` | Store connectivity diagnostics (never fails) |
//! | POST | `/api/trade-account` | Submit a trade-account request |
//! | POST | `/api/quote` | Submit a quote request |
//! | POST | `/api/email/auto-reply` | Acknowledge a contact email |
//!
//! ## Example Usage
//!
//! ### Starting the Server
//!
//! ```bash
//! # Development mode (no store; storage endpoints report failures)
//! cargo run
//!
//! # With a document store and custom port
//! DATABASE_URL=mongodb://localhost:27017 DATABASE_NAME=verdure PORT=3000 cargo run
//! ```
//!
//! ### API Requests
//!
//! ```bash
//! # Submit a quote request
//! curl -X POST http://localhost:8000/api/quote \
//!   -H "Content-Type: application/json" \
//!   -d '{"company_name": "Acme", "contact_name": "Jo", "email": "jo@acme.com", "quantity_bottles": 50}'
//!
//! # Check store connectivity
//! curl http://localhost:8000/test
//! ```
//!
//! ## Swagger UI
//!
//! Once the server is running, access the interactive API documentation at:
//!
//! ```text
//! http://localhost:8000/swagger-ui/
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod validation;
