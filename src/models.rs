//! Request records and response models for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// Company size bracket for trade-account requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CompanySize {
    /// 1-5 employees.
    #[serde(rename = "1-5")]
    OneToFive,
    /// 6-20 employees.
    #[serde(rename = "6-20")]
    SixToTwenty,
    /// 21-50 employees.
    #[serde(rename = "21-50")]
    TwentyOneToFifty,
    /// 51-200 employees.
    #[serde(rename = "51-200")]
    FiftyOneToTwoHundred,
    /// More than 200 employees.
    #[serde(rename = "200+")]
    TwoHundredPlus,
}

impl CompanySize {
    /// Accepted bracket labels, in ascending order.
    pub const BRACKETS: [&'static str; 5] = ["1-5", "6-20", "21-50", "51-200", "200+"];

    /// Returns the bracket label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToFive => "1-5",
            Self::SixToTwenty => "6-20",
            Self::TwentyOneToFifty => "21-50",
            Self::FiftyOneToTwoHundred => "51-200",
            Self::TwoHundredPlus => "200+",
        }
    }
}

impl std::fmt::Display for CompanySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A trade-account request submission.
///
/// Persisted as one document in the `tradeaccount` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TradeAccountRequest {
    /// Company legal name.
    pub company_name: String,
    /// Primary contact name.
    pub contact_name: String,
    /// Work email.
    pub email: String,
    /// Work phone number.
    pub phone: String,
    /// Company size bracket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<CompanySize>,
    /// Estimated monthly usage in litres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_volume_estimate_l: Option<i64>,
    /// Business address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Any additional information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A quote request submission.
///
/// Persisted as one document in the `quoterequest` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Company name.
    pub company_name: String,
    /// Contact person.
    pub contact_name: String,
    /// Email for the quote.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Number of bottles requested.
    pub quantity_bottles: i64,
    /// Delivery postcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_postcode: Option<String>,
    /// When the product is needed, in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_by_days: Option<i64>,
    /// Project details or notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for the contact-email acknowledgement endpoint. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactEmailPayload {
    /// Recipient address.
    pub to: String,
    /// Email subject.
    pub subject: String,
    /// Email body.
    pub body: String,
}

/// Response after storing a lead submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeadResponse {
    /// Store-assigned document identifier.
    pub id: String,
    /// Fixed status, always `"ok"`.
    pub status: String,
    /// Human-readable confirmation message.
    pub message: String,
}

/// Response for the contact-email acknowledgement endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct AutoReplyResponse {
    /// Fixed status, always `"queued"`.
    pub status: String,
    /// Echoed recipient address.
    pub to: String,
}

/// Root endpoint banner.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    /// Banner message.
    pub message: String,
}

/// Diagnostic snapshot returned by the `/test` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    /// Backend process status.
    pub backend: String,
    /// Document store status string.
    pub database: String,
    /// Whether the store connection string is configured.
    pub database_url: String,
    /// Configured database name, if the store client exists.
    pub database_name: Option<String>,
    /// Store client connection status.
    pub connection_status: String,
    /// First collections visible in the store (at most ten).
    pub collections: Vec<String>,
}
