//! Declarative field validation for incoming submissions.
//!
//! Each record kind is described by a [`Schema`]: a static slice of
//! [`FieldRule`]s. Checking a request body is one generic traversal over that
//! slice, collecting every violation instead of stopping at the first, so the
//! caller can correct a whole form in one round trip. New fields are added by
//! extending the rule slice, not by touching control flow.

use crate::error::ApiError;
use crate::models::CompanySize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use utoipa::ToSchema;


/// Field name used when the body itself is not a JSON object.
pub const BODY_FIELD: &str = "$body";

/// A single field that failed its declared constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Name of the offending field.
    pub field: String,
    /// The rule the value violated.
    pub rule: String,
}

impl Violation {
    fn new(field: &str, rule: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule: rule.into(),
        }
    }
}

/// Constraint applied to a present field value.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Any string.
    Text,
    /// A string with at least one character.
    NonEmptyText,
    /// A syntactically valid email address.
    Email,
    /// An integer with an inclusive lower bound.
    Integer {
        /// Smallest accepted value.
        min: i64,
    },
    /// A string drawn from a fixed set of values.
    OneOf(&'static [&'static str]),
}

impl FieldKind {
    /// Checks a present (non-null) value against this constraint.
    fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            Self::Text => match value.as_str() {
                Some(_) => Ok(()),
                None => Err("must be a string".to_string()),
            },
            Self::NonEmptyText => match value.as_str() {
                Some(text) if !text.is_empty() => Ok(()),
                Some(_) => Err("must be a non-empty string".to_string()),
                None => Err("must be a string".to_string()),
            },
            Self::Email => match value.as_str() {
                Some(text) if validator::validate_email(text) => Ok(()),
                _ => Err("must be a valid email address".to_string()),
            },
            Self::Integer { min } => match value.as_i64() {
                Some(number) if number >= *min => Ok(()),
                Some(_) => Err(format!("must be at least {min}")),
                None => Err("must be an integer".to_string()),
            },
            Self::OneOf(allowed) => match value.as_str() {
                Some(text) if allowed.contains(&text) => Ok(()),
                _ => Err(format!("must be one of: {}", allowed.join(", "))),
            },
        }
    }
}

/// Declared constraint for one field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field name as it appears in the JSON body.
    pub name: &'static str,
    /// Whether the field must be present and non-null.
    pub required: bool,
    /// Constraint applied when the field is present.
    pub kind: FieldKind,
}

/// Validation schema for one record kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Record name, used in internal error messages.
    pub record: &'static str,
    /// Per-field rules.
    pub fields: &'static [FieldRule],
}

impl Schema {
    /// Checks a request body against every field rule.
    ///
    /// Collects all violations: missing required fields, wrong types,
    /// out-of-range values, values outside an enumeration, and malformed
    /// email addresses. A `null` value is treated as absent.
    ///
    /// # Errors
    /// Returns the full violation list if any rule fails.
    pub fn check(&self, body: &Value) -> Result<(), Vec<Violation>> {
        let Some(object) = body.as_object() else {
            return Err(vec![Violation::new(BODY_FIELD, "must be a JSON object")]);
        };

        let mut violations = Vec::new();
        for rule in self.fields {
            match object.get(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        violations.push(Violation::new(rule.name, "is required"));
                    }
                }
                Some(value) => {
                    if let Err(rule_text) = rule.kind.check(value) {
                        violations.push(Violation::new(rule.name, rule_text));
                    }
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validates a request body and deserializes it into the typed record.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] with the full violation list on
    /// failed checks. A decode failure after a passing check means the rule
    /// slice and the record type drifted apart and surfaces as
    /// [`ApiError::Internal`].
    pub fn decode<T: DeserializeOwned>(&self, body: Value) -> Result<T, ApiError> {
        self.check(&body).map_err(ApiError::Validation)?;
        serde_json::from_value(body).map_err(|err| {
            ApiError::Internal(format!("decoding validated {} failed: {err}", self.record))
        })
    }
}

/// Rules for [`crate::models::TradeAccountRequest`].
pub const TRADE_ACCOUNT: Schema = Schema {
    record: "TradeAccountRequest",
    fields: &[
        FieldRule {
            name: "company_name",
            required: true,
            kind: FieldKind::NonEmptyText,
        },
        FieldRule {
            name: "contact_name",
            required: true,
            kind: FieldKind::NonEmptyText,
        },
        FieldRule {
            name: "email",
            required: true,
            kind: FieldKind::Email,
        },
        FieldRule {
            name: "phone",
            required: true,
            kind: FieldKind::Text,
        },
        FieldRule {
            name: "company_size",
            required: false,
            kind: FieldKind::OneOf(&CompanySize::BRACKETS),
        },
        FieldRule {
            name: "monthly_volume_estimate_l",
            required: false,
            kind: FieldKind::Integer { min: 0 },
        },
        FieldRule {
            name: "address",
            required: false,
            kind: FieldKind::Text,
        },
        FieldRule {
            name: "notes",
            required: false,
            kind: FieldKind::Text,
        },
    ],
};

/// Rules for [`crate::models::QuoteRequest`].
pub const QUOTE_REQUEST: Schema = Schema {
    record: "QuoteRequest",
    fields: &[
        FieldRule {
            name: "company_name",
            required: true,
            kind: FieldKind::NonEmptyText,
        },
        FieldRule {
            name: "contact_name",
            required: true,
            kind: FieldKind::NonEmptyText,
        },
        FieldRule {
            name: "email",
            required: true,
            kind: FieldKind::Email,
        },
        FieldRule {
            name: "phone",
            required: false,
            kind: FieldKind::Text,
        },
        FieldRule {
            name: "quantity_bottles",
            required: true,
            kind: FieldKind::Integer { min: 1 },
        },
        FieldRule {
            name: "delivery_postcode",
            required: false,
            kind: FieldKind::Text,
        },
        FieldRule {
            name: "need_by_days",
            required: false,
            kind: FieldKind::Integer { min: 0 },
        },
        FieldRule {
            name: "notes",
            required: false,
            kind: FieldKind::Text,
        },
    ],
};

/// Rules for [`crate::models::ContactEmailPayload`].
pub const CONTACT_EMAIL: Schema = Schema {
    record: "ContactEmailPayload",
    fields: &[
        FieldRule {
            name: "to",
            required: true,
            kind: FieldKind::Email,
        },
        FieldRule {
            name: "subject",
            required: true,
            kind: FieldKind::Text,
        },
        FieldRule {
            name: "body",
            required: true,
            kind: FieldKind::Text,
        },
    ],
};
