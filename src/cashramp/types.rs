use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{CashrampError, ErrorKind, Result};

/// Uniform result of every client call.
///
/// On success `error` and `kind` are `None`; on failure `result` is `None`
/// and `error` holds a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub result: Option<Value>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl Response {
    pub fn ok(result: Option<Value>) -> Self {
        Self {
            success: true,
            result: result.filter(|v| !v.is_null()),
            error: None,
            kind: None,
        }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(message.into()),
            kind: Some(kind),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Converts the envelope into a `Result`, keeping the error kind.
    pub fn into_result(self) -> Result<Option<Value>> {
        if self.success {
            return Ok(self.result);
        }
        Err(CashrampError::Request {
            kind: self.kind.unwrap_or(ErrorKind::Transport),
            message: self.error.unwrap_or_default(),
        })
    }

    /// Deserializes a successful result into `T`.
    pub fn result_as<T: DeserializeOwned>(self) -> Result<Option<T>> {
        match self.into_result()? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

/// JSON body posted to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: &'a Map<String, Value>,
}

/// Body of a 200 response.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlPayload {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<Value>>,
}

impl GraphQlPayload {
    /// Message of the first reported error, if the `errors` array is non-empty.
    pub fn first_error(&self) -> Option<String> {
        let first = self.errors.as_ref()?.first()?;
        Some(
            first
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| first.to_string(), str::to_string),
        )
    }

    pub fn take_field(self, name: &str) -> Option<Value> {
        match self.data {
            Some(Value::Object(mut data)) => data.remove(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampQuoteParams {
    pub customer: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub payment_method_type: String,
}

/// Arguments of `initiate_hosted_payment`. `currency` falls back to `usd`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostedPaymentParams {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Option<String>,
    pub country_code: String,
    pub payment_type: String,
    pub reference: String,
    pub redirect_url: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Country ID as returned by `available_countries`.
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOptions {
    pub customer: String,
    pub payment_method_type: String,
    pub fields: Vec<PaymentMethodField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodField {
    pub identifier: String,
    pub value: String,
}

impl PaymentMethodField {
    pub fn new(identifier: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawOnchainParams {
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_usd: Decimal,
}
