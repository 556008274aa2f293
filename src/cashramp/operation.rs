//! Registry of the named operations and the argument shaping for each.
//!
//! Every [`Operation`] knows its result field (the key under `data` in the
//! response) and its GraphQL document. [`GraphQlOperation`] pairs those with
//! the variables built from caller arguments, ready for dispatch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::types::{
    CustomerDetails, HostedPaymentParams, PaymentMethodOptions, RampQuoteParams,
    WithdrawOnchainParams,
};
use super::{mutations, queries};

/// Which spelling of the wire names to send.
///
/// `Legacy` matches the names the deployed client has always sent, misspellings
/// included (`trnasactionHash`, `initiateHostedPaymnet`, `redirect_url`).
/// `Corrected` sends the names the documents declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireNames {
    #[default]
    Legacy,
    Corrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AvailableCountries,
    MarketRate,
    PaymentMethodTypes,
    RampableAssets,
    RampLimits,
    PaymentRequest,
    Account,
    OnchainWithdrawal,
    RampQuote,
    RefreshRampQuote,
    ConfirmTransaction,
    InitiateHostedPayment,
    CancelHostedPayment,
    CreateCustomer,
    AddPaymentMethod,
    WithdrawOnchain,
    InitiateRampQuoteDeposit,
    MarkDepositAsPaid,
    CancelDeposit,
}

impl Operation {
    pub const ALL: [Operation; 19] = [
        Operation::AvailableCountries,
        Operation::MarketRate,
        Operation::PaymentMethodTypes,
        Operation::RampableAssets,
        Operation::RampLimits,
        Operation::PaymentRequest,
        Operation::Account,
        Operation::OnchainWithdrawal,
        Operation::RampQuote,
        Operation::RefreshRampQuote,
        Operation::ConfirmTransaction,
        Operation::InitiateHostedPayment,
        Operation::CancelHostedPayment,
        Operation::CreateCustomer,
        Operation::AddPaymentMethod,
        Operation::WithdrawOnchain,
        Operation::InitiateRampQuoteDeposit,
        Operation::MarkDepositAsPaid,
        Operation::CancelDeposit,
    ];

    /// Key of the result under `data` in the response.
    pub fn name(self, wire: WireNames) -> &'static str {
        match self {
            Operation::AvailableCountries => "availableCountries",
            Operation::MarketRate => "marketRate",
            Operation::PaymentMethodTypes => "p2pPaymentMethodTypes",
            Operation::RampableAssets => "rampableAssets",
            Operation::RampLimits => "rampLimits",
            Operation::PaymentRequest => "merchantPaymentRequest",
            Operation::Account => "account",
            Operation::OnchainWithdrawal => "onchainWithdrawal",
            Operation::RampQuote => "rampQuote",
            Operation::RefreshRampQuote => "refreshRampQuote",
            Operation::ConfirmTransaction => "confirmTransaction",
            Operation::InitiateHostedPayment => match wire {
                WireNames::Legacy => "initiateHostedPaymnet",
                WireNames::Corrected => "initiateHostedPayment",
            },
            Operation::CancelHostedPayment => "cancelHostedPayment",
            Operation::CreateCustomer => "createCustomer",
            Operation::AddPaymentMethod => "addPaymentMethod",
            Operation::WithdrawOnchain => "withdrawOnchain",
            Operation::InitiateRampQuoteDeposit => "initiateRampQuoteDeposit",
            Operation::MarkDepositAsPaid => "markDepositAsPaid",
            Operation::CancelDeposit => "cancelDeposit",
        }
    }

    pub fn document(self, wire: WireNames) -> &'static str {
        match self {
            Operation::AvailableCountries => queries::AVAILABLE_COUNTRIES,
            Operation::MarketRate => queries::MARKET_RATE,
            Operation::PaymentMethodTypes => queries::PAYMENT_METHOD_TYPES,
            Operation::RampableAssets => queries::RAMPABLE_ASSETS,
            Operation::RampLimits => queries::RAMP_LIMITS,
            Operation::PaymentRequest => queries::PAYMENT_REQUEST,
            Operation::Account => queries::ACCOUNT,
            Operation::OnchainWithdrawal => queries::ONCHAIN_WITHDRAWAL,
            Operation::RampQuote => match wire {
                WireNames::Legacy => queries::RAMP_QUOTE,
                WireNames::Corrected => queries::RAMP_QUOTE_CORRECTED,
            },
            Operation::RefreshRampQuote => queries::REFRESH_RAMP_QUOTE,
            Operation::ConfirmTransaction => mutations::CONFIRM_TRANSACTION,
            Operation::InitiateHostedPayment => mutations::INITIATE_HOSTED_PAYMENT,
            Operation::CancelHostedPayment => mutations::CANCEL_HOSTED_PAYMENT,
            Operation::CreateCustomer => mutations::CREATE_CUSTOMER,
            Operation::AddPaymentMethod => mutations::ADD_PAYMENT_METHOD,
            Operation::WithdrawOnchain => mutations::WITHDRAW_ONCHAIN,
            Operation::InitiateRampQuoteDeposit => mutations::INITIATE_RAMP_QUOTE_DEPOSIT,
            Operation::MarkDepositAsPaid => mutations::MARK_DEPOSIT_AS_PAID,
            Operation::CancelDeposit => mutations::CANCEL_DEPOSIT,
        }
    }

    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Operation::ConfirmTransaction
                | Operation::InitiateHostedPayment
                | Operation::CancelHostedPayment
                | Operation::CreateCustomer
                | Operation::AddPaymentMethod
                | Operation::WithdrawOnchain
                | Operation::InitiateRampQuoteDeposit
                | Operation::MarkDepositAsPaid
                | Operation::CancelDeposit
        )
    }
}

/// A fully shaped request: result field, document and variables.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlOperation {
    pub operation: Operation,
    pub name: &'static str,
    pub query: &'static str,
    pub variables: Map<String, Value>,
}

fn variables<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Amounts go on the wire as JSON numbers.
fn amount(value: Decimal) -> Value {
    rust_decimal::serde::float::serialize(&value, serde_json::value::Serializer)
        .unwrap_or(Value::Null)
}

fn optional_amount(value: Option<Decimal>) -> Value {
    value.map_or(Value::Null, amount)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl GraphQlOperation {
    fn new(operation: Operation, wire: WireNames, variables: Map<String, Value>) -> Self {
        Self {
            operation,
            name: operation.name(wire),
            query: operation.document(wire),
            variables,
        }
    }

    fn plain(operation: Operation, variables: Map<String, Value>) -> Self {
        Self::new(operation, WireNames::Legacy, variables)
    }

    // Queries

    pub fn available_countries() -> Self {
        Self::plain(Operation::AvailableCountries, Map::new())
    }

    pub fn market_rate(country_code: &str) -> Self {
        Self::plain(
            Operation::MarketRate,
            variables([("countryCode", json!(country_code))]),
        )
    }

    pub fn payment_method_types(country_code: &str, wire: WireNames) -> Self {
        let key = match wire {
            WireNames::Legacy => "countryCode",
            WireNames::Corrected => "country",
        };
        Self::new(
            Operation::PaymentMethodTypes,
            wire,
            variables([(key, json!(country_code))]),
        )
    }

    pub fn rampable_assets() -> Self {
        Self::plain(Operation::RampableAssets, Map::new())
    }

    pub fn ramp_limits() -> Self {
        Self::plain(Operation::RampLimits, Map::new())
    }

    pub fn payment_request(reference: &str) -> Self {
        Self::plain(
            Operation::PaymentRequest,
            variables([("reference", json!(reference))]),
        )
    }

    pub fn account() -> Self {
        Self::plain(Operation::Account, Map::new())
    }

    pub fn onchain_withdrawal(withdrawal_id: &str) -> Self {
        Self::plain(
            Operation::OnchainWithdrawal,
            variables([("withdrawalId", json!(withdrawal_id))]),
        )
    }

    pub fn ramp_quote(params: &RampQuoteParams, wire: WireNames) -> Self {
        Self::new(Operation::RampQuote, wire, object(json!(params)))
    }

    pub fn refresh_ramp_quote(ramp_quote: &str, amount: Option<Decimal>) -> Self {
        Self::plain(
            Operation::RefreshRampQuote,
            variables([
                ("rampQuote", json!(ramp_quote)),
                ("amount", optional_amount(amount)),
            ]),
        )
    }

    // Mutations

    pub fn confirm_transaction(
        payment_request: &str,
        transaction_hash: &str,
        wire: WireNames,
    ) -> Self {
        let hash_key = match wire {
            WireNames::Legacy => "trnasactionHash",
            WireNames::Corrected => "transactionHash",
        };
        Self::new(
            Operation::ConfirmTransaction,
            wire,
            variables([
                ("paymentRequest", json!(payment_request)),
                (hash_key, json!(transaction_hash)),
            ]),
        )
    }

    pub fn initiate_hosted_payment(params: &HostedPaymentParams, wire: WireNames) -> Self {
        let redirect_key = match wire {
            WireNames::Legacy => "redirect_url",
            WireNames::Corrected => "redirectUrl",
        };
        Self::new(
            Operation::InitiateHostedPayment,
            wire,
            variables([
                ("amount", amount(params.amount)),
                ("currency", json!(params.currency.as_deref().unwrap_or("usd"))),
                ("countryCode", json!(params.country_code)),
                ("paymentType", json!(params.payment_type)),
                ("reference", json!(params.reference)),
                (redirect_key, json!(params.redirect_url)),
                ("firstName", json!(params.first_name)),
                ("lastName", json!(params.last_name)),
                ("email", json!(params.email)),
            ]),
        )
    }

    pub fn cancel_hosted_payment(payment_request: &str) -> Self {
        Self::plain(
            Operation::CancelHostedPayment,
            variables([("paymentRequest", json!(payment_request))]),
        )
    }

    pub fn create_customer(details: &CustomerDetails) -> Self {
        Self::plain(Operation::CreateCustomer, object(json!(details)))
    }

    pub fn add_payment_method(options: &PaymentMethodOptions) -> Self {
        Self::plain(Operation::AddPaymentMethod, object(json!(options)))
    }

    pub fn withdraw_onchain(params: &WithdrawOnchainParams) -> Self {
        Self::plain(Operation::WithdrawOnchain, object(json!(params)))
    }

    pub fn initiate_ramp_quote_deposit(ramp_quote: &str, reference: Option<&str>) -> Self {
        Self::plain(
            Operation::InitiateRampQuoteDeposit,
            variables([("rampQuote", json!(ramp_quote)), ("reference", json!(reference))]),
        )
    }

    pub fn mark_deposit_as_paid(payment_request: &str, receipt: Option<&str>) -> Self {
        Self::plain(
            Operation::MarkDepositAsPaid,
            variables([
                ("paymentRequest", json!(payment_request)),
                ("receipt", json!(receipt)),
            ]),
        )
    }

    pub fn cancel_deposit(payment_request: &str) -> Self {
        Self::plain(
            Operation::CancelDeposit,
            variables([("paymentRequest", json!(payment_request))]),
        )
    }
}
