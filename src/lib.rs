pub mod cashramp;
pub mod config;

pub use cashramp::{
    CashrampClient, CashrampError, CustomerDetails, ErrorKind, GraphQlOperation,
    HostedPaymentParams, Operation, PaymentMethodField, PaymentMethodOptions, RampQuoteParams,
    Response, Result, WireNames, WithdrawOnchainParams,
};
pub use config::{ClientConfig, Environment};
pub use rust_decimal::Decimal;
