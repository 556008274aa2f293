pub mod client;
pub mod error;
pub mod mutations;
pub mod operation;
pub mod queries;
pub mod types;

pub use client::CashrampClient;
pub use error::{CashrampError, ErrorKind, Result};
pub use operation::{GraphQlOperation, Operation, WireNames};
pub use types::{
    CustomerDetails, HostedPaymentParams, PaymentMethodField, PaymentMethodOptions,
    RampQuoteParams, Response, WithdrawOnchainParams,
};
