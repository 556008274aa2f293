use std::process::ExitCode;
use std::time::Duration;

use cashramp::{
    CashrampClient, ClientConfig, CustomerDetails, Decimal, HostedPaymentParams,
    PaymentMethodField, PaymentMethodOptions, RampQuoteParams, Response, WireNames,
    WithdrawOnchainParams,
};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser, Debug)]
#[command(
    name = "cashramp",
    about = "Command-line client for the Cashramp on/off-ramp API",
    version
)]
pub struct Args {
    /// API environment (live or test)
    #[arg(long, short, env = "CASHRAMP_ENV", default_value = "live")]
    pub env: String,

    /// API secret key
    #[arg(long, env = "CASHRAMP_SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Send requests to this URL instead of the environment's endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Send corrected variable and operation names instead of the legacy ones
    #[arg(long)]
    pub corrected_wire_names: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Countries Cashramp is available in
    AvailableCountries,
    /// Market rate for a country
    MarketRate {
        #[arg(long)]
        country_code: String,
    },
    /// Payment method types available in a country
    PaymentMethodTypes {
        #[arg(long)]
        country_code: String,
    },
    /// Assets supported by the Onchain Ramp
    RampableAssets,
    /// Onchain Ramp limits
    RampLimits,
    /// Look up a payment request by reference
    PaymentRequest {
        #[arg(long)]
        reference: String,
    },
    /// Account balance and deposit address
    Account,
    /// Look up an onchain withdrawal
    OnchainWithdrawal {
        #[arg(long)]
        withdrawal_id: String,
    },
    /// Request a ramp quote
    RampQuote {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        payment_method_type: String,
    },
    /// Refresh an existing ramp quote
    RefreshRampQuote {
        #[arg(long)]
        ramp_quote: String,
        #[arg(long)]
        amount: Option<Decimal>,
    },
    /// Confirm a crypto transfer into the escrow address
    ConfirmTransaction {
        #[arg(long)]
        payment_request: String,
        #[arg(long)]
        transaction_hash: String,
    },
    /// Start a hosted payment
    InitiateHostedPayment {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        country_code: String,
        #[arg(long)]
        payment_type: String,
        #[arg(long)]
        reference: String,
        #[arg(long)]
        redirect_url: Option<String>,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
    },
    /// Cancel a hosted payment
    CancelHostedPayment {
        #[arg(long)]
        payment_request: String,
    },
    /// Create a customer profile
    CreateCustomer {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Country ID
        #[arg(long)]
        country: String,
    },
    /// Add a payment method for a customer
    AddPaymentMethod {
        #[arg(long)]
        customer: String,
        #[arg(long)]
        payment_method_type: String,
        /// Field value as identifier=value (repeatable)
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<PaymentMethodField>,
    },
    /// Withdraw balance to an onchain address
    WithdrawOnchain {
        #[arg(long)]
        address: String,
        #[arg(long)]
        amount_usd: Decimal,
    },
    /// Initiate a deposit for a ramp quote
    InitiateRampQuoteDeposit {
        #[arg(long)]
        ramp_quote: String,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Mark a deposit as paid
    MarkDepositAsPaid {
        #[arg(long)]
        payment_request: String,
        #[arg(long)]
        receipt: Option<String>,
    },
    /// Cancel a deposit
    CancelDeposit {
        #[arg(long)]
        payment_request: String,
    },
    /// Send an arbitrary GraphQL document
    Raw {
        /// Field under `data` to return
        #[arg(long)]
        name: String,
        #[arg(long)]
        query: String,
        /// Variables as a JSON object
        #[arg(long, value_parser = parse_variables)]
        variables: Option<Map<String, Value>>,
    },
}

fn parse_field(s: &str) -> Result<PaymentMethodField, String> {
    let (identifier, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected identifier=value, got '{s}'"))?;
    Ok(PaymentMethodField::new(identifier, value))
}

fn parse_variables(s: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str(s) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("variables must be a JSON object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn build_client(args: &Args) -> cashramp::Result<CashrampClient> {
    let mut config = ClientConfig::from_env_name(&args.env, args.secret_key.clone())?;
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(ref endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint.clone());
    }
    if args.corrected_wire_names {
        config = config.with_wire_names(WireNames::Corrected);
    }
    CashrampClient::new(config)
}

async fn dispatch(client: &CashrampClient, command: Command) -> Response {
    match command {
        Command::AvailableCountries => client.available_countries().await,
        Command::MarketRate { country_code } => client.market_rate(&country_code).await,
        Command::PaymentMethodTypes { country_code } => {
            client.payment_method_types(&country_code).await
        }
        Command::RampableAssets => client.rampable_assets().await,
        Command::RampLimits => client.ramp_limits().await,
        Command::PaymentRequest { reference } => client.payment_request(&reference).await,
        Command::Account => client.account().await,
        Command::OnchainWithdrawal { withdrawal_id } => {
            client.onchain_withdrawal(&withdrawal_id).await
        }
        Command::RampQuote {
            customer,
            amount,
            currency,
            payment_method_type,
        } => {
            client
                .ramp_quote(&RampQuoteParams {
                    customer,
                    amount,
                    currency,
                    payment_method_type,
                })
                .await
        }
        Command::RefreshRampQuote { ramp_quote, amount } => {
            client.refresh_ramp_quote(&ramp_quote, amount).await
        }
        Command::ConfirmTransaction {
            payment_request,
            transaction_hash,
        } => {
            client
                .confirm_transaction(&payment_request, &transaction_hash)
                .await
        }
        Command::InitiateHostedPayment {
            amount,
            currency,
            country_code,
            payment_type,
            reference,
            redirect_url,
            first_name,
            last_name,
            email,
        } => {
            client
                .initiate_hosted_payment(&HostedPaymentParams {
                    amount,
                    currency,
                    country_code,
                    payment_type,
                    reference,
                    redirect_url,
                    first_name,
                    last_name,
                    email,
                })
                .await
        }
        Command::CancelHostedPayment { payment_request } => {
            client.cancel_hosted_payment(&payment_request).await
        }
        Command::CreateCustomer {
            first_name,
            last_name,
            email,
            country,
        } => {
            client
                .create_customer(&CustomerDetails {
                    first_name,
                    last_name,
                    email,
                    country,
                })
                .await
        }
        Command::AddPaymentMethod {
            customer,
            payment_method_type,
            fields,
        } => {
            client
                .add_payment_method(&PaymentMethodOptions {
                    customer,
                    payment_method_type,
                    fields,
                })
                .await
        }
        Command::WithdrawOnchain {
            address,
            amount_usd,
        } => {
            client
                .withdraw_onchain(&WithdrawOnchainParams {
                    address,
                    amount_usd,
                })
                .await
        }
        Command::InitiateRampQuoteDeposit {
            ramp_quote,
            reference,
        } => {
            client
                .initiate_ramp_quote_deposit(&ramp_quote, reference.as_deref())
                .await
        }
        Command::MarkDepositAsPaid {
            payment_request,
            receipt,
        } => {
            client
                .mark_deposit_as_paid(&payment_request, receipt.as_deref())
                .await
        }
        Command::CancelDeposit { payment_request } => {
            client.cancel_deposit(&payment_request).await
        }
        Command::Raw {
            name,
            query,
            variables,
        } => {
            client
                .send_request(&name, &query, variables.unwrap_or_default())
                .await
        }
    }
}

pub async fn run(args: Args) -> ExitCode {
    let client = match build_client(&args) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let response = dispatch(&client, args.command).await;

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to encode response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
