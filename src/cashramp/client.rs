use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::error::{ErrorKind, Result};
use super::operation::GraphQlOperation;
use super::types::{
    CustomerDetails, GraphQlPayload, GraphQlRequest, HostedPaymentParams, PaymentMethodOptions,
    RampQuoteParams, Response, WithdrawOnchainParams,
};
use crate::config::ClientConfig;

const USER_AGENT: &str = concat!("cashramp-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the Cashramp GraphQL API.
///
/// Every method resolves to a [`Response`] envelope; transport, status, parse
/// and GraphQL failures are reported there instead of as `Err`.
#[derive(Debug, Clone)]
pub struct CashrampClient {
    http: Client,
    config: ClientConfig,
}

impl CashrampClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        info!(
            "Cashramp client initialized for {} ({})",
            config.environment(),
            config.endpoint()
        );

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Posts `query` with `variables` and unwraps `data[name]` from the reply.
    pub async fn send_request(
        &self,
        name: &str,
        query: &str,
        variables: Map<String, Value>,
    ) -> Response {
        debug!("Sending {} to {}", name, self.config.endpoint());

        let response = match self
            .http
            .post(self.config.endpoint())
            .bearer_auth(self.config.secret_key())
            .json(&GraphQlRequest {
                query,
                variables: &variables,
            })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return failed(name, ErrorKind::Transport, e.to_string()),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return failed(name, ErrorKind::HttpStatus, status_message(status));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return failed(name, ErrorKind::Transport, e.to_string()),
        };

        let payload: GraphQlPayload = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("{} returned an unparsable body: {}", name, e);
                return failed(name, ErrorKind::Parse, status_message(status));
            }
        };

        if let Some(message) = payload.first_error() {
            return failed(name, ErrorKind::GraphQl, message);
        }

        Response::ok(payload.take_field(name))
    }

    async fn execute(&self, operation: GraphQlOperation) -> Response {
        self.send_request(operation.name, operation.query, operation.variables).await
    }

    // Queries

    /// Countries Cashramp is available in.
    pub async fn available_countries(&self) -> Response {
        self.execute(GraphQlOperation::available_countries()).await
    }

    /// Market rate for a country.
    pub async fn market_rate(&self, country_code: &str) -> Response {
        self.execute(GraphQlOperation::market_rate(country_code)).await
    }

    /// Payment method types available in a country.
    pub async fn payment_method_types(&self, country_code: &str) -> Response {
        self.execute(GraphQlOperation::payment_method_types(country_code, self.config.wire_names()))
            .await
    }

    /// Assets that can be on/off-ramped with the Onchain Ramp.
    pub async fn rampable_assets(&self) -> Response {
        self.execute(GraphQlOperation::rampable_assets()).await
    }

    pub async fn ramp_limits(&self) -> Response {
        self.execute(GraphQlOperation::ramp_limits()).await
    }

    pub async fn payment_request(&self, reference: &str) -> Response {
        self.execute(GraphQlOperation::payment_request(reference)).await
    }

    pub async fn account(&self) -> Response {
        self.execute(GraphQlOperation::account()).await
    }

    pub async fn onchain_withdrawal(&self, withdrawal_id: &str) -> Response {
        self.execute(GraphQlOperation::onchain_withdrawal(withdrawal_id)).await
    }

    pub async fn ramp_quote(&self, params: &RampQuoteParams) -> Response {
        self.execute(GraphQlOperation::ramp_quote(params, self.config.wire_names())).await
    }

    pub async fn refresh_ramp_quote(&self, ramp_quote: &str, amount: Option<Decimal>) -> Response {
        self.execute(GraphQlOperation::refresh_ramp_quote(ramp_quote, amount)).await
    }

    // Mutations

    /// Confirms a crypto transfer sent into the secure escrow address.
    pub async fn confirm_transaction(
        &self,
        payment_request: &str,
        transaction_hash: &str,
    ) -> Response {
        self.execute(GraphQlOperation::confirm_transaction(
            payment_request,
            transaction_hash,
            self.config.wire_names(),
        ))
        .await
    }

    pub async fn initiate_hosted_payment(&self, params: &HostedPaymentParams) -> Response {
        self.execute(GraphQlOperation::initiate_hosted_payment(params, self.config.wire_names()))
            .await
    }

    pub async fn cancel_hosted_payment(&self, payment_request: &str) -> Response {
        self.execute(GraphQlOperation::cancel_hosted_payment(payment_request)).await
    }

    /// Creates a customer profile.
    pub async fn create_customer(&self, details: &CustomerDetails) -> Response {
        self.execute(GraphQlOperation::create_customer(details)).await
    }

    /// Adds a payment method for an existing customer.
    pub async fn add_payment_method(&self, options: &PaymentMethodOptions) -> Response {
        self.execute(GraphQlOperation::add_payment_method(options)).await
    }

    /// Withdraws from the account balance to an onchain wallet address.
    pub async fn withdraw_onchain(&self, params: &WithdrawOnchainParams) -> Response {
        self.execute(GraphQlOperation::withdraw_onchain(params)).await
    }

    pub async fn initiate_ramp_quote_deposit(
        &self,
        ramp_quote: &str,
        reference: Option<&str>,
    ) -> Response {
        self.execute(GraphQlOperation::initiate_ramp_quote_deposit(ramp_quote, reference)).await
    }

    pub async fn mark_deposit_as_paid(
        &self,
        payment_request: &str,
        receipt: Option<&str>,
    ) -> Response {
        self.execute(GraphQlOperation::mark_deposit_as_paid(payment_request, receipt)).await
    }

    pub async fn cancel_deposit(&self, payment_request: &str) -> Response {
        self.execute(GraphQlOperation::cancel_deposit(payment_request)).await
    }
}

fn failed(name: &str, kind: ErrorKind, message: String) -> Response {
    warn!("{} failed ({}): {}", name, kind, message);
    Response::failure(kind, message)
}

/// Reason phrase for a status line, e.g. `Bad Request`.
fn status_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUERY: &str = "query { test }";

    fn client_for(server: &MockServer) -> CashrampClient {
        let config = ClientConfig::new(Environment::Test, Some("test_key".to_string()))
            .unwrap()
            .with_endpoint(server.uri());
        CashrampClient::new(config).unwrap()
    }

    async fn respond_with(template: ResponseTemplate) -> (MockServer, CashrampClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(template)
            .mount(&server)
            .await;
        let client = client_for(&server);
        (server, client)
    }

    #[tokio::test]
    async fn test_success_unwraps_operation_field() {
        let (_server, client) = respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"test": "result"}})),
        )
        .await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert_eq!(response, Response::ok(Some(json!("result"))));
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_request_carries_auth_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer test_key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"query": QUERY, "variables": {"countryCode": "GH"}})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"test": 1}})),
            )
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let mut variables = Map::new();
        variables.insert("countryCode".to_string(), json!("GH"));
        let response = client.send_request("test", QUERY, variables).await;
        assert!(response.is_success());
        assert_eq!(response.result, Some(json!(1)));
    }

    #[tokio::test]
    async fn test_missing_operation_field_is_null_result() {
        let (_server, client) = respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"other": "x"}})),
        )
        .await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert!(response.success);
        assert_eq!(response.result, None);
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_graphql_errors_report_first_message() {
        let (_server, client) = respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "GraphQL Error"}, {"message": "Second"}]
        })))
        .await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert!(!response.success);
        assert_eq!(response.result, None);
        assert_eq!(response.error.as_deref(), Some("GraphQL Error"));
        assert_eq!(response.kind, Some(ErrorKind::GraphQl));
    }

    #[tokio::test]
    async fn test_non_200_uses_status_text_not_body() {
        let (_server, client) =
            respond_with(ResponseTemplate::new(400).set_body_string("Bad Request body")).await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Bad Request"));
        assert_eq!(response.kind, Some(ErrorKind::HttpStatus));
    }

    #[tokio::test]
    async fn test_non_200_with_graphql_body_is_still_status_error() {
        let (_server, client) = respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"errors": [{"message": "should be ignored"}]})),
        )
        .await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert_eq!(response.error.as_deref(), Some("Internal Server Error"));
        assert_eq!(response.kind, Some(ErrorKind::HttpStatus));
    }

    #[tokio::test]
    async fn test_unparsable_body_falls_back_to_status_text() {
        let (_server, client) =
            respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("OK"));
        assert_eq!(response.kind, Some(ErrorKind::Parse));
    }

    #[tokio::test]
    async fn test_connection_failure_becomes_envelope() {
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = ClientConfig::new(Environment::Test, Some("test_key".to_string()))
            .unwrap()
            .with_endpoint(uri);
        let client = CashrampClient::new(config).unwrap();

        let response = client.send_request("test", QUERY, Map::new()).await;
        assert!(!response.success);
        assert_eq!(response.kind, Some(ErrorKind::Transport));
        assert!(!response.error.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_status_message_without_canonical_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_message(status), "599");
        assert_eq!(status_message(StatusCode::NOT_FOUND), "Not Found");
    }
}
