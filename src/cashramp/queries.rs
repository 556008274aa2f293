//! GraphQL query documents.

pub const AVAILABLE_COUNTRIES: &str = r"query {
  availableCountries {
    id
    name
    code
  }
}
";

pub const MARKET_RATE: &str = r"query ($countryCode: String!) {
  marketRate(countryCode: $countryCode) {
    depositRate
    withdrawalRate
  }
}
";

pub const PAYMENT_METHOD_TYPES: &str = r"query ($country: ID!) {
  p2pPaymentMethodTypes(country: $country) {
    id
    identifier
    label
    fields {
      label
      identifier
      required
    }
  }
}
";

pub const RAMPABLE_ASSETS: &str = r"query {
  rampableAssets {
    name
    symbol
    networks
    contractAddress
  }
}
";

pub const RAMP_LIMITS: &str = r"query {
  rampLimits {
    minimumDepositUsd
    maximumDepositUsd
    minimumWithdrawalUsd
    maximumWithdrawalUsd
    dailyLimitUsd
  }
}
";

pub const PAYMENT_REQUEST: &str = r"query ($reference: String!) {
  merchantPaymentRequest(reference: $reference) {
    id
    paymentType
    hostedLink
    amount
    currency
    reference
    status
  }
}
";

pub const ACCOUNT: &str = r"query {
  account {
    id
    accountBalance
    depositAddress
  }
}
";

pub const ONCHAIN_WITHDRAWAL: &str = r"query ($withdrawalId: ID!) {
  onchainWithdrawal(id: $withdrawalId) {
    quantity
    symbol
    network
    address
    txhash
    txhashUrl
    fee
    status
    createdAt
  }
}
";

// Declares `$customerID` but reads `$customer`; the deployed client sends this as-is.
pub const RAMP_QUOTE: &str = r"query ($customerID: ID!, $amount: Decimal!, $currency: P2PPaymentCurrency!, $paymentMethodType: String!) {
  rampQuote(customer: $customer, amount: $amount, currency: $currency, paymentMethodType: $paymentMethodType) {
    id
    exchangeRate
  }
}
";

pub const RAMP_QUOTE_CORRECTED: &str = r"query ($customer: ID!, $amount: Decimal!, $currency: P2PPaymentCurrency!, $paymentMethodType: String!) {
  rampQuote(customer: $customer, amount: $amount, currency: $currency, paymentMethodType: $paymentMethodType) {
    id
    exchangeRate
  }
}
";

pub const REFRESH_RAMP_QUOTE: &str = r"query ($rampQuote: ID!, $amount: Decimal) {
  refreshRampQuote(rampQuote: $rampQuote, amount: $amount) {
    id
    exchangeRate
  }
}
";
