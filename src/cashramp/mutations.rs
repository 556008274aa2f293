//! GraphQL mutation documents.

pub const CONFIRM_TRANSACTION: &str = r"mutation ($paymentRequest: ID!, $transactionHash: String!) {
  confirmTransaction(paymentRequest: $paymentRequest, transactionHash: $transactionHash)
}
";

pub const INITIATE_HOSTED_PAYMENT: &str = r"mutation ($amount: Decimal!, $currency: P2PPaymentCurrency, $countryCode: String!, $email: String!, $paymentType: P2PPaymentTypeType!, $reference: String!, $firstName: String!, $lastName: String!, $redirectUrl: String) {
  initiateHostedPayment(
    amount: $amount,
    currency: $currency,
    countryCode: $countryCode,
    email: $email,
    paymentType: $paymentType,
    reference: $reference,
    firstName: $firstName,
    lastName: $lastName,
    redirectUrl: $redirectUrl
  ) {
      id
      hostedLink
      status
    }
}
";

pub const CANCEL_HOSTED_PAYMENT: &str = r"mutation ($paymentRequest: ID!) {
  cancelHostedPayment(paymentRequest: $paymentRequest)
}
";

pub const CREATE_CUSTOMER: &str = r"mutation ($email: String!, $firstName: String!, $lastName: String!, $country: ID!) {
  createCustomer(email: $email, firstName: $firstName, lastName: $lastName, country: $country) {
    id
    email
    firstName
    lastName
    country {
      id
      name
      code
    }
  }
}
";

pub const ADD_PAYMENT_METHOD: &str = r"mutation ($customer: ID!, $paymentMethodType: ID!, $fields: [P2PPaymentMethodFieldInput!]!) {
  addPaymentMethod(customer: $customer, p2pPaymentMethodType: $paymentMethodType, fields: $fields) {
    id
    value
    fields {
      identifier
      value
    }
  }
}
";

pub const WITHDRAW_ONCHAIN: &str = r"mutation ($address: String!, $amountUsd: Decimal!) {
  withdrawOnchain(address: $address, amountUsd: $amountUsd) {
    id
    status
  }
}
";

pub const INITIATE_RAMP_QUOTE_DEPOSIT: &str = r"mutation ($rampQuote: ID!, $reference: String) {
  initiateRampQuoteDeposit(rampQuote: $rampQuote, reference: $reference) {
    id
    status
    agent
    paymentDetails
    exchangeRate
    amountLocal
    amountUsd
    expiresAt
  }
}
";

pub const MARK_DEPOSIT_AS_PAID: &str = r"mutation ($paymentRequest: ID!, $receipt: String) {
  markDepositAsPaid(paymentRequest: $paymentRequest, receipt: $receipt)
}
";

pub const CANCEL_DEPOSIT: &str = r"mutation ($paymentRequest: ID!) {
  cancelDeposit(paymentRequest: $paymentRequest)
}
";
