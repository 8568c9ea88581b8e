use moneymq_stripe_types::balance::{Balance, BalanceRetrieveParams};

use crate::{
    client::{Client, RequestOptions, Transport},
    error::Result,
};

/// The account balance. A singleton, so there is no id to address.
pub struct BalanceResource<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> BalanceResource<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Retrieve the balance of the caller, or of the connected account named in `options`.
    pub async fn retrieve(&self, params: &BalanceRetrieveParams, options: &RequestOptions) -> Result<Balance> {
        self.client.get("/v1/balance".to_string(), params, options).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{Error, client::Method, testing::MockTransport};

    #[tokio::test]
    async fn test_retrieve_for_connected_account() {
        let client = Client::new(MockTransport::default().respond(
            200,
            json!({
                "object": "balance",
                "available": [{ "amount": 4200, "currency": "usd", "source_types": { "card": 4200 } }],
                "livemode": false,
                "pending": [{ "amount": 0, "currency": "usd" }]
            }),
        ));

        let balance = client
            .balance()
            .retrieve(
                &BalanceRetrieveParams::default(),
                &RequestOptions::new().with_stripe_account("acct_1"),
            )
            .await
            .unwrap();

        assert_eq!(balance.available_in("usd"), Some(4200));
        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/v1/balance");
        assert_eq!(request.url.query(), None);
        assert_eq!(request.header("stripe-account"), Some("acct_1"));
    }

    #[tokio::test]
    async fn test_unauthenticated_balance() {
        let client = Client::new(MockTransport::default().respond(
            401,
            json!({ "error": { "type": "authentication_error", "message": "Invalid API Key provided" } }),
        ));

        let err = client
            .balance()
            .retrieve(&Default::default(), &RequestOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api { status: 401, .. }));
    }
}
