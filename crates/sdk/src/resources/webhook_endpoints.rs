use moneymq_stripe_types::{
    List,
    webhook_endpoints::{
        DeletedWebhookEndpoint, WebhookEndpoint, WebhookEndpointCreateParams,
        WebhookEndpointDeleteParams, WebhookEndpointListParams, WebhookEndpointRetrieveParams,
        WebhookEndpointUpdateParams,
    },
};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

pub struct WebhookEndpoints<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> WebhookEndpoints<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("/v1/webhook_endpoints/{}", path_segment(id))
    }

    /// The returned endpoint carries its signing `secret`, which is never sent again.
    pub async fn create(
        &self,
        params: &WebhookEndpointCreateParams,
        options: &RequestOptions,
    ) -> Result<WebhookEndpoint> {
        self.client.post("/v1/webhook_endpoints".to_string(), params, options).await
    }

    pub async fn del(
        &self,
        id: &str,
        params: &WebhookEndpointDeleteParams,
        options: &RequestOptions,
    ) -> Result<DeletedWebhookEndpoint> {
        self.client.delete(Self::path(id), params, options).await
    }

    pub async fn list(
        &self,
        params: &WebhookEndpointListParams,
        options: &RequestOptions,
    ) -> Result<List<WebhookEndpoint>> {
        self.client.get("/v1/webhook_endpoints".to_string(), params, options).await
    }

    pub async fn retrieve(
        &self,
        id: &str,
        params: &WebhookEndpointRetrieveParams,
        options: &RequestOptions,
    ) -> Result<WebhookEndpoint> {
        self.client.get(Self::path(id), params, options).await
    }

    pub async fn update(
        &self,
        id: &str,
        params: &WebhookEndpointUpdateParams,
        options: &RequestOptions,
    ) -> Result<WebhookEndpoint> {
        self.client.post(Self::path(id), params, options).await
    }
}

#[cfg(test)]
mod tests {
    use moneymq_stripe_types::{ApiVersion, EnabledEvent};
    use serde_json::json;

    use super::*;
    use crate::{client::Method, testing::MockTransport};

    fn endpoint_body(secret: Option<&str>) -> serde_json::Value {
        let mut body = json!({
            "id": "we_1",
            "object": "webhook_endpoint",
            "api_version": "2019-11-05",
            "application": null,
            "created": 1573000000,
            "enabled_events": ["invoice.payment_succeeded", "invoice.payment_failed"],
            "livemode": false,
            "status": "enabled",
            "url": "https://example.com/hooks"
        });
        if let Some(secret) = secret {
            body["secret"] = json!(secret);
        }
        body
    }

    #[tokio::test]
    async fn test_create_returns_secret_once() {
        let transport = MockTransport::default()
            .respond(200, endpoint_body(Some("whsec_1")))
            .respond(200, endpoint_body(None));
        let client = Client::new(transport);
        let endpoints = client.webhook_endpoints();
        let options = RequestOptions::default();
        let mut params = WebhookEndpointCreateParams::new(
            "https://example.com/hooks",
            vec![
                EnabledEvent::InvoicePaymentSucceeded,
                EnabledEvent::InvoicePaymentFailed,
            ],
        );
        params.api_version = Some(ApiVersion::CURRENT);

        let created = endpoints.create(&params, &options).await.unwrap();
        let fetched = endpoints.retrieve("we_1", &Default::default(), &options).await.unwrap();

        assert_eq!(created.secret.as_deref(), Some("whsec_1"));
        assert_eq!(fetched.secret, None);
        assert!(fetched.receives(EnabledEvent::InvoicePaymentFailed));
        assert!(!fetched.receives(EnabledEvent::ChargeRefunded));

        let requests = client.transport().requests();
        assert_eq!(requests[0].param("enabled_events[0]"), Some("invoice.payment_succeeded"));
        assert_eq!(requests[0].param("enabled_events[1]"), Some("invoice.payment_failed"));
        assert_eq!(requests[0].param("api_version"), Some("2019-11-05"));
        assert_eq!(requests[1].path, "/v1/webhook_endpoints/we_1");
    }

    #[tokio::test]
    async fn test_disable_list_and_delete() {
        let transport = MockTransport::default()
            .respond(200, endpoint_body(None))
            .respond(
                200,
                json!({ "object": "list", "data": [endpoint_body(None)], "has_more": false, "url": "/v1/webhook_endpoints" }),
            )
            .respond(200, json!({ "id": "we_1", "object": "webhook_endpoint", "deleted": true }));
        let client = Client::new(transport);
        let endpoints = client.webhook_endpoints();
        let options = RequestOptions::default();

        endpoints
            .update(
                "we_1",
                &WebhookEndpointUpdateParams {
                    disabled: Some(true),
                    enabled_events: Some(vec![EnabledEvent::All]),
                    ..Default::default()
                },
                &options,
            )
            .await
            .unwrap();
        let list = endpoints.list(&Default::default(), &options).await.unwrap();
        assert_eq!(list.data.len(), 1);
        endpoints.del("we_1", &Default::default(), &options).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(
            requests[0].body.as_deref(),
            Some("disabled=true&enabled_events%5B0%5D=*")
        );
        assert_eq!(requests[2].method, Method::Delete);
        assert_eq!(requests[2].path, "/v1/webhook_endpoints/we_1");
    }
}
