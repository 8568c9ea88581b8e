use moneymq_stripe_types::checkout::{Session, SessionCreateParams, SessionRetrieveParams};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// Hosted payment pages
pub struct CheckoutSessions<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> CheckoutSessions<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    pub async fn create(&self, params: &SessionCreateParams, options: &RequestOptions) -> Result<Session> {
        self.client.post("/v1/checkout/sessions".to_string(), params, options).await
    }

    pub async fn retrieve(&self, id: &str, params: &SessionRetrieveParams, options: &RequestOptions) -> Result<Session> {
        let path = format!("/v1/checkout/sessions/{}", path_segment(id));
        self.client.get(path, params, options).await
    }
}
