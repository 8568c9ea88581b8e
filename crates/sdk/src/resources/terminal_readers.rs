use moneymq_stripe_types::{
    List,
    terminal::{
        DeletedReader, Reader, ReaderCreateParams, ReaderDeleteParams, ReaderListParams,
        ReaderRetrieveParams, ReaderUpdateParams,
    },
};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// In-person card readers
pub struct TerminalReaders<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> TerminalReaders<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("/v1/terminal/readers/{}", path_segment(id))
    }

    /// Register a reader using the code displayed on its screen.
    pub async fn create(&self, params: &ReaderCreateParams, options: &RequestOptions) -> Result<Reader> {
        self.client.post("/v1/terminal/readers".to_string(), params, options).await
    }

    pub async fn del(&self, id: &str, params: &ReaderDeleteParams, options: &RequestOptions) -> Result<DeletedReader> {
        self.client.delete(Self::path(id), params, options).await
    }

    pub async fn list(&self, params: &ReaderListParams, options: &RequestOptions) -> Result<List<Reader>> {
        self.client.get("/v1/terminal/readers".to_string(), params, options).await
    }

    pub async fn retrieve(&self, id: &str, params: &ReaderRetrieveParams, options: &RequestOptions) -> Result<Reader> {
        self.client.get(Self::path(id), params, options).await
    }

    pub async fn update(&self, id: &str, params: &ReaderUpdateParams, options: &RequestOptions) -> Result<Reader> {
        self.client.post(Self::path(id), params, options).await
    }
}
