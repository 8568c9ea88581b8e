use moneymq_stripe_types::{
    List,
    transfers::{
        Transfer, TransferCreateParams, TransferCreateReversalParams, TransferListParams,
        TransferListReversalsParams, TransferRetrieveParams, TransferRetrieveReversalParams,
        TransferReversal, TransferUpdateParams, TransferUpdateReversalParams,
    },
};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// Transfers to connected accounts and their reversals. Transfers cannot be deleted.
pub struct Transfers<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Transfers<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("/v1/transfers/{}", path_segment(id))
    }

    fn reversals_path(id: &str) -> String {
        format!("{}/reversals", Self::path(id))
    }

    pub async fn create(&self, params: &TransferCreateParams, options: &RequestOptions) -> Result<Transfer> {
        self.client.post("/v1/transfers".to_string(), params, options).await
    }

    pub async fn list(&self, params: &TransferListParams, options: &RequestOptions) -> Result<List<Transfer>> {
        self.client.get("/v1/transfers".to_string(), params, options).await
    }

    pub async fn retrieve(&self, id: &str, params: &TransferRetrieveParams, options: &RequestOptions) -> Result<Transfer> {
        self.client.get(Self::path(id), params, options).await
    }

    pub async fn update(&self, id: &str, params: &TransferUpdateParams, options: &RequestOptions) -> Result<Transfer> {
        self.client.post(Self::path(id), params, options).await
    }

    /// Reverse all of a transfer, or part of it when `amount` is set.
    pub async fn create_reversal(
        &self,
        id: &str,
        params: &TransferCreateReversalParams,
        options: &RequestOptions,
    ) -> Result<TransferReversal> {
        self.client.post(Self::reversals_path(id), params, options).await
    }

    pub async fn list_reversals(
        &self,
        id: &str,
        params: &TransferListReversalsParams,
        options: &RequestOptions,
    ) -> Result<List<TransferReversal>> {
        self.client.get(Self::reversals_path(id), params, options).await
    }

    pub async fn retrieve_reversal(
        &self,
        transfer: &str,
        id: &str,
        params: &TransferRetrieveReversalParams,
        options: &RequestOptions,
    ) -> Result<TransferReversal> {
        let path = format!("{}/{}", Self::reversals_path(transfer), path_segment(id));
        self.client.get(path, params, options).await
    }

    pub async fn update_reversal(
        &self,
        transfer: &str,
        id: &str,
        params: &TransferUpdateReversalParams,
        options: &RequestOptions,
    ) -> Result<TransferReversal> {
        let path = format!("{}/{}", Self::reversals_path(transfer), path_segment(id));
        self.client.post(path, params, options).await
    }
}
