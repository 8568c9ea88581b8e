use moneymq_stripe_types::{
    List,
    plans::{
        DeletedPlan, Plan, PlanCreateParams, PlanDeleteParams, PlanListParams, PlanRetrieveParams,
        PlanUpdateParams,
    },
};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// Pricing plans for subscriptions
pub struct Plans<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Plans<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(id: &str) -> String {
        format!("/v1/plans/{}", path_segment(id))
    }

    pub async fn create(&self, params: &PlanCreateParams, options: &RequestOptions) -> Result<Plan> {
        self.client.post("/v1/plans".to_string(), params, options).await
    }

    /// Deleting a plan does not affect subscribers already on it.
    pub async fn del(&self, id: &str, params: &PlanDeleteParams, options: &RequestOptions) -> Result<DeletedPlan> {
        self.client.delete(Self::path(id), params, options).await
    }

    pub async fn list(&self, params: &PlanListParams, options: &RequestOptions) -> Result<List<Plan>> {
        self.client.get("/v1/plans".to_string(), params, options).await
    }

    pub async fn retrieve(&self, id: &str, params: &PlanRetrieveParams, options: &RequestOptions) -> Result<Plan> {
        self.client.get(Self::path(id), params, options).await
    }

    pub async fn update(&self, id: &str, params: &PlanUpdateParams, options: &RequestOptions) -> Result<Plan> {
        self.client.post(Self::path(id), params, options).await
    }
}
