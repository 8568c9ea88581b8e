use moneymq_stripe_types::{
    List,
    common::ListParams,
    invoices::{
        DeletedInvoice, Invoice, InvoiceCreateParams, InvoiceDeleteParams,
        InvoiceFinalizeInvoiceParams, InvoiceLineItem, InvoiceListLineItemsParams,
        InvoiceListParams, InvoiceListUpcomingLineItemsParams, InvoiceMarkUncollectibleParams,
        InvoicePayParams, InvoiceRetrieveParams, InvoiceRetrieveUpcomingParams,
        InvoiceSendInvoiceParams, InvoiceUpdateParams, InvoiceVoidInvoiceParams,
    },
};
use serde::Serialize;

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// Upcoming line items are addressed by customer, which travels as a query parameter.
#[derive(Serialize)]
struct UpcomingLinesQuery<'p> {
    customer: &'p str,
    #[serde(flatten)]
    page: &'p ListParams,
}

pub struct Invoices<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Invoices<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(id: &str, rest: &str) -> String {
        format!("/v1/invoices/{}{}", path_segment(id), rest)
    }

    pub async fn create(&self, params: &InvoiceCreateParams, options: &RequestOptions) -> Result<Invoice> {
        self.client.post("/v1/invoices".to_string(), params, options).await
    }

    /// Only draft invoices can be deleted.
    pub async fn del(&self, id: &str, params: &InvoiceDeleteParams, options: &RequestOptions) -> Result<DeletedInvoice> {
        self.client.delete(Self::path(id, ""), params, options).await
    }

    pub async fn list(&self, params: &InvoiceListParams, options: &RequestOptions) -> Result<List<Invoice>> {
        self.client.get("/v1/invoices".to_string(), params, options).await
    }

    pub async fn retrieve(&self, id: &str, params: &InvoiceRetrieveParams, options: &RequestOptions) -> Result<Invoice> {
        self.client.get(Self::path(id, ""), params, options).await
    }

    pub async fn update(&self, id: &str, params: &InvoiceUpdateParams, options: &RequestOptions) -> Result<Invoice> {
        self.client.post(Self::path(id, ""), params, options).await
    }

    /// Move a draft invoice to `open`.
    pub async fn finalize_invoice(
        &self,
        id: &str,
        params: &InvoiceFinalizeInvoiceParams,
        options: &RequestOptions,
    ) -> Result<Invoice> {
        self.client.post(Self::path(id, "/finalize"), params, options).await
    }

    pub async fn mark_uncollectible(
        &self,
        id: &str,
        params: &InvoiceMarkUncollectibleParams,
        options: &RequestOptions,
    ) -> Result<Invoice> {
        self.client.post(Self::path(id, "/mark_uncollectible"), params, options).await
    }

    pub async fn pay(&self, id: &str, params: &InvoicePayParams, options: &RequestOptions) -> Result<Invoice> {
        self.client.post(Self::path(id, "/pay"), params, options).await
    }

    /// Preview the next invoice for a customer or subscription. Nothing is created.
    pub async fn retrieve_upcoming(
        &self,
        params: &InvoiceRetrieveUpcomingParams,
        options: &RequestOptions,
    ) -> Result<Invoice> {
        self.client.get("/v1/invoices/upcoming".to_string(), params, options).await
    }

    pub async fn send_invoice(
        &self,
        id: &str,
        params: &InvoiceSendInvoiceParams,
        options: &RequestOptions,
    ) -> Result<Invoice> {
        self.client.post(Self::path(id, "/send"), params, options).await
    }

    pub async fn void_invoice(
        &self,
        id: &str,
        params: &InvoiceVoidInvoiceParams,
        options: &RequestOptions,
    ) -> Result<Invoice> {
        self.client.post(Self::path(id, "/void"), params, options).await
    }

    pub async fn list_line_items(
        &self,
        id: &str,
        params: &InvoiceListLineItemsParams,
        options: &RequestOptions,
    ) -> Result<List<InvoiceLineItem>> {
        self.client.get(Self::path(id, "/lines"), params, options).await
    }

    /// Line items of the upcoming invoice for `customer`.
    ///
    /// The route has no id segment. The customer id is sent as the `customer`
    /// query parameter alongside the cursor fields of `params`.
    pub async fn list_upcoming_line_items(
        &self,
        customer: &str,
        params: &InvoiceListUpcomingLineItemsParams,
        options: &RequestOptions,
    ) -> Result<List<InvoiceLineItem>> {
        let query = UpcomingLinesQuery {
            customer,
            page: params,
        };
        self.client
            .get("/v1/invoices/upcoming/lines".to_string(), &query, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use moneymq_stripe_types::{
        Emptyable,
        invoices::{InvoiceListStatus, InvoiceStatus},
    };
    use serde_json::json;

    use super::*;
    use crate::{Error, client::Method, testing::MockTransport};

    fn invoice_body(status: &str) -> serde_json::Value {
        json!({
            "id": "in_1",
            "object": "invoice",
            "amount_due": 1500,
            "amount_paid": 0,
            "amount_remaining": 1500,
            "attempt_count": 0,
            "attempted": false,
            "auto_advance": true,
            "created": 1573000000,
            "currency": "usd",
            "customer": "cus_1",
            "lines": {
                "object": "list",
                "data": [],
                "has_more": false,
                "url": "/v1/invoices/in_1/lines"
            },
            "livemode": false,
            "paid": false,
            "period_end": 1573000000,
            "period_start": 1572000000,
            "post_payment_credit_notes_amount": 0,
            "pre_payment_credit_notes_amount": 0,
            "starting_balance": 0,
            "status": status,
            "subtotal": 1500,
            "total": 1500
        })
    }

    fn line_items_body() -> serde_json::Value {
        json!({
            "object": "list",
            "data": [{
                "id": "il_1",
                "object": "line_item",
                "amount": 1500,
                "currency": "usd",
                "discountable": true,
                "livemode": false,
                "period": { "end": 1573000000, "start": 1572000000 },
                "proration": false,
                "type": "invoiceitem"
            }],
            "has_more": false,
            "url": "/v1/invoices/upcoming/lines"
        })
    }

    #[tokio::test]
    async fn test_lifecycle_routes() {
        let transport = MockTransport::default()
            .respond(200, invoice_body("draft"))
            .respond(200, invoice_body("open"))
            .respond(200, invoice_body("open"))
            .respond(200, invoice_body("paid"))
            .respond(200, invoice_body("void"))
            .respond(200, invoice_body("uncollectible"));
        let client = Client::new(transport);
        let invoices = client.invoices();
        let options = RequestOptions::default();

        let draft = invoices
            .create(&InvoiceCreateParams::new("cus_1"), &options)
            .await
            .unwrap();
        assert_eq!(draft.status, Some(InvoiceStatus::Draft));
        invoices
            .finalize_invoice(
                "in_1",
                &InvoiceFinalizeInvoiceParams {
                    auto_advance: Some(false),
                    ..Default::default()
                },
                &options,
            )
            .await
            .unwrap();
        invoices.send_invoice("in_1", &Default::default(), &options).await.unwrap();
        let paid = invoices
            .pay(
                "in_1",
                &InvoicePayParams {
                    paid_out_of_band: Some(true),
                    ..Default::default()
                },
                &options,
            )
            .await
            .unwrap();
        assert_eq!(paid.status, Some(InvoiceStatus::Paid));
        invoices.void_invoice("in_1", &Default::default(), &options).await.unwrap();
        invoices
            .mark_uncollectible("in_1", &Default::default(), &options)
            .await
            .unwrap();

        let requests = client.transport().requests();
        assert!(requests.iter().all(|r| r.method == Method::Post));
        let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/v1/invoices",
                "/v1/invoices/in_1/finalize",
                "/v1/invoices/in_1/send",
                "/v1/invoices/in_1/pay",
                "/v1/invoices/in_1/void",
                "/v1/invoices/in_1/mark_uncollectible",
            ]
        );
        assert_eq!(requests[0].body.as_deref(), Some("customer=cus_1"));
        assert_eq!(requests[1].body.as_deref(), Some("auto_advance=false"));
        assert_eq!(requests[3].param("paid_out_of_band"), Some("true"));
    }

    #[tokio::test]
    async fn test_update_can_clear_fields() {
        let client = Client::new(MockTransport::default().respond(200, invoice_body("draft")));
        let params = InvoiceUpdateParams {
            description: Some("Consulting".to_string()),
            default_tax_rates: Some(Emptyable::Unset),
            ..Default::default()
        };

        client
            .invoices()
            .update("in_1", &params, &RequestOptions::default())
            .await
            .unwrap();

        let request = client.transport().last_request();
        assert_eq!(request.param("default_tax_rates"), Some(""));
        assert_eq!(request.param("description"), Some("Consulting"));
    }

    #[tokio::test]
    async fn test_list_filters_in_query() {
        let client = Client::new(MockTransport::default().respond(
            200,
            json!({ "object": "list", "data": [invoice_body("open")], "has_more": true, "url": "/v1/invoices" }),
        ));
        let params = InvoiceListParams {
            customer: Some("cus_1".to_string()),
            status: Some(InvoiceListStatus::Open),
            page: ListParams {
                limit: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };

        let list = client
            .invoices()
            .list(&params, &RequestOptions::default())
            .await
            .unwrap();

        assert!(list.has_more);
        let request = client.transport().last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.body, None);
        assert_eq!(request.param("customer"), Some("cus_1"));
        assert_eq!(request.param("status"), Some("open"));
        assert_eq!(request.param("limit"), Some("1"));
    }

    #[tokio::test]
    async fn test_upcoming_routes() {
        let transport = MockTransport::default()
            .respond(200, invoice_body("draft"))
            .respond(200, line_items_body())
            .respond(200, line_items_body());
        let client = Client::new(transport);
        let invoices = client.invoices();
        let options = RequestOptions::default();

        invoices
            .retrieve_upcoming(
                &InvoiceRetrieveUpcomingParams {
                    customer: Some("cus_1".to_string()),
                    subscription_prorate: Some(false),
                    ..Default::default()
                },
                &options,
            )
            .await
            .unwrap();
        let upcoming = invoices
            .list_upcoming_line_items(
                "cus_1",
                &ListParams {
                    limit: Some(5),
                    ..Default::default()
                },
                &options,
            )
            .await
            .unwrap();
        assert_eq!(upcoming.data[0].amount, 1500);
        invoices
            .list_line_items("in_1", &ListParams::default(), &options)
            .await
            .unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].path, "/v1/invoices/upcoming");
        assert_eq!(requests[0].param("subscription_prorate"), Some("false"));
        assert_eq!(requests[1].path, "/v1/invoices/upcoming/lines");
        assert_eq!(requests[1].url.query(), Some("customer=cus_1&limit=5"));
        assert_eq!(requests[2].path, "/v1/invoices/in_1/lines");
        assert_eq!(requests[2].url.query(), None);
    }

    #[tokio::test]
    async fn test_delete_non_draft_surfaces_api_error() {
        let client = Client::new(MockTransport::default().respond(
            400,
            json!({
                "error": {
                    "type": "invalid_request_error",
                    "message": "You can only delete draft invoices."
                }
            }),
        ));

        let err = client
            .invoices()
            .del("in_1", &Default::default(), &RequestOptions::default())
            .await
            .unwrap_err();

        match err {
            Error::Api { status, error, .. } => {
                assert_eq!(status, 400);
                assert_eq!(error.message.as_deref(), Some("You can only delete draft invoices."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
