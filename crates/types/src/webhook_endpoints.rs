//! Webhook endpoints, plus the closed sets of API versions and event types
//! an endpoint can be configured with.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{Deleted, EmptyParams, ExpandParams, ListParams, Object, Timestamp};

lit_str!(WebhookEndpointObject, "webhook_endpoint");

pub type DeletedWebhookEndpoint = Deleted<WebhookEndpointObject>;

string_enum! {
    /// A dated release of the API.
    #[allow(non_camel_case_types)]
    pub enum ApiVersion {
        V2011_01_01 => "2011-01-01",
        V2011_06_21 => "2011-06-21",
        V2011_06_28 => "2011-06-28",
        V2011_08_01 => "2011-08-01",
        V2011_09_15 => "2011-09-15",
        V2011_11_17 => "2011-11-17",
        V2012_02_23 => "2012-02-23",
        V2012_03_25 => "2012-03-25",
        V2012_06_18 => "2012-06-18",
        V2012_06_28 => "2012-06-28",
        V2012_07_09 => "2012-07-09",
        V2012_09_24 => "2012-09-24",
        V2012_10_26 => "2012-10-26",
        V2012_11_07 => "2012-11-07",
        V2013_02_11 => "2013-02-11",
        V2013_02_13 => "2013-02-13",
        V2013_07_05 => "2013-07-05",
        V2013_08_12 => "2013-08-12",
        V2013_08_13 => "2013-08-13",
        V2013_10_29 => "2013-10-29",
        V2013_12_03 => "2013-12-03",
        V2014_01_31 => "2014-01-31",
        V2014_03_13 => "2014-03-13",
        V2014_03_28 => "2014-03-28",
        V2014_05_19 => "2014-05-19",
        V2014_06_13 => "2014-06-13",
        V2014_06_17 => "2014-06-17",
        V2014_07_22 => "2014-07-22",
        V2014_07_26 => "2014-07-26",
        V2014_08_04 => "2014-08-04",
        V2014_08_20 => "2014-08-20",
        V2014_09_08 => "2014-09-08",
        V2014_10_07 => "2014-10-07",
        V2014_11_05 => "2014-11-05",
        V2014_11_20 => "2014-11-20",
        V2014_12_08 => "2014-12-08",
        V2014_12_17 => "2014-12-17",
        V2014_12_22 => "2014-12-22",
        V2015_01_11 => "2015-01-11",
        V2015_01_26 => "2015-01-26",
        V2015_02_10 => "2015-02-10",
        V2015_02_16 => "2015-02-16",
        V2015_02_18 => "2015-02-18",
        V2015_03_24 => "2015-03-24",
        V2015_04_07 => "2015-04-07",
        V2015_06_15 => "2015-06-15",
        V2015_07_07 => "2015-07-07",
        V2015_07_13 => "2015-07-13",
        V2015_07_28 => "2015-07-28",
        V2015_08_07 => "2015-08-07",
        V2015_08_19 => "2015-08-19",
        V2015_09_03 => "2015-09-03",
        V2015_09_08 => "2015-09-08",
        V2015_09_23 => "2015-09-23",
        V2015_10_01 => "2015-10-01",
        V2015_10_12 => "2015-10-12",
        V2015_10_16 => "2015-10-16",
        V2016_02_03 => "2016-02-03",
        V2016_02_19 => "2016-02-19",
        V2016_02_22 => "2016-02-22",
        V2016_02_23 => "2016-02-23",
        V2016_02_29 => "2016-02-29",
        V2016_03_07 => "2016-03-07",
        V2016_06_15 => "2016-06-15",
        V2016_07_06 => "2016-07-06",
        V2016_10_19 => "2016-10-19",
        V2017_01_27 => "2017-01-27",
        V2017_02_14 => "2017-02-14",
        V2017_04_06 => "2017-04-06",
        V2017_05_25 => "2017-05-25",
        V2017_06_05 => "2017-06-05",
        V2017_08_15 => "2017-08-15",
        V2017_12_14 => "2017-12-14",
        V2018_01_23 => "2018-01-23",
        V2018_02_05 => "2018-02-05",
        V2018_02_06 => "2018-02-06",
        V2018_02_28 => "2018-02-28",
        V2018_05_21 => "2018-05-21",
        V2018_07_27 => "2018-07-27",
        V2018_08_23 => "2018-08-23",
        V2018_09_06 => "2018-09-06",
        V2018_09_24 => "2018-09-24",
        V2018_10_31 => "2018-10-31",
        V2018_11_08 => "2018-11-08",
        V2019_02_11 => "2019-02-11",
        V2019_02_19 => "2019-02-19",
        V2019_03_14 => "2019-03-14",
        V2019_05_16 => "2019-05-16",
        V2019_08_14 => "2019-08-14",
        V2019_09_09 => "2019-09-09",
        V2019_10_08 => "2019-10-08",
        V2019_10_17 => "2019-10-17",
        V2019_11_05 => "2019-11-05",
    }
}

string_enum! {
    /// Event types a webhook endpoint can subscribe to. `All` is the `*` wildcard.
    pub enum EnabledEvent {
        All => "*",
        AccountApplicationAuthorized => "account.application.authorized",
        AccountApplicationDeauthorized => "account.application.deauthorized",
        AccountExternalAccountCreated => "account.external_account.created",
        AccountExternalAccountDeleted => "account.external_account.deleted",
        AccountExternalAccountUpdated => "account.external_account.updated",
        AccountUpdated => "account.updated",
        ApplicationFeeCreated => "application_fee.created",
        ApplicationFeeRefundUpdated => "application_fee.refund.updated",
        ApplicationFeeRefunded => "application_fee.refunded",
        BalanceAvailable => "balance.available",
        CapabilityUpdated => "capability.updated",
        ChargeCaptured => "charge.captured",
        ChargeDisputeClosed => "charge.dispute.closed",
        ChargeDisputeCreated => "charge.dispute.created",
        ChargeDisputeFundsReinstated => "charge.dispute.funds_reinstated",
        ChargeDisputeFundsWithdrawn => "charge.dispute.funds_withdrawn",
        ChargeDisputeUpdated => "charge.dispute.updated",
        ChargeExpired => "charge.expired",
        ChargeFailed => "charge.failed",
        ChargePending => "charge.pending",
        ChargeRefundUpdated => "charge.refund.updated",
        ChargeRefunded => "charge.refunded",
        ChargeSucceeded => "charge.succeeded",
        ChargeUpdated => "charge.updated",
        CheckoutSessionCompleted => "checkout.session.completed",
        CouponCreated => "coupon.created",
        CouponDeleted => "coupon.deleted",
        CouponUpdated => "coupon.updated",
        CreditNoteCreated => "credit_note.created",
        CreditNoteUpdated => "credit_note.updated",
        CreditNoteVoided => "credit_note.voided",
        CustomerCreated => "customer.created",
        CustomerDeleted => "customer.deleted",
        CustomerDiscountCreated => "customer.discount.created",
        CustomerDiscountDeleted => "customer.discount.deleted",
        CustomerDiscountUpdated => "customer.discount.updated",
        CustomerSourceCreated => "customer.source.created",
        CustomerSourceDeleted => "customer.source.deleted",
        CustomerSourceExpiring => "customer.source.expiring",
        CustomerSourceUpdated => "customer.source.updated",
        CustomerSubscriptionCreated => "customer.subscription.created",
        CustomerSubscriptionDeleted => "customer.subscription.deleted",
        CustomerSubscriptionTrialWillEnd => "customer.subscription.trial_will_end",
        CustomerSubscriptionUpdated => "customer.subscription.updated",
        CustomerTaxIdCreated => "customer.tax_id.created",
        CustomerTaxIdDeleted => "customer.tax_id.deleted",
        CustomerTaxIdUpdated => "customer.tax_id.updated",
        CustomerUpdated => "customer.updated",
        FileCreated => "file.created",
        InvoiceCreated => "invoice.created",
        InvoiceDeleted => "invoice.deleted",
        InvoiceFinalized => "invoice.finalized",
        InvoiceMarkedUncollectible => "invoice.marked_uncollectible",
        InvoicePaymentActionRequired => "invoice.payment_action_required",
        InvoicePaymentFailed => "invoice.payment_failed",
        InvoicePaymentSucceeded => "invoice.payment_succeeded",
        InvoiceSent => "invoice.sent",
        InvoiceUpcoming => "invoice.upcoming",
        InvoiceUpdated => "invoice.updated",
        InvoiceVoided => "invoice.voided",
        InvoiceitemCreated => "invoiceitem.created",
        InvoiceitemDeleted => "invoiceitem.deleted",
        InvoiceitemUpdated => "invoiceitem.updated",
        IssuingAuthorizationCreated => "issuing_authorization.created",
        IssuingAuthorizationRequest => "issuing_authorization.request",
        IssuingAuthorizationUpdated => "issuing_authorization.updated",
        IssuingCardCreated => "issuing_card.created",
        IssuingCardUpdated => "issuing_card.updated",
        IssuingCardholderCreated => "issuing_cardholder.created",
        IssuingCardholderUpdated => "issuing_cardholder.updated",
        IssuingDisputeCreated => "issuing_dispute.created",
        IssuingDisputeUpdated => "issuing_dispute.updated",
        IssuingSettlementCreated => "issuing_settlement.created",
        IssuingSettlementUpdated => "issuing_settlement.updated",
        IssuingTransactionCreated => "issuing_transaction.created",
        IssuingTransactionUpdated => "issuing_transaction.updated",
        MandateUpdated => "mandate.updated",
        OrderCreated => "order.created",
        OrderPaymentFailed => "order.payment_failed",
        OrderPaymentSucceeded => "order.payment_succeeded",
        OrderUpdated => "order.updated",
        OrderReturnCreated => "order_return.created",
        PaymentIntentAmountCapturableUpdated => "payment_intent.amount_capturable_updated",
        PaymentIntentCanceled => "payment_intent.canceled",
        PaymentIntentCreated => "payment_intent.created",
        PaymentIntentPaymentFailed => "payment_intent.payment_failed",
        PaymentIntentSucceeded => "payment_intent.succeeded",
        PaymentMethodAttached => "payment_method.attached",
        PaymentMethodCardAutomaticallyUpdated => "payment_method.card_automatically_updated",
        PaymentMethodDetached => "payment_method.detached",
        PaymentMethodUpdated => "payment_method.updated",
        PayoutCanceled => "payout.canceled",
        PayoutCreated => "payout.created",
        PayoutFailed => "payout.failed",
        PayoutPaid => "payout.paid",
        PayoutUpdated => "payout.updated",
        PersonCreated => "person.created",
        PersonDeleted => "person.deleted",
        PersonUpdated => "person.updated",
        PlanCreated => "plan.created",
        PlanDeleted => "plan.deleted",
        PlanUpdated => "plan.updated",
        ProductCreated => "product.created",
        ProductDeleted => "product.deleted",
        ProductUpdated => "product.updated",
        RadarEarlyFraudWarningCreated => "radar.early_fraud_warning.created",
        RadarEarlyFraudWarningUpdated => "radar.early_fraud_warning.updated",
        RecipientCreated => "recipient.created",
        RecipientDeleted => "recipient.deleted",
        RecipientUpdated => "recipient.updated",
        ReportingReportRunFailed => "reporting.report_run.failed",
        ReportingReportRunSucceeded => "reporting.report_run.succeeded",
        ReportingReportTypeUpdated => "reporting.report_type.updated",
        ReviewClosed => "review.closed",
        ReviewOpened => "review.opened",
        SetupIntentCanceled => "setup_intent.canceled",
        SetupIntentCreated => "setup_intent.created",
        SetupIntentSetupFailed => "setup_intent.setup_failed",
        SetupIntentSucceeded => "setup_intent.succeeded",
        SigmaScheduledQueryRunCreated => "sigma.scheduled_query_run.created",
        SkuCreated => "sku.created",
        SkuDeleted => "sku.deleted",
        SkuUpdated => "sku.updated",
        SourceCanceled => "source.canceled",
        SourceChargeable => "source.chargeable",
        SourceFailed => "source.failed",
        SourceMandateNotification => "source.mandate_notification",
        SourceRefundAttributesRequired => "source.refund_attributes_required",
        SourceTransactionCreated => "source.transaction.created",
        SourceTransactionUpdated => "source.transaction.updated",
        SubscriptionScheduleAborted => "subscription_schedule.aborted",
        SubscriptionScheduleCanceled => "subscription_schedule.canceled",
        SubscriptionScheduleCompleted => "subscription_schedule.completed",
        SubscriptionScheduleCreated => "subscription_schedule.created",
        SubscriptionScheduleExpiring => "subscription_schedule.expiring",
        SubscriptionScheduleReleased => "subscription_schedule.released",
        SubscriptionScheduleUpdated => "subscription_schedule.updated",
        TaxRateCreated => "tax_rate.created",
        TaxRateUpdated => "tax_rate.updated",
        TopupCanceled => "topup.canceled",
        TopupCreated => "topup.created",
        TopupFailed => "topup.failed",
        TopupReversed => "topup.reversed",
        TopupSucceeded => "topup.succeeded",
        TransferCreated => "transfer.created",
        TransferFailed => "transfer.failed",
        TransferPaid => "transfer.paid",
        TransferReversed => "transfer.reversed",
        TransferUpdated => "transfer.updated",
    }
}

impl ApiVersion {
    /// The version these types describe.
    pub const CURRENT: ApiVersion = ApiVersion::V2019_11_05;
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    pub object: WebhookEndpointObject,
    /// The API version events are rendered as for this endpoint.
    #[serde(default)]
    pub api_version: Option<String>,
    /// The ID of the associated Connect application.
    #[serde(default)]
    pub application: Option<String>,
    pub created: Timestamp,
    /// The list of events to enable for this endpoint. `["*"]` indicates that all events are enabled.
    pub enabled_events: Vec<String>,
    pub livemode: bool,
    /// The endpoint's secret, used to generate webhook signatures. Only returned at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// `enabled` or `disabled`.
    pub status: String,
    pub url: String,
}

impl WebhookEndpoint {
    pub fn is_enabled(&self) -> bool {
        self.status == "enabled"
    }

    /// Whether an event of the given type would be delivered here.
    pub fn receives(&self, event: EnabledEvent) -> bool {
        self.enabled_events
            .iter()
            .any(|e| e == EnabledEvent::All.as_str() || e == event.as_str())
    }
}

impl Object for WebhookEndpoint {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        WebhookEndpointObject::VALUE
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointCreateParams {
    /// Events sent to this endpoint are rendered with this API version instead of the account default.
    pub api_version: Option<ApiVersion>,
    /// Whether this endpoint should receive events from connected accounts rather than the platform's own account.
    pub connect: Option<bool>,
    pub enabled_events: Vec<EnabledEvent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub url: String,
}

impl WebhookEndpointCreateParams {
    pub fn new(url: impl Into<String>, enabled_events: Vec<EnabledEvent>) -> Self {
        Self {
            api_version: None,
            connect: None,
            enabled_events,
            expand: Vec::new(),
            url: url.into(),
        }
    }
}

pub type WebhookEndpointDeleteParams = EmptyParams;
pub type WebhookEndpointListParams = ListParams;
pub type WebhookEndpointRetrieveParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpointUpdateParams {
    /// Disable the webhook endpoint if set to true.
    pub disabled: Option<bool>,
    pub enabled_events: Option<Vec<EnabledEvent>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_api_versions_are_closed() {
        assert_eq!(ApiVersion::ALL.first(), Some(&ApiVersion::V2011_01_01));
        assert_eq!(ApiVersion::ALL.last(), Some(&ApiVersion::CURRENT));
        assert_eq!(ApiVersion::default().as_str(), "2019-11-05");
        assert_eq!(
            "2017-08-15".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2017_08_15
        );
        assert!("2019-12-03".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_enabled_events_are_closed() {
        assert_eq!(EnabledEvent::ALL.len(), 150);
        assert_eq!(EnabledEvent::All.as_str(), "*");
        assert_eq!(
            serde_json::from_value::<EnabledEvent>(json!("checkout.session.completed")).unwrap(),
            EnabledEvent::CheckoutSessionCompleted
        );
        assert_eq!(
            EnabledEvent::RadarEarlyFraudWarningCreated.to_string(),
            "radar.early_fraud_warning.created"
        );

        let params = json!({ "url": "https://example.com/hook", "enabled_events": ["charge.exploded"] });
        assert!(serde_json::from_value::<WebhookEndpointCreateParams>(params).is_err());
    }

    #[test]
    fn test_create_requires_url_and_events() {
        assert!(
            serde_json::from_value::<WebhookEndpointCreateParams>(json!({
                "url": "https://example.com/hook"
            }))
            .is_err()
        );
        assert!(
            serde_json::from_value::<WebhookEndpointCreateParams>(json!({
                "enabled_events": ["*"]
            }))
            .is_err()
        );

        let mut params = WebhookEndpointCreateParams::new(
            "https://example.com/hook",
            vec![EnabledEvent::InvoicePaymentSucceeded, EnabledEvent::TransferCreated],
        );
        params.api_version = Some(ApiVersion::V2019_10_17);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "api_version": "2019-10-17",
                "enabled_events": ["invoice.payment_succeeded", "transfer.created"],
                "url": "https://example.com/hook"
            })
        );
    }

    #[test]
    fn test_endpoint_deserializes() {
        let endpoint: WebhookEndpoint = serde_json::from_value(json!({
            "id": "we_1",
            "object": "webhook_endpoint",
            "api_version": null,
            "application": null,
            "created": 1573000000,
            "enabled_events": ["*"],
            "livemode": false,
            "secret": "whsec_abc",
            "status": "enabled",
            "url": "https://example.com/hook"
        }))
        .unwrap();
        assert!(endpoint.is_enabled());
        assert!(endpoint.receives(EnabledEvent::PayoutFailed));
        assert_eq!(endpoint.secret.as_deref(), Some("whsec_abc"));
    }

    #[test]
    fn test_deleted_endpoint_rejects_wrong_object() {
        let value = json!({ "id": "we_1", "object": "webhook", "deleted": true });
        assert!(serde_json::from_value::<DeletedWebhookEndpoint>(value).is_err());
    }
}
