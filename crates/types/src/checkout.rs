//! Checkout sessions: a hosted payment page the customer is redirected to.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    common::{
        Customer, ExpandParams, Expandable, Metadata, Object, PaymentIntent, SetupIntent, Sku,
        Subscription, Timestamp,
    },
    plans::Plan,
};

lit_str!(SessionObject, "checkout.session");

// ============================================================================
// Enum Types
// ============================================================================

/// Language the checkout page is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Auto,
    Da,
    De,
    En,
    Es,
    Fi,
    Fr,
    It,
    Ja,
    Nb,
    Nl,
    Pl,
    Pt,
    Sv,
    Zh,
}

/// Checkout session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Payment,
    Setup,
    Subscription,
}

/// Wording of the pay button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitType {
    Auto,
    Book,
    Donate,
    Pay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingAddressCollection {
    Auto,
    Required,
}

/// Payment method types accepted by checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPaymentMethodType {
    Card,
    Ideal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupFutureUsage {
    OffSession,
    OnSession,
}

// ============================================================================
// Session
// ============================================================================

/// Stripe-compatible checkout session
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub object: SessionObject,
    #[serde(default)]
    pub billing_address_collection: Option<String>,
    /// The URL the customer will be directed to if they decide to cancel payment.
    #[serde(default)]
    pub cancel_url: Option<String>,
    /// A unique string to reference the session, e.g. a cart or order id.
    #[serde(default)]
    pub client_reference_id: Option<String>,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// The line items, plans, or SKUs purchased by the customer.
    #[serde(default)]
    pub display_items: Option<Vec<DisplayItem>>,
    #[serde(default)]
    pub livemode: Option<bool>,
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub mode: Option<SessionMode>,
    #[serde(default)]
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    #[serde(default)]
    pub payment_method_types: Option<Vec<String>>,
    #[serde(default)]
    pub setup_intent: Option<Expandable<SetupIntent>>,
    #[serde(default)]
    pub submit_type: Option<SubmitType>,
    #[serde(default)]
    pub subscription: Option<Expandable<Subscription>>,
    #[serde(default)]
    pub success_url: Option<String>,
}

impl Object for Session {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        SessionObject::VALUE
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub custom: Option<CustomDisplayItem>,
    #[serde(default)]
    pub plan: Option<Box<Plan>>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub sku: Option<Sku>,
    /// `custom`, `plan` or `sku`.
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDisplayItem {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    pub name: String,
}

// ============================================================================
// Parameters
// ============================================================================

/// Line item in create request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLineItemParams {
    /// Amount of the item in the smallest currency unit.
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub name: String,
    pub quantity: u64,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntentDataParams {
    pub application_fee_amount: Option<i64>,
    pub capture_method: Option<CaptureMethod>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub on_behalf_of: Option<String>,
    pub receipt_email: Option<String>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub shipping: Option<ShippingParams>,
    pub statement_descriptor: Option<String>,
    pub transfer_data: Option<TransferDataParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingParams {
    pub address: ShippingAddressParams,
    pub carrier: Option<String>,
    /// Recipient name.
    pub name: String,
    pub phone: Option<String>,
    pub tracking_number: Option<String>,
}

/// Shipping address; unlike other addresses, `line1` is required.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddressParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDataParams {
    /// Connected account receiving the funds.
    pub destination: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupIntentDataParams {
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub on_behalf_of: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDataParams {
    pub application_fee_percent: Option<f64>,
    pub items: Vec<SubscriptionItemParams>,
    pub metadata: Option<Metadata>,
    pub trial_end: Option<Timestamp>,
    pub trial_from_plan: Option<bool>,
    pub trial_period_days: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionItemParams {
    /// Plan ID for this item.
    pub plan: String,
    pub quantity: Option<u64>,
}

/// Create checkout session request
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreateParams {
    pub billing_address_collection: Option<BillingAddressCollection>,
    pub cancel_url: String,
    pub client_reference_id: Option<String>,
    /// ID of an existing customer, if one exists.
    pub customer: Option<String>,
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub line_items: Option<Vec<SessionLineItemParams>>,
    pub locale: Option<Locale>,
    pub mode: Option<SessionMode>,
    pub payment_intent_data: Option<PaymentIntentDataParams>,
    pub payment_method_types: Vec<CheckoutPaymentMethodType>,
    pub setup_intent_data: Option<SetupIntentDataParams>,
    pub submit_type: Option<SubmitType>,
    pub subscription_data: Option<SubscriptionDataParams>,
    pub success_url: String,
}

impl SessionCreateParams {
    pub fn new(
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
        payment_method_types: Vec<CheckoutPaymentMethodType>,
    ) -> Self {
        Self {
            billing_address_collection: None,
            cancel_url: cancel_url.into(),
            client_reference_id: None,
            customer: None,
            customer_email: None,
            expand: Vec::new(),
            line_items: None,
            locale: None,
            mode: None,
            payment_intent_data: None,
            payment_method_types,
            setup_intent_data: None,
            submit_type: None,
            subscription_data: None,
            success_url: success_url.into(),
        }
    }
}

pub type SessionRetrieveParams = ExpandParams;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_create_requires_urls_and_payment_method_types() {
        let full = json!({
            "cancel_url": "https://example.com/cancel",
            "payment_method_types": ["card"],
            "success_url": "https://example.com/success"
        });
        assert!(serde_json::from_value::<SessionCreateParams>(full.clone()).is_ok());

        for field in ["cancel_url", "payment_method_types", "success_url"] {
            let mut partial = full.clone();
            partial.as_object_mut().unwrap().remove(field);
            assert!(
                serde_json::from_value::<SessionCreateParams>(partial).is_err(),
                "{field} should be required"
            );
        }
    }

    #[test]
    fn test_payment_method_types_are_closed() {
        let value = json!({
            "cancel_url": "https://example.com/cancel",
            "payment_method_types": ["card", "alipay"],
            "success_url": "https://example.com/success"
        });
        assert!(serde_json::from_value::<SessionCreateParams>(value).is_err());
    }

    #[test]
    fn test_subscription_items_require_plan() {
        let data = json!({ "items": [{ "quantity": 2 }] });
        assert!(serde_json::from_value::<SubscriptionDataParams>(data).is_err());

        let data: SubscriptionDataParams =
            serde_json::from_value(json!({ "items": [{ "plan": "gold" }] })).unwrap();
        assert_eq!(data.items[0].plan, "gold");
    }

    #[test]
    fn test_session_deserializes_with_display_items() {
        let session: Session = serde_json::from_value(json!({
            "id": "cs_test_1",
            "object": "checkout.session",
            "billing_address_collection": null,
            "cancel_url": "https://example.com/cancel",
            "client_reference_id": null,
            "customer": { "id": "cus_1", "object": "customer", "email": "a@b.c" },
            "display_items": [{
                "amount": 1500,
                "currency": "usd",
                "custom": { "name": "T-shirt", "images": null, "description": null },
                "quantity": 2,
                "type": "custom"
            }],
            "livemode": false,
            "locale": "auto",
            "mode": "payment",
            "payment_intent": "pi_1",
            "payment_method_types": ["card"],
            "setup_intent": null,
            "submit_type": "donate",
            "subscription": null,
            "success_url": "https://example.com/success"
        }))
        .unwrap();

        assert_eq!(session.locale, Some(Locale::Auto));
        assert_eq!(session.submit_type, Some(SubmitType::Donate));
        assert!(session.customer.as_ref().unwrap().is_expanded());
        assert_eq!(session.payment_intent.as_ref().unwrap().id(), "pi_1");
        let items = session.display_items.unwrap();
        assert_eq!(items[0].custom.as_ref().unwrap().name, "T-shirt");
        assert_eq!(items[0].item_type.as_deref(), Some("custom"));
    }

    #[test]
    fn test_locale_is_closed() {
        let value = json!({ "id": "cs_1", "object": "checkout.session", "locale": "ko" });
        assert!(serde_json::from_value::<Session>(value).is_err());
    }

    #[test]
    fn test_create_params_nest_payment_intent_data() {
        let mut params = SessionCreateParams::new(
            "https://example.com/success",
            "https://example.com/cancel",
            vec![CheckoutPaymentMethodType::Card, CheckoutPaymentMethodType::Ideal],
        );
        params.payment_intent_data = Some(PaymentIntentDataParams {
            capture_method: Some(CaptureMethod::Manual),
            transfer_data: Some(TransferDataParams {
                destination: "acct_1".to_string(),
            }),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "cancel_url": "https://example.com/cancel",
                "payment_intent_data": {
                    "capture_method": "manual",
                    "transfer_data": { "destination": "acct_1" }
                },
                "payment_method_types": ["card", "ideal"],
                "success_url": "https://example.com/success"
            })
        );
    }
}
