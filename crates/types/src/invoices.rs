//! Invoices, their line items and the upcoming-invoice preview.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    accounts::{Account, BankAccount, Card},
    common::{
        Address, ApiObject, Charge, Customer, Deleted, Discount, EmptyParams, Emptyable,
        ExpandParams, Expandable, List, ListParams, Metadata, Object, PaymentIntent,
        PaymentMethod, RangeQuery, Subscription, TaxRate, Timestamp,
    },
    lit::{Now, Unchanged},
    plans::Plan,
};

lit_str!(InvoiceObject, "invoice");
lit_str!(InvoiceLineItemObject, "line_item");

pub type DeletedInvoice = Deleted<InvoiceObject>;

// ============================================================================
// Enum Types
// ============================================================================

/// Why the invoice was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingReason {
    AutomaticPendingInvoiceItemInvoice,
    Manual,
    Subscription,
    SubscriptionCreate,
    SubscriptionCycle,
    SubscriptionThreshold,
    SubscriptionUpdate,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    ChargeAutomatically,
    SendInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxExempt {
    Exempt,
    None,
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxIdType {
    AuAbn,
    ChVat,
    EuVat,
    InGst,
    MxRfc,
    NoVat,
    NzGst,
    Unknown,
    ZaVat,
}

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Deleted,
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

/// Status filter for listing invoices. Deleted invoices are never listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceListStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceLineItemType {
    Invoiceitem,
    Subscription,
}

// ============================================================================
// Invoice
// ============================================================================

/// The Invoice object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub object: InvoiceObject,
    #[serde(default)]
    pub account_country: Option<String>,
    #[serde(default)]
    pub account_name: Option<String>,
    /// Final amount due at this time for this invoice.
    pub amount_due: i64,
    pub amount_paid: i64,
    pub amount_remaining: i64,
    #[serde(default)]
    pub application_fee_amount: Option<i64>,
    /// Number of payment attempts made for this invoice.
    pub attempt_count: u32,
    pub attempted: bool,
    /// Whether Stripe performs automatic collection of the invoice.
    pub auto_advance: bool,
    #[serde(default)]
    pub billing_reason: Option<BillingReason>,
    #[serde(default)]
    pub charge: Option<Expandable<Charge>>,
    #[serde(default)]
    pub collection_method: Option<CollectionMethod>,
    pub created: Timestamp,
    pub currency: String,
    #[serde(default)]
    pub custom_fields: Option<Vec<CustomField>>,
    pub customer: Expandable<Customer>,
    #[serde(default)]
    pub customer_address: Option<Address>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_shipping: Option<Shipping>,
    #[serde(default)]
    pub customer_tax_exempt: Option<TaxExempt>,
    #[serde(default)]
    pub customer_tax_ids: Option<Vec<CustomerTaxId>>,
    #[serde(default)]
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    #[serde(default)]
    pub default_source: Option<Expandable<PaymentSource>>,
    #[serde(default)]
    pub default_tax_rates: Option<Vec<TaxRate>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub due_date: Option<Timestamp>,
    #[serde(default)]
    pub ending_balance: Option<i64>,
    #[serde(default)]
    pub footer: Option<String>,
    /// The URL for the hosted invoice page.
    #[serde(default)]
    pub hosted_invoice_url: Option<String>,
    #[serde(default)]
    pub invoice_pdf: Option<String>,
    /// The individual line items that make up the invoice.
    pub lines: List<InvoiceLineItem>,
    pub livemode: bool,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub next_payment_attempt: Option<Timestamp>,
    #[serde(default)]
    pub number: Option<String>,
    pub paid: bool,
    #[serde(default)]
    pub payment_intent: Option<Expandable<PaymentIntent>>,
    pub period_end: Timestamp,
    pub period_start: Timestamp,
    pub post_payment_credit_notes_amount: i64,
    pub pre_payment_credit_notes_amount: i64,
    #[serde(default)]
    pub receipt_number: Option<String>,
    pub starting_balance: i64,
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub status_transitions: StatusTransitions,
    #[serde(default)]
    pub subscription: Option<Expandable<Subscription>>,
    #[serde(default)]
    pub subscription_proration_date: Option<Timestamp>,
    pub subtotal: i64,
    #[serde(default)]
    pub tax: Option<i64>,
    #[serde(default)]
    pub tax_percent: Option<f64>,
    #[serde(default)]
    pub threshold_reason: Option<ThresholdReason>,
    pub total: i64,
    #[serde(default)]
    pub total_tax_amounts: Option<Vec<TaxAmount>>,
    #[serde(default)]
    pub transfer_data: Option<InvoiceTransferData>,
    #[serde(default)]
    pub webhooks_delivered_at: Option<Timestamp>,
}

impl Object for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        InvoiceObject::VALUE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerTaxId {
    #[serde(rename = "type")]
    pub tax_id_type: TaxIdType,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransitions {
    #[serde(default)]
    pub finalized_at: Option<Timestamp>,
    #[serde(default)]
    pub marked_uncollectible_at: Option<Timestamp>,
    #[serde(default)]
    pub paid_at: Option<Timestamp>,
    #[serde(default)]
    pub voided_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdReason {
    /// The total invoice amount threshold boundary if it triggered the threshold invoice.
    #[serde(default)]
    pub amount_gte: Option<i64>,
    pub item_reasons: Vec<ItemReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReason {
    pub line_item_ids: Vec<String>,
    pub usage_gte: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAmount {
    pub amount: i64,
    pub inclusive: bool,
    pub tax_rate: Expandable<TaxRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTransferData {
    pub destination: Expandable<Account>,
}

/// Anything an invoice can be charged to by default.
///
/// Accounts, bank accounts and cards are typed; the remaining source kinds
/// (Alipay accounts, Bitcoin receivers, sources) are kept as raw objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentSource {
    Account(Box<Account>),
    BankAccount(Box<BankAccount>),
    Card(Box<Card>),
    Other(ApiObject),
}

impl Object for PaymentSource {
    fn id(&self) -> &str {
        match self {
            PaymentSource::Account(account) => &account.id,
            PaymentSource::BankAccount(bank_account) => &bank_account.id,
            PaymentSource::Card(card) => &card.id,
            PaymentSource::Other(object) => &object.id,
        }
    }

    fn object(&self) -> &str {
        match self {
            PaymentSource::Account(account) => account.object(),
            PaymentSource::BankAccount(bank_account) => bank_account.object.as_ref(),
            PaymentSource::Card(card) => card.object.as_ref(),
            PaymentSource::Other(object) => &object.object,
        }
    }
}

/// A single line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: String,
    pub object: InvoiceLineItemObject,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discountable: bool,
    #[serde(default)]
    pub invoice_item: Option<String>,
    pub livemode: bool,
    #[serde(default)]
    pub metadata: Metadata,
    pub period: Period,
    #[serde(default)]
    pub plan: Option<Plan>,
    pub proration: bool,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub subscription: Option<String>,
    #[serde(default)]
    pub subscription_item: Option<String>,
    #[serde(default)]
    pub tax_amounts: Option<Vec<TaxAmount>>,
    #[serde(default)]
    pub tax_rates: Option<Vec<TaxRate>>,
    #[serde(rename = "type")]
    pub line_type: InvoiceLineItemType,
}

impl Object for InvoiceLineItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        InvoiceLineItemObject::VALUE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub end: Timestamp,
    pub start: Timestamp,
}

// ============================================================================
// Parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDestinationParams {
    pub destination: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceCreateParams {
    pub application_fee_amount: Option<i64>,
    pub auto_advance: Option<bool>,
    pub collection_method: Option<CollectionMethod>,
    pub custom_fields: Option<Emptyable<Vec<CustomField>>>,
    /// The customer to bill.
    pub customer: String,
    /// Only valid for invoices where `collection_method=send_invoice`.
    pub days_until_due: Option<u32>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Option<Vec<String>>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub footer: Option<String>,
    pub metadata: Option<Metadata>,
    pub statement_descriptor: Option<String>,
    /// The subscription to bill pending invoice items for.
    pub subscription: Option<String>,
    pub tax_percent: Option<f64>,
    pub transfer_data: Option<TransferDestinationParams>,
}

impl InvoiceCreateParams {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            application_fee_amount: None,
            auto_advance: None,
            collection_method: None,
            custom_fields: None,
            customer: customer.into(),
            days_until_due: None,
            default_payment_method: None,
            default_source: None,
            default_tax_rates: None,
            description: None,
            due_date: None,
            expand: Vec::new(),
            footer: None,
            metadata: None,
            statement_descriptor: None,
            subscription: None,
            tax_percent: None,
            transfer_data: None,
        }
    }
}

pub type InvoiceDeleteParams = EmptyParams;
pub type InvoiceRetrieveParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceListParams {
    pub collection_method: Option<CollectionMethod>,
    pub created: Option<RangeQuery>,
    pub customer: Option<String>,
    pub due_date: Option<RangeQuery>,
    #[serde(flatten)]
    pub page: ListParams,
    pub status: Option<InvoiceListStatus>,
    pub subscription: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceUpdateParams {
    pub application_fee_amount: Option<i64>,
    pub auto_advance: Option<bool>,
    pub collection_method: Option<CollectionMethod>,
    pub custom_fields: Option<Emptyable<Vec<CustomField>>>,
    pub days_until_due: Option<u32>,
    pub default_payment_method: Option<String>,
    pub default_source: Option<String>,
    pub default_tax_rates: Option<Emptyable<Vec<String>>>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub footer: Option<String>,
    pub metadata: Option<Metadata>,
    pub statement_descriptor: Option<String>,
    pub tax_percent: Option<Emptyable<f64>>,
    pub transfer_data: Option<Emptyable<TransferDestinationParams>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFinalizeInvoiceParams {
    pub auto_advance: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

pub type InvoiceMarkUncollectibleParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Forgive the difference when the source cannot cover the full amount due.
    pub forgive: Option<bool>,
    pub off_session: Option<bool>,
    /// Mark the invoice paid without actually charging it.
    pub paid_out_of_band: Option<bool>,
    pub payment_method: Option<String>,
    pub source: Option<String>,
}

pub type InvoiceSendInvoiceParams = ExpandParams;
pub type InvoiceVoidInvoiceParams = ExpandParams;
pub type InvoiceListLineItemsParams = ListParams;
pub type InvoiceListUpcomingLineItemsParams = ListParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodParams {
    pub end: Timestamp,
    pub start: Timestamp,
}

/// A pending invoice item to include in the upcoming-invoice preview.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpcomingInvoiceItemParams {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    /// The ID of an existing invoice item to preview changes to.
    pub invoiceitem: Option<String>,
    pub metadata: Option<Metadata>,
    pub period: Option<PeriodParams>,
    pub quantity: Option<u64>,
    pub tax_rates: Option<Emptyable<Vec<String>>>,
    pub unit_amount: Option<i64>,
    pub unit_amount_decimal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingThresholdsParams {
    pub usage_gte: i64,
}

/// A subscription item change to apply in the upcoming-invoice preview.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpcomingSubscriptionItemParams {
    pub billing_thresholds: Option<Emptyable<BillingThresholdsParams>>,
    pub clear_usage: Option<bool>,
    pub deleted: Option<bool>,
    pub id: Option<String>,
    pub metadata: Option<Metadata>,
    pub plan: Option<String>,
    pub quantity: Option<u64>,
    pub tax_rates: Option<Emptyable<Vec<String>>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BillingCycleAnchor {
    Now(Now),
    Unchanged(Unchanged),
    At(Timestamp),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrialEnd {
    Now(Now),
    At(Timestamp),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRetrieveUpcomingParams {
    pub coupon: Option<String>,
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub invoice_items: Option<Vec<UpcomingInvoiceItemParams>>,
    pub schedule: Option<String>,
    pub subscription: Option<String>,
    pub subscription_billing_cycle_anchor: Option<BillingCycleAnchor>,
    pub subscription_cancel_at: Option<Emptyable<Timestamp>>,
    pub subscription_cancel_at_period_end: Option<bool>,
    pub subscription_cancel_now: Option<bool>,
    pub subscription_default_tax_rates: Option<Emptyable<Vec<String>>>,
    pub subscription_items: Option<Vec<UpcomingSubscriptionItemParams>>,
    pub subscription_prorate: Option<bool>,
    pub subscription_proration_date: Option<Timestamp>,
    pub subscription_start_date: Option<Timestamp>,
    pub subscription_tax_percent: Option<f64>,
    pub subscription_trial_end: Option<TrialEnd>,
    pub subscription_trial_from_plan: Option<bool>,
}
