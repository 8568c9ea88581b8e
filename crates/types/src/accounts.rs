//! Connected accounts, along with the objects hanging off them: external
//! payout accounts (bank accounts and cards), persons, capabilities and
//! Express dashboard login links.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::common::{
    Address, AddressParams, Deleted, DocumentParams, Emptyable, Expandable, ExpandParams,
    EmptyParams, File, JapanAddress, JapanAddressParams, List, ListParams, Metadata, Object,
    RangeQuery, Timestamp, Customer,
};
use crate::lit::Minimum;

lit_str!(AccountObject, "account");
lit_str!(PersonObject, "person");
lit_str!(CapabilityObject, "capability");
lit_str!(LoginLinkObject, "login_link");
lit_str!(BankAccountObject, "bank_account");
lit_str!(CardObject, "card");

pub type DeletedAccount = Deleted<AccountObject>;
pub type DeletedPerson = Deleted<PersonObject>;

// ============================================================================
// Enum Types
// ============================================================================

/// Account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Custom,
    Express,
    Standard,
}

/// Status of a capability as summarized on the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityStatus {
    Active,
    Inactive,
    Pending,
}

/// Status of a standalone capability object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityState {
    Active,
    Disabled,
    Inactive,
    Pending,
    Unrequested,
}

/// Capabilities that can be requested when creating or updating an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedCapability {
    CardIssuing,
    CardPayments,
    LegacyPayments,
    Transfers,
}

impl RequestedCapability {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestedCapability::CardIssuing => "card_issuing",
            RequestedCapability::CardPayments => "card_payments",
            RequestedCapability::LegacyPayments => "legacy_payments",
            RequestedCapability::Transfers => "transfers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutInterval {
    Daily,
    Manual,
    Monthly,
    Weekly,
}

/// Day of the week a weekly payout lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeeklyAnchor {
    Friday,
    Monday,
    Saturday,
    Sunday,
    Thursday,
    Tuesday,
    Wednesday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountHolderType {
    Company,
    Individual,
}

/// Payout delay: a number of days, or the lowest delay the account allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DelayDays {
    Minimum(Minimum),
    Days(u32),
}

// ============================================================================
// Account
// ============================================================================

/// The Account object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Optional information related to the business.
    #[serde(default)]
    pub business_profile: Option<BusinessProfile>,
    /// The business type.
    #[serde(default)]
    pub business_type: Option<String>,
    #[serde(default)]
    pub capabilities: AccountCapabilities,
    /// Whether the account can create live charges.
    pub charges_enabled: bool,
    #[serde(default)]
    pub company: Company,
    /// The account's country.
    pub country: String,
    /// Time at which the object was created. Measured in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Three-letter ISO currency code representing the default currency for the account.
    pub default_currency: String,
    /// Whether account details have been submitted.
    pub details_submitted: bool,
    #[serde(default)]
    pub email: Option<String>,
    /// External accounts (bank accounts and debit cards) currently attached to this account.
    #[serde(default)]
    pub external_accounts: List<ExternalAccount>,
    pub id: String,
    #[serde(default)]
    pub individual: Option<Box<Person>>,
    #[serde(default)]
    pub metadata: Metadata,
    pub object: AccountObject,
    /// Whether Stripe can send payouts to this account.
    pub payouts_enabled: bool,
    #[serde(default)]
    pub requirements: AccountRequirements,
    /// Options for customizing how the account functions within Stripe.
    #[serde(default)]
    pub settings: Option<AccountSettings>,
    #[serde(default)]
    pub tos_acceptance: TosAcceptance,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Object for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        AccountObject::VALUE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// The merchant category code for the account.
    #[serde(default)]
    pub mcc: Option<String>,
    /// The customer-facing business name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub product_description: Option<String>,
    #[serde(default)]
    pub support_address: Option<Address>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub support_phone: Option<String>,
    #[serde(default)]
    pub support_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCapabilities {
    pub card_issuing: Option<CapabilityStatus>,
    pub card_payments: Option<CapabilityStatus>,
    pub legacy_payments: Option<CapabilityStatus>,
    pub transfers: Option<CapabilityStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub address: Option<Address>,
    /// The Kana variation of the company's primary address (Japan only).
    #[serde(default)]
    pub address_kana: Option<JapanAddress>,
    /// The Kanji variation of the company's primary address (Japan only).
    #[serde(default)]
    pub address_kanji: Option<JapanAddress>,
    /// Whether the company's directors have been provided.
    #[serde(default)]
    pub directors_provided: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_kana: Option<String>,
    #[serde(default)]
    pub name_kanji: Option<String>,
    /// Whether the company's owners have been provided.
    #[serde(default)]
    pub owners_provided: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tax_id_provided: Option<bool>,
    /// The jurisdiction in which the `tax_id` is registered (Germany-based companies only).
    #[serde(default)]
    pub tax_id_registrar: Option<String>,
    #[serde(default)]
    pub vat_id_provided: Option<bool>,
    #[serde(default)]
    pub verification: Option<CompanyVerification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyVerification {
    pub document: VerificationDocument,
}

/// An uploaded identity document and the outcome of checking it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationDocument {
    #[serde(default)]
    pub back: Option<Expandable<File>>,
    /// A user-displayable string describing the verification state of this document.
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub details_code: Option<String>,
    #[serde(default)]
    pub front: Option<Expandable<File>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRequirements {
    /// The date the fields in `currently_due` must be collected by.
    #[serde(default)]
    pub current_deadline: Option<Timestamp>,
    #[serde(default)]
    pub currently_due: Option<Vec<String>>,
    #[serde(default)]
    pub disabled_reason: Option<String>,
    #[serde(default)]
    pub eventually_due: Option<Vec<String>>,
    #[serde(default)]
    pub past_due: Option<Vec<String>>,
    #[serde(default)]
    pub pending_verification: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    #[serde(default)]
    pub branding: BrandingSettings,
    #[serde(default)]
    pub card_payments: CardPaymentsSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub payments: PaymentsSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payouts: Option<PayoutSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingSettings {
    /// An icon for the account. Must be square and at least 128px x 128px.
    #[serde(default)]
    pub icon: Option<Expandable<File>>,
    #[serde(default)]
    pub logo: Option<Expandable<File>>,
    /// A CSS hex color value representing the primary branding color for this account.
    #[serde(default)]
    pub primary_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPaymentsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decline_on: Option<DeclineOn>,
    #[serde(default)]
    pub statement_descriptor_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineOn {
    /// Whether Stripe automatically declines charges with an incorrect ZIP or postal code.
    pub avs_failure: bool,
    /// Whether Stripe automatically declines charges with an incorrect CVC.
    pub cvc_failure: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default)]
    pub display_name: Option<String>,
    /// The timezone used in the Stripe Dashboard for this account.
    #[serde(default)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsSettings {
    #[serde(default)]
    pub statement_descriptor: Option<String>,
    #[serde(default)]
    pub statement_descriptor_kana: Option<String>,
    #[serde(default)]
    pub statement_descriptor_kanji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSettings {
    /// Whether negative balances are debited from the account's external account.
    pub debit_negative_balances: bool,
    pub schedule: PayoutSchedule,
    #[serde(default)]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutSchedule {
    /// The number of days charges for the account will be held before being paid out.
    pub delay_days: u32,
    /// How frequently funds will be paid out.
    pub interval: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_anchor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_anchor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TosAcceptance {
    /// The Unix timestamp marking when the Stripe Services Agreement was accepted.
    #[serde(default)]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

// ============================================================================
// External accounts
// ============================================================================

/// A payout destination attached to an account.
///
/// Narrowed on the `object` field: `bank_account` or `card`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalAccount {
    BankAccount(Box<BankAccount>),
    Card(Box<Card>),
}

impl ExternalAccount {
    pub fn as_bank_account(&self) -> Option<&BankAccount> {
        match self {
            ExternalAccount::BankAccount(bank_account) => Some(bank_account),
            ExternalAccount::Card(_) => None,
        }
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            ExternalAccount::Card(card) => Some(card),
            ExternalAccount::BankAccount(_) => None,
        }
    }
}

impl Object for ExternalAccount {
    fn id(&self) -> &str {
        match self {
            ExternalAccount::BankAccount(bank_account) => &bank_account.id,
            ExternalAccount::Card(card) => &card.id,
        }
    }

    fn object(&self) -> &str {
        match self {
            ExternalAccount::BankAccount(_) => BankAccountObject::VALUE,
            ExternalAccount::Card(_) => CardObject::VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: String,
    pub object: BankAccountObject,
    #[serde(default)]
    pub account: Option<Expandable<Account>>,
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub account_holder_type: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub country: String,
    pub currency: String,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(default)]
    pub default_for_currency: Option<bool>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    pub last4: String,
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub routing_number: Option<String>,
    /// One of `new`, `validated`, `verified`, `verification_failed` or `errored`.
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub object: CardObject,
    #[serde(default)]
    pub account: Option<Expandable<Account>>,
    #[serde(default)]
    pub address_city: Option<String>,
    #[serde(default)]
    pub address_country: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line1_check: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub address_state: Option<String>,
    #[serde(default)]
    pub address_zip: Option<String>,
    #[serde(default)]
    pub address_zip_check: Option<String>,
    #[serde(default)]
    pub available_payout_methods: Option<Vec<String>>,
    /// Card brand, e.g. `Visa` or `MasterCard`.
    pub brand: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer: Option<Expandable<Customer>>,
    #[serde(default)]
    pub cvc_check: Option<String>,
    #[serde(default)]
    pub default_for_currency: Option<bool>,
    #[serde(default)]
    pub dynamic_last4: Option<String>,
    pub exp_month: u32,
    pub exp_year: u32,
    #[serde(default)]
    pub fingerprint: Option<String>,
    /// `credit`, `debit`, `prepaid` or `unknown`.
    pub funding: String,
    pub last4: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tokenization_method: Option<String>,
}

// ============================================================================
// Persons, capabilities, login links
// ============================================================================

/// A person associated with an account's legal entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub object: PersonObject,
    /// The account the person is associated with.
    pub account: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub address_kana: Option<JapanAddress>,
    #[serde(default)]
    pub address_kanji: Option<JapanAddress>,
    pub created: Timestamp,
    #[serde(default)]
    pub dob: Option<Dob>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub first_name_kana: Option<String>,
    #[serde(default)]
    pub first_name_kanji: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub id_number_provided: Option<bool>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub last_name_kana: Option<String>,
    #[serde(default)]
    pub last_name_kanji: Option<String>,
    #[serde(default)]
    pub maiden_name: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relationship: Option<PersonRelationship>,
    #[serde(default)]
    pub requirements: Option<PersonRequirements>,
    #[serde(default)]
    pub ssn_last_4_provided: Option<bool>,
    #[serde(default)]
    pub verification: Option<PersonVerification>,
}

impl Object for Person {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        PersonObject::VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRelationship {
    #[serde(default)]
    pub director: Option<bool>,
    #[serde(default)]
    pub executive: Option<bool>,
    #[serde(default)]
    pub owner: Option<bool>,
    #[serde(default)]
    pub percent_ownership: Option<f64>,
    #[serde(default)]
    pub representative: Option<bool>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRequirements {
    #[serde(default)]
    pub currently_due: Vec<String>,
    #[serde(default)]
    pub eventually_due: Vec<String>,
    #[serde(default)]
    pub past_due: Vec<String>,
    #[serde(default)]
    pub pending_verification: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonVerification {
    #[serde(default)]
    pub additional_document: Option<VerificationDocument>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub details_code: Option<String>,
    #[serde(default)]
    pub document: Option<VerificationDocument>,
    /// `unverified`, `pending` or `verified`.
    pub status: String,
}

/// A capability the account has requested or been granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capability {
    /// The identifier is the capability name, e.g. `card_payments`.
    pub id: String,
    pub object: CapabilityObject,
    pub account: Expandable<Account>,
    pub requested: bool,
    #[serde(default)]
    pub requested_at: Option<Timestamp>,
    #[serde(default)]
    pub requirements: Option<AccountRequirements>,
    pub status: CapabilityState,
}

impl Object for Capability {
    fn id(&self) -> &str {
        &self.id
    }

    fn object(&self) -> &str {
        CapabilityObject::VALUE
    }
}

/// Single-use link into the Express dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginLink {
    pub object: LoginLinkObject,
    pub created: Timestamp,
    pub url: String,
}

// ============================================================================
// Parameters
// ============================================================================

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfileParams {
    pub mcc: Option<String>,
    pub name: Option<String>,
    pub product_description: Option<String>,
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
    pub support_url: Option<String>,
    pub url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyParams {
    pub address: Option<AddressParams>,
    pub address_kana: Option<JapanAddressParams>,
    pub address_kanji: Option<JapanAddressParams>,
    pub directors_provided: Option<bool>,
    pub name: Option<String>,
    pub name_kana: Option<String>,
    pub name_kanji: Option<String>,
    pub owners_provided: Option<bool>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub tax_id_registrar: Option<String>,
    pub vat_id: Option<String>,
    pub verification: Option<CompanyVerificationParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyVerificationParams {
    pub document: Option<DocumentParams>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DobParams {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

/// Identity fields of a person, used both for `individual` on an account and
/// for standalone persons.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonParams {
    pub address: Option<AddressParams>,
    pub address_kana: Option<JapanAddressParams>,
    pub address_kanji: Option<JapanAddressParams>,
    pub dob: Option<Emptyable<DobParams>>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub first_name_kana: Option<String>,
    pub first_name_kanji: Option<String>,
    pub gender: Option<String>,
    pub id_number: Option<String>,
    pub last_name: Option<String>,
    pub last_name_kana: Option<String>,
    pub last_name_kanji: Option<String>,
    pub maiden_name: Option<String>,
    pub metadata: Option<Metadata>,
    pub phone: Option<String>,
    pub ssn_last_4: Option<String>,
    pub verification: Option<PersonVerificationParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonVerificationParams {
    pub additional_document: Option<DocumentParams>,
    pub document: Option<DocumentParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsParams {
    pub branding: Option<BrandingSettingsParams>,
    pub card_payments: Option<CardPaymentsSettingsParams>,
    pub payments: Option<PaymentsSettingsParams>,
    pub payouts: Option<PayoutSettingsParams>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingSettingsParams {
    /// File id of an uploaded icon.
    pub icon: Option<String>,
    /// File id of an uploaded logo.
    pub logo: Option<String>,
    pub primary_color: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPaymentsSettingsParams {
    pub decline_on: Option<DeclineOnParams>,
    pub statement_descriptor_prefix: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineOnParams {
    pub avs_failure: Option<bool>,
    pub cvc_failure: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentsSettingsParams {
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_kana: Option<String>,
    pub statement_descriptor_kanji: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutSettingsParams {
    pub debit_negative_balances: Option<bool>,
    pub schedule: Option<PayoutScheduleParams>,
    pub statement_descriptor: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayoutScheduleParams {
    pub delay_days: Option<DelayDays>,
    pub interval: Option<PayoutInterval>,
    /// Day of the month funds will be paid out, 1 to 31. Required when `interval` is `monthly`.
    pub monthly_anchor: Option<u32>,
    /// Required when `interval` is `weekly`.
    pub weekly_anchor: Option<WeeklyAnchor>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TosAcceptanceParams {
    pub date: Option<Timestamp>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

/// Creates a connected account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateParams {
    /// An account token, used to securely provide details to the account.
    pub account_token: Option<String>,
    pub business_profile: Option<BusinessProfileParams>,
    pub business_type: Option<String>,
    pub company: Option<CompanyParams>,
    /// The country in which the account holder resides. Defaults to your own country.
    pub country: Option<String>,
    pub default_currency: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// A card or bank account token or id to attach as the account's external account.
    pub external_account: Option<String>,
    pub individual: Option<PersonParams>,
    pub metadata: Option<Metadata>,
    pub requested_capabilities: Option<Vec<RequestedCapability>>,
    pub settings: Option<AccountSettingsParams>,
    pub tos_acceptance: Option<TosAcceptanceParams>,
    /// Defaults to `custom`.
    #[serde(rename = "type")]
    pub account_type: Option<AccountType>,
}

/// Updates a connected account. `country` and `type` cannot be changed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdateParams {
    pub account_token: Option<String>,
    pub business_profile: Option<BusinessProfileParams>,
    pub business_type: Option<String>,
    pub company: Option<CompanyParams>,
    pub default_currency: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub external_account: Option<String>,
    pub individual: Option<PersonParams>,
    pub metadata: Option<Metadata>,
    pub requested_capabilities: Option<Vec<RequestedCapability>>,
    pub settings: Option<AccountSettingsParams>,
    pub tos_acceptance: Option<TosAcceptanceParams>,
}

pub type AccountDelParams = EmptyParams;
pub type AccountRetrieveParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountListParams {
    pub created: Option<RangeQuery>,
    #[serde(flatten)]
    pub page: ListParams,
}

/// Rejects a connected account; `reason` is one of `fraud`, `terms_of_service` or `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRejectParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub reason: String,
}

impl AccountRejectParams {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            expand: Vec::new(),
            reason: reason.into(),
        }
    }
}

pub type AccountListCapabilitiesParams = ExpandParams;
pub type AccountRetrieveCapabilityParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdateCapabilityParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Passing `true` requests the capability, `false` removes it.
    pub requested: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateExternalAccountParams {
    pub default_for_currency: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Token or id of the bank account or debit card to attach.
    pub external_account: String,
    pub metadata: Option<Metadata>,
}

impl AccountCreateExternalAccountParams {
    pub fn new(external_account: impl Into<String>) -> Self {
        Self {
            default_for_currency: None,
            expand: Vec::new(),
            external_account: external_account.into(),
            metadata: None,
        }
    }
}

pub type AccountDeleteExternalAccountParams = EmptyParams;
pub type AccountListExternalAccountsParams = ListParams;
pub type AccountRetrieveExternalAccountParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdateExternalAccountParams {
    pub account_holder_name: Option<String>,
    pub account_holder_type: Option<Emptyable<AccountHolderType>>,
    pub address_city: Option<String>,
    pub address_country: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub default_for_currency: Option<bool>,
    pub exp_month: Option<String>,
    pub exp_year: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub metadata: Option<Metadata>,
    /// Cardholder name.
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateLoginLinkParams {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Where to redirect the user after they log out of their dashboard.
    pub redirect_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipParams {
    pub director: Option<bool>,
    pub executive: Option<bool>,
    pub owner: Option<bool>,
    pub percent_ownership: Option<Emptyable<f64>>,
    pub representative: Option<bool>,
    pub title: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCreatePersonParams {
    #[serde(flatten)]
    pub person: PersonParams,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// A person token, used to securely provide details to the person.
    pub person_token: Option<String>,
    pub relationship: Option<RelationshipParams>,
}

/// Same shape as [`AccountCreatePersonParams`]; every field is optional on update.
pub type AccountUpdatePersonParams = AccountCreatePersonParams;
pub type AccountDeletePersonParams = EmptyParams;
pub type AccountRetrievePersonParams = ExpandParams;

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipFilter {
    pub director: Option<bool>,
    pub executive: Option<bool>,
    pub owner: Option<bool>,
    pub representative: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountListPersonsParams {
    #[serde(flatten)]
    pub page: ListParams,
    /// Filters on the list of people returned based on the person's relationship to the account's company.
    pub relationship: Option<RelationshipFilter>,
}
