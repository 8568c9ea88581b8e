//! Typed request and response contracts for the Stripe REST API, as of API
//! version `2019-11-05`.
//!
//! Each resource family lives in its own module with its resource type, its
//! tombstone (where the API deletes), one parameter record per operation and
//! the literal unions it uses. Shared shapes live in [`common`].

// Large `json!` fixtures in the resource tests.
#![recursion_limit = "256"]

#[macro_use]
mod lit;

pub mod accounts;
pub mod balance;
pub mod checkout;
pub mod common;
pub mod invoices;
pub mod plans;
pub mod terminal;
pub mod transfers;
pub mod webhook_endpoints;

pub use accounts::{
    Account, BankAccount, Capability, Card, DeletedAccount, DeletedPerson, ExternalAccount,
    LoginLink, Person,
};
pub use balance::Balance;
pub use checkout::Session;
pub use common::{
    ApiObject, Deleted, Discount, Emptyable, Expandable, List, Metadata, Object, Open, RangeQuery,
    Timestamp,
};
pub use invoices::{DeletedInvoice, Invoice, InvoiceLineItem, PaymentSource};
pub use lit::{EmptyString, Inf, ListObject, LitTrue, Minimum, Now, Unchanged};
pub use plans::{DeletedPlan, Plan};
pub use terminal::{DeletedReader, Reader};
pub use transfers::{Transfer, TransferReversal};
pub use webhook_endpoints::{ApiVersion, DeletedWebhookEndpoint, EnabledEvent, WebhookEndpoint};
