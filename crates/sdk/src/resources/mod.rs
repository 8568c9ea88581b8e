//! One accessor per resource family, each borrowed from a [`Client`](crate::Client).

mod accounts;
mod balance;
mod checkout_sessions;
mod invoices;
mod plans;
mod terminal_readers;
mod transfers;
mod webhook_endpoints;

pub use accounts::Accounts;
pub use balance::BalanceResource;
pub use checkout_sessions::CheckoutSessions;
pub use invoices::Invoices;
pub use plans::Plans;
pub use terminal_readers::TerminalReaders;
pub use transfers::Transfers;
pub use webhook_endpoints::WebhookEndpoints;
