//! MoneyMQ Stripe SDK
//!
//! Typed resource accessors for the Stripe-compatible REST API. The crate
//! owns request building, form encoding and response decoding; the wire is
//! left to a [`Transport`] supplied by the caller.
//!
//! # Overview
//!
//! - [`Client`] - holds a transport and a [`ClientConfig`], hands out accessors
//! - [`Transport`] - sends one prepared [`ApiRequest`] and returns the [`ApiResponse`]
//! - [`RequestOptions`] - per-call `Stripe-Account` and `Stripe-Version` overrides
//!
//! Accessors cover accounts, invoices, terminal readers, transfers, the
//! balance, checkout sessions, plans and webhook endpoints.
//!
//! # Quick Start
//!
//! ```ignore
//! use moneymq_stripe_sdk::{Client, ClientConfig, RequestOptions};
//! use moneymq_stripe_sdk::types::transfers::TransferCreateParams;
//!
//! let client = Client::with_config(MyHttpTransport::new(secret_key), ClientConfig::from_env()?);
//!
//! let params = TransferCreateParams::new("usd", "acct_1Fx").with_amount(1000);
//! let transfer = client
//!     .transfers()
//!     .create(&params, &RequestOptions::default())
//!     .await?;
//!
//! let balance = client
//!     .balance()
//!     .retrieve(&Default::default(), &RequestOptions::new().with_stripe_account("acct_1Fx"))
//!     .await?;
//! ```
//!
//! # Errors
//!
//! Non-2xx responses carrying the API's `{ "error": { ... } }` envelope are
//! surfaced as [`Error::Api`]. A 2xx body that does not match the expected
//! resource is [`Error::Decode`].

mod client;
mod config;
pub mod encoding;
mod error;
pub mod resources;
#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use client::{ApiRequest, ApiResponse, Client, Method, RequestOptions, Transport};
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, Error, Result};
pub use moneymq_stripe_types as types;
