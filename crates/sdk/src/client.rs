use std::{fmt, future::Future};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};
use url::Url;

use crate::{
    config::ClientConfig,
    encoding,
    error::{ApiError, Error, Result},
    resources::{
        Accounts, BalanceResource, CheckoutSessions, Invoices, Plans, TerminalReaders, Transfers,
        WebhookEndpoints,
    },
};

/// HTTP method of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request header overrides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Act on behalf of this connected account (`Stripe-Account`)
    pub stripe_account: Option<String>,

    /// API version for this request only (`Stripe-Version`)
    pub stripe_version: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stripe_account(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    pub fn with_stripe_version(mut self, version: impl Into<String>) -> Self {
        self.stripe_version = Some(version.into());
        self
    }
}

/// A fully prepared API call, handed to the [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,

    /// API path such as `/v1/accounts/acct_123`
    pub path: String,

    /// Absolute URL, with the query string already attached for `GET` and `DELETE`
    pub url: Url,

    /// Encoded parameters, in bracket notation
    pub params: Vec<(String, String)>,

    pub headers: Vec<(String, String)>,

    /// Form-encoded body for `POST`
    pub body: Option<String>,
}

impl ApiRequest {
    /// Look up a header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up an encoded parameter by its bracketed key
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// What a [`Transport`] hands back: the HTTP status and the decoded JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,

    /// Value of the `Request-Id` response header, if the transport captured it
    pub request_id: Option<String>,
}

impl ApiResponse {
    pub fn new(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body,
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends prepared requests over the wire.
///
/// Implement this on top of whichever HTTP client the application already
/// uses. Authentication, retries and timeouts belong here too.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// Entry point to every resource family
#[derive(Debug, Clone)]
pub struct Client<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Client<T> {
    /// Create a client with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn accounts(&self) -> Accounts<'_, T> {
        Accounts::new(self)
    }

    pub fn invoices(&self) -> Invoices<'_, T> {
        Invoices::new(self)
    }

    pub fn terminal_readers(&self) -> TerminalReaders<'_, T> {
        TerminalReaders::new(self)
    }

    pub fn transfers(&self) -> Transfers<'_, T> {
        Transfers::new(self)
    }

    pub fn balance(&self) -> BalanceResource<'_, T> {
        BalanceResource::new(self)
    }

    pub fn checkout_sessions(&self) -> CheckoutSessions<'_, T> {
        CheckoutSessions::new(self)
    }

    pub fn plans(&self) -> Plans<'_, T> {
        Plans::new(self)
    }

    pub fn webhook_endpoints(&self) -> WebhookEndpoints<'_, T> {
        WebhookEndpoints::new(self)
    }

    pub(crate) async fn get<P, R>(&self, path: String, params: &P, options: &RequestOptions) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Get, path, params, options).await
    }

    pub(crate) async fn post<P, R>(&self, path: String, params: &P, options: &RequestOptions) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Post, path, params, options).await
    }

    pub(crate) async fn delete<P, R>(&self, path: String, params: &P, options: &RequestOptions) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(Method::Delete, path, params, options).await
    }

    async fn request<P, R>(
        &self,
        method: Method,
        path: String,
        params: &P,
        options: &RequestOptions,
    ) -> Result<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.build_request(method, path, params, options)?;
        let path = request.path.clone();
        debug!(method = %method, path = %path, params = request.params.len(), "Dispatching API request");

        let response = self.transport.send(request).await?;
        decode(method, &path, response)
    }

    fn build_request<P>(
        &self,
        method: Method,
        path: String,
        params: &P,
        options: &RequestOptions,
    ) -> Result<ApiRequest>
    where
        P: Serialize + ?Sized,
    {
        let params = encoding::to_form_pairs(params)?;
        let mut url = self.config.endpoint(&path)?;

        let mut headers = vec![(
            "Stripe-Version".to_string(),
            options
                .stripe_version
                .clone()
                .unwrap_or_else(|| self.config.api_version.to_string()),
        )];
        if let Some(account) = options
            .stripe_account
            .as_ref()
            .or(self.config.stripe_account.as_ref())
        {
            headers.push(("Stripe-Account".to_string(), account.clone()));
        }

        let body = match method {
            Method::Post => {
                headers.push((
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                ));
                Some(encoding::to_form_string(&params)?)
            }
            Method::Get | Method::Delete => {
                if !params.is_empty() {
                    url.set_query(Some(&encoding::to_form_string(&params)?));
                }
                None
            }
        };

        Ok(ApiRequest {
            method,
            path,
            url,
            params,
            headers,
            body,
        })
    }
}

fn decode<R: DeserializeOwned>(method: Method, path: &str, response: ApiResponse) -> Result<R> {
    if !response.is_success() {
        let error = ApiError::from_body(&response.body);
        warn!(
            method = %method,
            path = %path,
            status = response.status,
            error_type = %error.kind,
            request_id = ?response.request_id,
            "API request failed"
        );
        return Err(Error::Api {
            status: response.status,
            error,
            request_id: response.request_id,
        });
    }

    serde_json::from_value(response.body).map_err(|e| {
        error!(method = %method, path = %path, error = %e, "Failed to decode API response");
        Error::Decode(e)
    })
}
