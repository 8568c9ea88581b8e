use moneymq_stripe_types::{
    List,
    accounts::{
        Account, AccountCreateExternalAccountParams, AccountCreateLoginLinkParams,
        AccountCreateParams, AccountCreatePersonParams, AccountDelParams,
        AccountDeleteExternalAccountParams, AccountDeletePersonParams,
        AccountListCapabilitiesParams, AccountListExternalAccountsParams, AccountListParams,
        AccountListPersonsParams, AccountRejectParams, AccountRetrieveCapabilityParams,
        AccountRetrieveExternalAccountParams, AccountRetrieveParams, AccountRetrievePersonParams,
        AccountUpdateCapabilityParams, AccountUpdateExternalAccountParams, AccountUpdateParams,
        AccountUpdatePersonParams, Capability, DeletedAccount, DeletedPerson, ExternalAccount,
        LoginLink, Person,
    },
};

use crate::{
    client::{Client, RequestOptions, Transport},
    encoding::path_segment,
    error::Result,
};

/// Connected accounts and the objects nested under them
pub struct Accounts<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Accounts<'a, T> {
    pub(crate) fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn path(account: &str, rest: &str) -> String {
        format!("/v1/accounts/{}{}", path_segment(account), rest)
    }

    fn nested_path(account: &str, collection: &str, id: &str) -> String {
        Self::path(account, &format!("/{}/{}", collection, path_segment(id)))
    }

    pub async fn create(&self, params: &AccountCreateParams, options: &RequestOptions) -> Result<Account> {
        self.client.post("/v1/accounts".to_string(), params, options).await
    }

    pub async fn del(&self, id: &str, params: &AccountDelParams, options: &RequestOptions) -> Result<DeletedAccount> {
        self.client.delete(Self::path(id, ""), params, options).await
    }

    pub async fn list(&self, params: &AccountListParams, options: &RequestOptions) -> Result<List<Account>> {
        self.client.get("/v1/accounts".to_string(), params, options).await
    }

    /// Reject a connected account, e.g. for fraud.
    pub async fn reject(&self, id: &str, params: &AccountRejectParams, options: &RequestOptions) -> Result<Account> {
        self.client.post(Self::path(id, "/reject"), params, options).await
    }

    /// Retrieve a connected account, or the caller's own account when `id` is `None`.
    pub async fn retrieve(
        &self,
        id: Option<&str>,
        params: &AccountRetrieveParams,
        options: &RequestOptions,
    ) -> Result<Account> {
        let path = match id {
            Some(id) => Self::path(id, ""),
            None => "/v1/account".to_string(),
        };
        self.client.get(path, params, options).await
    }

    pub async fn update(&self, id: &str, params: &AccountUpdateParams, options: &RequestOptions) -> Result<Account> {
        self.client.post(Self::path(id, ""), params, options).await
    }

    pub async fn list_capabilities(
        &self,
        id: &str,
        params: &AccountListCapabilitiesParams,
        options: &RequestOptions,
    ) -> Result<List<Capability>> {
        self.client.get(Self::path(id, "/capabilities"), params, options).await
    }

    pub async fn retrieve_capability(
        &self,
        account: &str,
        id: &str,
        params: &AccountRetrieveCapabilityParams,
        options: &RequestOptions,
    ) -> Result<Capability> {
        self.client
            .get(Self::nested_path(account, "capabilities", id), params, options)
            .await
    }

    pub async fn update_capability(
        &self,
        account: &str,
        id: &str,
        params: &AccountUpdateCapabilityParams,
        options: &RequestOptions,
    ) -> Result<Capability> {
        self.client
            .post(Self::nested_path(account, "capabilities", id), params, options)
            .await
    }

    pub async fn create_external_account(
        &self,
        id: &str,
        params: &AccountCreateExternalAccountParams,
        options: &RequestOptions,
    ) -> Result<ExternalAccount> {
        self.client.post(Self::path(id, "/external_accounts"), params, options).await
    }

    /// The API echoes the removed bank account or card back.
    pub async fn delete_external_account(
        &self,
        account: &str,
        id: &str,
        params: &AccountDeleteExternalAccountParams,
        options: &RequestOptions,
    ) -> Result<ExternalAccount> {
        self.client
            .delete(Self::nested_path(account, "external_accounts", id), params, options)
            .await
    }

    pub async fn list_external_accounts(
        &self,
        id: &str,
        params: &AccountListExternalAccountsParams,
        options: &RequestOptions,
    ) -> Result<List<ExternalAccount>> {
        self.client.get(Self::path(id, "/external_accounts"), params, options).await
    }

    pub async fn retrieve_external_account(
        &self,
        account: &str,
        id: &str,
        params: &AccountRetrieveExternalAccountParams,
        options: &RequestOptions,
    ) -> Result<ExternalAccount> {
        self.client
            .get(Self::nested_path(account, "external_accounts", id), params, options)
            .await
    }

    pub async fn update_external_account(
        &self,
        account: &str,
        id: &str,
        params: &AccountUpdateExternalAccountParams,
        options: &RequestOptions,
    ) -> Result<ExternalAccount> {
        self.client
            .post(Self::nested_path(account, "external_accounts", id), params, options)
            .await
    }

    /// Single-use link into the Express dashboard for an Express account.
    pub async fn create_login_link(
        &self,
        id: &str,
        params: &AccountCreateLoginLinkParams,
        options: &RequestOptions,
    ) -> Result<LoginLink> {
        self.client.post(Self::path(id, "/login_links"), params, options).await
    }

    pub async fn create_person(
        &self,
        id: &str,
        params: &AccountCreatePersonParams,
        options: &RequestOptions,
    ) -> Result<Person> {
        self.client.post(Self::path(id, "/persons"), params, options).await
    }

    pub async fn delete_person(
        &self,
        account: &str,
        id: &str,
        params: &AccountDeletePersonParams,
        options: &RequestOptions,
    ) -> Result<DeletedPerson> {
        self.client
            .delete(Self::nested_path(account, "persons", id), params, options)
            .await
    }

    pub async fn list_persons(
        &self,
        id: &str,
        params: &AccountListPersonsParams,
        options: &RequestOptions,
    ) -> Result<List<Person>> {
        self.client.get(Self::path(id, "/persons"), params, options).await
    }

    pub async fn retrieve_person(
        &self,
        account: &str,
        id: &str,
        params: &AccountRetrievePersonParams,
        options: &RequestOptions,
    ) -> Result<Person> {
        self.client
            .get(Self::nested_path(account, "persons", id), params, options)
            .await
    }

    pub async fn update_person(
        &self,
        account: &str,
        id: &str,
        params: &AccountUpdatePersonParams,
        options: &RequestOptions,
    ) -> Result<Person> {
        self.client
            .post(Self::nested_path(account, "persons", id), params, options)
            .await
    }
}
