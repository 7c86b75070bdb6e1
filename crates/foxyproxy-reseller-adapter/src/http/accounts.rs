/*
[INPUT]:  Account usernames, pagination cursors and write parameters
[OUTPUT]: Account records, existence checks and affected-account counts
[POS]:    HTTP layer - account endpoints (list/count/exists + mutations)
[UPDATE]: When adding new account endpoints or changing mutation bodies
*/

use reqwest::Method;

use crate::http::client::validate_page;
use crate::http::{ResellerClient, ResellerError, Result};
use crate::types::requests::MutationBody;
use crate::types::{Account, WriteParameters};

impl ResellerClient {
    /// Check whether a username exists on any node in the reseller pool.
    /// 200 means it does, 404 means it does not.
    ///
    /// GET /accounts/exists/{username}/
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let endpoint = format!("/accounts/exists/{username}/");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        Ok(!response.is_not_found())
    }

    /// Get at most `size` accounts beginning at the zero-based `index`.
    ///
    /// GET /accounts/?index={index}&size={size}
    pub async fn get_accounts(&self, index: i32, size: i32) -> Result<Vec<Account>> {
        validate_page(index, size)?;
        let endpoint = format!("/accounts/?index={index}&size={size}");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Get accounts with the given username across the pool, paginated.
    ///
    /// GET /accounts/{username}/?index={index}&size={size}
    pub async fn get_accounts_by_username(
        &self,
        username: &str,
        index: i32,
        size: i32,
    ) -> Result<Vec<Account>> {
        validate_page(index, size)?;
        let endpoint = format!("/accounts/{username}/?index={index}&size={size}");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Get accounts assigned to the given node, paginated.
    ///
    /// GET /nodes/{nodeName}/accounts/?index={index}&size={size}
    pub async fn get_accounts_by_node(
        &self,
        node_name: &str,
        index: i32,
        size: i32,
    ) -> Result<Vec<Account>> {
        validate_page(index, size)?;
        let endpoint = format!("/nodes/{node_name}/accounts/?index={index}&size={size}");
        let response = self.execute(Method::GET, &endpoint, None).await?;
        response.decode_list()
    }

    /// Total number of accounts across the pool.
    ///
    /// GET /accounts/count/
    pub async fn count_accounts(&self) -> Result<u64> {
        let response = self.execute(Method::GET, "/accounts/count/", None).await?;
        response.decode_count()
    }

    /// Deactivate accounts with the given username and return the number of
    /// accounts affected. Target nodes come from `params`; when unspecified
    /// the API applies its own default scope.
    ///
    /// PATCH /accounts/deactivate/{username}/
    pub async fn deactivate_account(
        &self,
        username: &str,
        params: Option<&WriteParameters>,
    ) -> Result<u64> {
        let body = MutationBody::new().write_parameters(params).into_value();
        let endpoint = format!("/accounts/deactivate/{username}/");
        let response = self.execute(Method::PATCH, &endpoint, body).await?;
        response.decode_count()
    }

    /// Activate accounts with the given username and return the number of
    /// accounts affected.
    ///
    /// PATCH /accounts/activate/{username}/
    pub async fn activate_account(
        &self,
        username: &str,
        params: Option<&WriteParameters>,
    ) -> Result<u64> {
        let body = MutationBody::new().write_parameters(params).into_value();
        let endpoint = format!("/accounts/activate/{username}/");
        let response = self.execute(Method::PATCH, &endpoint, body).await?;
        response.decode_count()
    }

    /// Update the password for accounts with the given username and return
    /// the number of accounts affected. Password length must be strictly
    /// between 3 and 127; out-of-range passwords are rejected before any
    /// request is made.
    ///
    /// PATCH /accounts/update-password/{username}
    pub async fn update_password(
        &self,
        username: &str,
        password: &str,
        params: Option<&WriteParameters>,
    ) -> Result<u64> {
        if password.len() <= 3 {
            return Err(ResellerError::validation(
                "password must be more than 3 characters long",
            ));
        }
        if password.len() >= 127 {
            return Err(ResellerError::validation(
                "password must be less than 127 characters long",
            ));
        }

        let body = MutationBody::new()
            .field("password", password)
            .write_parameters(params)
            .into_value();
        let endpoint = format!("/accounts/update-password/{username}");
        let response = self.execute(Method::PATCH, &endpoint, body).await?;
        response.decode_count()
    }

    /// Delete accounts with the given username and, optionally, their
    /// history. Returns the number of accounts affected.
    ///
    /// PATCH /accounts/delete/{username}/
    pub async fn delete_accounts(
        &self,
        username: &str,
        include_history: bool,
        params: Option<&WriteParameters>,
    ) -> Result<u64> {
        let body = MutationBody::new()
            .field("includeHistory", include_history)
            .write_parameters(params)
            .into_value();
        let endpoint = format!("/accounts/delete/{username}/");
        let response = self.execute(Method::PATCH, &endpoint, body).await?;
        response.decode_count()
    }

    /// Copy every account on `from_node` to the listed nodes. Returns the
    /// number of accounts affected.
    ///
    /// An empty `to_nodes` list omits the `nodeNames` key - the request is
    /// then sent with no body, like the other mutations with nothing to say.
    ///
    /// POST /accounts/copy-all/{fromNode}/
    pub async fn copy_accounts(&self, from_node: &str, to_nodes: &[String]) -> Result<u64> {
        let mut builder = MutationBody::new();
        if !to_nodes.is_empty() {
            builder = builder.field("nodeNames", to_nodes.to_vec());
        }
        let endpoint = format!("/accounts/copy-all/{from_node}/");
        let response = self
            .execute(Method::POST, &endpoint, builder.into_value())
            .await?;
        response.decode_count()
    }
}
