//! # ApiClient — one method per backend route
//!
//! A thin async wrapper over `reqwest`. Reads go through
//! [`crate::normalize::decode_list`] so every list endpoint tolerates the
//! same three payload shapes; writes only report success or failure — the
//! authoritative record state is always re-read after a mutation, never
//! merged client-side.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Account, AccountRole, AccountUpdate, LocateRequest, NewAccount, WorkOrder};
use crate::normalize::decode_list;

/// Backend root used when the build does not override it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Async client for the FieldOps REST backend.
///
/// Cheap to clone (`reqwest::Client` is reference-counted); the dashboard
/// provides one instance via context and every hook clones it.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build from the `FIELDOPS_API_URL` compile-time environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(option_env!("FIELDOPS_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &'static str,
    ) -> Result<Vec<T>, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body: Value = resp.json().await?;
        decode_list(body, key)
    }

    async fn expect_success(
        &self,
        req: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<(), ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "backend rejected write");
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(())
    }

    // -- accounts -------------------------------------------------------

    /// `GET /users` (all accounts) or `GET /users/{role}` (role-scoped).
    pub async fn list_accounts(&self, role: Option<AccountRole>) -> Result<Vec<Account>, ApiError> {
        let path = match role {
            Some(role) => format!("/users/{}", role.as_str()),
            None => "/users".to_string(),
        };
        self.get_list(&path, "users").await
    }

    /// `POST /users/`
    pub async fn create_account(&self, account: &NewAccount) -> Result<(), ApiError> {
        let req = self.http.post(self.url("/users/")).json(account);
        self.expect_success(req, "/users/").await
    }

    /// `PUT /users/{id}/`
    pub async fn update_account(&self, id: &str, update: &AccountUpdate) -> Result<(), ApiError> {
        let path = format!("/users/{id}/");
        let req = self.http.put(self.url(&path)).json(update);
        self.expect_success(req, &path).await
    }

    /// `DELETE /users/{id}/`
    pub async fn delete_account(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/users/{id}/");
        let req = self.http.delete(self.url(&path));
        self.expect_success(req, &path).await
    }

    /// `PATCH /users/{id}/toggle-status`
    pub async fn toggle_account_status(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/users/{id}/toggle-status");
        let req = self.http.patch(self.url(&path));
        self.expect_success(req, &path).await
    }

    // -- notification feed sources --------------------------------------

    /// `GET /locates/`
    pub async fn list_locates(&self) -> Result<Vec<LocateRequest>, ApiError> {
        self.get_list("/locates/", "locates").await
    }

    /// `GET /work-orders-today/`
    pub async fn list_work_orders_today(&self) -> Result<Vec<WorkOrder>, ApiError> {
        self.get_list("/work-orders-today/", "work_orders").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/users"), "http://localhost:8000/api/users");
    }
}
