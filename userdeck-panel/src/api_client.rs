use anyhow::Result;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use userdeck_model::{CreateUserRequest, UpdateUserRequest, UserId, UserRecord};

/// HTTP client for the UserDeck backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a target-scoped API URL
    fn build_url(&self, target: &str, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/api/{target}/{path}")
    }

    /// Execute a request and decode the JSON body
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(response.json().await?),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow::anyhow!(
                    "Request failed with status {status}: {error_text}"
                ))
            }
        }
    }

    /// Execute a request whose response body is unused
    async fn execute_no_content(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow::anyhow!(
                    "Request failed with status {status}: {error_text}"
                ))
            }
        }
    }

    // User record operations

    /// Fetch all records of a target, in server order.
    pub async fn list_users(&self, target: &str) -> Result<Vec<UserRecord>> {
        let url = self.build_url(target, "users");
        log::debug!("[ApiClient] GET request to: {url}");
        self.execute_request(self.client.get(&url)).await
    }

    /// Create a record; the response carries the assigned id.
    pub async fn create_user(
        &self,
        target: &str,
        request: &CreateUserRequest,
    ) -> Result<UserRecord> {
        let url = self.build_url(target, "users");
        self.execute_request(self.client.post(&url).json(request)).await
    }

    /// Rewrite name and email of the record at `id`.
    ///
    /// The id travels verbatim as the path segment; the update form does
    /// not validate it client-side.
    pub async fn update_user(
        &self,
        target: &str,
        id: &str,
        request: &UpdateUserRequest,
    ) -> Result<()> {
        let url = self.build_url(target, &format!("users/{id}"));
        self.execute_no_content(self.client.put(&url).json(request)).await
    }

    /// Delete the record at `id`.
    pub async fn delete_user(&self, target: &str, id: UserId) -> Result<()> {
        let url = self.build_url(target, &format!("users/{id}"));
        self.execute_no_content(self.client.delete(&url)).await
    }
}
