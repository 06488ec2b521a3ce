use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, FilePart, HttpTransport, Method, Transport};
use crate::config::ApiConfig;

/// Error body some backend endpoints return alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "error")]
    message: Option<String>,
}

/// Thin JSON layer over a [`Transport`]. Every call carries a Spanish
/// context message used when the backend answers with a non-2xx status.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn http(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config.clone())?)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, context: &str) -> Result<T, ApiError> {
        let response = self
            .execute(ApiRequest::new(Method::Get, path), context)
            .await?;
        decode(&response)
    }

    /// GET where 404 means "not found" rather than a failure.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.send(ApiRequest::new(Method::Get, path)).await?;
        if response.status == 404 {
            debug!(path, "resource not found");
            return Ok(None);
        }
        let response = check(response, path, context)?;
        decode(&response).map(Some)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::Post, path).with_json(serde_json::to_value(body)?);
        let response = self.execute(request, context).await?;
        decode(&response)
    }

    /// POST without a body, for action endpoints such as publish.
    pub async fn post_action<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(ApiRequest::new(Method::Post, path), context)
            .await?;
        decode(&response)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B, context: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::Put, path).with_json(serde_json::to_value(body)?);
        let response = self.execute(request, context).await?;
        decode(&response)
    }

    /// PUT whose response body is ignored.
    pub async fn put_unit<B>(&self, path: &str, body: &B, context: &str) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::Put, path).with_json(serde_json::to_value(body)?);
        self.execute(request, context).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str, context: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::Delete, path), context)
            .await
            .map(|_| ())
    }

    /// `multipart/form-data` upload.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<FilePart>,
        context: &str,
    ) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::Post, path).with_files(files);
        let response = self.execute(request, context).await?;
        decode(&response)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "api request");
        self.transport.send(request).await
    }

    async fn execute(&self, request: ApiRequest, context: &str) -> Result<ApiResponse, ApiError> {
        let path = request.path.clone();
        let response = self.send(request).await?;
        check(response, &path, context)
    }
}

fn check(response: ApiResponse, path: &str, context: &str) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }

    warn!(status = response.status, path, "api call failed");
    let detail = serde_json::from_slice::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());
    let message = match detail {
        Some(detail) => format!("{context}: {detail}"),
        None => context.to_string(),
    };

    if response.status == 409 {
        return Err(ApiError::Conflict { message });
    }
    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    if response.body.is_empty() {
        // Lets `T = ()` and `Option<_>` accept 204 responses.
        return serde_json::from_slice(b"null").map_err(ApiError::from);
    }
    serde_json::from_slice(&response.body).map_err(ApiError::from)
}
