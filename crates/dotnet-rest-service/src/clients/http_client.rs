//! # HTTP Client
//!
//! A typed [`DotnetRestService`] over HTTP, for callers in other processes.
//! Non-2xx answers are turned back into [`DotnetRestError`] using the status code.

use crate::dotnet_rest_actor::DotnetRestError;
use crate::http::handlers::RESOURCE_PATH;
use crate::model::{
    CreateDotnetRestResponse, DeleteDotnetRestResponse, DotnetRestDto, ErrorResponse,
    GetDotnetRestResponse, GetDotnetRestsRequest, GetDotnetRestsResponse,
    UpdateDotnetRestResponse,
};
use crate::service::DotnetRestService;
use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct DotnetRestHttpClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl DotnetRestHttpClient {
    /// A client with its own connection pool. A trailing `/` on `base_url` is ignored.
    pub fn of(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// A client sharing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// Sends `Authorization: Bearer <token>` on every later request.
    pub fn set_authorization_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, id: Option<&str>) -> Result<Url, DotnetRestError> {
        let mut url = Url::parse(&format!("{}{RESOURCE_PATH}", self.base_url))
            .map_err(|e| DotnetRestError::Transport(format!("invalid base url: {e}")))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| DotnetRestError::Transport("base url cannot carry a path".into()))?
                .push(id);
        }
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        id: Option<&str>,
    ) -> Result<T, DotnetRestError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| DotnetRestError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(%status, "Response received");
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| DotnetRestError::Transport(format!("invalid response body: {e}")));
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(error_for_status(status, message, id))
    }
}

fn error_for_status(status: StatusCode, message: String, id: Option<&str>) -> DotnetRestError {
    match status {
        StatusCode::NOT_FOUND => DotnetRestError::not_found(id.unwrap_or("unknown")),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DotnetRestError::Validation(message)
        }
        StatusCode::UNAUTHORIZED => DotnetRestError::Unauthorized(message),
        StatusCode::FORBIDDEN => DotnetRestError::Forbidden(message),
        other => DotnetRestError::Transport(format!("{other}: {message}")),
    }
}

#[async_trait]
impl DotnetRestService for DotnetRestHttpClient {
    #[instrument(skip(self))]
    async fn create_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<CreateDotnetRestResponse, DotnetRestError> {
        let url = self.url(None)?;
        self.send(self.client.post(url).json(&request), None).await
    }

    #[instrument(skip(self))]
    async fn get_dotnet_rests(
        &self,
        request: GetDotnetRestsRequest,
    ) -> Result<GetDotnetRestsResponse, DotnetRestError> {
        let url = self.url(None)?;
        self.send(self.client.get(url).query(&request), None).await
    }

    #[instrument(skip(self))]
    async fn get_dotnet_rest(&self, id: &str) -> Result<GetDotnetRestResponse, DotnetRestError> {
        let url = self.url(Some(id))?;
        self.send(self.client.get(url), Some(id)).await
    }

    #[instrument(skip(self))]
    async fn update_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<UpdateDotnetRestResponse, DotnetRestError> {
        let Some(id) = request.id() else {
            return Err(DotnetRestError::Validation(
                "Id is required for update operation".into(),
            ));
        };
        let url = self.url(Some(id))?;
        self.send(self.client.put(url).json(&request), Some(id))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_dotnet_rest(
        &self,
        id: &str,
    ) -> Result<DeleteDotnetRestResponse, DotnetRestError> {
        let url = self.url(Some(id))?;
        self.send(self.client.delete(url), Some(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = DotnetRestHttpClient::of("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url(Some("abc")).unwrap().as_str(),
            "http://localhost:8080/api/DotnetRestService/abc"
        );
    }

    #[test]
    fn test_ids_are_path_encoded() {
        let client = DotnetRestHttpClient::of("http://localhost:8080");
        assert_eq!(
            client.url(Some("a b/c")).unwrap().as_str(),
            "http://localhost:8080/api/DotnetRestService/a%20b%2Fc"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_for_status(StatusCode::NOT_FOUND, "gone".into(), Some("x")),
            DotnetRestError::not_found("x")
        );
        assert!(matches!(
            error_for_status(StatusCode::UNPROCESSABLE_ENTITY, "bad".into(), None),
            DotnetRestError::Validation(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::FORBIDDEN, "no".into(), None),
            DotnetRestError::Forbidden(_)
        ));
        assert!(matches!(
            error_for_status(StatusCode::BAD_GATEWAY, "down".into(), None),
            DotnetRestError::Transport(msg) if msg.contains("502")
        ));
    }

    #[tokio::test]
    async fn test_update_without_id_fails_before_sending() {
        // Nothing listens on port 9; reaching the network would yield a Transport error.
        let client = DotnetRestHttpClient::of("http://127.0.0.1:9");
        let err = client
            .update_dotnet_rest(DotnetRestDto::new("orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, DotnetRestError::Validation(_)));
    }
}
