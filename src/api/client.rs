use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::session::{SecureString, SessionContext};

use super::error::ApiError;
use super::types::{
    CreateEquipmentRequest, EquipmentQuery, EquipmentRecord, EquipmentStats, EquipmentType,
    ErrorBody, LoginRequest, LoginResponse, MessageResponse, Page, ProfileResponse,
    TypeListResponse, UpdateEquipmentRequest, UserProfile,
};

/// HTTP client for the inventory API.
///
/// Holds no business state of its own. The auth header is read from the
/// injected [`SessionContext`] when each request is built, so it is present
/// exactly while a session is.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: SessionContext,
        connect_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// `POST /user/login/`
    pub async fn login(
        &self,
        username: &str,
        password: &SecureString,
    ) -> Result<LoginResponse, ApiError> {
        let url = self.url("/user/login/");
        let body = LoginRequest {
            username,
            password: password.expose(),
        };
        self.send_json(self.request(Method::POST, &url).json(&body), &url)
            .await
    }

    /// `GET /user/profile/`
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let url = self.url("/user/profile/");
        let response: ProfileResponse = self
            .send_json(self.request(Method::GET, &url), &url)
            .await?;
        Ok(response.user)
    }

    /// `GET /equipment/?page=&search=&equipment_type=`
    pub async fn list_equipment(
        &self,
        query: &EquipmentQuery,
    ) -> Result<Page<EquipmentRecord>, ApiError> {
        let base = self.url("/equipment/");
        let mut url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query.params() {
                pairs.append_pair(name, &value);
            }
        }

        let url = url.to_string();
        self.send_json(self.request(Method::GET, &url), &url).await
    }

    /// `GET /equipment/type/`
    pub async fn list_equipment_types(&self) -> Result<Vec<EquipmentType>, ApiError> {
        let url = self.url("/equipment/type/");
        let response: TypeListResponse = self
            .send_json(self.request(Method::GET, &url), &url)
            .await?;
        Ok(response.into_types())
    }

    /// `POST /equipment/`
    pub async fn create_equipment(
        &self,
        request: &CreateEquipmentRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url("/equipment/");
        self.send_message(Method::POST, &url, Some(request)).await
    }

    /// `PUT /equipment/{id}/`
    pub async fn update_equipment(
        &self,
        id: i64,
        request: &UpdateEquipmentRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/equipment/{}/", id));
        self.send_message(Method::PUT, &url, Some(request)).await
    }

    /// `DELETE /equipment/{id}/`
    pub async fn delete_equipment(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/equipment/{}/", id));
        self.send_message::<()>(Method::DELETE, &url, None).await
    }

    /// `POST /equipment/{id}/restore/`
    pub async fn restore_equipment(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/equipment/{}/restore/", id));
        self.send_message::<()>(Method::POST, &url, None).await
    }

    /// `GET /equipment/stats/`
    pub async fn equipment_stats(&self) -> Result<EquipmentStats, ApiError> {
        let url = self.url("/equipment/stats/");
        self.send_json(self.request(Method::GET, &url), &url).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, url)
            .header("X-Request-Id", Uuid::new_v4().to_string());

        if let Some((name, value)) = self.session.auth_header() {
            builder = builder.header(name, value);
        }

        builder
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let bytes = self.execute(builder, url).await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }

    /// Mutations may answer with an empty or non-JSON body; only the
    /// status decides success.
    async fn send_message<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<MessageResponse, ApiError> {
        let mut builder = self.request(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let bytes = self.execute(builder, url).await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or_default())
    }

    async fn execute(&self, builder: RequestBuilder, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        debug!(url, status = status.as_u16(), bytes = bytes.len(), "API response");

        if !status.is_success() {
            let body: ErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(bytes.to_vec())
    }
}
