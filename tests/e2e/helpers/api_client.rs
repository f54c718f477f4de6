use anyhow::{bail, Context, Result};
use autothumb_backend::domain::listing::SubcategoryTile;
use autothumb_backend::domain::settings::{ThumbnailSettings, UpdateThumbnailSettingsRequest};
use autothumb_backend::domain::thumbnail::ResolutionResult;
use autothumb_backend::error::ErrorResponse;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::{HeaderMap, Method, Request, StatusCode};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::generate_test_jwt;

const SETTINGS_PATH: &str = "/api/settings/thumbnails";

/// HTTP client speaking to one running test application
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    http: Client<HttpConnector, Full<Bytes>>,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, None, None).await
    }

    /// Rendered `<img>` fragment for a category
    pub async fn get_thumbnail_html(&self, category_id: i64) -> Result<ApiResponse> {
        self.get(&format!("/api/categories/{}/thumbnail", category_id))
            .await
    }

    pub async fn get_resolution(&self, category_id: i64) -> Result<ResolutionResult> {
        self.get(&format!("/api/categories/{}/thumbnail/resolution", category_id))
            .await?
            .json()
    }

    pub async fn list_subcategories(&self, parent_id: i64) -> Result<Vec<SubcategoryTile>> {
        self.get(&format!("/api/categories/{}/subcategories", parent_id))
            .await?
            .json()
    }

    pub async fn get_settings(&self) -> Result<ThumbnailSettings> {
        self.get(SETTINGS_PATH).await?.json()
    }

    /// PATCH the thumbnail settings with a token for `role`, or anonymously
    pub async fn patch_settings_as(
        &self,
        role: Option<&str>,
        update: &UpdateThumbnailSettingsRequest,
    ) -> Result<ApiResponse> {
        let token = role.map(generate_test_jwt);
        let body = Bytes::from(serde_json::to_vec(update)?);
        self.send(Method::PATCH, SETTINGS_PATH, Some(body), token.as_deref())
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        json_body: Option<Bytes>,
        bearer: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{}{}", self.base_url, path));

        if let Some(token) = bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if json_body.is_some() {
            builder = builder.header(CONTENT_TYPE, "application/json");
        }

        let request = builder.body(Full::new(json_body.unwrap_or_default()))?;
        let response = self.http.request(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await?.to_bytes();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn expect_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            self.text()
        );
        self
    }

    /// Decode a successful JSON body
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if !self.status.is_success() {
            bail!("request failed with {}: {}", self.status, self.text());
        }
        serde_json::from_slice(&self.body).with_context(|| format!("decoding {}", self.text()))
    }

    /// Untyped JSON body, `None` for plain text
    pub fn value(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// `message` of an error response
    pub fn error_message(&self) -> String {
        serde_json::from_slice::<ErrorResponse>(&self.body)
            .map(|e| e.message)
            .unwrap_or_else(|_| panic!("not an error response: {}", self.text()))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
