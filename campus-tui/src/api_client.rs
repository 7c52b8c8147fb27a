//! REST client for the Campus backend API.

use crate::config::TuiConfig;
use crate::loader::ApiSource;
use campus_core::{
    AcademicYearId, ApiErrorBody, ClassId, ColorSettings, EntityIdType, ListAcademicYearsResponse,
    ListClassesResponse, ListTeachersResponse, ListTeamsResponse, PageDocument, TeacherId,
};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{code}: {message}")]
    Server { code: String, message: String },
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),
    #[error("Config error: {0}")]
    Config(String),
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderMap,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_header: HeaderMap::new(),
        })
    }

    /// Attach a bearer token for admin endpoints. Read endpoints work
    /// without one.
    pub fn with_bearer_token(mut self, token: &str) -> Result<Self, ApiClientError> {
        let value = format!("Bearer {}", token);
        let value =
            HeaderValue::from_str(&value).map_err(|e| ApiClientError::Config(e.to_string()))?;
        self.auth_header.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub async fn get_page(&self, slug: &str) -> Result<PageDocument, ApiClientError> {
        let path = format!("/pages/slug/{}", slug);
        self.get_json(&path).await
    }

    pub async fn get_color_settings(&self) -> Result<ColorSettings, ApiClientError> {
        self.get_json("/settings/key/colors").await
    }

    pub async fn list_public_teams(&self) -> Result<ListTeamsResponse, ApiClientError> {
        self.get_json("/teams/public").await
    }

    pub async fn list_teachers(&self) -> Result<ListTeachersResponse, ApiClientError> {
        self.get_json("/teachers").await
    }

    pub async fn list_classes(&self) -> Result<ListClassesResponse, ApiClientError> {
        self.get_json("/classes").await
    }

    pub async fn list_academic_years(&self) -> Result<ListAcademicYearsResponse, ApiClientError> {
        self.get_json("/academic-years").await
    }

    pub async fn delete_teacher(&self, id: TeacherId) -> Result<(), ApiClientError> {
        let path = format!("/teachers/{}", id.as_uuid());
        self.delete(&path).await
    }

    pub async fn delete_class(&self, id: ClassId) -> Result<(), ApiClientError> {
        let path = format!("/classes/{}", id.as_uuid());
        self.delete(&path).await
    }

    pub async fn delete_academic_year(&self, id: AcademicYearId) -> Result<(), ApiClientError> {
        let path = format!("/academic-years/{}", id.as_uuid());
        self.delete(&path).await
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(url)
            .headers(self.auth_header.clone())
            .send()
            .await?;
        self.parse_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(url)
            .headers(self.auth_header.clone())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(error_from_body(status, response.text().await?))
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(error_from_body(status, response.text().await?))
        }
    }
}

/// Decode the backend's error payload when possible; otherwise keep the
/// raw body so the failure is still diagnosable.
fn error_from_body(status: reqwest::StatusCode, text: String) -> ApiClientError {
    if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
        return ApiClientError::Server {
            code: body.code,
            message: body.message,
        };
    }
    ApiClientError::InvalidResponse(format!("HTTP {}: {}", status.as_u16(), text))
}

impl ApiSource for RestClient {
    async fn fetch_page(&self, slug: &str) -> Result<PageDocument, ApiClientError> {
        self.get_page(slug).await
    }

    async fn fetch_colors(&self) -> Result<ColorSettings, ApiClientError> {
        self.get_color_settings().await
    }

    async fn fetch_teams(&self) -> Result<ListTeamsResponse, ApiClientError> {
        self.list_public_teams().await
    }

    async fn fetch_teachers(&self) -> Result<ListTeachersResponse, ApiClientError> {
        self.list_teachers().await
    }

    async fn fetch_classes(&self) -> Result<ListClassesResponse, ApiClientError> {
        self.list_classes().await
    }

    async fn fetch_academic_years(&self) -> Result<ListAcademicYearsResponse, ApiClientError> {
        self.list_academic_years().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_payload_is_decoded() {
        let err = error_from_body(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"code":"PAGE_NOT_FOUND","message":"No page with slug 'missing'"}"#.to_string(),
        );
        assert_eq!(
            err.to_string(),
            "PAGE_NOT_FOUND: No page with slug 'missing'"
        );
    }

    #[test]
    fn opaque_error_body_keeps_status() {
        let err = error_from_body(
            reqwest::StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>".to_string(),
        );
        assert!(err.to_string().contains("HTTP 502"));
    }
}
