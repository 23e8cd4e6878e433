//! HTTP record source for the upstream API.

use crate::envelope::{EnvelopeShape, extract_records};
use crate::error::SourceError;
use async_trait::async_trait;
use cohort_core::{BackendConfig, Record};
use serde_json::Value;
use std::time::Duration;

/// Path of the aggregate counters endpoint, consumed by the stats aggregator.
pub const STATS_PATH: &str = "/stats";

/// Binding of one upstream listing endpoint: its path, the envelope shapes it
/// is known to answer with, and its integration quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointBinding {
    /// Path under the backend base URL.
    pub path: &'static str,
    /// Envelope shapes tried in order against the response body.
    pub shapes: &'static [EnvelopeShape],
    /// Whether the configured bearer token is attached.
    pub authenticated: bool,
    /// Treat a non-success status as an empty dataset instead of an error.
    pub tolerate_status: bool,
}

impl EndpointBinding {
    /// `GET /students`: `{ success, data: [...] }` or a bare list.
    pub const STUDENTS: Self = Self {
        path: "/students",
        shapes: &[EnvelopeShape::ListField("data"), EnvelopeShape::BareList],
        authenticated: false,
        tolerate_status: false,
    };

    /// `GET /mentors`: `{ mentors: [...] }`, bearer token attached when
    /// configured; a non-success status yields an empty dataset.
    pub const MENTORS: Self = Self {
        path: "/mentors",
        shapes: &[EnvelopeShape::ListField("mentors")],
        authenticated: true,
        tolerate_status: true,
    };

    /// `GET /courses`: a bare list or `{ courses: [...] }`.
    pub const COURSES: Self = Self {
        path: "/courses",
        shapes: &[EnvelopeShape::BareList, EnvelopeShape::ListField("courses")],
        authenticated: false,
        tolerate_status: false,
    };

    /// Entity name used in log lines and export filenames.
    pub fn name(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

/// A boundary producing record lists from named upstream endpoints.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and normalize the record list behind `binding`.
    async fn records(&self, binding: &EndpointBinding) -> Result<Vec<Record>, SourceError>;

    /// Fetch the raw JSON body of a non-list endpoint.
    async fn value(&self, path: &str) -> Result<Value, SourceError>;
}

/// [`RecordSource`] over HTTP, configured from [`BackendConfig`].
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpRecordSource {
    /// Build a source from backend settings.
    pub fn new(config: &BackendConfig) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.resolve_token(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(
        &self,
        path: &str,
        authenticated: bool,
    ) -> Result<reqwest::Response, SourceError> {
        let mut request = self.client.get(self.url(path));
        if authenticated && let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn records(&self, binding: &EndpointBinding) -> Result<Vec<Record>, SourceError> {
        let response = self.get(binding.path, binding.authenticated).await?;
        let status = response.status();

        if !status.is_success() {
            if binding.tolerate_status {
                tracing::warn!(
                    endpoint = binding.name(),
                    status = status.as_u16(),
                    "non-success status tolerated, returning empty dataset"
                );
                return Ok(Vec::new());
            }
            return Err(SourceError::Status {
                endpoint: binding.path.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| SourceError::Decode {
            endpoint: binding.path.to_string(),
            message: e.to_string(),
        })?;

        let records = extract_records(&body, binding.shapes);
        tracing::debug!(endpoint = binding.name(), count = records.len(), "fetched records");
        Ok(records)
    }

    async fn value(&self, path: &str) -> Result<Value, SourceError> {
        let response = self.get(path, false).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(SourceError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| SourceError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer, token: Option<&str>) -> HttpRecordSource {
        HttpRecordSource::new(&BackendConfig {
            base_url: server.uri(),
            token: token.map(String::from),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn students_unwraps_the_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{ "id": 1, "name": "Anna" }, { "id": 2, "name": "Bob" }]
            })))
            .mount(&server)
            .await;

        let records = source_for(&server, None)
            .records(&EndpointBinding::STUDENTS)
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("name"), "Anna");
    }

    #[tokio::test]
    async fn students_accepts_a_bare_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Anna" }])),
            )
            .mount(&server)
            .await;

        let records = source_for(&server, None)
            .records(&EndpointBinding::STUDENTS)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[tokio::test]
    async fn unknown_shape_normalizes_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 3 })))
            .mount(&server)
            .await;

        let records = source_for(&server, None)
            .records(&EndpointBinding::STUDENTS)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn mentors_sends_the_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mentors"))
            .and(header("authorization", "Bearer sesame"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mentors": [{ "id": 9, "name": "Hannah" }]
            })))
            .mount(&server)
            .await;

        let records = source_for(&server, Some("sesame"))
            .records(&EndpointBinding::MENTORS)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("name"), "Hannah");
    }

    #[tokio::test]
    async fn mentors_tolerates_a_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mentors"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let records = source_for(&server, None)
            .records(&EndpointBinding::MENTORS)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn strict_endpoints_error_on_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server, None)
            .records(&EndpointBinding::STUDENTS)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn courses_accepts_both_envelopes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "courses": [{ "id": 1, "title": "Rust" }, { "id": 2, "title": "Go" }]
            })))
            .mount(&server)
            .await;

        let records = source_for(&server, None)
            .records(&EndpointBinding::COURSES)
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn value_returns_the_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "students": 10, "mentors": 3 })),
            )
            .mount(&server)
            .await;

        let body = source_for(&server, None).value(STATS_PATH).await.unwrap();
        assert_eq!(body["students"], 10);
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/students"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server, None)
            .records(&EndpointBinding::STUDENTS)
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }
}
