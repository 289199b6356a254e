//! HTTP client for the form API

use crate::record::{Record, RecordQuery};
use crate::response::FormsResponse;
use crate::{ClientResult, Config};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

/// Remote form API
///
/// `save_form` reports `Ok(false)` for a non-200 answer; `Err` is reserved
/// for transport failures, which callers treat as fatal.
#[async_trait]
pub trait FormApi: Send + Sync {
    /// Submit one record; `true` when the endpoint answered 200
    async fn save_form(&self, record: &Record) -> ClientResult<bool>;

    /// Fetch saved records matching a period/indicator
    async fn fetch_forms(&self, query: &RecordQuery) -> ClientResult<FormsResponse>;
}

/// Network client using bearer-token auth and form-encoded POST bodies
#[derive(Debug, Clone)]
pub struct NetworkFormClient {
    client: Client,
    token: String,
    save_form_url: String,
    get_forms_url: String,
}

impl NetworkFormClient {
    /// Create a client from a validated configuration
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            token: config.token.clone(),
            save_form_url: config.save_form_url.clone(),
            get_forms_url: config.get_forms_url.clone(),
        })
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[async_trait]
impl FormApi for NetworkFormClient {
    #[instrument(skip_all, fields(url = %self.save_form_url, tag = %record.tag()))]
    async fn save_form(&self, record: &Record) -> ClientResult<bool> {
        let response = self
            .client
            .post(&self.save_form_url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .form(record)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Save endpoint rejected record");
            return Ok(false);
        }
        debug!("Record accepted");
        Ok(true)
    }

    #[instrument(skip_all, fields(url = %self.get_forms_url))]
    async fn fetch_forms(&self, query: &RecordQuery) -> ClientResult<FormsResponse> {
        let response = self
            .client
            .post(&self.get_forms_url)
            .header(reqwest::header::AUTHORIZATION, self.auth_header())
            .form(query)
            .send()
            .await?;

        // Errors are reported in-body, so the body is parsed regardless
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Read endpoint returned non-success status");
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Read endpoint body received");
        FormsResponse::from_slice(&body)
    }
}
